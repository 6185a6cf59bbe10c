use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite, SqliteConnection};

use crate::error::SeedError;

pub type SqlitePool = Pool<Sqlite>;

/// Pool capped at one connection; the whole run works on a single handle.
pub async fn connect(database_url: &str) -> Result<SqlitePool, SeedError> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;
    Ok(pool)
}

/// Execute the schema text as an ordered batch.
pub async fn apply_schema(conn: &mut SqliteConnection, sql: &str) -> Result<(), SeedError> {
    // sqlx::query prepares one statement at a time; split the batch ourselves
    for (index, stmt) in statements(sql).into_iter().enumerate() {
        sqlx::query(stmt)
            .execute(&mut *conn)
            .await
            .map_err(|source| SeedError::SchemaExecution { index, source })?;
    }
    Ok(())
}

/// Parameterized password update. Returns the number of affected rows.
pub async fn set_password_hash(
    conn: &mut SqliteConnection,
    username: &str,
    password_hash: &str,
) -> Result<u64, SeedError> {
    let result = sqlx::query("UPDATE users SET password_hash = ? WHERE username = ?")
        .bind(password_hash)
        .bind(username)
        .execute(&mut *conn)
        .await?;
    Ok(result.rows_affected())
}

/// Split the batch on statement-terminating `;`, ignoring semicolons inside
/// quoted literals, quoted identifiers, and `--` line comments. Empty and
/// comment-only chunks are dropped (a trailing comment after the final `;`
/// must not become an empty statement).
fn statements(sql: &str) -> Vec<&str> {
    let bytes = sql.as_bytes();
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut in_single = false;
    let mut in_double = false;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\'' if !in_double => in_single = !in_single,
            b'"' if !in_single => in_double = !in_double,
            b'-' if !in_single && !in_double && bytes.get(i + 1) == Some(&b'-') => {
                while i < bytes.len() && bytes[i] != b'\n' {
                    i += 1;
                }
            }
            b';' if !in_single && !in_double => {
                chunks.push(&sql[start..i]);
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }
    chunks.push(&sql[start..]);
    chunks
        .into_iter()
        .map(str::trim)
        .filter(|chunk| {
            chunk.lines().any(|line| {
                let line = line.trim();
                !line.is_empty() && !line.starts_with("--")
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::statements;

    #[test]
    fn splits_batch_in_order() {
        let sql = "CREATE TABLE a (x);\nCREATE TABLE b (y);\n";
        assert_eq!(statements(sql), vec!["CREATE TABLE a (x)", "CREATE TABLE b (y)"]);
    }

    #[test]
    fn drops_empty_and_comment_only_chunks() {
        let sql = "-- header\nCREATE TABLE a (x);\n;\n-- trailing note\n";
        assert_eq!(statements(sql), vec!["-- header\nCREATE TABLE a (x)"]);
    }

    #[test]
    fn ignores_semicolon_inside_string_literal() {
        let sql = "INSERT INTO a (x) VALUES ('one; two');\nCREATE TABLE b (y);";
        let stmts = statements(sql);
        assert_eq!(stmts.len(), 2);
        assert_eq!(stmts[0], "INSERT INTO a (x) VALUES ('one; two')");
    }

    #[test]
    fn ignores_semicolon_behind_escaped_quote() {
        let sql = "INSERT INTO a (x) VALUES ('it''s; fine');";
        assert_eq!(statements(sql), vec!["INSERT INTO a (x) VALUES ('it''s; fine')"]);
    }

    #[test]
    fn ignores_semicolon_inside_line_comment() {
        let sql = "CREATE TABLE a (x); -- note; not a terminator\nCREATE TABLE b (y);";
        let stmts = statements(sql);
        assert_eq!(stmts.len(), 2);
        assert!(stmts[1].contains("CREATE TABLE b"));
    }

    #[test]
    fn keeps_statement_preceded_by_comment() {
        let sql = "CREATE TABLE a (x);\n-- index for lookups\nCREATE INDEX idx ON a(x);";
        let stmts = statements(sql);
        assert_eq!(stmts.len(), 2);
        assert!(stmts[1].contains("CREATE INDEX"));
    }
}
