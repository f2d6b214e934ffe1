use std::fs;

use anyhow::Result;
use rusqlite::Connection;

pub async fn async_db(db_path: &str) -> Result<tokio_rusqlite::Connection> {
    let db = tokio_rusqlite::Connection::open(format!("{}/schoolbot.sqlite", db_path)).await?;
    Ok(db)
}

/// Create the db directory if needed, connect and apply the schema.
pub async fn open_db(db_path: &str) -> Result<tokio_rusqlite::Connection> {
    fs::create_dir_all(db_path)?;
    let db = async_db(db_path).await?;
    db.call(|conn| initialize_db(conn).map_err(|e| tokio_rusqlite::Error::Other(e.into())))
        .await?;
    Ok(db)
}

/// Create the tables used for local persisted state. Safe to run
/// more than once.
pub fn initialize_db(conn: &mut Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        BEGIN;
        CREATE TABLE IF NOT EXISTS kv (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
        );
        COMMIT;
        "#,
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_initializes_twice_without_error() {
        let mut conn = Connection::open_in_memory().unwrap();
        initialize_db(&mut conn).unwrap();
        initialize_db(&mut conn).unwrap();

        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='kv'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn it_creates_the_db_directory() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("nested").join("db");
        let db_path = db_path.to_str().unwrap();

        let db = open_db(db_path).await.unwrap();
        crate::core::kv::kv_set(&db, "k", "v").await.unwrap();
        assert!(std::path::Path::new(db_path).join("schoolbot.sqlite").exists());
    }
}
