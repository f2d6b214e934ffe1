//! Local persistent key-value storage backed by the `kv` table.
use anyhow::{Error, Result};
use rusqlite::OptionalExtension;
use tokio_rusqlite::Connection;

pub async fn kv_get(db: &Connection, key: &str) -> Result<Option<String>, Error> {
    let key = key.to_owned();
    let value = db
        .call(move |conn| {
            let value = conn
                .query_row("SELECT value FROM kv WHERE key = ?1", [&key], |row| {
                    row.get(0)
                })
                .optional()?;
            Ok(value)
        })
        .await?;
    Ok(value)
}

pub async fn kv_set(db: &Connection, key: &str, value: &str) -> Result<(), Error> {
    let key = key.to_owned();
    let value = value.to_owned();
    db.call(move |conn| {
        conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = CURRENT_TIMESTAMP",
            [&key, &value],
        )?;
        Ok(())
    })
    .await?;
    Ok(())
}

pub async fn kv_delete(db: &Connection, key: &str) -> Result<(), Error> {
    let key = key.to_owned();
    db.call(move |conn| {
        conn.execute("DELETE FROM kv WHERE key = ?1", [&key])?;
        Ok(())
    })
    .await?;
    Ok(())
}

#[cfg(test)]
pub(crate) mod test_db {
    use tokio_rusqlite::Connection;

    use crate::core::db::initialize_db;

    /// In-memory database with the schema applied.
    pub async fn memory_db() -> Connection {
        let db = Connection::open_in_memory().await.unwrap();
        db.call(|conn| {
            initialize_db(conn).expect("Failed to initialize db");
            Ok(())
        })
        .await
        .unwrap();
        db
    }
}
