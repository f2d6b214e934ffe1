use anyhow::Result;

use crate::core::db::open_db;

pub async fn run(db_path: &str) -> Result<()> {
    println!("Initializing db...");
    open_db(db_path).await?;
    println!("Finished initializing db at {}", db_path);
    Ok(())
}
