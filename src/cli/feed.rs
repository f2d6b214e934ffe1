use anyhow::Result;

use crate::core::AppConfig;
use crate::school::{Category, SchoolClient, get_menu, get_notice};

/// Print a feed the same way the chat bot answers with it. Goes
/// through the proxy at `proxy_api_url`, so a server must be running.
pub async fn run(category: &str, config: &AppConfig) -> Result<()> {
    let category: Category = category.parse()?;
    let client = SchoolClient::new(&config.proxy_api_url);

    let answer = if category.is_meal() {
        get_menu(&client, category, category.name()).await
    } else {
        get_notice(&client, category).await
    };
    println!("{}", answer);
    Ok(())
}
