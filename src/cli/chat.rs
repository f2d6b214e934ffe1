use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::chat::{ChatController, MessageStore, build_resolver};
use crate::core::AppConfig;
use crate::core::db::open_db;

const HELP: &str = "/clear 대화 초기화, /export 대화 내보내기, /quit 종료";

pub async fn run(config: AppConfig) -> Result<()> {
    let mut rl = DefaultEditor::new()?;

    let db = open_db(&config.db_path).await?;
    let store = MessageStore::open(db).await;
    let chat = ChatController::new(store, build_resolver(&config));

    for msg in chat.messages().await {
        println!("{}\n", msg.display_content());
    }
    println!("{}", HELP);

    loop {
        let readline = rl.readline(">>> ");
        match readline {
            Ok(line) => match line.trim() {
                "/quit" => break,
                "/clear" => {
                    chat.clear().await?;
                    for msg in chat.messages().await {
                        println!("{}\n", msg.display_content());
                    }
                }
                "/export" => println!("{}", chat.export_text().await),
                input => {
                    if let Some(exchange) = chat.send(input).await {
                        let _ = rl.add_history_entry(input);
                        println!("{}\n", exchange.assistant.display_content());
                    }
                }
            },
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}
