use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod calendar;
pub mod chat;
pub mod feed;
pub mod init;
pub mod serve;

use crate::core::AppConfig;

#[derive(Subcommand)]
enum Command {
    /// Initialize the local db
    Init {},
    /// Run the API server
    Serve {
        /// Set the server host address
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Set the server port
        #[arg(long, default_value = "2222")]
        port: String,
    },
    /// Start a chat bot session
    Chat {},
    /// Print the academic calendar layout for a month
    Calendar {
        /// Month as YYYY-MM, defaults to the current month
        #[arg(long)]
        month: Option<String>,
    },
    /// Fetch a notice or menu feed, e.g. "학사" or "학생식단"
    Feed {
        #[arg(long)]
        category: String,
    },
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();
    let config = AppConfig::default();

    // Handle each sub command
    match args.command {
        Some(Command::Init {}) => {
            init::run(&config.db_path).await?;
        }
        Some(Command::Serve { host, port }) => {
            let config = config.serving_on(&host, &port);
            serve::run(host, port, config).await;
        }
        Some(Command::Chat {}) => {
            chat::run(config).await?;
        }
        Some(Command::Calendar { month }) => {
            calendar::run(month.as_deref())?;
        }
        Some(Command::Feed { category }) => {
            feed::run(&category, &config).await?;
        }
        None => {}
    }

    Ok(())
}
