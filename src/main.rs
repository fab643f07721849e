use anyhow::Error;
use clap::Parser;

use mockgpt::args::{Args, SubCommands};
use mockgpt::commands;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "mockgpt=info".to_string())
        )
        .init();
    let args = Args::parse();
    match args.subcmd {
        Some(SubCommands::Chat(chat_cmd)) => {
            commands::chat::run(&chat_cmd).await?;
        }
        Some(SubCommands::Add(add_cmd)) => {
            commands::add::run(&add_cmd).await?;
        }
        Some(SubCommands::Tokens(tokens_cmd)) => {
            commands::tokens::run(&tokens_cmd)?;
        }
        Some(SubCommands::Schema(schema_cmd)) => {
            commands::schema::run(&schema_cmd)?;
        }
        None => {
        }
    };
    Ok(())
}
