use std::io::{self, Read, Write};
use std::time::Duration;

use anyhow::Error;
use tokio_stream::StreamExt;
use tracing::info;

use crate::args::ChatSubCommand;
use crate::config;
use crate::handler;
use crate::llm::{LlmInvokeOutput, MockGpt};
use crate::models::request::CompletionRequest;
use crate::models::usage::LlmUsage;
use crate::models::Message;

pub async fn run(cmd: &ChatSubCommand) -> Result<(), Error> {
    let prompt = if cmd.prompt.is_empty() {
        // Read stdin
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer.trim().to_string()
    } else {
        cmd.prompt.join(" ")
    };
    if prompt.is_empty() {
        println!("No prompt provided");
        return Ok(());
    }

    let model_name = cmd.model.clone().unwrap_or_else(config::get_default_model);
    let mut messages = Vec::new();
    if let Some(system) = &cmd.system {
        messages.push(Message::system(system));
    }
    messages.push(Message::user(&prompt));

    let delay = Duration::from_millis(config::get_chunk_delay_ms());
    let mut model = MockGpt::new().with_chunk_delay(delay);
    if let Some(seed) = cmd.seed {
        model = model.with_seed(seed);
    }

    let request = CompletionRequest::new(model_name, messages).with_stream(!cmd.no_stream);

    match handler::completions::handle(&model, &request).await? {
        LlmInvokeOutput::Complete(result) => {
            println!("{}", result.message.content);
            log_usage(&result.usage);
        }
        LlmInvokeOutput::Stream(mut stream) => {
            let mut final_usage = None;
            while let Some(chunk) = stream.next().await {
                let chunk = chunk?;
                print!("{}", chunk.delta.message.content);
                io::stdout().flush()?;
                if let Some(usage) = chunk.delta.usage {
                    final_usage = Some(usage);
                }
            }
            println!();
            if let Some(usage) = final_usage {
                log_usage(&usage);
            }
        }
    }
    Ok(())
}

fn log_usage(usage: &LlmUsage) {
    info!(
        "{} prompt + {} completion = {} tokens, {:.6} {}",
        usage.prompt_tokens,
        usage.completion_tokens,
        usage.total_tokens,
        usage.total_price,
        usage.currency
    );
}
