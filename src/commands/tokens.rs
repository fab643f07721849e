use std::io::{self, Read};

use anyhow::Error;

use crate::args::TokensSubCommand;
use crate::config;
use crate::llm::{LanguageModel, MockGpt};
use crate::models::request::Credentials;
use crate::models::Message;

pub fn run(cmd: &TokensSubCommand) -> Result<(), Error> {
    let text = if cmd.text.is_empty() {
        // Read stdin
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer.trim().to_string()
    } else {
        cmd.text.join(" ")
    };

    let model = MockGpt::new();
    let model_name = config::get_default_model();
    let messages = vec![Message::user(&text)];
    let count = model.num_tokens(&model_name, &Credentials::new(), &messages, &[]);
    println!("{}", count);
    Ok(())
}
