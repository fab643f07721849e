use anyhow::Error;

use crate::args::SchemaSubCommand;
use crate::config;
use crate::llm::{LanguageModel, MockGpt};
use crate::models::request::PromptMessageTool;
use crate::tools::{AddTool, Tool};

pub fn run(cmd: &SchemaSubCommand) -> Result<(), Error> {
    if let Some(tool_name) = &cmd.tool {
        let tool = AddTool::new();
        if tool_name != tool.name() {
            eprintln!("Error: unknown tool: {}", tool_name);
            return Ok(());
        }
        let descriptor = PromptMessageTool {
            name: tool.name().to_string(),
            description: tool.description().to_string(),
            parameters: tool.parameter_schema(),
        };
        println!("{}", serde_json::to_string_pretty(&descriptor)?);
        return Ok(());
    }

    let model_name = cmd.model.clone().unwrap_or_else(config::get_default_model);
    let model = MockGpt::new();
    let schema = model.model_schema(&model_name);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
