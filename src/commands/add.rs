use anyhow::Error;
use serde_json::Value;

use crate::args::AddSubCommand;
use crate::handler;
use crate::tools::calculator::ToolOutputFormat;
use crate::tools::{AddTool, ToolMessage, ToolParameters};

fn parse_number(raw: &str) -> Result<Value, Error> {
    if let Ok(int) = raw.parse::<i64>() {
        return Ok(Value::from(int));
    }
    if let Ok(int) = raw.parse::<u64>() {
        return Ok(Value::from(int));
    }
    let float: f64 = raw
        .parse()
        .map_err(|_| Error::msg(format!("not a number: {}", raw)))?;
    if !float.is_finite() {
        return Err(Error::msg(format!("not a number: {}", raw)));
    }
    Ok(Value::from(float))
}

pub async fn run(cmd: &AddSubCommand) -> Result<(), Error> {
    let mut parameters = ToolParameters::new();
    if let Some(x) = &cmd.x {
        parameters.insert("x".to_string(), parse_number(x)?);
    }
    if let Some(y) = &cmd.y {
        parameters.insert("y".to_string(), parse_number(y)?);
    }

    let output = if cmd.json {
        ToolOutputFormat::Json
    } else {
        ToolOutputFormat::Text
    };
    let tool = AddTool::new().with_output(output);

    let messages = handler::tools::handle(&tool, &parameters).await?;
    for message in messages {
        match message {
            ToolMessage::Text { text } => println!("{}", text),
            ToolMessage::Json { json } => println!("{}", serde_json::to_string_pretty(&json)?),
        }
    }
    Ok(())
}
