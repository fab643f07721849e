use anyhow::Error;
use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::debug;

use super::{Tool, ToolMessage, ToolParameters};

/// How a calculator result is wrapped before it goes back to the host.
/// Different host surfaces expect different envelopes around the same sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolOutputFormat {
    /// A plain text message holding the decimal string.
    #[default]
    Text,
    /// A structured message holding `{"result": <sum>}`.
    Json,
}

fn as_exact_int(value: &Value) -> Option<i128> {
    if let Some(u) = value.as_u64() {
        return Some(u as i128);
    }
    value.as_i64().map(i128::from)
}

/// Sum two JSON numbers and render the decimal string form of the result.
/// Integer pairs are summed in i128, which holds any sum of two JSON
/// integers exactly; anything fractional goes through f64.
pub fn add(x: &Value, y: &Value) -> anyhow::Result<String> {
    // serde_json integers span i64::MIN..=u64::MAX, so an i128 sum of
    // two of them cannot overflow
    if let (Some(a), Some(b)) = (as_exact_int(x), as_exact_int(y)) {
        return Ok(format!("{}", a + b));
    }

    let a = x
        .as_f64()
        .ok_or_else(|| Error::msg(format!("parameter x is not a number: {}", x)))?;
    let b = y
        .as_f64()
        .ok_or_else(|| Error::msg(format!("parameter y is not a number: {}", y)))?;
    Ok(format!("{}", a + b))
}

/// Adds the `x` and `y` parameters. Both are optional and default to zero.
pub struct AddTool {
    output: ToolOutputFormat,
}

impl AddTool {
    pub fn new() -> Self {
        AddTool {
            output: ToolOutputFormat::Text,
        }
    }

    pub fn with_output(mut self, output: ToolOutputFormat) -> Self {
        self.output = output;
        self
    }
}

impl Default for AddTool {
    fn default() -> Self {
        AddTool::new()
    }
}

#[async_trait]
impl Tool for AddTool {
    fn name(&self) -> &'static str {
        "add"
    }

    fn description(&self) -> &'static str {
        "Add two numbers and return the sum"
    }

    fn parameter_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "x": {
                    "type": "number",
                    "description": "First number to add",
                    "default": 0
                },
                "y": {
                    "type": "number",
                    "description": "Second number to add",
                    "default": 0
                }
            }
        })
    }

    async fn invoke(&self, parameters: &ToolParameters) -> anyhow::Result<Vec<ToolMessage>> {
        let x = parameters
            .get("x")
            .cloned()
            .unwrap_or_else(|| Value::from(0));
        let y = parameters
            .get("y")
            .cloned()
            .unwrap_or_else(|| Value::from(0));

        let sum = add(&x, &y)?;
        debug!("add tool: {} + {} = {}", x, y, sum);

        let message = match self.output {
            ToolOutputFormat::Text => ToolMessage::text(sum),
            ToolOutputFormat::Json => ToolMessage::json(json!({ "result": sum })),
        };
        Ok(vec![message])
    }
}
