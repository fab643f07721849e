use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub mod calculator;

pub use calculator::AddTool;

/// Parameter mapping the host passes to a tool invocation.
pub type ToolParameters = Map<String, Value>;

/// One message a tool sends back to the host.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ToolMessage {
    Text { text: String },
    Json { json: Value },
}

impl ToolMessage {
    pub fn text(text: impl Into<String>) -> Self {
        ToolMessage::Text { text: text.into() }
    }

    pub fn json(json: Value) -> Self {
        ToolMessage::Json { json }
    }
}

/// The tool-side contract a plugin implements for the host runtime.
#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// JSON schema describing the parameters this tool accepts.
    fn parameter_schema(&self) -> Value;

    async fn invoke(&self, parameters: &ToolParameters) -> anyhow::Result<Vec<ToolMessage>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_message_wire_shape() {
        let text = serde_json::to_string(&ToolMessage::text("8")).unwrap();
        assert_eq!(text, r#"{"type":"text","text":"8"}"#);

        let json = serde_json::to_string(&ToolMessage::json(serde_json::json!({"result": "8"})))
            .unwrap();
        assert_eq!(json, r#"{"type":"json","json":{"result":"8"}}"#);
    }
}
