use tracing::info;
use uuid::Uuid;

use crate::tools::{Tool, ToolMessage, ToolParameters};

/// Drive a tool the way the host runtime does.
pub async fn handle(
    tool: &dyn Tool,
    parameters: &ToolParameters,
) -> anyhow::Result<Vec<ToolMessage>> {
    let trace_id = Uuid::new_v4().to_string();
    info!("Handling tool '{}' invocation {}", tool.name(), trace_id);

    tool.invoke(parameters).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::tools::AddTool;

    #[tokio::test]
    async fn test_handle_add_tool() {
        let tool = AddTool::new();
        let mut parameters = ToolParameters::new();
        parameters.insert("x".to_string(), json!(5));
        parameters.insert("y".to_string(), json!(3));

        let messages = handle(&tool, &parameters).await.unwrap();
        assert_eq!(messages, vec![ToolMessage::text("8")]);
    }

    #[tokio::test]
    async fn test_handle_surfaces_tool_errors() {
        let tool = AddTool::new();
        let mut parameters = ToolParameters::new();
        parameters.insert("x".to_string(), json!("not a number"));

        assert!(handle(&tool, &parameters).await.is_err());
    }
}
