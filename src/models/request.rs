use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Message;

/// Free-form credential mapping supplied by the host's credential store.
pub type Credentials = Map<String, Value>;

/// A tool the caller advertises alongside a completion request: name,
/// description, and a JSON schema for its parameters. The mock accepts
/// these and ignores them.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PromptMessageTool {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

/// The structured bundle the host runtime hands to a model handler.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CompletionRequest {
    pub model: String,
    #[serde(default)]
    pub credentials: Credentials,
    pub messages: Vec<Message>,
    #[serde(default)]
    pub model_parameters: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<PromptMessageTool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop: Option<Vec<String>>,
    #[serde(default = "default_stream")]
    pub stream: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

fn default_stream() -> bool {
    true
}

impl CompletionRequest {
    pub fn new(model: String, messages: Vec<Message>) -> Self {
        CompletionRequest {
            model,
            credentials: Credentials::new(),
            messages,
            model_parameters: Map::new(),
            tools: Vec::new(),
            stop: None,
            stream: true,
            user: None,
        }
    }

    pub fn with_stream(mut self, stream: bool) -> Self {
        self.stream = stream;
        self
    }

    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
