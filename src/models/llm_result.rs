use serde::{Deserialize, Serialize};

use super::{usage::LlmUsage, Message};

/// A complete, non-streamed model result.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LlmResult {
    pub model: String,
    pub prompt_messages: Vec<Message>,
    pub message: Message,
    pub usage: LlmUsage,
    pub system_fingerprint: Option<String>,
    pub created: i64,
}

/// One streamed piece of a model result.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LlmResultChunk {
    pub model: String,
    pub prompt_messages: Vec<Message>,
    pub system_fingerprint: Option<String>,
    pub delta: LlmResultChunkDelta,
}

/// The incremental payload of a chunk. `finish_reason` and `usage` are
/// absent on every chunk except the final one, which carries `"stop"`
/// and the usage summary for the whole response.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LlmResultChunkDelta {
    pub index: usize,
    pub message: Message,
    pub finish_reason: Option<String>,
    pub usage: Option<LlmUsage>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_wire_shape() {
        let chunk = LlmResultChunk {
            model: "test-model".to_string(),
            prompt_messages: vec![Message::user("hi")],
            system_fingerprint: None,
            delta: LlmResultChunkDelta {
                index: 0,
                message: Message::assistant("hello "),
                finish_reason: None,
                usage: None,
            },
        };

        let json = serde_json::to_string(&chunk).unwrap();
        assert!(json.contains("\"model\":\"test-model\""));
        assert!(json.contains("\"finish_reason\":null"));
        assert!(json.contains("\"index\":0"));
        assert!(json.contains("hello "));
    }

    #[test]
    fn test_final_chunk_round_trip() {
        let chunk = LlmResultChunk {
            model: "test-model".to_string(),
            prompt_messages: vec![],
            system_fingerprint: None,
            delta: LlmResultChunkDelta {
                index: 4,
                message: Message::assistant("done"),
                finish_reason: Some("stop".to_string()),
                usage: Some(LlmUsage::from_rates(50, 5, 0.001, 0.002, 1000.0, "USD", 1.5)),
            },
        };

        let json = serde_json::to_string(&chunk).unwrap();
        let parsed: LlmResultChunk = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.delta.finish_reason.as_deref(), Some("stop"));
        assert_eq!(parsed.delta.index, 4);
        assert_eq!(parsed.delta.usage.unwrap().completion_tokens, 5);
    }
}
