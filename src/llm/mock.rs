use std::sync::Mutex;
use std::time::Duration;

use async_stream::stream;
use async_trait::async_trait;
use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::errors::{CredentialsValidateFailed, InvokeError};
use crate::models::llm_result::{LlmResult, LlmResultChunk, LlmResultChunkDelta};
use crate::models::request::{CompletionRequest, Credentials, PromptMessageTool};
use crate::models::schema::ModelSchema;
use crate::models::usage::LlmUsage;
use crate::models::Message;
use crate::utils;

use super::{ChunkStream, LanguageModel, LlmInvokeOutput};

/// Default pause between streamed chunks, imitating network latency.
pub const DEFAULT_CHUNK_DELAY_MS: u64 = 100;

const MOCK_PROMPT_TOKENS: i64 = 50;
const PROMPT_UNIT_PRICE: f64 = 0.001;
const COMPLETION_UNIT_PRICE: f64 = 0.002;
const PRICE_UNIT: f64 = 1000.0;
const MOCK_LATENCY: f64 = 1.5;
const CURRENCY: &str = "USD";

const DEMO_RESPONSES: [&str; 3] = [
    "This is a reply from the demo model. I can help you explore how plugins work.",
    "As a demo model I generate canned responses that exercise the plugin surface.",
    "Hello! This is simulated output from the demo model, useful while developing plugins.",
];

/// A model that answers from a fixed response pool instead of calling a
/// real provider. Streamed output is split per word with a short pause
/// between chunks, so consumers see realistic incremental delivery.
pub struct MockGpt {
    responses: Vec<String>,
    chunk_delay: Duration,
    rng: Mutex<StdRng>,
}

impl MockGpt {
    pub fn new() -> Self {
        MockGpt {
            responses: DEMO_RESPONSES.iter().map(|s| s.to_string()).collect(),
            chunk_delay: Duration::from_millis(DEFAULT_CHUNK_DELAY_MS),
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Seed the response picker for repeatable runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Mutex::new(StdRng::seed_from_u64(seed));
        self
    }

    pub fn with_chunk_delay(mut self, delay: Duration) -> Self {
        self.chunk_delay = delay;
        self
    }

    /// Swap the built-in response pool for custom texts.
    pub fn with_responses(mut self, responses: Vec<String>) -> Self {
        self.responses = responses;
        self
    }

    fn pick_response(&self) -> String {
        if self.responses.is_empty() {
            return String::new();
        }
        let mut rng = match self.rng.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let choice = rng.gen_range(0..self.responses.len());
        self.responses[choice].clone()
    }

    fn calc_usage(&self, text: &str) -> LlmUsage {
        let completion_tokens = text.split_whitespace().count() as i64;
        LlmUsage::from_rates(
            MOCK_PROMPT_TOKENS,
            completion_tokens,
            PROMPT_UNIT_PRICE,
            COMPLETION_UNIT_PRICE,
            PRICE_UNIT,
            CURRENCY,
            MOCK_LATENCY,
        )
    }

    fn stream_response(
        &self,
        model: &str,
        prompt_messages: &[Message],
        response_text: String,
    ) -> ChunkStream {
        let model = model.to_string();
        let prompt_messages = prompt_messages.to_vec();
        let usage = self.calc_usage(&response_text);
        let delay = self.chunk_delay;
        let words: Vec<String> = response_text
            .split_whitespace()
            .map(|w| w.to_string())
            .collect();
        let count = words.len();

        Box::pin(stream! {
            for (i, word) in words.into_iter().enumerate() {
                let is_last = i + 1 == count;
                // Keep the space that separated this word from the next
                let chunk_text = if is_last { word } else { format!("{} ", word) };

                let chunk = LlmResultChunk {
                    model: model.clone(),
                    prompt_messages: prompt_messages.clone(),
                    system_fingerprint: None,
                    delta: LlmResultChunkDelta {
                        index: i,
                        message: Message::assistant(chunk_text),
                        finish_reason: if is_last { Some("stop".to_string()) } else { None },
                        usage: if is_last { Some(usage.clone()) } else { None },
                    },
                };

                yield Ok::<LlmResultChunk, InvokeError>(chunk);

                if !is_last && !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
            }
        })
    }

    fn sync_response(
        &self,
        model: &str,
        prompt_messages: &[Message],
        response_text: String,
    ) -> LlmResult {
        let usage = self.calc_usage(&response_text);
        LlmResult {
            model: model.to_string(),
            prompt_messages: prompt_messages.to_vec(),
            message: Message::assistant(response_text),
            usage,
            system_fingerprint: None,
            created: Utc::now().timestamp(),
        }
    }
}

impl Default for MockGpt {
    fn default() -> Self {
        MockGpt::new()
    }
}

#[async_trait]
impl LanguageModel for MockGpt {
    async fn invoke(&self, request: &CompletionRequest) -> Result<LlmInvokeOutput, InvokeError> {
        let response_text = self.pick_response();
        debug!(
            "Invoking model {} (stream: {})",
            request.model, request.stream
        );

        if request.stream {
            Ok(LlmInvokeOutput::Stream(self.stream_response(
                &request.model,
                &request.messages,
                response_text,
            )))
        } else {
            Ok(LlmInvokeOutput::Complete(self.sync_response(
                &request.model,
                &request.messages,
                response_text,
            )))
        }
    }

    fn num_tokens(
        &self,
        _model: &str,
        _credentials: &Credentials,
        messages: &[Message],
        _tools: &[PromptMessageTool],
    ) -> usize {
        utils::count_prompt_tokens(messages)
    }

    fn validate_credentials(
        &self,
        _model: &str,
        _credentials: &Credentials,
    ) -> Result<(), CredentialsValidateFailed> {
        // No real provider to check against. Return CredentialsValidateFailed
        // from here once the model grows actual credential requirements.
        Ok(())
    }

    fn model_schema(&self, model: &str) -> ModelSchema {
        ModelSchema::customizable(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_stream::StreamExt;

    fn create_dummy_model(text: &str) -> MockGpt {
        MockGpt::new()
            .with_responses(vec![text.to_string()])
            .with_chunk_delay(Duration::ZERO)
    }

    fn create_dummy_request(stream: bool) -> CompletionRequest {
        CompletionRequest::new(
            "mockgpt".to_string(),
            vec![Message::user("say something")],
        )
        .with_stream(stream)
    }

    async fn collect_chunks(model: &MockGpt, request: &CompletionRequest) -> Vec<LlmResultChunk> {
        let output = model.invoke(request).await.unwrap();
        let mut stream = match output {
            LlmInvokeOutput::Stream(s) => s,
            LlmInvokeOutput::Complete(_) => panic!("expected a streamed response"),
        };
        let mut chunks = Vec::new();
        while let Some(chunk) = stream.next().await {
            chunks.push(chunk.unwrap());
        }
        chunks
    }

    #[tokio::test]
    async fn test_sync_response_carries_full_text_and_usage() {
        let model = create_dummy_model("alpha beta gamma delta");
        let request = create_dummy_request(false);

        let output = model.invoke(&request).await.unwrap();
        let result = match output {
            LlmInvokeOutput::Complete(r) => r,
            LlmInvokeOutput::Stream(_) => panic!("expected a sync response"),
        };

        assert_eq!(result.message.role, "assistant");
        assert_eq!(result.message.content, "alpha beta gamma delta");
        assert_eq!(result.model, "mockgpt");
        assert_eq!(result.prompt_messages, request.messages);
        assert_eq!(result.usage.prompt_tokens, 50);
        assert_eq!(result.usage.completion_tokens, 4);
        assert_eq!(result.usage.total_tokens, 54);
    }

    #[tokio::test]
    async fn test_stream_chunks_reassemble_to_response_text() {
        let model = create_dummy_model("one two three four five");
        let request = create_dummy_request(true);

        let chunks = collect_chunks(&model, &request).await;
        assert_eq!(chunks.len(), 5);

        let rebuilt: String = chunks
            .iter()
            .map(|c| c.delta.message.content.as_str())
            .collect();
        assert_eq!(rebuilt, "one two three four five");
    }

    #[tokio::test]
    async fn test_only_final_chunk_finishes_and_carries_usage() {
        let model = create_dummy_model("one two three");
        let request = create_dummy_request(true);

        let chunks = collect_chunks(&model, &request).await;
        assert_eq!(chunks.len(), 3);

        for (i, chunk) in chunks.iter().enumerate() {
            assert_eq!(chunk.delta.index, i);
            if i + 1 == chunks.len() {
                assert_eq!(chunk.delta.finish_reason.as_deref(), Some("stop"));
                assert!(chunk.delta.usage.is_some());
                assert!(!chunk.delta.message.content.ends_with(' '));
            } else {
                assert_eq!(chunk.delta.finish_reason, None);
                assert!(chunk.delta.usage.is_none());
                assert!(chunk.delta.message.content.ends_with(' '));
            }
        }

        let usage = chunks[2].delta.usage.clone().unwrap();
        assert_eq!(usage.completion_tokens, 3);
    }

    #[tokio::test]
    async fn test_single_word_response_is_one_stop_chunk() {
        let model = create_dummy_model("done");
        let request = create_dummy_request(true);

        let chunks = collect_chunks(&model, &request).await;
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].delta.message.content, "done");
        assert_eq!(chunks[0].delta.finish_reason.as_deref(), Some("stop"));
        assert!(chunks[0].delta.usage.is_some());
    }

    #[tokio::test]
    async fn test_stream_and_sync_agree_on_usage() {
        let model = create_dummy_model("same text either way");

        let chunks = collect_chunks(&model, &create_dummy_request(true)).await;
        let streamed_usage = chunks.last().unwrap().delta.usage.clone().unwrap();

        let output = model.invoke(&create_dummy_request(false)).await.unwrap();
        let sync_usage = match output {
            LlmInvokeOutput::Complete(r) => r.usage,
            LlmInvokeOutput::Stream(_) => panic!("expected a sync response"),
        };

        assert_eq!(streamed_usage, sync_usage);
    }

    #[tokio::test]
    async fn test_seeded_models_pick_the_same_response() {
        let request = create_dummy_request(false);

        for _ in 0..5 {
            let a = MockGpt::new().with_seed(42).with_chunk_delay(Duration::ZERO);
            let b = MockGpt::new().with_seed(42).with_chunk_delay(Duration::ZERO);

            let text_a = match a.invoke(&request).await.unwrap() {
                LlmInvokeOutput::Complete(r) => r.message.content,
                LlmInvokeOutput::Stream(_) => panic!("expected a sync response"),
            };
            let text_b = match b.invoke(&request).await.unwrap() {
                LlmInvokeOutput::Complete(r) => r.message.content,
                LlmInvokeOutput::Stream(_) => panic!("expected a sync response"),
            };

            assert_eq!(text_a, text_b);
            assert!(DEMO_RESPONSES.contains(&text_a.as_str()));
        }
    }

    #[test]
    fn test_num_tokens_counts_words_and_cjk() {
        let model = MockGpt::new();
        let credentials = Credentials::new();

        let english = vec![Message::user("hello world")];
        assert_eq!(model.num_tokens("mockgpt", &credentials, &english, &[]), 2);

        // 3 whitespace words plus the ideographs 这 and 个
        let mixed = vec![Message::user("count 这three 个chars")];
        assert_eq!(model.num_tokens("mockgpt", &credentials, &mixed, &[]), 5);

        // Contents concatenate with no separator, merging edge words
        let split = vec![Message::user("foo"), Message::assistant("bar")];
        assert_eq!(model.num_tokens("mockgpt", &credentials, &split, &[]), 1);
    }

    #[test]
    fn test_num_tokens_ignores_advertised_tools() {
        let model = MockGpt::new();
        let credentials = Credentials::new();
        let messages = vec![Message::user("hello world")];
        let tools = vec![PromptMessageTool {
            name: "add".to_string(),
            description: "Add two numbers and return the sum".to_string(),
            parameters: serde_json::json!({"type": "object"}),
        }];

        assert_eq!(
            model.num_tokens("mockgpt", &credentials, &messages, &tools),
            2
        );
    }

    #[test]
    fn test_validate_credentials_accepts_anything() {
        let model = MockGpt::new();
        assert!(model.validate_credentials("mockgpt", &Credentials::new()).is_ok());

        let mut credentials = Credentials::new();
        credentials.insert("api_key".to_string(), serde_json::json!("nonsense"));
        assert!(model.validate_credentials("other-model", &credentials).is_ok());
    }

    #[test]
    fn test_model_schema_echoes_requested_name() {
        let model = MockGpt::new();
        let schema = model.model_schema("my-custom-model");
        assert_eq!(schema.model, "my-custom-model");
        assert!(schema.features.is_empty());
        assert!(schema.parameter_rules.is_empty());
    }
}
