use std::pin::Pin;

use async_trait::async_trait;
use tokio_stream::Stream;

use crate::errors::{CredentialsValidateFailed, InvokeError};
use crate::models::llm_result::{LlmResult, LlmResultChunk};
use crate::models::request::{CompletionRequest, Credentials, PromptMessageTool};
use crate::models::schema::ModelSchema;
use crate::models::Message;

pub mod mock;

pub use mock::MockGpt;

/// Chunk sequence produced by a streamed completion.
pub type ChunkStream = Pin<Box<dyn Stream<Item = Result<LlmResultChunk, InvokeError>> + Send>>;

/// Either form a completion can take, depending on `request.stream`.
pub enum LlmInvokeOutput {
    Complete(LlmResult),
    Stream(ChunkStream),
}

/// The model-side contract a plugin implements for the host runtime.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Run a completion, streamed or not per the request.
    async fn invoke(&self, request: &CompletionRequest) -> Result<LlmInvokeOutput, InvokeError>;

    /// Estimate the prompt token cost of a message history. Advertised
    /// tools ride along per the host contract.
    fn num_tokens(
        &self,
        model: &str,
        credentials: &Credentials,
        messages: &[Message],
        tools: &[PromptMessageTool],
    ) -> usize;

    /// Confirm the credentials can drive the named model.
    fn validate_credentials(
        &self,
        model: &str,
        credentials: &Credentials,
    ) -> Result<(), CredentialsValidateFailed>;

    /// Describe the named model to the host's registry.
    fn model_schema(&self, model: &str) -> ModelSchema;
}
