use tracing::info;
use uuid::Uuid;

use crate::errors::InvokeError;
use crate::llm::{LanguageModel, LlmInvokeOutput};
use crate::models::request::CompletionRequest;

/// Drive a model the way the host runtime does: check credentials, then
/// invoke, honoring the request's streaming flag.
pub async fn handle(
    model: &dyn LanguageModel,
    request: &CompletionRequest,
) -> Result<LlmInvokeOutput, InvokeError> {
    let trace_id = Uuid::new_v4().to_string();
    info!(
        "Handling completion {} for model {} (stream: {})",
        trace_id, request.model, request.stream
    );

    model.validate_credentials(&request.model, &request.credentials)?;
    model.invoke(request).await
}

/// Same entry point, but from the raw JSON body a host delivers.
pub async fn handle_raw(
    model: &dyn LanguageModel,
    body: &str,
) -> Result<LlmInvokeOutput, InvokeError> {
    let request = CompletionRequest::from_json(body)?;
    handle(model, &request).await
}
