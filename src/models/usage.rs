use serde::{Deserialize, Serialize};

/// Synthetic token and cost accounting for one generated response.
///
/// Prices are derived as `tokens * unit_price / price_unit`; the mock
/// fills every field from fixed rates, so two summaries for the same
/// response text compare equal.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LlmUsage {
    pub prompt_tokens: i64,
    pub prompt_unit_price: f64,
    pub prompt_price_unit: f64,
    pub prompt_price: f64,
    pub completion_tokens: i64,
    pub completion_unit_price: f64,
    pub completion_price_unit: f64,
    pub completion_price: f64,
    pub total_tokens: i64,
    pub total_price: f64,
    pub currency: String,
    pub latency: f64,
}

impl LlmUsage {
    /// Price a prompt/completion pair at the given per-token rates.
    pub fn from_rates(
        prompt_tokens: i64,
        completion_tokens: i64,
        prompt_unit_price: f64,
        completion_unit_price: f64,
        price_unit: f64,
        currency: &str,
        latency: f64,
    ) -> Self {
        let prompt_price = prompt_tokens as f64 * prompt_unit_price / price_unit;
        let completion_price = completion_tokens as f64 * completion_unit_price / price_unit;
        LlmUsage {
            prompt_tokens,
            prompt_unit_price,
            prompt_price_unit: price_unit,
            prompt_price,
            completion_tokens,
            completion_unit_price,
            completion_price_unit: price_unit,
            completion_price,
            total_tokens: prompt_tokens + completion_tokens,
            total_price: prompt_price + completion_price,
            currency: currency.to_string(),
            latency,
        }
    }
}
