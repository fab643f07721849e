use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Bilingual display text, keyed the way the host's registry expects.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct I18nText {
    #[serde(rename = "en_US")]
    pub en_us: String,
    #[serde(rename = "zh_Hans")]
    pub zh_hans: String,
}

impl I18nText {
    pub fn same(text: &str) -> Self {
        I18nText {
            en_us: text.to_string(),
            zh_hans: text.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ModelType {
    Llm,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum FetchFrom {
    PredefinedModel,
    CustomizableModel,
}

/// One tunable parameter a model advertises to the host. The mock
/// advertises none; the shape exists for the registry contract.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ParameterRule {
    pub name: String,
    pub label: I18nText,
    #[serde(rename = "type")]
    pub param_type: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

/// Static model descriptor returned to the host's model registry.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ModelSchema {
    pub model: String,
    pub label: I18nText,
    pub model_type: ModelType,
    pub features: Vec<String>,
    pub fetch_from: FetchFrom,
    pub model_properties: Map<String, Value>,
    pub parameter_rules: Vec<ParameterRule>,
}

impl ModelSchema {
    /// Descriptor for a customizable model: label mirrors the requested
    /// name, no features, no parameter rules.
    pub fn customizable(model: &str) -> Self {
        ModelSchema {
            model: model.to_string(),
            label: I18nText::same(model),
            model_type: ModelType::Llm,
            features: Vec::new(),
            fetch_from: FetchFrom::CustomizableModel,
            model_properties: Map::new(),
            parameter_rules: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customizable_descriptor_is_empty() {
        let schema = ModelSchema::customizable("any-model");
        assert_eq!(schema.model, "any-model");
        assert_eq!(schema.label.en_us, "any-model");
        assert_eq!(schema.label.zh_hans, "any-model");
        assert!(schema.features.is_empty());
        assert!(schema.parameter_rules.is_empty());
        assert!(schema.model_properties.is_empty());
        assert_eq!(schema.fetch_from, FetchFrom::CustomizableModel);
    }

    #[test]
    fn test_schema_wire_keys() {
        let schema = ModelSchema::customizable("demo");
        let json = serde_json::to_string(&schema).unwrap();
        assert!(json.contains("\"en_US\":\"demo\""));
        assert!(json.contains("\"zh_Hans\":\"demo\""));
        assert!(json.contains("\"model_type\":\"llm\""));
        assert!(json.contains("\"fetch_from\":\"customizable-model\""));
    }
}
