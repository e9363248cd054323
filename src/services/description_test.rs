use super::*;
use crate::llm::types::LlmError;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

// =========================================================================
// MockLlm
// =========================================================================

struct MockLlm {
    reply: Result<String, fn() -> LlmError>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl MockLlm {
    fn ok(text: &str) -> Arc<Self> {
        Arc::new(Self { reply: Ok(text.to_owned()), calls: AtomicUsize::new(0), prompts: Mutex::new(Vec::new()) })
    }

    fn failing(err: fn() -> LlmError) -> Arc<Self> {
        Arc::new(Self { reply: Err(err), calls: AtomicUsize::new(0), prompts: Mutex::new(Vec::new()) })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl TextGenerator for MockLlm {
    async fn generate_text(&self, prompt: &str) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_owned());
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(make) => Err(make()),
        }
    }
}

fn generator(mock: &Arc<MockLlm>) -> DescriptionGenerator {
    DescriptionGenerator::new(Some(mock.clone() as Arc<dyn TextGenerator>))
}

// =========================================================================
// build_prompt
// =========================================================================

#[test]
fn prompt_embeds_name_and_ingredients() {
    let prompt = build_prompt("Garden Bowl", "spinach, chickpeas");
    assert!(prompt.contains("\"Garden Bowl\""));
    assert!(prompt.contains("spinach, chickpeas"));
}

// =========================================================================
// generate
// =========================================================================

#[tokio::test]
async fn missing_credential_returns_fixed_fallback() {
    let generator = DescriptionGenerator::new(None);
    assert!(!generator.has_backend());

    let description = generator.generate("Garden Bowl", "spinach, chickpeas").await;
    assert_eq!(description.text(), "Fresh and delicious ingredients prepared daily.");
    assert_eq!(description.degraded_reason(), Some(&DegradedReason::MissingCredential));
    assert!(!description.is_generated());
}

#[tokio::test]
async fn success_trims_surrounding_whitespace_only() {
    let mock = MockLlm::ok("\n  Crisp spinach,  warm chickpeas.\n\n");
    let description = generator(&mock).generate("Garden Bowl", "spinach, chickpeas").await;

    assert_eq!(description, Description::Generated("Crisp spinach,  warm chickpeas.".into()));
    assert_eq!(mock.calls(), 1);
    assert_eq!(mock.prompts.lock().unwrap()[0], build_prompt("Garden Bowl", "spinach, chickpeas"));
}

#[tokio::test]
async fn request_failure_returns_fixed_fallback() {
    let mock = MockLlm::failing(|| LlmError::ApiRequest("connection reset".into()));
    let description = generator(&mock).generate("Garden Bowl", "spinach").await;

    assert_eq!(description.text(), "A delicious blend of fresh ingredients.");
    assert!(matches!(description.degraded_reason(), Some(DegradedReason::RequestFailed(msg)) if msg.contains("connection reset")));
}

#[tokio::test]
async fn failure_fallback_ignores_inputs() {
    let mock = MockLlm::failing(|| LlmError::ApiResponse { status: 500, body: String::new() });
    let generator = generator(&mock);

    let a = generator.generate("", "").await;
    let b = generator.generate("Kale Caesar \"Deluxe\"", "kale, parmesan, croutons").await;
    assert_eq!(a.text(), REQUEST_FAILED_FALLBACK);
    assert_eq!(b.text(), REQUEST_FAILED_FALLBACK);
}

#[tokio::test]
async fn malformed_response_counts_as_failure() {
    let mock = MockLlm::failing(|| LlmError::ApiParse("no candidates in response".into()));
    let description = generator(&mock).generate("Bowl", "rice").await;
    assert_eq!(description.text(), REQUEST_FAILED_FALLBACK);
}

#[tokio::test]
async fn repeated_requests_are_not_cached() {
    let mock = MockLlm::ok("Fresh.");
    let generator = generator(&mock);

    generator.generate("Bowl", "rice").await;
    generator.generate("Bowl", "rice").await;
    assert_eq!(mock.calls(), 2);
}

// =========================================================================
// construction from config
// =========================================================================

fn llm_config(model: &str) -> crate::llm::config::LlmConfig {
    crate::llm::config::LlmConfig {
        api_key: "real-key".into(),
        model: model.into(),
        base_url: crate::llm::config::DEFAULT_BASE_URL.into(),
        timeouts: crate::llm::config::LlmTimeouts { request_secs: 30, connect_secs: 10 },
    }
}

#[test]
fn configured_client_becomes_backend() {
    let generator = DescriptionGenerator::from_client(LlmClient::from_config(llm_config("gemini-1.5-flash")));
    assert!(generator.has_backend());
}

#[tokio::test]
async fn missing_api_key_is_reported_as_missing_credential() {
    let generator = DescriptionGenerator::from_client(Err(LlmError::MissingApiKey { var: "GEMINI_API_KEY".into() }));
    assert!(!generator.has_backend());

    let description = generator.generate("Bowl", "rice").await;
    assert_eq!(description.degraded_reason(), Some(&DegradedReason::MissingCredential));
    assert_eq!(description.text(), MISSING_CREDENTIAL_FALLBACK);
}

#[tokio::test]
async fn bad_config_with_credential_is_not_a_missing_credential() {
    let generator =
        DescriptionGenerator::from_client(Err(LlmError::ConfigParse("invalid LLM_MODEL: gemini/1.5".into())));
    assert!(!generator.has_backend());

    let description = generator.generate("Garden Bowl", "spinach").await;
    assert_eq!(description.text(), REQUEST_FAILED_FALLBACK);
    assert!(matches!(
        description.degraded_reason(),
        Some(DegradedReason::Misconfigured(detail)) if detail.contains("gemini/1.5")
    ));
}

#[tokio::test]
async fn http_client_build_failure_is_misconfigured() {
    let generator = DescriptionGenerator::misconfigured(&LlmError::HttpClientBuild("tls".into()));
    let description = generator.generate("Bowl", "rice").await;
    assert_eq!(description.degraded_reason().map(DegradedReason::kind), Some(DegradedKind::Misconfigured));
}

// =========================================================================
// DegradedKind
// =========================================================================

#[test]
fn degraded_kind_drops_details() {
    assert_eq!(DegradedReason::RequestFailed("https://x?key=secret".into()).kind(), DegradedKind::RequestFailed);
    assert_eq!(DegradedReason::Misconfigured("bad".into()).kind(), DegradedKind::Misconfigured);
    assert_eq!(DegradedReason::MissingCredential.kind(), DegradedKind::MissingCredential);
}

#[test]
fn degraded_kind_serializes_as_snake_case_string() {
    let json = serde_json::to_value(DegradedKind::RequestFailed).unwrap();
    assert_eq!(json, serde_json::json!("request_failed"));
    let json = serde_json::to_value(DegradedKind::MissingCredential).unwrap();
    assert_eq!(json, serde_json::json!("missing_credential"));
    let json = serde_json::to_value(DegradedKind::Misconfigured).unwrap();
    assert_eq!(json, serde_json::json!("misconfigured"));
}
