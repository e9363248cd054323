use super::*;

#[test]
fn error_code_config_parse() {
    let err = LlmError::ConfigParse("bad".into());
    assert_eq!(err.error_code(), "E_CONFIG_PARSE");
}

#[test]
fn error_code_missing_api_key() {
    let err = LlmError::MissingApiKey { var: "KEY".into() };
    assert_eq!(err.error_code(), "E_MISSING_API_KEY");
}

#[test]
fn error_code_api_request() {
    let err = LlmError::ApiRequest("timeout".into());
    assert_eq!(err.error_code(), "E_API_REQUEST");
}

#[test]
fn error_code_api_response() {
    let err = LlmError::ApiResponse { status: 500, body: "oops".into() };
    assert_eq!(err.error_code(), "E_API_RESPONSE");
}

#[test]
fn error_code_api_parse() {
    let err = LlmError::ApiParse("json".into());
    assert_eq!(err.error_code(), "E_API_PARSE");
}

#[test]
fn error_code_http_client_build() {
    let err = LlmError::HttpClientBuild("tls".into());
    assert_eq!(err.error_code(), "E_HTTP_CLIENT_BUILD");
}

#[test]
fn missing_api_key_message_names_variable() {
    let err = LlmError::MissingApiKey { var: "GEMINI_API_KEY".into() };
    assert_eq!(err.to_string(), "missing API key: env var GEMINI_API_KEY not set");
}

#[test]
fn api_response_message_omits_body() {
    let err = LlmError::ApiResponse { status: 503, body: "secret upstream detail".into() };
    assert_eq!(err.to_string(), "API response error: status 503");
}
