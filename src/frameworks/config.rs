use std::env;

// Client transport settings (environment-derived, with local-dev defaults).

const API_PATH: &str = "/api/proctoring";

// Environment variable holding the bearer token, read per request.
pub const TOKEN_ENV_VAR: &str = "PROCTORING_API_TOKEN";

pub fn base_url() -> String {
    env::var("PROCTORING_API_URL").unwrap_or_else(|_| "http://127.0.0.1:8000".to_string())
}

// Full request prefix for the proctoring API.
pub fn api_root() -> String {
    api_root_for(&base_url())
}

pub fn api_root_for(base: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), API_PATH)
}
