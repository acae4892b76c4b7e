use crate::domain::ports::TokenProvider;

// Fixed credential, handed over at construction.
pub struct StaticToken(pub String);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl TokenProvider for StaticToken {
    fn bearer_token(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

// No credential; every request goes out unauthenticated.
pub struct NoCredentials;

impl TokenProvider for NoCredentials {
    fn bearer_token(&self) -> Option<String> {
        None
    }
}

// Reads the token from the environment on every request, so a credential
// written after construction is picked up without rebuilding the client.
pub struct EnvToken {
    pub var: String,
}

impl EnvToken {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl TokenProvider for EnvToken {
    fn bearer_token(&self) -> Option<String> {
        std::env::var(&self.var).ok().filter(|t| !t.is_empty())
    }
}
