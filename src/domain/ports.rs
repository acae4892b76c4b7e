// Port for supplying the bearer credential attached to outbound requests.
// Consulted once per request; `None` sends the request unauthenticated and
// leaves rejection to the backend.
pub trait TokenProvider: Send + Sync {
    fn bearer_token(&self) -> Option<String>;
}
