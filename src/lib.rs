pub mod domain;
pub mod frameworks;
pub mod interface_adapters;
pub mod use_cases;

pub use domain::api::ProctoringApi;
pub use domain::errors::ApiError;
pub use domain::ports::TokenProvider;
pub use interface_adapters::client::ProctoringClient;
pub use interface_adapters::credentials::{EnvToken, NoCredentials, StaticToken};
pub use use_cases::attempt::ProctoredAttempt;
