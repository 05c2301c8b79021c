mod rest_config;
mod rest_context;
mod rest_context_builder;

pub use rest_config::RestConfig;
pub use rest_context::RestContext;
pub use rest_context_builder::{
    RestContextBuilder, ENV_API_KEY, ENV_API_TIMEOUT_SECS, ENV_API_URL,
};
