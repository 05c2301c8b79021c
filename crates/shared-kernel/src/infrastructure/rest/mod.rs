// crates/shared-kernel/src/infrastructure/rest/mod.rs

pub mod factories;
pub mod mappers;
mod rest_error;
mod rest_query;
pub mod session;
pub mod utils;

pub use factories::{RestConfig, RestContext, RestContextBuilder};
pub use mappers::RestErrorExt;
pub use rest_error::{RemoteErrorBody, RestError};
pub use rest_query::RestQuery;
pub use session::{MemorySessionStore, NoSession, SessionProvider};
