// crates/shared-kernel/src/infrastructure/rest/utils/mod.rs

#[cfg(feature = "test-utils")]
mod rest_test_utils;

#[cfg(feature = "test-utils")]
pub use rest_test_utils::{setup_test_backend, RecordedRequest, RequestLog, TEST_API_KEY};
