// crates/shared-kernel/src/clock/mod.rs

mod system;
#[cfg(any(test, feature = "test-utils"))]
mod fixed;

use chrono::{DateTime, Utc};

pub use system::SystemClock;
#[cfg(any(test, feature = "test-utils"))]
pub use fixed::FixedClock;

/// Source de temps injectée dans les use cases (updated_at, solved_at).
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
