// crates/shared-kernel/tests/infrastructure/mod.rs

mod rest_context_it;
