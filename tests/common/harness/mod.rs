//! Test harness for CLI integration tests.
//!
//! Provides isolated test environments and CLI assertion helpers using
//! `assert_cmd`.

mod command;
mod env;

#[allow(unused_imports)]
pub use command::MemoCommand;
#[allow(unused_imports)]
pub use env::TestEnv;
