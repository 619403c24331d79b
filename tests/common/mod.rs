//! Shared utilities for integration tests.

pub mod harness;

/// Config written by `TestEnv::new()`.
///
/// Show takes the 10 most recent notes; clear takes the single oldest.
#[allow(dead_code)]
pub const DEFAULT_CONFIG: &str = r#"
[write]
default_table = "jot"

[show]
default_table = "jot"
default_count = 10
default_view = "recent"

[clear]
default_table = "jot"
default_count = 1
default_view = "oldest"
"#;
