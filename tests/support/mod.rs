// tests/support/mod.rs
// Shared in-memory repositories and port doubles used by multiple test
// binaries. Some symbols are unused in individual test crates; allow the
// resulting warnings at the module level.
#[allow(dead_code, unused_imports)]
pub mod builders;
#[allow(dead_code, unused_imports)]
pub mod mocks;

#[allow(unused_imports)]
pub use builders::*;
#[allow(unused_imports)]
pub use mocks::*;
