// qna-import - lib.rs
//
// Library entry point, exposing all non-CLI modules for integration testing
// and programmatic use.
//
// CLI parsing and process exit codes live in `main.rs` and are not part of
// the library surface.

pub mod app;
pub mod core;
pub mod platform;
pub mod util;
