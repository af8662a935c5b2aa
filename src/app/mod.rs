// qna-import - app/mod.rs
//
// Application layer: run settings, the import orchestrator, and the
// dry-run preview publisher.
// Dependencies: core, platform, util.

pub mod import;
pub mod preview;
pub mod settings;
