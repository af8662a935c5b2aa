// qna-import - core/mod.rs
//
// Core business logic layer.
// Pure transformation: Row Filter, Content Sanitizer, and the rule set they
// share, plus CSV reading of the transcript from any reader.
// Must NOT depend on: platform or app, and never performs network I/O.
// The Publisher contract returns util's PublishError, whose transport
// variant wraps the HTTP client's error type.

pub mod filter;
pub mod model;
pub mod publisher;
pub mod rules;
pub mod sanitize;
pub mod transcript;
