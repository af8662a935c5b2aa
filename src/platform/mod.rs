// qna-import - platform/mod.rs
//
// Platform abstraction layer: config directories and config.toml, and the
// GitHub GraphQL client.
// Dependencies: util, core model/publisher contract, directories, ureq.
// Must NOT depend on: app.

pub mod config;
pub mod github;
