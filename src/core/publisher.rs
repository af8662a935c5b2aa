// qna-import - core/publisher.rs
//
// The seam between the orchestrator and whatever creates discussions.
// Core declares the contract only; implementations live in platform
// (GitHub GraphQL) and app (dry-run preview).

use crate::core::model::{DiscussionDraft, PublishedDiscussion};
use crate::util::error::PublishError;

/// Creates one discussion per call. Implementations report per-item
/// failure through the returned error and must not panic.
pub trait Publisher {
    fn publish(&mut self, draft: &DiscussionDraft) -> Result<PublishedDiscussion, PublishError>;
}
