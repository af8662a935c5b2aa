// qna-import - platform/github.rs
//
// GitHub Discussions publisher over the GraphQL API (blocking ureq agent).
//
// `connect` resolves the repository node ID and the discussion category ID
// once; failures there are fatal for the run. Each `publish` call is one
// `createDiscussion` mutation and fails on its own.
//
// The token is sent as a bearer header and never logged or printed.

use crate::core::model::{DiscussionDraft, PublishedDiscussion};
use crate::core::publisher::Publisher;
use crate::util::constants;
use crate::util::error::PublishError;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fmt;
use std::time::Duration;

const REPOSITORY_QUERY: &str = r#"
query($owner: String!, $repo: String!, $first: Int!) {
  repository(owner: $owner, name: $repo) {
    id
    discussionCategories(first: $first) {
      nodes {
        id
        name
      }
    }
  }
}
"#;

const CREATE_DISCUSSION_MUTATION: &str = r#"
mutation($repositoryId: ID!, $categoryId: ID!, $title: String!, $body: String!) {
  createDiscussion(input: {repositoryId: $repositoryId, categoryId: $categoryId, title: $title, body: $body}) {
    discussion {
      id
      url
    }
  }
}
"#;

/// Everything needed to reach the target repository.
#[derive(Clone)]
pub struct GitHubSettings {
    pub api_url: String,
    pub token: String,
    pub owner: String,
    pub repo: String,
    pub category: String,
}

impl fmt::Debug for GitHubSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GitHubSettings")
            .field("api_url", &self.api_url)
            .field("token", &"<redacted>")
            .field("owner", &self.owner)
            .field("repo", &self.repo)
            .field("category", &self.category)
            .finish()
    }
}

// =============================================================================
// Response shapes
// =============================================================================

#[derive(Debug, Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct GraphQlErrorEntry {
    message: String,
    #[serde(rename = "type")]
    kind: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RepositoryData {
    repository: Option<RepositoryNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RepositoryNode {
    id: String,
    discussion_categories: CategoryConnection,
}

#[derive(Debug, Deserialize)]
struct CategoryConnection {
    #[serde(default)]
    nodes: Vec<CategoryNode>,
}

#[derive(Debug, Deserialize)]
struct CategoryNode {
    id: String,
    name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateDiscussionData {
    create_discussion: Option<CreateDiscussionPayload>,
}

#[derive(Debug, Deserialize)]
struct CreateDiscussionPayload {
    discussion: Option<DiscussionNode>,
}

#[derive(Debug, Deserialize)]
struct DiscussionNode {
    id: String,
    url: Option<String>,
}

fn error_messages(errors: Vec<GraphQlErrorEntry>) -> Vec<String> {
    errors.into_iter().map(|e| e.message).collect()
}

// =============================================================================
// Response interpretation (pure, unit-tested)
// =============================================================================

/// Pull the repository ID and the wanted category ID out of the lookup
/// response.
fn interpret_repository(
    response: GraphQlResponse<RepositoryData>,
    settings: &GitHubSettings,
) -> Result<(String, String), PublishError> {
    let GraphQlResponse { data, errors } = response;

    let Some(repository) = data.and_then(|d| d.repository) else {
        let not_found = errors.is_empty()
            || errors
                .iter()
                .any(|e| e.kind.as_deref() == Some("NOT_FOUND"));
        return Err(if not_found {
            PublishError::RepositoryNotFound {
                owner: settings.owner.clone(),
                repo: settings.repo.clone(),
            }
        } else {
            PublishError::GraphQl {
                operation: "repository lookup",
                messages: error_messages(errors),
            }
        });
    };

    let category_id = repository
        .discussion_categories
        .nodes
        .iter()
        .find(|c| c.name == settings.category)
        .map(|c| c.id.clone())
        .ok_or_else(|| PublishError::CategoryNotFound {
            category: settings.category.clone(),
            available: repository
                .discussion_categories
                .nodes
                .iter()
                .map(|c| c.name.clone())
                .collect(),
        })?;

    Ok((repository.id, category_id))
}

fn interpret_created(
    response: GraphQlResponse<CreateDiscussionData>,
) -> Result<PublishedDiscussion, PublishError> {
    if !response.errors.is_empty() {
        return Err(PublishError::GraphQl {
            operation: "createDiscussion",
            messages: error_messages(response.errors),
        });
    }

    response
        .data
        .and_then(|d| d.create_discussion)
        .and_then(|p| p.discussion)
        .map(|d| PublishedDiscussion { id: d.id, url: d.url })
        .ok_or(PublishError::MissingDiscussion)
}

// =============================================================================
// Client
// =============================================================================

/// A connected publisher for one repository and category.
pub struct GitHubDiscussions {
    agent: ureq::Agent,
    api_url: String,
    token: String,
    repository_id: String,
    category_id: String,
}

impl GitHubDiscussions {
    /// Resolve the repository and category IDs. Errors here end the run.
    pub fn connect(settings: &GitHubSettings) -> Result<Self, PublishError> {
        let agent = ureq::Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(constants::HTTP_TIMEOUT_SECS)))
            .build()
            .new_agent();

        let variables = serde_json::json!({
            "owner": settings.owner,
            "repo": settings.repo,
            "first": constants::CATEGORY_PAGE_SIZE,
        });
        let response = execute(
            &agent,
            &settings.api_url,
            &settings.token,
            "repository lookup",
            REPOSITORY_QUERY,
            variables,
        )?;
        let (repository_id, category_id) = interpret_repository(response, settings)?;

        tracing::info!(
            owner = %settings.owner,
            repo = %settings.repo,
            repository_id = %repository_id,
            category = %settings.category,
            category_id = %category_id,
            "Resolved discussion target"
        );

        Ok(Self {
            agent,
            api_url: settings.api_url.clone(),
            token: settings.token.clone(),
            repository_id,
            category_id,
        })
    }

}

impl Publisher for GitHubDiscussions {
    fn publish(&mut self, draft: &DiscussionDraft) -> Result<PublishedDiscussion, PublishError> {
        let variables = serde_json::json!({
            "repositoryId": self.repository_id,
            "categoryId": self.category_id,
            "title": draft.title,
            "body": draft.body,
        });
        let response = execute(
            &self.agent,
            &self.api_url,
            &self.token,
            "createDiscussion",
            CREATE_DISCUSSION_MUTATION,
            variables,
        )?;
        let created = interpret_created(response)?;
        tracing::debug!(id = %created.id, "Discussion created");
        Ok(created)
    }
}

/// POST one GraphQL document and decode the envelope.
fn execute<T: DeserializeOwned>(
    agent: &ureq::Agent,
    api_url: &str,
    token: &str,
    operation: &'static str,
    query: &str,
    variables: serde_json::Value,
) -> Result<GraphQlResponse<T>, PublishError> {
    let payload = serde_json::json!({
        "query": query,
        "variables": variables,
    });
    let user_agent = format!("{}/{}", constants::APP_NAME, constants::APP_VERSION);

    let mut response = agent
        .post(api_url)
        .header("Authorization", &format!("Bearer {token}"))
        .header("Content-Type", "application/json")
        .header("User-Agent", &user_agent)
        .send(payload.to_string())
        .map_err(|source| PublishError::Http { operation, source })?;

    let text = response
        .body_mut()
        .read_to_string()
        .map_err(|source| PublishError::Http { operation, source })?;

    serde_json::from_str(&text).map_err(|source| PublishError::Decode { operation, source })
}
