use serde::{Deserialize, Serialize};

/// A repository as returned by the lookup endpoint.
///
/// Carries only the fields the dashboard renders. The response body is
/// trusted as-is, unknown fields are ignored.
#[derive(Deserialize, Serialize, PartialEq, Clone, Debug)]
pub struct Repository {
    pub full_name: String,
    pub description: Option<String>,
    pub owner: RepositoryOwner,
}

#[derive(Deserialize, Serialize, PartialEq, Clone, Debug)]
pub struct RepositoryOwner {
    pub login: String,
    pub avatar_url: String,
}
