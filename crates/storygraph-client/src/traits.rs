use async_trait::async_trait;
use storygraph_core::StoryGraphResult;
use storygraph_domain::Workspace;

/// Parameters for fetching a workspace.
#[derive(Debug, Clone, Default)]
pub struct GetWorkspaceParams {
    /// Restrict the fetch to projects with these names. `None` fetches
    /// stories from every project.
    pub only_projects: Option<Vec<String>>,
}

/// Trait for fetching a resolved workspace from the issue tracker.
///
/// Abstract so callers can be tested without a live API.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StorySource: Send + Sync {
    async fn get_workspace(&self, params: GetWorkspaceParams) -> StoryGraphResult<Workspace>;
}
