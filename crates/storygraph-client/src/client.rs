use std::time::Duration;

use async_trait::async_trait;
use storygraph_core::{StoryGraphError, StoryGraphResult};
use storygraph_domain::{Project, Story, Workspace};

use crate::models::{ApiProject, ApiStory, SearchStoriesParams};
use crate::traits::{GetWorkspaceParams, StorySource};

pub const BASE_URL: &str = "https://api.clubhouse.io/api/v3";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Client for the Clubhouse REST v3 API.
///
/// Authenticates with a token passed as a query parameter on every request.
pub struct ClubhouseClient {
    http: reqwest::Client,
    token: String,
    base_url: String,
}

impl ClubhouseClient {
    pub fn new(token: impl Into<String>) -> StoryGraphResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| StoryGraphError::Connection(e.to_string()))?;

        Ok(Self {
            http,
            token: token.into(),
            base_url: BASE_URL.to_string(),
        })
    }

    /// Point the client at a different base URL (local test servers).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub async fn list_projects(&self) -> StoryGraphResult<Vec<Project>> {
        let url = format!("{}/projects", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[("token", &self.token)])
            .send()
            .await
            .map_err(|e| StoryGraphError::Connection(format!("list projects failed: {e}")))?;

        if !response.status().is_success() {
            return Err(StoryGraphError::Api(format!(
                "GET /projects returned {}",
                response.status()
            )));
        }

        let projects: Vec<ApiProject> = response
            .json()
            .await
            .map_err(|e| StoryGraphError::Serialization(format!("list projects failed: {e}")))?;

        Ok(projects.into_iter().map(Into::into).collect())
    }

    pub async fn search_stories(&self, project_ids: Vec<i64>) -> StoryGraphResult<Vec<Story>> {
        let url = format!("{}/stories/search", self.base_url);
        let params = SearchStoriesParams { project_ids };
        let response = self
            .http
            .post(&url)
            .query(&[("token", &self.token)])
            .json(&params)
            .send()
            .await
            .map_err(|e| StoryGraphError::Connection(format!("search stories failed: {e}")))?;

        if !response.status().is_success() {
            return Err(StoryGraphError::Api(format!(
                "POST /stories/search returned {}",
                response.status()
            )));
        }

        let stories: Vec<ApiStory> = response
            .json()
            .await
            .map_err(|e| StoryGraphError::Serialization(format!("search stories failed: {e}")))?;

        Ok(stories.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl StorySource for ClubhouseClient {
    /// Fetch projects and stories, then resolve them into a workspace.
    ///
    /// With `only_projects` set, stories are limited to the named projects;
    /// project names not present in the tracker are ignored.
    async fn get_workspace(&self, params: GetWorkspaceParams) -> StoryGraphResult<Workspace> {
        let projects = self.list_projects().await?;

        let project_ids: Vec<i64> = projects
            .iter()
            .filter(|p| match &params.only_projects {
                Some(names) => names.contains(&p.name),
                None => true,
            })
            .map(|p| p.id)
            .collect();

        tracing::debug!(
            projects = projects.len(),
            selected = project_ids.len(),
            "fetched project list"
        );

        let stories = self.search_stories(project_ids).await?;
        tracing::debug!(stories = stories.len(), "fetched stories");

        Ok(Workspace::resolve(stories, projects))
    }
}
