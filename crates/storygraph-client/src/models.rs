//! Wire types for the Clubhouse REST v3 payloads.
//!
//! Only the fields the graph needs are semantically required; the rest are
//! decoded as passthrough and otherwise ignored. Everything is tolerant of
//! absent fields so a partial API response degrades instead of failing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use storygraph_domain::{Project, Story, StoryLink};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiStoryLink {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub subject_id: i64,
    #[serde(default)]
    pub object_id: Option<i64>,
    #[serde(default)]
    pub verb: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiStory {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub blocked: bool,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub project_id: i64,
    #[serde(default)]
    pub story_links: Vec<ApiStoryLink>,

    // Passthrough fields, decoded but not used by the graph
    #[serde(default)]
    pub app_url: Option<String>,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub story_type: Option<String>,
    #[serde(default)]
    pub estimate: Option<i64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiProject {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub color: String,

    #[serde(default)]
    pub abbreviation: Option<String>,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Request body for `POST /stories/search`.
#[derive(Debug, Clone, Serialize)]
pub struct SearchStoriesParams {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub project_ids: Vec<i64>,
}

impl From<ApiStoryLink> for StoryLink {
    fn from(link: ApiStoryLink) -> Self {
        StoryLink {
            kind: link.kind,
            subject_id: link.subject_id,
        }
    }
}

impl From<ApiStory> for Story {
    fn from(story: ApiStory) -> Self {
        Story {
            id: story.id,
            name: story.name,
            blocked: story.blocked,
            completed: story.completed,
            project_id: story.project_id,
            links: story.story_links.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<ApiProject> for Project {
    fn from(project: ApiProject) -> Self {
        Project {
            id: project.id,
            name: project.name,
            color: project.color,
        }
    }
}
