use serde::{Deserialize, Serialize};

pub type StoryId = i64;

/// Link type literal the issue tracker uses for a blocking relationship.
/// Other link kinds ("subject", comment references, etc.) are ignored.
pub const BLOCKING_LINK_KIND: &str = "object";

/// A cross-reference between two stories, as reported by the tracker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryLink {
    #[serde(rename = "type")]
    pub kind: String,
    pub subject_id: StoryId,
}

impl StoryLink {
    pub fn is_blocking(&self) -> bool {
        self.kind == BLOCKING_LINK_KIND
    }
}

/// A unit of work tracked by the external system.
///
/// Immutable once fetched. Relations to other stories and to the owning
/// project are not stored here; the resolved `Workspace` carries them as
/// ID-indexed maps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Story {
    pub id: StoryId,
    pub name: String,
    #[serde(default)]
    pub blocked: bool,
    #[serde(default)]
    pub completed: bool,
    pub project_id: i64,
    #[serde(default, rename = "story_links")]
    pub links: Vec<StoryLink>,
}

impl Story {
    /// IDs of stories this story is blocked by, per its link records.
    /// May reference stories outside the fetched batch; the workspace
    /// resolver drops those.
    pub fn blocker_refs(&self) -> impl Iterator<Item = StoryId> + '_ {
        self.links
            .iter()
            .filter(|link| link.is_blocking())
            .map(|link| link.subject_id)
    }
}
