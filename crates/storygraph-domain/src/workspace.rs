use std::collections::{HashMap, HashSet};

use crate::{Project, ProjectId, Story, StoryId};

/// The resolved collection of stories for a single run.
///
/// Owns the story list (in the order the stories were supplied) and carries
/// the resolved relations as ID-indexed maps rather than object references,
/// so nothing here points back into a live object graph. Transient: rebuilt
/// on every invocation, never persisted.
#[derive(Debug, Clone, Default)]
pub struct Workspace {
    stories: Vec<Story>,
    projects: HashMap<ProjectId, Project>,
    blockers: HashMap<StoryId, Vec<StoryId>>,
    blocks: HashMap<StoryId, Vec<StoryId>>,
}

impl Workspace {
    /// Resolve a fetched batch of stories and projects into a workspace.
    ///
    /// Builds the ID indexes once, then scans each story's links; a single
    /// pass over stories and links, O(S·L). Links whose subject is not in
    /// the batch are dropped, and a story whose project is not in the batch
    /// simply resolves to no project. Both are recoverable conditions: the
    /// tracker is queried live and may be mid-change.
    pub fn resolve(stories: Vec<Story>, projects: Vec<Project>) -> Self {
        let story_ids: HashSet<StoryId> = stories.iter().map(|s| s.id).collect();
        let projects: HashMap<ProjectId, Project> =
            projects.into_iter().map(|p| (p.id, p)).collect();

        let mut blockers: HashMap<StoryId, Vec<StoryId>> = HashMap::new();
        let mut blocks: HashMap<StoryId, Vec<StoryId>> = HashMap::new();

        for story in &stories {
            for subject_id in story.blocker_refs() {
                if !story_ids.contains(&subject_id) {
                    tracing::debug!(
                        story_id = story.id,
                        subject_id,
                        "dropping blocker link to a story outside the fetched batch"
                    );
                    continue;
                }
                blockers.entry(story.id).or_default().push(subject_id);
                blocks.entry(subject_id).or_default().push(story.id);
            }
        }

        Self {
            stories,
            projects,
            blockers,
            blocks,
        }
    }

    /// Stories in the order they were supplied.
    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    /// The project a story belongs to, if it was in the fetched batch.
    pub fn project_of(&self, story: &Story) -> Option<&Project> {
        self.projects.get(&story.project_id)
    }

    /// Resolved blockers of a story (stories that must complete first).
    pub fn blockers_of(&self, story_id: StoryId) -> &[StoryId] {
        self.blockers
            .get(&story_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Inverse relation: stories this story blocks.
    pub fn blocks_of(&self, story_id: StoryId) -> &[StoryId] {
        self.blocks
            .get(&story_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The full story → blockers relation, for rank computation.
    pub fn blocker_map(&self) -> &HashMap<StoryId, Vec<StoryId>> {
        &self.blockers
    }

    pub fn is_empty(&self) -> bool {
        self.stories.is_empty()
    }

    pub fn story_count(&self) -> usize {
        self.stories.len()
    }
}
