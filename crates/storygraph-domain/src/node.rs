use serde::{Deserialize, Serialize};

use crate::{Story, StoryId};

/// Outline color used when a story's project was not in the fetched batch.
pub const DEFAULT_OUTLINE_COLOR: &str = "black";

/// The rendering-layer representation of a story.
///
/// Holds only immutable scalar copies of story and project attributes, plus
/// relation lists of plain identifiers. Deliberately no references back into
/// `Story`/`Project`: the graph is a self-contained acyclic value structure
/// that can be serialized independent of the source objects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    pub id: StoryId,
    pub label: String,
    /// Owning project name; empty when the project could not be resolved.
    pub project: String,
    /// Outline color, taken from the project.
    pub color: String,
    /// Fill color derived from story state.
    pub fill_color: String,
    /// Normalized rank; non-negative after graph assembly.
    pub rank: i32,
    pub blockers: Vec<StoryId>,
    pub blocks: Vec<StoryId>,
    pub completed: bool,
}

/// Fill color for a story: completed wins over blocked, everything else is
/// white.
pub fn fill_color_for(story: &Story) -> &'static str {
    if story.completed {
        "green"
    } else if story.blocked {
        "red"
    } else {
        "white"
    }
}
