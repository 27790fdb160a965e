use serde::{Deserialize, Serialize};

pub type ProjectId = i64;

/// A project grouping stories, with a color token used as a visual
/// attribute only (never parsed or validated).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    #[serde(default)]
    pub color: String,
}
