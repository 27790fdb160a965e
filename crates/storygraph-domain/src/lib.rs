pub mod graph;
pub mod node;
pub mod project;
pub mod rank;
pub mod render;
pub mod story;
pub mod workspace;

pub use graph::{Graph, GraphOptions};
pub use node::Node;
pub use project::{Project, ProjectId};
pub use rank::compute_raw_ranks;
pub use render::{render, EdgeDirection, Grouping, RenderOptions};
pub use story::{Story, StoryId, StoryLink};
pub use workspace::Workspace;
