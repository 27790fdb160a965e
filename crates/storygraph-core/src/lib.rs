pub mod error;
pub mod graph;
pub mod result;

pub use error::StoryGraphError;
pub use result::StoryGraphResult;
