pub mod client;
pub mod models;
pub mod traits;

pub use client::ClubhouseClient;
pub use traits::{GetWorkspaceParams, StorySource};
