use crate::error::StoryGraphError;

pub type StoryGraphResult<T> = Result<T, StoryGraphError>;
