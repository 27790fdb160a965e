use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoryGraphError {
    #[error("Cyclic dependency involving story {0}")]
    CyclicDependency(i64),

    #[error("API error: {0}")]
    Api(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}
