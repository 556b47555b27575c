use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    #[error("unsupported quiz variant: {0:?}")]
    InvalidVariant(String),

    #[error("unknown policy: {0:?}")]
    UnknownPolicy(String),

    #[error("unknown direction: {0:?}")]
    UnknownDirection(String),

    #[error("malformed answer data: {0:?}")]
    MalformedAnswer(String),

    #[error("stored problem breaks the force law: {0}")]
    InconsistentProblem(String),
}
