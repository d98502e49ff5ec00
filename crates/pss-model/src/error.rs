use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("{entity} name must not be empty")]
    EmptyName { entity: &'static str },
    #[error("station max score must be at least 1")]
    InvalidMaxScore,
    #[error("no scout group with id {0}")]
    GroupNotFound(Uuid),
    #[error("no patrol with id {0}")]
    PatrolNotFound(Uuid),
    #[error("no station with id {0}")]
    StationNotFound(Uuid),
}

pub type Result<T> = std::result::Result<T, ModelError>;
