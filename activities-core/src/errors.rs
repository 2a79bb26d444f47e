use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Activity not found: {0}")]
    ActivityNotFound(String),

    #[error("{email} is already signed up for {activity}")]
    AlreadyRegistered { activity: String, email: String },

    #[error("{email} is not registered for {activity}")]
    NotRegistered { activity: String, email: String },
}

pub type CatalogResult<T> = Result<T, CatalogError>;
