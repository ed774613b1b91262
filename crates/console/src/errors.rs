use service::ServiceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error("cannot write output: {0}")]
    Output(#[from] std::io::Error),
}
