//! Runtime error types

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RuntimeError {
    #[error("Sidepicker runtime has stopped")]
    Closed,
}
