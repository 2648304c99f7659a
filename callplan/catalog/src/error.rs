use callplan_common::types::ProcedureId;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("procedure {0} already exists")]
    ProcedureAlreadyExists(String),

    #[error("procedure {0} not exists")]
    ProcedureNotExists(String),

    #[error("procedure handle {0} does not refer to a registered procedure")]
    ProcedureHandleInvalid(ProcedureId),

    #[error("procedure ids exhausted")]
    IdExhausted,
}

pub type CatalogResult<T> = std::result::Result<T, CatalogError>;
