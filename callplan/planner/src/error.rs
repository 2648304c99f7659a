use callplan_catalog::error::CatalogError;
use callplan_common::data_type::LogicalType;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum PlanError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Catalog(#[from] CatalogError),

    #[error("procedure {procedure} expects {expected} argument(s), got {actual}")]
    ArityMismatch {
        procedure: String,
        expected: usize,
        actual: usize,
    },

    #[error("argument {index} has type {actual}, expected {expected}")]
    ArgumentTypeMismatch {
        index: usize,
        expected: LogicalType,
        actual: LogicalType,
    },
}

pub type PlanResult<T> = std::result::Result<T, PlanError>;
