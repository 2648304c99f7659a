use std::fmt::Debug;
use std::sync::Arc;

use callplan_common::data_type::LogicalType;

pub type ProcedureRef = Arc<dyn ProcedureProvider>;

/// The declared signature and metadata of a cataloged procedure.
pub trait ProcedureProvider: Debug + Send + Sync {
    /// Returns the description of the procedure.
    fn description(&self) -> &str;

    /// Returns the declared parameter types of the procedure, in call order.
    fn parameters(&self) -> &[LogicalType];

    /// Returns the declared return type of the procedure.
    fn output_type(&self) -> &LogicalType;
}
