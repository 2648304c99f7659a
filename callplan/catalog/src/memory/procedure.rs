use callplan_common::data_type::LogicalType;

use crate::provider::ProcedureProvider;

/// An in-memory procedure signature.
#[derive(Debug, Clone)]
pub struct ProcedureDefinition {
    description: String,
    parameters: Vec<LogicalType>,
    output_type: LogicalType,
}

impl ProcedureDefinition {
    pub fn new(
        description: impl Into<String>,
        parameters: Vec<LogicalType>,
        output_type: LogicalType,
    ) -> Self {
        Self {
            description: description.into(),
            parameters,
            output_type,
        }
    }
}

impl ProcedureProvider for ProcedureDefinition {
    #[inline]
    fn description(&self) -> &str {
        &self.description
    }

    #[inline]
    fn parameters(&self) -> &[LogicalType] {
        &self.parameters
    }

    #[inline]
    fn output_type(&self) -> &LogicalType {
        &self.output_type
    }
}
