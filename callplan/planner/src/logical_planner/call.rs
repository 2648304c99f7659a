use std::sync::Arc;

use callplan_catalog::identifier::ObjectIdentifier;
use callplan_catalog::procedure::ProcedureCatalog;
use callplan_common::data_type::LogicalType;
use callplan_common::value::ScalarValue;
use tracing::debug;

use crate::error::{PlanError, PlanResult};
use crate::plan::PlanNode;
use crate::plan::call::CallProcedure;

/// Plans `CALL identifier(args...)` against `catalog`.
///
/// `args` must already be bound to the procedure's parameter types; only their count and types
/// are checked here. Untyped nulls are accepted for any parameter.
pub fn plan_call(
    catalog: &ProcedureCatalog,
    identifier: &ObjectIdentifier,
    args: Vec<ScalarValue>,
) -> PlanResult<PlanNode> {
    let handle = catalog.resolve(identifier)?;
    let procedure = catalog.get(handle)?;
    let parameters = procedure.parameters();
    if args.len() != parameters.len() {
        return Err(PlanError::ArityMismatch {
            procedure: identifier.to_string(),
            expected: parameters.len(),
            actual: args.len(),
        });
    }
    for (index, (arg, expected)) in args.iter().zip(parameters).enumerate() {
        let actual = arg.logical_type();
        if actual != LogicalType::Null && &actual != expected {
            return Err(PlanError::ArgumentTypeMismatch {
                index,
                expected: expected.clone(),
                actual,
            });
        }
    }
    debug!(procedure = %identifier, arity = args.len(), "plan procedure call");
    let call = CallProcedure::new(
        identifier.clone(),
        handle,
        args,
        parameters.to_vec(),
        procedure.output_type().clone(),
    );
    Ok(PlanNode::LogicalCall(Arc::new(call)))
}
