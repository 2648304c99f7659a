use callplan_catalog::identifier::ObjectIdentifier;
use callplan_catalog::procedure::ProcedureHandle;
use callplan_common::data_type::LogicalType;
use callplan_common::value::ScalarValue;
use indexmap::IndexMap;

use crate::explain::{Summarizable, format_sequence, format_with_children};
use crate::plan::{PlanBase, PlanData, PlanNode};

/// A fully resolved `CALL` of a cataloged procedure.
///
/// The node is built once the procedure has been resolved and every argument has been bound to
/// its parameter type, and it is never modified afterwards. It does not validate what it is
/// given beyond the argument count: identifier and handle are trusted to name the same
/// procedure, and each argument is trusted to match its input type.
#[derive(Debug, Clone)]
pub struct CallProcedure {
    base: PlanBase,
    identifier: ObjectIdentifier,
    procedure: ProcedureHandle,
    /// Bound arguments in their runtime-internal representation.
    args: Vec<ScalarValue>,
    input_types: Vec<LogicalType>,
    output_type: LogicalType,
}

impl CallProcedure {
    /// # Panics
    ///
    /// Panics if `args` and `input_types` differ in length.
    pub fn new(
        identifier: ObjectIdentifier,
        procedure: ProcedureHandle,
        args: Vec<ScalarValue>,
        input_types: Vec<LogicalType>,
        output_type: LogicalType,
    ) -> Self {
        assert_eq!(
            args.len(),
            input_types.len(),
            "bound arguments of {identifier} do not match its input types"
        );
        let base = PlanBase::new(output_type.to_output_schema(), vec![]);
        Self {
            base,
            identifier,
            procedure,
            args,
            input_types,
            output_type,
        }
    }

    #[inline]
    pub fn identifier(&self) -> &ObjectIdentifier {
        &self.identifier
    }

    #[inline]
    pub fn procedure(&self) -> ProcedureHandle {
        self.procedure
    }

    #[inline]
    pub fn args(&self) -> &[ScalarValue] {
        &self.args
    }

    #[inline]
    pub fn input_types(&self) -> &[LogicalType] {
        &self.input_types
    }

    #[inline]
    pub fn output_type(&self) -> &LogicalType {
        &self.output_type
    }
}

impl PlanData for CallProcedure {
    fn base(&self) -> &PlanBase {
        &self.base
    }
}

impl Summarizable for CallProcedure {
    fn as_summary_string(&self) -> String {
        let mut params = IndexMap::with_capacity(4);
        params.insert("procedureIdentifier", self.identifier.as_summary_string());
        params.insert("inputTypes", format_sequence(&self.input_types));
        params.insert("outputTypes", self.output_type.to_string());
        params.insert("arguments", format_sequence(&self.args));
        format_with_children(
            "CALL PROCEDURE",
            &params,
            self.children(),
            PlanNode::as_summary_string,
        )
    }
}
