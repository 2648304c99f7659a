use std::sync::Arc;

use callplan_common::data_type::{DataField, DataSchema, LogicalType};
use indexmap::IndexMap;

use crate::explain::{Summarizable, format_with_children};
use crate::plan::{PlanBase, PlanData, PlanNode};

pub const EXPLAIN_FIELD_NAME: &str = "plan";

/// Wraps a plan whose summary is returned instead of executing it.
#[derive(Debug, Clone)]
pub struct Explain {
    base: PlanBase,
}

impl Explain {
    pub fn new(child: PlanNode) -> Self {
        let schema = Some(Arc::new(DataSchema::new(vec![DataField::new(
            EXPLAIN_FIELD_NAME.to_string(),
            LogicalType::String,
            false,
        )])));
        let base = PlanBase::new(schema, vec![child]);
        Self { base }
    }
}

impl PlanData for Explain {
    fn base(&self) -> &PlanBase {
        &self.base
    }
}

impl Summarizable for Explain {
    fn as_summary_string(&self) -> String {
        format_with_children(
            "EXPLAIN",
            &IndexMap::new(),
            self.children(),
            PlanNode::as_summary_string,
        )
    }
}
