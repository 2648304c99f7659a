pub mod call;
pub mod explain;

use std::sync::Arc;

use callplan_common::data_type::DataSchemaRef;

use crate::explain::Summarizable;
use crate::plan::call::CallProcedure;
use crate::plan::explain::Explain;

#[derive(Debug, Clone)]
pub struct PlanBase {
    schema: Option<DataSchemaRef>,
    children: Vec<PlanNode>,
}

impl PlanBase {
    pub fn new(schema: Option<DataSchemaRef>, children: Vec<PlanNode>) -> Self {
        Self { schema, children }
    }

    pub fn schema(&self) -> Option<&DataSchemaRef> {
        self.schema.as_ref()
    }

    pub fn children(&self) -> &[PlanNode] {
        &self.children
    }
}

pub trait PlanData: Summarizable {
    fn base(&self) -> &PlanBase;

    fn schema(&self) -> Option<&DataSchemaRef> {
        self.base().schema()
    }

    fn children(&self) -> &[PlanNode] {
        self.base().children()
    }
}

#[derive(Debug, Clone)]
pub enum PlanNode {
    LogicalCall(Arc<CallProcedure>),
    Explain(Arc<Explain>),
}

impl PlanData for PlanNode {
    fn base(&self) -> &PlanBase {
        match self {
            PlanNode::LogicalCall(node) => node.base(),
            PlanNode::Explain(node) => node.base(),
        }
    }
}

impl Summarizable for PlanNode {
    fn as_summary_string(&self) -> String {
        match self {
            PlanNode::LogicalCall(node) => node.as_summary_string(),
            PlanNode::Explain(node) => node.as_summary_string(),
        }
    }
}
