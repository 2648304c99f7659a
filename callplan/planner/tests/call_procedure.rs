use std::sync::Arc;
use std::thread;

use callplan_catalog::error::CatalogError;
use callplan_catalog::identifier::ObjectIdentifier;
use callplan_catalog::memory::procedure::ProcedureDefinition;
use callplan_catalog::procedure::ProcedureCatalog;
use callplan_common::data_type::LogicalType;
use callplan_common::value::ScalarValue;
use callplan_planner::error::PlanError;
use callplan_planner::explain::Summarizable;
use callplan_planner::logical_planner::plan_call;
use callplan_planner::plan::explain::Explain;
use callplan_planner::plan::{PlanData, PlanNode};
use insta::assert_snapshot;

fn catalog() -> ProcedureCatalog {
    let mut catalog = ProcedureCatalog::new();
    catalog
        .register(
            ObjectIdentifier::new("cat", "db", "myproc"),
            Arc::new(ProcedureDefinition::new(
                "Checks whether the given key is present.",
                vec![LogicalType::Int32, LogicalType::String],
                LogicalType::Boolean,
            )),
        )
        .unwrap();
    catalog
        .register(
            ObjectIdentifier::new("cat", "db", "noop"),
            Arc::new(ProcedureDefinition::new(
                "Does nothing.",
                vec![],
                LogicalType::String,
            )),
        )
        .unwrap();
    catalog
}

fn myproc(catalog: &ProcedureCatalog) -> PlanNode {
    plan_call(
        catalog,
        &ObjectIdentifier::new("cat", "db", "myproc"),
        vec![42i32.into(), "x".into()],
    )
    .unwrap()
}

#[test]
fn test_call_summary() {
    let catalog = catalog();
    let node = myproc(&catalog);
    assert_snapshot!(
        node.as_summary_string(),
        @"CALL PROCEDURE: (procedureIdentifier: cat.db.myproc, inputTypes: [INT, STRING], outputTypes: BOOLEAN, arguments: [42, x])"
    );
    assert!(node.children().is_empty());
}

#[test]
fn test_zero_arity_summary() {
    let catalog = catalog();
    let node = plan_call(&catalog, &ObjectIdentifier::new("cat", "db", "noop"), vec![]).unwrap();
    assert_snapshot!(
        node.as_summary_string(),
        @"CALL PROCEDURE: (procedureIdentifier: cat.db.noop, inputTypes: [], outputTypes: STRING, arguments: [])"
    );
}

#[test]
fn test_null_arguments_summary() {
    let catalog = catalog();
    let node = plan_call(
        &catalog,
        &ObjectIdentifier::new("cat", "db", "myproc"),
        vec![ScalarValue::Null, ScalarValue::String(None)],
    )
    .unwrap();
    assert_snapshot!(
        node.as_summary_string(),
        @"CALL PROCEDURE: (procedureIdentifier: cat.db.myproc, inputTypes: [INT, STRING], outputTypes: BOOLEAN, arguments: [NULL, NULL])"
    );
}

#[test]
fn test_summary_is_deterministic() {
    let catalog = catalog();
    let node = myproc(&catalog);
    assert_eq!(node.as_summary_string(), node.as_summary_string());
    assert_eq!(
        node.as_summary_string(),
        myproc(&catalog).as_summary_string()
    );
}

#[test]
fn test_concurrent_reads() {
    let catalog = catalog();
    let node = myproc(&catalog);
    let PlanNode::LogicalCall(call) = &node else {
        panic!("expected a call node");
    };
    let expected = node.as_summary_string();

    thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                for _ in 0..100 {
                    assert_eq!(node.as_summary_string(), expected);
                    assert_eq!(call.identifier().object(), "myproc");
                    assert_eq!(call.args().len(), call.input_types().len());
                    assert_eq!(call.output_type(), &LogicalType::Boolean);
                }
            });
        }
    });
}

#[test]
fn test_call_references_catalog_entry() {
    let catalog = catalog();
    let node = myproc(&catalog);
    let PlanNode::LogicalCall(call) = &node else {
        panic!("expected a call node");
    };
    assert_eq!(catalog.identifier(call.procedure()).unwrap(), call.identifier());
    let procedure = catalog.get(call.procedure()).unwrap();
    assert_eq!(procedure.parameters(), call.input_types());
    assert_eq!(procedure.output_type(), call.output_type());
}

#[test]
fn test_explain_call() {
    let catalog = catalog();
    let explain = PlanNode::Explain(Arc::new(Explain::new(myproc(&catalog))));
    assert_eq!(
        explain.as_summary_string(),
        "EXPLAIN:\n    CALL PROCEDURE: (procedureIdentifier: cat.db.myproc, inputTypes: [INT, STRING], outputTypes: BOOLEAN, arguments: [42, x])"
    );
    assert_eq!(explain.children().len(), 1);
    assert_eq!(explain.schema().unwrap().fields()[0].name(), "plan");
}

#[test]
fn test_plan_call_unknown_procedure() {
    let catalog = catalog();
    let err = plan_call(&catalog, &ObjectIdentifier::new("cat", "db", "nope"), vec![]).unwrap_err();
    assert!(matches!(
        err,
        PlanError::Catalog(CatalogError::ProcedureNotExists(ref name)) if name == "cat.db.nope"
    ));
}

#[test]
fn test_plan_call_arity_mismatch() {
    let catalog = catalog();
    let err = plan_call(
        &catalog,
        &ObjectIdentifier::new("cat", "db", "myproc"),
        vec![42i32.into()],
    )
    .unwrap_err();
    assert_snapshot!(err.to_string(), @"procedure cat.db.myproc expects 2 argument(s), got 1");
}

#[test]
fn test_plan_call_type_mismatch() {
    let catalog = catalog();
    let err = plan_call(
        &catalog,
        &ObjectIdentifier::new("cat", "db", "myproc"),
        vec![42i64.into(), "x".into()],
    )
    .unwrap_err();
    assert_snapshot!(err.to_string(), @"argument 0 has type BIGINT, expected INT");
}
