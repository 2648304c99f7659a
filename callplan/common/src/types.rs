/// Identifier of a procedure registered in a procedure catalog.
///
/// Ids are allocated by the catalog in registration order and are never reused while the catalog
/// is alive.
pub type ProcedureId = u32;
