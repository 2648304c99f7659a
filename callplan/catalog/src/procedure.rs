use std::fmt;

use callplan_common::types::ProcedureId;
use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

use crate::error::{CatalogError, CatalogResult};
use crate::identifier::ObjectIdentifier;
use crate::provider::ProcedureRef;

/// A non-owning reference to a procedure stored in a [`ProcedureCatalog`].
///
/// The handle only carries the procedure's id. The definition itself stays owned by the catalog
/// and must be looked up through [`ProcedureCatalog::get`], which fails once the procedure has
/// been removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ProcedureHandle(ProcedureId);

impl ProcedureHandle {
    #[inline]
    pub fn id(&self) -> ProcedureId {
        self.0
    }
}

impl fmt::Display for ProcedureHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug)]
struct ProcedureEntry {
    identifier: ObjectIdentifier,
    procedure: ProcedureRef,
}

/// In-memory storage of procedures, keyed by their fully-qualified identifiers.
///
/// Iteration follows registration order.
#[derive(Debug, Default)]
pub struct ProcedureCatalog {
    next_id: ProcedureId,
    names: IndexMap<ObjectIdentifier, ProcedureId>,
    procedures: IndexMap<ProcedureId, ProcedureEntry>,
}

impl ProcedureCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `procedure` under `identifier` and returns a handle to it.
    pub fn register(
        &mut self,
        identifier: ObjectIdentifier,
        procedure: ProcedureRef,
    ) -> CatalogResult<ProcedureHandle> {
        if self.names.contains_key(&identifier) {
            return Err(CatalogError::ProcedureAlreadyExists(identifier.to_string()));
        }
        let id = self.next_id;
        self.next_id = id.checked_add(1).ok_or(CatalogError::IdExhausted)?;
        debug!(procedure = %identifier, id, "register procedure");
        self.names.insert(identifier.clone(), id);
        self.procedures.insert(
            id,
            ProcedureEntry {
                identifier,
                procedure,
            },
        );
        Ok(ProcedureHandle(id))
    }

    /// Looks up the handle of the procedure registered under `identifier`.
    pub fn resolve(&self, identifier: &ObjectIdentifier) -> CatalogResult<ProcedureHandle> {
        self.names
            .get(identifier)
            .copied()
            .map(ProcedureHandle)
            .ok_or_else(|| CatalogError::ProcedureNotExists(identifier.to_string()))
    }

    /// Returns the procedure definition referenced by `handle`.
    pub fn get(&self, handle: ProcedureHandle) -> CatalogResult<&ProcedureRef> {
        self.procedures
            .get(&handle.0)
            .map(|entry| &entry.procedure)
            .ok_or(CatalogError::ProcedureHandleInvalid(handle.0))
    }

    /// Returns the identifier the procedure referenced by `handle` was registered under.
    pub fn identifier(&self, handle: ProcedureHandle) -> CatalogResult<&ObjectIdentifier> {
        self.procedures
            .get(&handle.0)
            .map(|entry| &entry.identifier)
            .ok_or(CatalogError::ProcedureHandleInvalid(handle.0))
    }

    /// Removes the procedure registered under `identifier`. Handles to it become invalid.
    pub fn remove(&mut self, identifier: &ObjectIdentifier) -> CatalogResult<ProcedureRef> {
        let id = self
            .names
            .shift_remove(identifier)
            .ok_or_else(|| CatalogError::ProcedureNotExists(identifier.to_string()))?;
        debug!(procedure = %identifier, id, "remove procedure");
        self.procedures
            .shift_remove(&id)
            .map(|entry| entry.procedure)
            .ok_or(CatalogError::ProcedureHandleInvalid(id))
    }

    pub fn procedures(&self) -> impl Iterator<Item = (&ObjectIdentifier, ProcedureHandle)> {
        self.procedures
            .iter()
            .map(|(id, entry)| (&entry.identifier, ProcedureHandle(*id)))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.procedures.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.procedures.is_empty()
    }
}
