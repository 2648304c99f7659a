use std::fmt;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// A fully-qualified catalog object name: `catalog.database.object`.
///
/// Identifiers are compared part by part and are case sensitive. No normalization happens here;
/// callers are expected to pass already-resolved names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectIdentifier {
    catalog: SmolStr,
    database: SmolStr,
    object: SmolStr,
}

impl ObjectIdentifier {
    #[inline]
    pub fn new(
        catalog: impl Into<SmolStr>,
        database: impl Into<SmolStr>,
        object: impl Into<SmolStr>,
    ) -> Self {
        Self {
            catalog: catalog.into(),
            database: database.into(),
            object: object.into(),
        }
    }

    #[inline]
    pub fn catalog(&self) -> &str {
        &self.catalog
    }

    #[inline]
    pub fn database(&self) -> &str {
        &self.database
    }

    #[inline]
    pub fn object(&self) -> &str {
        &self.object
    }

    /// Returns the plain dotted form used in plan summaries, e.g. `cat.db.myproc`.
    pub fn as_summary_string(&self) -> String {
        format!("{}.{}.{}", self.catalog, self.database, self.object)
    }

    /// Returns a form that survives a round trip through a query string: every part is quoted
    /// with backticks, and backticks inside a part are doubled.
    pub fn as_serializable_string(&self) -> String {
        format!(
            "{}.{}.{}",
            quote(&self.catalog),
            quote(&self.database),
            quote(&self.object)
        )
    }
}

fn quote(part: &str) -> String {
    format!("`{}`", part.replace('`', "``"))
}

impl fmt::Display for ObjectIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.catalog, self.database, self.object)
    }
}
