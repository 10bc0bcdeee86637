//! Configuration options for row normalization.

use serde::{Deserialize, Serialize};

/// How the header row is checked before any data row is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SchemaMode {
    /// Any header layout; unresolved fields fall back to defaults.
    #[default]
    Flexible,
    /// Building, name, start and end year must each have an alias column.
    Strict,
}

/// What happens to a row with no resident name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MissingNamePolicy {
    /// Keep the row under the name "Unknown Resident".
    #[default]
    Substitute,
    /// Drop the row and report it.
    Reject,
}

/// Options controlling normalization behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizeOptions {
    pub schema: SchemaMode,
    pub missing_name: MissingNamePolicy,
}

impl NormalizeOptions {
    /// Options for a known fixed schema: headers are validated up front and
    /// nameless rows are rejected.
    pub fn strict() -> Self {
        Self {
            schema: SchemaMode::Strict,
            missing_name: MissingNamePolicy::Reject,
        }
    }

    #[must_use]
    pub fn with_schema(mut self, schema: SchemaMode) -> Self {
        self.schema = schema;
        self
    }

    #[must_use]
    pub fn with_missing_name(mut self, policy: MissingNamePolicy) -> Self {
        self.missing_name = policy;
        self
    }
}
