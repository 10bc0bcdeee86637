//! Strict header validation.

use tl_model::{Result, TimelineError};

use crate::aliases::Field;

/// Checks that every required field has at least one alias among `headers`.
///
/// Header cells are trimmed before comparison; the comparison itself is
/// case-sensitive, as alias resolution is.
pub fn validate_headers<S: AsRef<str>>(headers: &[S]) -> Result<()> {
    for field in Field::REQUIRED {
        let present = field
            .aliases()
            .iter()
            .any(|alias| headers.iter().any(|h| h.as_ref().trim() == *alias));
        if !present {
            return Err(TimelineError::MissingHeader {
                field: field.label().to_string(),
                aliases: field.aliases().join(", "),
            });
        }
    }
    Ok(())
}
