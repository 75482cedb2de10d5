//! # Validation Module
//!
//! Input validation for values that cross the UI boundary.
//!
//! ## Usage
//! ```rust
//! use orderdesk_core::validation::{validate_po_reference, validate_search_query};
//!
//! // Trim and bound a search term before hitting the catalog
//! assert_eq!(validate_search_query("  deli ").unwrap(), "deli");
//!
//! // Blank PO references collapse to None
//! assert_eq!(validate_po_reference("   ").unwrap(), None);
//! ```

use crate::error::ValidationError;
use crate::{MAX_PO_REFERENCE_LEN, MAX_SEARCH_QUERY_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a catalog search query.
///
/// ## Rules
/// - Whitespace is trimmed
/// - Empty is allowed (an empty query lists the whole catalog)
/// - At most [`MAX_SEARCH_QUERY_LEN`] characters after trimming
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.len() > MAX_SEARCH_QUERY_LEN {
        return Err(ValidationError::TooLong {
            field: "search query".to_string(),
            max: MAX_SEARCH_QUERY_LEN,
        });
    }

    Ok(query.to_string())
}

/// Validates an optional customer PO reference.
///
/// ## Rules
/// - Whitespace is trimmed
/// - Blank collapses to `None` (the PO field is optional)
/// - At most [`MAX_PO_REFERENCE_LEN`] characters after trimming
pub fn validate_po_reference(po: &str) -> ValidationResult<Option<String>> {
    let po = po.trim();

    if po.is_empty() {
        return Ok(None);
    }

    if po.len() > MAX_PO_REFERENCE_LEN {
        return Err(ValidationError::TooLong {
            field: "customer PO".to_string(),
            max: MAX_PO_REFERENCE_LEN,
        });
    }

    Ok(Some(po.to_string()))
}

// =============================================================================
// Unit Tests
// =============================================================================
