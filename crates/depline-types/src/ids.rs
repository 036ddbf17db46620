//! Stable codes attached to rejected lines and tool-level errors.
//!
//! Codes are short snake_case discriminators; they appear in reports and annotations.

// Rejections
pub const CODE_MISSING_FIELD: &str = "missing_field";
pub const CODE_INVALID_COORDINATE: &str = "invalid_coordinate";
pub const CODE_AMBIGUOUS_LAYOUT: &str = "ambiguous_layout";

// Tool-level
pub const CODE_RUNTIME_ERROR: &str = "runtime_error";

/// Every rejection code, in documentation order.
pub const REJECTION_CODES: &[&str] = &[
    CODE_MISSING_FIELD,
    CODE_INVALID_COORDINATE,
    CODE_AMBIGUOUS_LAYOUT,
];
