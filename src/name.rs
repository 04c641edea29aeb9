//! Adapter name normalisation.
//!
//! The kernel stores names in fixed, null-terminated fields, so the usable
//! length is one byte short of the field size.

use crate::mgmt::payload::{NAME_FIELD_SIZE, SHORT_NAME_FIELD_SIZE};

/// Longest adapter name, in bytes.
pub const MAX_NAME_LENGTH: usize = 248;
/// Longest adapter short name, in bytes.
pub const MAX_SHORT_NAME_LENGTH: usize = 10;

const _: () = assert!(MAX_NAME_LENGTH < NAME_FIELD_SIZE);
const _: () = assert!(MAX_SHORT_NAME_LENGTH < SHORT_NAME_FIELD_SIZE);

/// Shorten `name` to at most [`MAX_NAME_LENGTH`] bytes.
pub fn truncate_name(name: &str) -> &str {
    truncate_to(name, MAX_NAME_LENGTH)
}

/// Shorten `name` to at most [`MAX_SHORT_NAME_LENGTH`] bytes.
pub fn truncate_short_name(name: &str) -> &str {
    truncate_to(name, MAX_SHORT_NAME_LENGTH)
}

/// Cut at `max` bytes, backing off to a char boundary so the result stays
/// valid UTF-8.
fn truncate_to(name: &str, max: usize) -> &str {
    if name.len() <= max {
        return name;
    }

    let mut end = max;
    while !name.is_char_boundary(end) {
        end -= 1;
    }
    &name[..end]
}
