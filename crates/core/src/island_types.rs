//! Well-known island type names.
//!
//! These must match the CHECK constraint in the islands migration.

pub const ISLAND_TYPE_RESORT: &str = "resort";
pub const ISLAND_TYPE_INHABITED: &str = "inhabited";
pub const ISLAND_TYPE_UNINHABITED: &str = "uninhabited";

/// All valid island type names, in display order.
pub const ISLAND_TYPES: [&str; 3] = [
    ISLAND_TYPE_RESORT,
    ISLAND_TYPE_INHABITED,
    ISLAND_TYPE_UNINHABITED,
];

/// Returns `true` when `value` names a known island type.
pub fn is_valid_island_type(value: &str) -> bool {
    ISLAND_TYPES.contains(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_types_are_valid() {
        assert!(is_valid_island_type("resort"));
        assert!(is_valid_island_type("inhabited"));
        assert!(is_valid_island_type("uninhabited"));
    }

    #[test]
    fn unknown_type_is_rejected() {
        assert!(!is_valid_island_type("sandbank"));
        assert!(!is_valid_island_type("Resort"));
        assert!(!is_valid_island_type(""));
    }
}
