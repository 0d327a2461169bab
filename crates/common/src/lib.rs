//! Types and helpers shared by the book store crates.

pub mod types;
pub mod utils;

/// Reports whether a request field counts as missing.
///
/// Absent fields, JSON `null` and the empty string are all treated as missing.
pub fn is_falsy(value: Option<&str>) -> bool {
    value.map_or(true, str::is_empty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_absent_are_falsy() {
        assert!(is_falsy(None));
        assert!(is_falsy(Some("")));
        assert!(!is_falsy(Some(" ")));
        assert!(!is_falsy(Some("Dune")));
    }
}
