// Unit Tests for Fallible Primitives
//
// UNIT UNDER TEST: builtins (checked_div, parse_int, element_at, lookup, read_to_string)
//
// BUSINESS RESPONSIBILITY:
//   - Perform small operations that either succeed or raise one built-in category
//
// TEST COVERAGE:
//   - Success values pass through
//   - Each primitive raises its own category on failure, with a useful payload

use crate::builtins::{checked_div, element_at, lookup, parse_int, read_to_string};
use crate::core_types::Category;

use std::collections::HashMap;

#[cfg(test)]
mod builtin_primitive_tests {
    use super::*;

    #[test]
    fn test_checked_div() {
        assert_eq!(checked_div(10, 2), Ok(5));

        let zero = checked_div(10, 0).unwrap_err();
        assert_eq!(zero.category(), &Category::ARITHMETIC);
        assert_eq!(zero.message(), "division by zero");

        let overflow = checked_div(i64::MIN, -1).unwrap_err();
        assert_eq!(overflow.category(), &Category::ARITHMETIC);
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int("123"), Ok(123));
        assert_eq!(parse_int(" -7 "), Ok(-7));

        let failure = parse_int("abc").unwrap_err();
        assert_eq!(failure.category(), &Category::CONVERSION);
        assert_eq!(failure.message(), "invalid literal for integer: 'abc'");
    }

    #[test]
    fn test_element_at() {
        // Arrange
        let items = [1, 2, 3];

        // Act
        let found = element_at(&items, 2);
        let missing = element_at(&items, 5).unwrap_err();

        // Assert
        assert_eq!(found, Ok(3));
        assert_eq!(missing.category(), &Category::BOUNDS);
        assert_eq!(
            missing.payload(),
            Some(&serde_json::json!({ "index": 5, "len": 3 }))
        );
    }

    #[test]
    fn test_lookup() {
        // Arrange
        let mut ages = HashMap::new();
        ages.insert("alice".to_string(), 30);

        // Act
        let found = lookup(&ages, "alice");
        let missing = lookup(&ages, "bob").unwrap_err();

        // Assert
        assert_eq!(found, Ok(30));
        assert_eq!(missing.category(), &Category::LOOKUP);
        assert_eq!(missing.message(), "key not found: \"bob\"");
    }

    #[test]
    fn test_read_to_string_missing_file() {
        // Act
        let failure = read_to_string("/nonexistent/guarded-run/nonexistent.txt").unwrap_err();

        // Assert
        assert_eq!(failure.category(), &Category::IO);
        assert_eq!(
            failure.payload().and_then(|payload| payload.get("kind")),
            Some(&serde_json::json!("NotFound"))
        );
        assert_eq!(
            failure.payload().and_then(|payload| payload.get("path")),
            Some(&serde_json::json!("/nonexistent/guarded-run/nonexistent.txt"))
        );
        assert!(failure.message().starts_with("/nonexistent/guarded-run/nonexistent.txt: "));
    }

    #[test]
    fn test_read_to_string_existing_file() {
        // Arrange
        let manifest = concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml");

        // Act
        let contents = read_to_string(manifest).expect("manifest is readable");

        // Assert
        assert!(contents.contains("name = \"guarded-run\""));
    }
}
