// Unit Tests for Error Categories
//
// UNIT UNDER TEST: Category
//
// BUSINESS RESPONSIBILITY:
//   - Names built-in and domain failure classes
//   - Models specialization through parent references
//   - Answers "is-a" questions by walking ancestry
//
// TEST COVERAGE:
//   - Built-in categories are flat and unrelated to each other
//   - Domain specialization is reflexive and transitive, never symmetric
//   - Domain categories may specialize built-ins
//   - Structural equality of independently declared categories

use crate::core_types::{BuiltinCategory, Category};
use crate::tests::helpers::{minor_validation_error, validation_error};

#[cfg(test)]
mod category_hierarchy_tests {
    use super::*;

    #[test]
    fn test_builtin_categories_are_flat() {
        // Test verifies built-in categories never match one another

        // Arrange
        let builtins = [
            Category::ARITHMETIC,
            Category::CONVERSION,
            Category::BOUNDS,
            Category::LOOKUP,
            Category::IO,
            Category::PANIC,
        ];

        // Act & Assert
        for (i, a) in builtins.iter().enumerate() {
            assert!(a.parent().is_none(), "{a} should have no parent");
            assert_eq!(a.depth(), 0);
            for (j, b) in builtins.iter().enumerate() {
                assert_eq!(a.is_a(b), i == j, "{a} is_a {b}");
            }
        }
    }

    #[test]
    fn test_specialization_is_caught_by_general_category() {
        // Test verifies a specialized domain category is-a its parent
        // but the parent is not its specialization

        // Arrange
        let general = validation_error();
        let minor = minor_validation_error();

        // Act & Assert
        assert!(minor.is_a(&general));
        assert!(minor.is_a(&minor));
        assert!(!general.is_a(&minor));
        assert_eq!(minor.parent(), Some(&general));
        assert_eq!(minor.depth(), 1);
    }

    #[test]
    fn test_specialization_is_transitive() {
        // Test verifies ancestry walks more than one level

        // Arrange
        let general = validation_error();
        let minor = general.specialize("MinorValidationError");
        let cosmetic = minor.specialize("CosmeticValidationError");

        // Act
        let names: Vec<&str> = cosmetic.ancestors().map(Category::name).collect();

        // Assert
        assert_eq!(
            names,
            vec![
                "CosmeticValidationError",
                "MinorValidationError",
                "ValidationError"
            ]
        );
        assert!(cosmetic.is_a(&general));
        assert_eq!(cosmetic.depth(), 2);
    }

    #[test]
    fn test_domain_category_can_specialize_builtin() {
        // Test verifies custom categories may extend built-in ones

        // Arrange
        let config_io = Category::IO.specialize("ConfigFileMissing");

        // Act & Assert
        assert!(config_io.is_a(&Category::IO));
        assert!(!config_io.is_builtin());
        assert!(!config_io.is_a(&Category::LOOKUP));
    }

    #[test]
    fn test_independently_declared_categories_are_equal() {
        // Test verifies categories compare by name and ancestry, not identity

        // Arrange
        let first = Category::domain("ValidationError").specialize("MinorValidationError");
        let second = minor_validation_error();

        // Act & Assert
        assert_eq!(first, second);
        assert_ne!(validation_error(), Category::domain("OtherError"));
        assert_ne!(
            Category::domain("X").specialize("Y"),
            Category::domain("Z").specialize("Y"),
            "same name under different parents is a different category"
        );
    }

    #[test]
    fn test_display_and_serialize_use_name() {
        // Test verifies categories render as their bare name

        // Arrange
        let minor = minor_validation_error();

        // Act
        let display = minor.to_string();
        let json = serde_json::to_value(&minor).expect("category serializes");

        // Assert
        assert_eq!(display, "MinorValidationError");
        assert_eq!(json, serde_json::json!("MinorValidationError"));
        assert_eq!(
            Category::from(BuiltinCategory::Bounds).to_string(),
            "Bounds"
        );
    }
}
