//! Error categories and the specialization relation between them.
//!
//! Built-in categories are a flat set describing failures produced by the
//! primitives in [`crate::builtins`]. Domain categories are declared by the
//! application and may specialize any other category, built-in or domain:
//!
//! ```rust
//! use guarded_run::Category;
//!
//! let validation = Category::domain("ValidationError");
//! let minor = validation.specialize("MinorValidationError");
//!
//! assert!(minor.is_a(&validation));
//! assert!(!validation.is_a(&minor));
//! ```

use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

/// Categories for failures raised by the built-in fallible primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum BuiltinCategory {
    /// Division by zero, overflow.
    Arithmetic,
    /// A value could not be converted (e.g. parsing `"abc"` as an integer).
    Conversion,
    /// Positional access outside a sequence's bounds.
    Bounds,
    /// Keyed access for a key that is not present.
    Lookup,
    /// Filesystem or stream failures.
    Io,
    /// A panic captured while running guarded code.
    Panic,
}

impl BuiltinCategory {
    pub fn name(self) -> &'static str {
        match self {
            Self::Arithmetic => "Arithmetic",
            Self::Conversion => "Conversion",
            Self::Bounds => "Bounds",
            Self::Lookup => "Lookup",
            Self::Io => "Io",
            Self::Panic => "Panic",
        }
    }
}

/// An application-defined category with an optional parent.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct DomainCategory {
    name: String,
    parent: Option<Category>,
}

/// Classification tag carried by every [`Failure`](crate::Failure).
///
/// Two domain categories are equal when their names and ancestry are equal,
/// so re-declaring `ValidationError` in another module yields the same
/// category.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Builtin(BuiltinCategory),
    Domain(Arc<DomainCategory>),
}

impl Category {
    pub const ARITHMETIC: Category = Category::Builtin(BuiltinCategory::Arithmetic);
    pub const CONVERSION: Category = Category::Builtin(BuiltinCategory::Conversion);
    pub const BOUNDS: Category = Category::Builtin(BuiltinCategory::Bounds);
    pub const LOOKUP: Category = Category::Builtin(BuiltinCategory::Lookup);
    pub const IO: Category = Category::Builtin(BuiltinCategory::Io);
    pub const PANIC: Category = Category::Builtin(BuiltinCategory::Panic);

    /// Declare a root domain category.
    pub fn domain(name: impl Into<String>) -> Self {
        Self::Domain(Arc::new(DomainCategory {
            name: name.into(),
            parent: None,
        }))
    }

    /// Declare a domain category that specializes `self`.
    ///
    /// A handler registered for `self` also catches failures of the returned
    /// category.
    pub fn specialize(&self, name: impl Into<String>) -> Self {
        Self::Domain(Arc::new(DomainCategory {
            name: name.into(),
            parent: Some(self.clone()),
        }))
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Builtin(builtin) => builtin.name(),
            Self::Domain(domain) => &domain.name,
        }
    }

    /// The category this one specializes, if any. Built-ins have no parent.
    pub fn parent(&self) -> Option<&Category> {
        match self {
            Self::Builtin(_) => None,
            Self::Domain(domain) => domain.parent.as_ref(),
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, Self::Builtin(_))
    }

    /// Iterate from `self` up to its root, `self` first.
    pub fn ancestors(&self) -> Ancestors<'_> {
        Ancestors { next: Some(self) }
    }

    /// Whether `self` is `other` or a specialization of it.
    pub fn is_a(&self, other: &Category) -> bool {
        self.ancestors().any(|ancestor| ancestor == other)
    }

    /// Number of specialization steps between `self` and its root.
    pub fn depth(&self) -> usize {
        self.ancestors().count() - 1
    }
}

impl From<BuiltinCategory> for Category {
    fn from(builtin: BuiltinCategory) -> Self {
        Self::Builtin(builtin)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Iterator over a category and its ancestors.
#[derive(Debug, Clone)]
pub struct Ancestors<'a> {
    next: Option<&'a Category>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a Category;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.parent();
        Some(current)
    }
}
