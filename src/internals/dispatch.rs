//! Recovery handler dispatch
//!
//! A [`HandlerTable`] is an ordered list of `(Catch, recovery)` entries.
//! Dispatch scans it in declaration order and runs the first entry whose
//! [`Catch`] matches the failure; later entries are never consulted.

use crate::core_types::Category;
use crate::error::{Failure, Outcome};
use crate::internals::executor::attempt;
use crate::logging::log_debug;

use std::fmt;

/// Which failures a handler entry accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Catch {
    /// The category itself and every specialization of it.
    Category(Category),
    /// Any of the listed categories (and their specializations).
    AnyOf(Vec<Category>),
    /// Every failure.
    All,
}

impl Catch {
    pub fn matches(&self, failure: &Failure) -> bool {
        match self {
            Self::Category(category) => failure.is(category),
            Self::AnyOf(categories) => categories.iter().any(|category| failure.is(category)),
            Self::All => true,
        }
    }
}

impl From<Category> for Catch {
    fn from(category: Category) -> Self {
        Self::Category(category)
    }
}

impl fmt::Display for Catch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Category(category) => write!(f, "{category}"),
            Self::AnyOf(categories) => {
                let names: Vec<&str> = categories.iter().map(Category::name).collect();
                write!(f, "({})", names.join(", "))
            }
            Self::All => f.write_str("*"),
        }
    }
}

type Recovery<'a, T> = Box<dyn FnOnce(Failure) -> Outcome<T> + 'a>;

/// Result of offering a failure to a handler table.
#[derive(Debug)]
pub enum Dispatch<T> {
    /// Entry `index` matched; `outcome` is what its recovery action produced.
    Handled { index: usize, outcome: Outcome<T> },
    /// Nothing matched; the original failure, unchanged.
    Unhandled(Failure),
}

/// Ordered table of recovery handlers.
pub struct HandlerTable<'a, T> {
    entries: Vec<(Catch, Recovery<'a, T>)>,
}

impl<'a, T> Default for HandlerTable<'a, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> HandlerTable<'a, T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an entry, builder style.
    pub fn on(
        mut self,
        catch: impl Into<Catch>,
        recovery: impl FnOnce(Failure) -> Outcome<T> + 'a,
    ) -> Self {
        self.push(catch, recovery);
        self
    }

    pub fn push(
        &mut self,
        catch: impl Into<Catch>,
        recovery: impl FnOnce(Failure) -> Outcome<T> + 'a,
    ) {
        self.entries.push((catch.into(), Box::new(recovery)));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the entry that would handle `failure`.
    pub fn position(&self, failure: &Failure) -> Option<usize> {
        self.entries
            .iter()
            .position(|(catch, _)| catch.matches(failure))
    }

    /// Run the first matching entry's recovery action.
    ///
    /// Panics inside the recovery action propagate to the caller.
    pub fn dispatch(self, failure: Failure) -> Dispatch<T> {
        self.dispatch_with(failure, false)
    }

    pub(crate) fn dispatch_with(mut self, failure: Failure, capture_panics: bool) -> Dispatch<T> {
        let Some(index) = self.position(&failure) else {
            log_debug!(
                category = %failure.category(),
                handlers = self.entries.len(),
                "No handler matched failure"
            );
            return Dispatch::Unhandled(failure);
        };

        let (catch, recovery) = self.entries.swap_remove(index);
        log_debug!(
            category = %failure.category(),
            handler_index = index,
            catch = %catch,
            "Dispatching failure to handler"
        );

        let outcome = attempt(move || recovery(failure), capture_panics);
        Dispatch::Handled { index, outcome }
    }
}

impl<'a, T> fmt::Debug for HandlerTable<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|(catch, _)| catch))
            .finish()
    }
}
