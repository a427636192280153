//! Generic LIFO stack with strict empty-state errors

use crate::error::{Error, Result};

/// A last-in-first-out stack of values
///
/// Backed by a `Vec<T>` whose end is the top. `pop` and `peek` on an empty
/// stack fail with [`Error::EmptyStack`] rather than returning an option -
/// callers either check [`Stack::is_empty`] first or handle the error.
///
/// Not synchronized; callers sharing a stack across threads must provide
/// their own mutual exclusion.
#[derive(Debug, Clone)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Create a new empty stack
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Push an item onto the top of the stack
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove and return the top item (the most recent push)
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyStack`] if the stack has no elements.
    pub fn pop(&mut self) -> Result<T> {
        self.items.pop().ok_or(Error::EmptyStack)
    }

    /// Return the top item without removing it
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyStack`] if the stack has no elements.
    pub fn peek(&self) -> Result<&T> {
        self.items.last().ok_or(Error::EmptyStack)
    }

    /// Check if the stack has no elements
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the number of elements on the stack
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Remove all elements
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}
