//! # String Collections
//!
//! Checkbox groups bound to a list or a set share one model: "which option
//! values are selected". [`StringCollection`] is the minimal capability both
//! representations offer, so [`add`], [`remove`] and [`has`] work the same on
//! an ordered `Vec<String>` (unique entries, insertion order kept) and on a
//! `HashSet`/`BTreeSet`.
//!
//! All helpers mutate in place and hand the same collection back, which keeps
//! call sites chainable:
//!
//! ```
//! use inputkit::collections::{add, remove};
//!
//! let mut selected = vec!["red".to_string()];
//! add("blue", &mut selected);
//! remove("red", &mut selected);
//! assert_eq!(selected, vec!["blue"]);
//! ```

use std::collections::{BTreeSet, HashSet};

/// Membership operations over a group of selected string values.
pub trait StringCollection {
    /// Whether `value` is a member.
    fn has_value(&self, value: &str) -> bool;

    /// Insert `value`. Callers guarantee it is not already present.
    fn insert_value(&mut self, value: String);

    /// Remove `value`, returning whether it was present.
    fn remove_value(&mut self, value: &str) -> bool;
}

impl StringCollection for Vec<String> {
    fn has_value(&self, value: &str) -> bool {
        self.iter().any(|v| v == value)
    }

    fn insert_value(&mut self, value: String) {
        self.push(value);
    }

    fn remove_value(&mut self, value: &str) -> bool {
        match self.iter().position(|v| v == value) {
            Some(index) => {
                self.remove(index);
                true
            }
            None => false,
        }
    }
}

impl StringCollection for HashSet<String> {
    fn has_value(&self, value: &str) -> bool {
        self.contains(value)
    }

    fn insert_value(&mut self, value: String) {
        self.insert(value);
    }

    fn remove_value(&mut self, value: &str) -> bool {
        self.remove(value)
    }
}

impl StringCollection for BTreeSet<String> {
    fn has_value(&self, value: &str) -> bool {
        self.contains(value)
    }

    fn insert_value(&mut self, value: String) {
        self.insert(value);
    }

    fn remove_value(&mut self, value: &str) -> bool {
        self.remove(value)
    }
}

/// Add `value` unless it is empty or already present.
pub fn add<'c, C>(value: &str, collection: &'c mut C) -> &'c mut C
where
    C: StringCollection + ?Sized,
{
    if !value.is_empty() && !collection.has_value(value) {
        collection.insert_value(value.to_string());
    }
    collection
}

/// Remove `value` if present.
pub fn remove<'c, C>(value: &str, collection: &'c mut C) -> &'c mut C
where
    C: StringCollection + ?Sized,
{
    collection.remove_value(value);
    collection
}

pub fn has<C>(value: &str, collection: &C) -> bool
where
    C: StringCollection + ?Sized,
{
    collection.has_value(value)
}
