//
// minicsp-rs is free software: you can redistribute it and/or modify
// it under the terms of the GNU Lesser General Public License  v3
// as published by the Free Software Foundation.
//
// minicsp-rs is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY.
// See the GNU Lesser General Public License  for more details.
//
// You should have received a copy of the GNU Lesser General Public License
// along with minicsp-rs. If not, see http://www.gnu.org/licenses/lgpl-3.0.en.html
//
// Copyright (c)  2022 by X. Gillard
//

//! This module provides the definition and implementation of the domain of a
//! variable: the ordered set of values this variable may still take.

use rustc_hash::FxHashSet;

use crate::Value;

/// The ordered sequence of distinct candidate values for one variable.
///
/// A domain may become empty. This is how the absence of a solution gets
/// signalled for that variable. Once it has been handed over to a network,
/// a domain is only ever modified through the network's remove and restore
/// operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Domain<V> {
    /// The values in their order of appearance
    values: Vec<V>,
}

impl<V: Value> Domain<V> {
    /// Creates a domain holding the given values. Duplicates are dropped (only
    /// the first occurrence of each value is kept).
    pub fn new(values: impl IntoIterator<Item = V>) -> Self {
        let mut seen = FxHashSet::default();
        let values = values
            .into_iter()
            .filter(|v| seen.insert(v.clone()))
            .collect();
        Self { values }
    }
    /// Creates a domain which has no value at all
    pub fn empty() -> Self {
        Self { values: vec![] }
    }
    /// Returns the number of values in the domain
    pub fn len(&self) -> usize {
        self.values.len()
    }
    /// Returns true iff there is no value left in the domain
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
    /// Returns true iff the domain contains the specified `value`
    pub fn contains(&self, value: &V) -> bool {
        self.values.contains(value)
    }
    /// Returns the position of the value in the domain (if it exists)
    pub fn position(&self, value: &V) -> Option<usize> {
        self.values.iter().position(|v| v == value)
    }
    /// Returns the only value of the domain when there is exactly one
    pub fn single(&self) -> Option<&V> {
        match self.values.as_slice() {
            [v] => Some(v),
            _ => None,
        }
    }
    /// Iterates over the values in order
    pub fn iter(&self) -> std::slice::Iter<'_, V> {
        self.values.iter()
    }
    /// Returns the values in order
    pub fn values(&self) -> &[V] {
        &self.values
    }

    /// Removes the value and returns the position it used to occupy
    pub(crate) fn remove(&mut self, value: &V) -> Option<usize> {
        let pos = self.position(value)?;
        self.values.remove(pos);
        Some(pos)
    }
    /// Puts the value back at the given position (or at the end when the
    /// domain got shorter than that). Nothing happens when the value is
    /// already present.
    pub(crate) fn insert_at(&mut self, position: usize, value: V) -> bool {
        if self.contains(&value) {
            false
        } else {
            let position = position.min(self.values.len());
            self.values.insert(position, value);
            true
        }
    }
}

impl<V: Value> Default for Domain<V> {
    fn default() -> Self {
        Self::empty()
    }
}
impl<V: Value> FromIterator<V> for Domain<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self::new(iter)
    }
}
impl<V: Value> From<Vec<V>> for Domain<V> {
    fn from(values: Vec<V>) -> Self {
        Self::new(values)
    }
}
impl<V: Value, const N: usize> From<[V; N]> for Domain<V> {
    fn from(values: [V; N]) -> Self {
        Self::new(values)
    }
}
impl<'a, V: Value> IntoIterator for &'a Domain<V> {
    type Item = &'a V;
    type IntoIter = std::slice::Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
