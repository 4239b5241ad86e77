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

//! This module provides the definition of a (partial or complete) assignment
//! of values to the variables of a constraint network.

use rustc_hash::FxHashMap;

use crate::{ConstraintNetwork, CspError, CspResult, Value, Variable};

/// A mapping from variables to the value they have been given.
///
/// Assignments are created and owned by the callers (typically, a search
/// procedure). The propagation engine only ever reads them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment<V> {
    /// The value of each assigned variable
    values: FxHashMap<Variable, V>,
}

impl<V: Value> Default for Assignment<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Value> Assignment<V> {
    /// Creates an empty assignment
    pub fn new() -> Self {
        Self {
            values: FxHashMap::default(),
        }
    }
    /// Gives the value to the variable and returns the value it previously had
    pub fn assign(&mut self, var: Variable, value: V) -> Option<V> {
        self.values.insert(var, value)
    }
    /// Forgets the value of the variable (and returns it)
    pub fn unassign(&mut self, var: &Variable) -> Option<V> {
        self.values.remove(var)
    }
    /// Forgets all values
    pub fn clear(&mut self) {
        self.values.clear()
    }
    /// Returns true iff the variable has a value
    pub fn is_assigned(&self, var: &Variable) -> bool {
        self.values.contains_key(var)
    }
    /// Returns the value of the variable if it has one
    pub fn get(&self, var: &Variable) -> Option<&V> {
        self.values.get(var)
    }
    /// Returns the value of the variable. Looking a variable up when it has
    /// no value is an error: check `is_assigned` first if that may happen.
    pub fn value(&self, var: &Variable) -> CspResult<&V> {
        self.values
            .get(var)
            .ok_or_else(|| CspError::Unassigned(var.name().to_string()))
    }
    /// How many variables have a value ?
    pub fn len(&self) -> usize {
        self.values.len()
    }
    /// Returns true iff no variable has a value
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
    /// Iterates over the (variable, value) pairs. The order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = (&Variable, &V)> {
        self.values.iter()
    }
    /// Returns true iff all variables of the scope have a value
    pub fn covers(&self, scope: &[Variable]) -> bool {
        scope.iter().all(|v| self.is_assigned(v))
    }
    /// Produces an independent copy of this assignment
    pub fn duplicate(&self) -> Self {
        self.clone()
    }
    /// Returns true iff every variable of the network has a value
    pub fn is_complete(&self, network: &ConstraintNetwork<V>) -> bool {
        network.variables().iter().all(|v| self.is_assigned(v))
    }
    /// Returns true iff every constraint of the network whose scope is fully
    /// covered by this assignment is satisfied
    pub fn is_consistent(&self, network: &ConstraintNetwork<V>) -> bool {
        network
            .constraints()
            .filter(|(_, c)| self.covers(c.scope()))
            .all(|(_, c)| c.is_satisfied(self))
    }
}

impl<V: Value> FromIterator<(Variable, V)> for Assignment<V> {
    fn from_iter<I: IntoIterator<Item = (Variable, V)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
