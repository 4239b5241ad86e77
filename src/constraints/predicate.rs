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

//! This module provides the implementation of the most general constraint:
//! an arbitrary rule expressed as a closure over the values of its scope.

use std::fmt::Debug;

use crate::prelude::*;

/// The rule checked by a predicate constraint. It is given the values of the
/// scope variables, in scope order.
type Check<V> = Box<dyn Fn(&[&V]) -> bool + Send + Sync>;

/// A constraint whose rule is an arbitrary closure. The closure is only ever
/// called once all the variables of the scope have a value; any partial
/// assignment is deemed to satisfy the constraint.
pub struct Predicate<V> {
    /// The variables this constraint bears on
    scope: Vec<Variable>,
    /// The actual rule
    check: Check<V>,
}

impl<V: Value> Predicate<V> {
    /// Creates a predicate over an arbitrary (non empty) scope
    pub fn new<F>(scope: Vec<Variable>, check: F) -> CspResult<Self>
    where
        F: Fn(&[&V]) -> bool + Send + Sync + 'static,
    {
        if scope.is_empty() {
            Err(CspError::InvalidScope(
                "a predicate must bear on at least one variable".to_string(),
            ))
        } else {
            Ok(Self {
                scope,
                check: Box::new(check),
            })
        }
    }
    /// Creates a predicate bearing on one single variable
    pub fn unary<F>(x: Variable, check: F) -> Self
    where
        F: Fn(&V) -> bool + Send + Sync + 'static,
    {
        Self {
            scope: vec![x],
            check: Box::new(move |vals: &[&V]| check(vals[0])),
        }
    }
    /// Creates a predicate relating x and y. The closure is given the value
    /// of x then the value of y.
    pub fn binary<F>(x: Variable, y: Variable, check: F) -> Self
    where
        F: Fn(&V, &V) -> bool + Send + Sync + 'static,
    {
        Self {
            scope: vec![x, y],
            check: Box::new(move |vals: &[&V]| check(vals[0], vals[1])),
        }
    }
}

impl<V: Value> Constraint<V> for Predicate<V> {
    fn scope(&self) -> &[Variable] {
        &self.scope
    }

    fn is_satisfied(&self, assignment: &Assignment<V>) -> bool {
        let values = self
            .scope
            .iter()
            .map(|v| assignment.get(v))
            .collect::<Option<Vec<&V>>>();

        match values {
            Some(values) => (self.check)(&values),
            None => true,
        }
    }
}

impl<V> Debug for Predicate<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Predicate")
            .field("scope", &self.scope)
            .finish_non_exhaustive()
    }
}
