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

//! This module provides the implementation of the all different constraint.
//! It is a constraint of arbitrary arity which can also be decomposed into
//! a clique of binary `NotEqual` constraints. This is how one gets to use it
//! with arc consistency, which only reasons about binary constraints.

use rustc_hash::FxHashSet;

use crate::prelude::*;

/// This constraint enforces that the value affected to each variable be
/// different from the one affected to all other variables.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AllDifferent {
    /// All these variables must take different values in the solution
    vars: Vec<Variable>,
}
impl AllDifferent {
    /// Creates a new constraint. It fails when the scope is empty.
    pub fn new(vars: Vec<Variable>) -> CspResult<Self> {
        if vars.is_empty() {
            Err(CspError::InvalidScope(
                "all different must bear on at least one variable".to_string(),
            ))
        } else {
            Ok(Self { vars })
        }
    }
    /// Enumerates all the pairs (vars[i], vars[j]) with i < j, ordered
    /// lexicographically on (i, j)
    pub fn pairs(&self) -> impl Iterator<Item = (&Variable, &Variable)> + '_ {
        self.vars
            .iter()
            .enumerate()
            .flat_map(move |(i, x)| self.vars[i + 1..].iter().map(move |y| (x, y)))
    }
}

impl<V: Value> Constraint<V> for AllDifferent {
    fn scope(&self) -> &[Variable] {
        &self.vars
    }

    fn is_satisfied(&self, assignment: &Assignment<V>) -> bool {
        let mut seen = FxHashSet::default();
        self.vars
            .iter()
            .filter_map(|v| assignment.get(v))
            .all(|value| seen.insert(value))
    }

    fn as_decomposable(&self) -> Option<&dyn Decompose> {
        Some(self)
    }
}

impl Decompose for AllDifferent {
    fn decompose(&self) -> Vec<NotEqual> {
        self.pairs()
            .map(|(x, y)| NotEqual::new(x.clone(), y.clone()))
            .collect()
    }
}
