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

//! This module provides the implementation of the binary not equal constraint.

use crate::prelude::*;

/// This constraint enforces that a variable take a different value from
/// another one. x != y
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NotEqual {
    /// x and y (in that order)
    scope: [Variable; 2],
}
impl NotEqual {
    /// Creates a not equal constraint between x and y
    pub fn new(x: Variable, y: Variable) -> Self {
        Self { scope: [x, y] }
    }
    /// The left hand side
    pub fn x(&self) -> &Variable {
        &self.scope[0]
    }
    /// The right hand side
    pub fn y(&self) -> &Variable {
        &self.scope[1]
    }
}
impl<V: Value> Constraint<V> for NotEqual {
    fn scope(&self) -> &[Variable] {
        &self.scope
    }

    fn is_satisfied(&self, assignment: &Assignment<V>) -> bool {
        match (assignment.get(self.x()), assignment.get(self.y())) {
            (Some(a), Some(b)) => a != b,
            _ => true,
        }
    }
}
