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

//! This module provides the definition of a constraint along with the
//! implementation of the constraints that come out of the box:
//!
//! * `Predicate`: any rule expressed as a closure over the values of a scope,
//! * `NotEqual`: two variables must take different values,
//! * `AllDifferent`: all the variables of a scope take pairwise different
//!   values. This one can be decomposed into a clique of `NotEqual`.

use std::fmt::Debug;

use crate::{Assignment, Value, Variable};

mod alldiff;
mod not_equal;
mod predicate;

pub use alldiff::*;
pub use not_equal::*;
pub use predicate::*;

/// A constraint is a rule bearing on an ordered list of variables (its scope).
///
/// # Contract
/// * The scope never changes and holds at least one variable.
/// * `is_satisfied` must accept partial assignments. It only considers the
///   variables of the scope which have a value, and answers true whenever
///   the assigned values do not (yet) violate the rule.
/// * `is_satisfied` is a pure function: deterministic and side effect free.
pub trait Constraint<V: Value>: Debug + Send + Sync {
    /// The variables this constraint bears on
    fn scope(&self) -> &[Variable];
    /// Tells whether the (partial) assignment complies with this constraint
    fn is_satisfied(&self, assignment: &Assignment<V>) -> bool;

    /// Number of variables in the scope
    fn arity(&self) -> usize {
        self.scope().len()
    }
    /// Returns true iff this constraint bears on exactly two variables
    fn is_binary(&self) -> bool {
        self.arity() == 2
    }
    /// Gives access to the decomposition capability of this constraint if it
    /// has one
    fn as_decomposable(&self) -> Option<&dyn Decompose> {
        None
    }
}

/// The capability of a global constraint to be rewritten as an equivalent
/// set of binary `NotEqual` constraints. Decomposing never alters the
/// original constraint.
pub trait Decompose {
    /// Returns the binary constraints equivalent to this one
    fn decompose(&self) -> Vec<NotEqual>;
}
