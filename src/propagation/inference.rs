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

//! This module defines the inference record: the reversible log of all the
//! domain changes that were made by one call to a propagation algorithm.
//!
//! The record works like the trail of a state manager. Each removal is
//! pushed on the trail along with the position the value used to occupy in
//! its domain. Undoing the record walks the trail backwards and puts every
//! value back where it was, which restores the exact prior content *and*
//! order of every touched domain.

use log::debug;

use crate::{ConstraintNetwork, CspResult, Value, Variable};

/// The terminal state of one propagation call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The worklist was exhausted and no domain became empty
    Consistent,
    /// Some domain became empty: no solution can be reached from the state
    /// the propagation started from
    Inconsistent,
}

/// One value that got removed from the domain of a variable
#[derive(Debug, Clone, PartialEq, Eq)]
struct Removal<V> {
    /// The variable whose domain was pruned
    variable: Variable,
    /// The value that was removed
    value: V,
    /// The position the value occupied in the domain when it was removed
    position: usize,
}

/// The record of what one propagation call changed.
///
/// The caller either commits the changes (by simply dropping the record) or
/// rolls them back with `undo`. A record cannot be cloned: undoing a copy
/// would replay removals that the original already put back.
///
/// ```compile_fail
/// use minicsp_rs::prelude::*;
///
/// let inference = Inference::<i32>::new();
/// let _copy = inference.clone();
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct Inference<V> {
    /// All removals in the order they happened
    trail: Vec<Removal<V>>,
    /// The variable whose domain became empty (if any)
    wiped_out: Option<Variable>,
    /// Set once the record has been rolled back
    undone: bool,
}

impl<V: Value> Default for Inference<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Value> Inference<V> {
    /// Creates a fresh record where nothing happened (yet)
    pub fn new() -> Self {
        Self {
            trail: vec![],
            wiped_out: None,
            undone: false,
        }
    }
    /// Returns true iff no value was removed from any domain
    pub fn is_unchanged(&self) -> bool {
        self.trail.is_empty()
    }
    /// Returns true iff some domain became empty
    pub fn is_inconsistent(&self) -> bool {
        self.wiped_out.is_some()
    }
    /// Tells how the propagation ended
    pub fn outcome(&self) -> Outcome {
        if self.is_inconsistent() {
            Outcome::Inconsistent
        } else {
            Outcome::Consistent
        }
    }
    /// The variable whose domain became empty (if any)
    pub fn wiped_out(&self) -> Option<&Variable> {
        self.wiped_out.as_ref()
    }
    /// Total number of values that were removed
    pub fn removal_count(&self) -> usize {
        self.trail.len()
    }
    /// The values removed from the domain of `var` in their order of removal
    pub fn removed(&self, var: &Variable) -> Vec<&V> {
        self.trail
            .iter()
            .filter(|r| &r.variable == var)
            .map(|r| &r.value)
            .collect()
    }
    /// The variables whose domain was pruned, in the order they were first
    /// touched
    pub fn touched(&self) -> Vec<&Variable> {
        let mut out: Vec<&Variable> = vec![];
        for r in self.trail.iter() {
            if !out.contains(&&r.variable) {
                out.push(&r.variable);
            }
        }
        out
    }
    /// Returns true iff the record has already been rolled back
    pub fn is_undone(&self) -> bool {
        self.undone
    }

    /// Rolls back all the removals of this record, restoring every touched
    /// domain to its exact prior content and order.
    ///
    /// Calling `undo` on a record that has already been undone does nothing.
    /// The only possible error is an unknown variable (the record was produced
    /// by another network); in that case, no domain is modified at all.
    pub fn undo(&mut self, network: &mut ConstraintNetwork<V>) -> CspResult<()> {
        if self.undone {
            return Ok(());
        }
        let indices = self
            .trail
            .iter()
            .map(|r| network.index_of(&r.variable))
            .collect::<CspResult<Vec<usize>>>()?;

        for (r, idx) in self.trail.iter().zip(indices).rev() {
            network.reinsert_at(idx, r.position, r.value.clone());
        }
        self.undone = true;
        debug!("undo: restored {} value(s)", self.trail.len());
        Ok(())
    }

    /// Records that `value` was removed from the domain of `variable` where
    /// it occupied the given `position`
    pub(crate) fn record(&mut self, variable: &Variable, value: V, position: usize) {
        self.trail.push(Removal {
            variable: variable.clone(),
            value,
            position,
        });
    }
    /// Records that the domain of `variable` became empty
    pub(crate) fn mark_wiped_out(&mut self, variable: &Variable) {
        self.wiped_out = Some(variable.clone());
    }
}
