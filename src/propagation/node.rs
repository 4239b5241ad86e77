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

//! Node consistency: the values which violate a constraint bearing on one
//! single variable are removed from that variable's domain.
//!
//! AC-3 leaves these constraints aside, so this pass is typically run once
//! before the first arc consistency pass.

use log::debug;

use crate::prelude::*;

/// Removes from every domain the values that violate a unary constraint.
///
/// A constraint is considered unary when all the entries of its scope denote
/// the same variable. The pass stops as soon as a domain becomes empty; the
/// returned record is then inconsistent and can still be undone.
pub fn node_consistency<V: Value>(network: &mut ConstraintNetwork<V>) -> Inference<V> {
    let unary = network
        .constraint_ids()
        .iter()
        .copied()
        .filter_map(|id| {
            let scope = network.constraint(id).ok()?.scope();
            let (first, rest) = scope.split_first()?;
            if rest.iter().all(|v| v == first) {
                network.index_of(first).ok().map(|idx| (id, idx))
            } else {
                None
            }
        })
        .collect::<Vec<_>>();

    let mut inference = Inference::new();
    let mut scratch = Assignment::new();
    for (id, idx) in unary {
        let var = network.variable_at(idx).clone();
        let Ok(constraint) = network.constraint(id) else {
            continue;
        };
        let mut failing = vec![];
        for value in network.domain_at(idx).iter() {
            scratch.assign(var.clone(), value.clone());
            if !constraint.is_satisfied(&scratch) {
                failing.push(value.clone());
            }
        }
        for value in failing {
            if let Some(pos) = network.remove_at(idx, &value) {
                inference.record(&var, value, pos);
            }
        }
        if network.domain_at(idx).is_empty() {
            debug!("node consistency: domain of {var} wiped out");
            inference.mark_wiped_out(&var);
            return inference;
        }
    }
    debug!(
        "node consistency: {} value(s) removed",
        inference.removal_count()
    );
    inference
}
