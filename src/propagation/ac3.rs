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

//! This module provides the implementation of the AC-3 arc consistency
//! algorithm.
//!
//! AC-3 only reasons about binary constraints. The constraints of any other
//! arity are ignored by this algorithm (global constraints such as all
//! different should be decomposed into binary constraints beforehand).
//!
//! The algorithm maintains a FIFO worklist of directed arcs. An arc
//! (Xi, c, Xj) is the obligation to check that every value of Xi has a
//! support in the domain of Xj w.r.t. the binary constraint c. Revising that
//! arc removes the unsupported values from Xi. Whenever Xi loses a value,
//! all arcs (Xk, c', Xi) pointing to Xi through another constraint c' are
//! scheduled again. The process stops when the worklist is exhausted
//! (arc consistency is reached) or as soon as a domain becomes empty.

use std::collections::VecDeque;

use log::{debug, trace};
use rustc_hash::FxHashSet;

use crate::prelude::*;

/// A directed arc: the domain of `from` must be supported by the domain of
/// `to` w.r.t. `constraint`. The variables are known by their position in
/// the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct DirectedArc {
    from: usize,
    constraint: ConstraintId,
    to: usize,
}

/// The FIFO queue of arcs which still need to be revised
#[derive(Debug, Default)]
struct Worklist {
    /// The arcs in the order they will be revised
    queue: VecDeque<DirectedArc>,
    /// The arcs currently sitting in the queue (only used when deduplicating)
    queued: FxHashSet<DirectedArc>,
    /// Should an arc already sitting in the queue be pushed again ?
    dedup: bool,
}
impl Worklist {
    fn new(dedup: bool) -> Self {
        Self {
            dedup,
            ..Default::default()
        }
    }
    fn push(&mut self, arc: DirectedArc) {
        if !self.dedup || self.queued.insert(arc) {
            self.queue.push_back(arc);
        }
    }
    fn pop(&mut self) -> Option<DirectedArc> {
        let arc = self.queue.pop_front()?;
        if self.dedup {
            self.queued.remove(&arc);
        }
        Some(arc)
    }
    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// The arc consistency engine.
///
/// # Note
/// `Ac3::default()` is what you will want to use most of the time. The only
/// setting is whether or not an arc which is already waiting in the worklist
/// can be enqueued a second time. Skipping these duplicates saves redundant
/// revisions but never changes the fixed point that is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ac3 {
    dedup: bool,
}

impl Default for Ac3 {
    fn default() -> Self {
        Self { dedup: true }
    }
}

impl Ac3 {
    /// Creates an engine with the default settings
    pub fn new() -> Self {
        Self::default()
    }
    /// Tells whether the duplicate arcs are dropped from the worklist
    pub fn with_dedup(mut self, dedup: bool) -> Self {
        self.dedup = dedup;
        self
    }

    /// Global pass: makes the whole network arc consistent. Every binary
    /// constraint contributes its two directed arcs, in order of insertion.
    pub fn propagate<V: Value>(&self, network: &mut ConstraintNetwork<V>) -> Inference<V> {
        let mut worklist = Worklist::new(self.dedup);
        for id in network.constraint_ids().iter().copied() {
            if let Some((a, b)) = network.binary_endpoints(id) {
                worklist.push(DirectedArc { from: a, constraint: id, to: b });
                worklist.push(DirectedArc { from: b, constraint: id, to: a });
            }
        }
        debug!("ac3: global pass over {} arcs", worklist.len());
        self.run(network, worklist, Inference::new())
    }

    /// Assignment scoped pass: propagates the consequences of `var` having
    /// been given its value in `assignment`.
    ///
    /// The domain of `var` is first narrowed down to the assigned value (this
    /// removal is part of the returned record). The worklist is then seeded
    /// with the arcs (Xk, c, var) for every neighbor Xk of `var`, so that only
    /// the effect of this one commitment is propagated outwards.
    ///
    /// The other values of the assignment are not looked at. The assignment
    /// is never modified.
    pub fn propagate_assignment<V: Value>(
        &self,
        network: &mut ConstraintNetwork<V>,
        assignment: &Assignment<V>,
        var: &Variable,
    ) -> CspResult<Inference<V>> {
        let focus = network.index_of(var)?;
        let value = assignment.value(var)?;
        let mut inference = Inference::new();

        let others = network
            .domain_at(focus)
            .iter()
            .filter(|v| *v != value)
            .cloned()
            .collect::<Vec<V>>();
        for v in others {
            if let Some(pos) = network.remove_at(focus, &v) {
                inference.record(var, v, pos);
            }
        }
        if network.domain_at(focus).is_empty() {
            debug!("ac3: {var} cannot take the value {value:?}");
            inference.mark_wiped_out(var);
            return Ok(inference);
        }

        let mut worklist = Worklist::new(self.dedup);
        for id in network.adjacency_at(focus).iter().copied() {
            if let Some(k) = network.binary_neighbor(id, focus) {
                worklist.push(DirectedArc { from: k, constraint: id, to: focus });
            }
        }
        debug!("ac3: propagating {var} = {value:?} over {} arcs", worklist.len());
        Ok(self.run(network, worklist, inference))
    }

    /// Processes the worklist until it is empty or until a domain is wiped out
    fn run<V: Value>(
        &self,
        network: &mut ConstraintNetwork<V>,
        mut worklist: Worklist,
        mut inference: Inference<V>,
    ) -> Inference<V> {
        let mut scratch = Assignment::new();
        let before = inference.removal_count();

        while let Some(arc) = worklist.pop() {
            if !Self::revise(network, arc, &mut scratch, &mut inference) {
                continue;
            }
            if network.domain_at(arc.from).is_empty() {
                let wiped = network.variable_at(arc.from).clone();
                debug!(
                    "ac3: domain of {wiped} wiped out after {} removal(s)",
                    inference.removal_count() - before
                );
                inference.mark_wiped_out(&wiped);
                return inference;
            }
            for id in network.adjacency_at(arc.from).iter().copied() {
                if id == arc.constraint {
                    continue;
                }
                if let Some(k) = network.binary_neighbor(id, arc.from) {
                    worklist.push(DirectedArc { from: k, constraint: id, to: arc.from });
                }
            }
        }
        debug!(
            "ac3: fixed point reached after {} removal(s)",
            inference.removal_count() - before
        );
        inference
    }

    /// Removes from the domain of `arc.from` all the values having no
    /// support in the domain of `arc.to`. Returns true iff a value was removed.
    fn revise<V: Value>(
        network: &mut ConstraintNetwork<V>,
        arc: DirectedArc,
        scratch: &mut Assignment<V>,
        inference: &mut Inference<V>,
    ) -> bool {
        let xi = network.variable_at(arc.from).clone();
        let xj = network.variable_at(arc.to).clone();
        let Ok(constraint) = network.constraint(arc.constraint) else {
            return false;
        };

        let mut unsupported = vec![];
        for x in network.domain_at(arc.from).iter() {
            let mut supported = false;
            for y in network.domain_at(arc.to).iter() {
                scratch.clear();
                scratch.assign(xi.clone(), x.clone());
                scratch.assign(xj.clone(), y.clone());
                if constraint.is_satisfied(scratch) {
                    supported = true;
                    break;
                }
            }
            if !supported {
                unsupported.push(x.clone());
            }
        }

        for x in unsupported.iter() {
            if let Some(pos) = network.remove_at(arc.from, x) {
                trace!("ac3: {xi} != {x:?} (no support in {xj})");
                inference.record(&xi, x.clone(), pos);
            }
        }
        !unsupported.is_empty()
    }
}

/// Makes the whole network arc consistent with the default engine settings.
/// This is a shorthand for `Ac3::default().propagate(network)`.
pub fn ac3<V: Value>(network: &mut ConstraintNetwork<V>) -> Inference<V> {
    Ac3::default().propagate(network)
}

/// Propagates the consequences of `var` having been assigned with the default
/// engine settings. This is a shorthand for
/// `Ac3::default().propagate_assignment(network, assignment, var)`.
pub fn ac3_assignment<V: Value>(
    network: &mut ConstraintNetwork<V>,
    assignment: &Assignment<V>,
    var: &Variable,
) -> CspResult<Inference<V>> {
    Ac3::default().propagate_assignment(network, assignment, var)
}

// #############################################################################
// ### UNIT TESTS ##############################################################
// #############################################################################
