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

//! This module provides the definition and implementation of the constraint
//! network: the structure owning the variables, their domains, the
//! constraints and the adjacency index used to reach the constraints bearing
//! on a given variable.
//!
//! # Note
//! Variables and constraints never refer to one another directly. Internally,
//! each variable is known by its position in the network (a stable integer
//! handle) and each constraint by its `ConstraintId`. The adjacency index maps
//! the former onto lists of the latter.

use rustc_hash::FxHashMap;

use crate::{
    Assignment, Constraint, CspError, CspResult, Domain, NotEqual, Value, Variable,
};

/// An identifier to a constraint. It is handed out by the network when the
/// constraint is added and is never reused, even after the constraint has been
/// removed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ConstraintId(usize);

/// A constraint satisfaction problem: variables, their current domains and
/// the constraints bearing on them.
///
/// The topology of the network (variables, constraints, adjacency) only
/// changes through the add and remove operations. Propagation only ever
/// touches the domains.
#[derive(Debug)]
pub struct ConstraintNetwork<V: Value> {
    /// The variables in their order of insertion
    variables: Vec<Variable>,
    /// The position of each variable in the `variables` vector
    positions: FxHashMap<Variable, usize>,
    /// The current domain of each variable (same order as `variables`)
    domains: Vec<Domain<V>>,
    /// The constraints that are part of the network
    constraints: FxHashMap<ConstraintId, Box<dyn Constraint<V>>>,
    /// The constraints ids in their order of insertion
    order: Vec<ConstraintId>,
    /// For each variable (same order as `variables`), the constraints whose
    /// scope contains that variable (in their order of insertion)
    adjacency: Vec<Vec<ConstraintId>>,
    /// The id that will be given to the next constraint
    next_id: usize,
}

impl<V: Value> Default for ConstraintNetwork<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Value> ConstraintNetwork<V> {
    /// Creates an empty network
    pub fn new() -> Self {
        Self {
            variables: vec![],
            positions: FxHashMap::default(),
            domains: vec![],
            constraints: FxHashMap::default(),
            order: vec![],
            adjacency: vec![],
            next_id: 0,
        }
    }

    //--------------------------------------------------------------------------
    // Variables and domains
    //--------------------------------------------------------------------------

    /// Adds the variable to the network. Its domain is initially empty.
    /// This fails if the very same variable has already been added.
    pub fn add_variable(&mut self, var: Variable) -> CspResult<()> {
        if self.positions.contains_key(&var) {
            return Err(CspError::DuplicateVariable(var.name().to_string()));
        }
        self.positions.insert(var.clone(), self.variables.len());
        self.variables.push(var);
        self.domains.push(Domain::empty());
        self.adjacency.push(vec![]);
        Ok(())
    }
    /// Creates a fresh variable, adds it to the network with the given
    /// domain and returns it
    pub fn new_variable(&mut self, name: &str, domain: impl Into<Domain<V>>) -> Variable {
        let var = Variable::new(name);
        self.positions.insert(var.clone(), self.variables.len());
        self.variables.push(var.clone());
        self.domains.push(domain.into());
        self.adjacency.push(vec![]);
        var
    }
    /// The variables of the network in their order of insertion
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }
    /// How many variables are there in the network ?
    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }
    /// Returns true iff the variable is part of the network
    pub fn contains_variable(&self, var: &Variable) -> bool {
        self.positions.contains_key(var)
    }
    /// Replaces the domain of the variable
    pub fn set_domain(&mut self, var: &Variable, domain: impl Into<Domain<V>>) -> CspResult<()> {
        let idx = self.index_of(var)?;
        self.domains[idx] = domain.into();
        Ok(())
    }
    /// Returns the current domain of the variable
    pub fn domain(&self, var: &Variable) -> CspResult<&Domain<V>> {
        let idx = self.index_of(var)?;
        Ok(&self.domains[idx])
    }
    /// Removes the value from the domain of the variable. It returns true iff
    /// the value was present (and hence got removed). Removing a value which
    /// is not in the domain simply does nothing.
    pub fn remove(&mut self, var: &Variable, value: &V) -> CspResult<bool> {
        let idx = self.index_of(var)?;
        Ok(self.domains[idx].remove(value).is_some())
    }
    /// Puts the value back in the domain of the variable (at the end). It
    /// returns true iff the value was absent (and hence got added).
    pub fn restore(&mut self, var: &Variable, value: V) -> CspResult<bool> {
        let idx = self.index_of(var)?;
        let end = self.domains[idx].len();
        Ok(self.domains[idx].insert_at(end, value))
    }

    //--------------------------------------------------------------------------
    // Constraints
    //--------------------------------------------------------------------------

    /// Adds the constraint to the network and returns its identifier. This
    /// fails when the scope is empty or when it mentions a variable which is
    /// not part of the network.
    pub fn add_constraint<C: Constraint<V> + 'static>(
        &mut self,
        constraint: C,
    ) -> CspResult<ConstraintId> {
        self.post(Box::new(constraint))
    }
    /// Adds the (boxed) constraint to the network and returns its identifier.
    pub fn post(&mut self, constraint: Box<dyn Constraint<V>>) -> CspResult<ConstraintId> {
        if constraint.scope().is_empty() {
            return Err(CspError::InvalidScope(
                "a constraint must bear on at least one variable".to_string(),
            ));
        }
        let mut indices = Vec::with_capacity(constraint.arity());
        for var in constraint.scope() {
            let idx = self.index_of(var)?;
            if !indices.contains(&idx) {
                indices.push(idx);
            }
        }

        let id = ConstraintId(self.next_id);
        self.next_id += 1;
        for idx in indices {
            self.adjacency[idx].push(id);
        }
        self.order.push(id);
        self.constraints.insert(id, constraint);
        Ok(id)
    }
    /// Removes the constraint from the network. It returns true iff the
    /// constraint was part of the network.
    pub fn remove_constraint(&mut self, id: ConstraintId) -> bool {
        match self.constraints.remove(&id) {
            None => false,
            Some(constraint) => {
                for var in constraint.scope() {
                    if let Some(idx) = self.positions.get(var).copied() {
                        self.adjacency[idx].retain(|c| *c != id);
                    }
                }
                self.order.retain(|c| *c != id);
                true
            }
        }
    }
    /// Returns the constraint with the given identifier
    pub fn constraint(&self, id: ConstraintId) -> CspResult<&dyn Constraint<V>> {
        self.entry(id)
            .map(|(_, c)| c)
            .ok_or(CspError::UnknownConstraint(id))
    }
    /// How many constraints are there in the network ?
    pub fn constraint_count(&self) -> usize {
        self.order.len()
    }
    /// Iterates over all the constraints in their order of insertion
    pub fn constraints(&self) -> impl Iterator<Item = (ConstraintId, &dyn Constraint<V>)> + '_ {
        self.order.iter().filter_map(|id| self.entry(*id))
    }
    /// Returns the constraints whose scope contains the variable, in their
    /// order of insertion
    pub fn constraints_on(
        &self,
        var: &Variable,
    ) -> CspResult<Vec<(ConstraintId, &dyn Constraint<V>)>> {
        let idx = self.index_of(var)?;
        Ok(self.adjacency[idx]
            .iter()
            .filter_map(|id| self.entry(*id))
            .collect())
    }
    /// For a binary constraint and one of its endpoints, returns the other
    /// endpoint.
    pub fn other_endpoint(&self, id: ConstraintId, var: &Variable) -> CspResult<&Variable> {
        match self.constraint(id)?.scope() {
            [x, y] if x == var => Ok(y),
            [x, y] if y == var => Ok(x),
            [_, _] => Err(CspError::InvalidScope(format!(
                "'{var}' is not an endpoint of {id:?}"
            ))),
            scope => Err(CspError::InvalidScope(format!(
                "{id:?} bears on {} variables, not 2",
                scope.len()
            ))),
        }
    }
    /// Returns the distinct variables sharing a binary constraint with `var`,
    /// in the order in which they appear in the adjacency index
    pub fn neighbors(&self, var: &Variable) -> CspResult<Vec<Variable>> {
        let idx = self.index_of(var)?;
        let mut out: Vec<Variable> = vec![];
        for id in self.adjacency[idx].iter().copied() {
            if let Some(k) = self.binary_neighbor(id, idx) {
                let other = &self.variables[k];
                if !out.contains(other) {
                    out.push(other.clone());
                }
            }
        }
        Ok(out)
    }
    /// Returns the binary NotEqual constraints equivalent to all the
    /// decomposable constraints of the network. The network is not altered.
    pub fn decompose_all_different(&self) -> Vec<NotEqual> {
        self.constraints()
            .filter_map(|(_, c)| c.as_decomposable())
            .flat_map(|c| c.decompose())
            .collect()
    }

    //--------------------------------------------------------------------------
    // Assignment related queries
    //--------------------------------------------------------------------------

    /// Returns true iff all the constraints fully covered by the assignment
    /// are satisfied
    pub fn is_consistent(&self, assignment: &Assignment<V>) -> bool {
        assignment.is_consistent(self)
    }
    /// Returns true iff all variables of the network have a value
    pub fn is_complete(&self, assignment: &Assignment<V>) -> bool {
        assignment.is_complete(self)
    }
    /// Returns true iff the assignment is both complete and consistent
    pub fn is_solution(&self, assignment: &Assignment<V>) -> bool {
        self.is_complete(assignment) && self.is_consistent(assignment)
    }
    /// Counts the constraints on `var` that would be violated if `var` was
    /// given `value` on top of the assignment. Only the constraints that
    /// would be fully covered are counted.
    pub fn conflicts(
        &self,
        var: &Variable,
        value: &V,
        assignment: &Assignment<V>,
    ) -> CspResult<usize> {
        let idx = self.index_of(var)?;
        let mut hypothesis = assignment.duplicate();
        hypothesis.assign(var.clone(), value.clone());

        Ok(self.adjacency[idx]
            .iter()
            .filter_map(|id| self.constraints.get(id))
            .filter(|c| hypothesis.covers(c.scope()) && !c.is_satisfied(&hypothesis))
            .count())
    }
    /// Returns the assignment made of all the variables whose domain has
    /// been narrowed down to one single value
    pub fn infer_assignment(&self) -> Assignment<V> {
        self.variables
            .iter()
            .zip(self.domains.iter())
            .filter_map(|(var, dom)| dom.single().map(|v| (var.clone(), v.clone())))
            .collect()
    }

    //--------------------------------------------------------------------------
    // Crate internals (used by the propagation algorithms)
    //--------------------------------------------------------------------------

    /// Returns the constraint along with its id (when it exists)
    fn entry(&self, id: ConstraintId) -> Option<(ConstraintId, &dyn Constraint<V>)> {
        let constraint: &dyn Constraint<V> = self.constraints.get(&id)?.as_ref();
        Some((id, constraint))
    }
    /// Returns the position (stable handle) of the variable in the network
    pub(crate) fn index_of(&self, var: &Variable) -> CspResult<usize> {
        self.positions
            .get(var)
            .copied()
            .ok_or_else(|| CspError::UnknownVariable(var.name().to_string()))
    }
    /// The variable at the given position
    pub(crate) fn variable_at(&self, idx: usize) -> &Variable {
        &self.variables[idx]
    }
    /// The domain of the variable at the given position
    pub(crate) fn domain_at(&self, idx: usize) -> &Domain<V> {
        &self.domains[idx]
    }
    /// The constraints bearing on the variable at the given position
    pub(crate) fn adjacency_at(&self, idx: usize) -> &[ConstraintId] {
        &self.adjacency[idx]
    }
    /// The ids of all constraints in their order of insertion
    pub(crate) fn constraint_ids(&self) -> &[ConstraintId] {
        &self.order
    }
    /// Removes a value from the domain of the variable at the given position
    /// and returns the position the value used to occupy in that domain
    pub(crate) fn remove_at(&mut self, idx: usize, value: &V) -> Option<usize> {
        self.domains[idx].remove(value)
    }
    /// Puts a value back at the given position in the domain of the variable
    pub(crate) fn reinsert_at(&mut self, idx: usize, position: usize, value: V) -> bool {
        self.domains[idx].insert_at(position, value)
    }
    /// Returns the position of the other endpoint of a binary constraint
    /// which relates the variable at position `idx` with another variable.
    /// None is returned when the constraint is not binary, when it does not
    /// bear on `idx` or when both endpoints are the same variable.
    pub(crate) fn binary_neighbor(&self, id: ConstraintId, idx: usize) -> Option<usize> {
        let (a, b) = self.binary_endpoints(id)?;
        if a == idx {
            Some(b)
        } else if b == idx {
            Some(a)
        } else {
            None
        }
    }
    /// Returns the positions of both endpoints of a binary constraint relating
    /// two distinct variables
    pub(crate) fn binary_endpoints(&self, id: ConstraintId) -> Option<(usize, usize)> {
        match self.constraints.get(&id)?.scope() {
            [x, y] => {
                let a = self.positions.get(x).copied()?;
                let b = self.positions.get(y).copied()?;
                if a == b {
                    None
                } else {
                    Some((a, b))
                }
            }
            _ => None,
        }
    }
}

// #############################################################################
// ### UNIT TESTS ##############################################################
// #############################################################################
