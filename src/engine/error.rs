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

//! This module defines the errors that can be raised when a constraint
//! network (or an assignment) is misused.
//!
//! # Note
//! Discovering that a domain became empty during propagation is *not* an
//! error. This is an expected outcome of the algorithm which gets reported
//! by the inference record.

use crate::ConstraintId;

/// This is the kind of error that gets raised whenever an operation refers
/// to something that does not make sense in the context of the network.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq, Hash)]
pub enum CspError {
    /// The variable is not part of the constraint network
    #[error("unknown variable '{0}'")]
    UnknownVariable(String),
    /// The variable has already been added to the constraint network
    #[error("variable '{0}' is already part of the network")]
    DuplicateVariable(String),
    /// The constraint is not (or no longer) part of the network
    #[error("unknown constraint {0:?}")]
    UnknownConstraint(ConstraintId),
    /// The scope of the constraint does not fit the requested operation
    #[error("invalid scope: {0}")]
    InvalidScope(String),
    /// The variable has no value in the assignment
    #[error("variable '{0}' is not assigned")]
    Unassigned(String),
}

/// The result of an operation on the network. It fails with a `CspError`
/// whenever the operation is a programming error.
pub type CspResult<T> = Result<T, CspError>;
