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

//! This module provides the definition and implementation of the engine's
//! core abstractions (Variable, Domain, Assignment, ConstraintNetwork, ...)

mod assignment;
mod domain;
mod error;
mod network;
mod variable;

pub use assignment::*;
pub use domain::*;
pub use error::*;
pub use network::*;
pub use variable::*;
