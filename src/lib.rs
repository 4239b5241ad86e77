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

//! A small constraint satisfaction engine.
//!
//! A problem is modelled as a `ConstraintNetwork`: a set of variables, each
//! with a finite domain of candidate values, and a set of constraints which
//! tell what (partial) assignments are acceptable. The network keeps an
//! index of the constraints bearing on each variable so that propagation
//! algorithms can walk from a variable to its neighbors cheaply.
//!
//! The propagation algorithms (AC-3 and node consistency) prune the domains
//! in place. Each call returns an `Inference` which records what was removed
//! and can be undone to get the network back to the exact state it was in.
//!
//! ```
//! use minicsp_rs::prelude::*;
//!
//! let mut csp = ConstraintNetwork::new();
//! let x = csp.new_variable("X", [0, 1, 2, 3, 4, 5]);
//! let y = csp.new_variable("Y", [0, 1, 3, 5, 9, 12, 16]);
//! csp.add_constraint(Predicate::binary(x.clone(), y.clone(), |x: &i32, y: &i32| *y == x * x))
//!     .unwrap();
//!
//! let mut inference = ac3(&mut csp);
//! assert_eq!(Outcome::Consistent, inference.outcome());
//! assert_eq!(&[0, 1, 3, 4], csp.domain(&x).unwrap().values());
//!
//! inference.undo(&mut csp).unwrap();
//! assert_eq!(6, csp.domain(&x).unwrap().len());
//! ```

mod constraints;
mod engine;
mod propagation;
mod utils;

pub use constraints::*;
pub use engine::*;
pub use propagation::*;
pub use utils::*;

/// Everything one needs to model and propagate a problem
pub mod prelude {
    pub use crate::constraints::*;
    pub use crate::engine::*;
    pub use crate::propagation::*;
    pub use crate::utils::*;
}
