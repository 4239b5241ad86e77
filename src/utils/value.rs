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

//! This module contains the trait that lets one be generic over the values
//! that can be stored in the domain of a variable. Integers are the obvious
//! candidates, but colors (`&'static str`), chars or any user defined enum
//! are just as fine.
//!
//! Unlike the `Int` trait from which it derives, this trait is *not* sealed:
//! any type satisfying the bounds is a value.

use std::{fmt::Debug, hash::Hash};

/// This type encapsulates anything that can be put in a domain
pub trait Value: Sized + Clone + Eq + PartialEq + Hash + Debug {}

impl<T> Value for T where T: Sized + Clone + Eq + PartialEq + Hash + Debug {}
