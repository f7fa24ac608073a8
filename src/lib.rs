// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Dynamically typed values with a strict total order, and shape descriptors
//! that describe such values without carrying any data.

#[cfg(feature = "arc")]
pub(crate) use std::sync::Arc as Rc;
#[cfg(not(feature = "arc"))]
pub(crate) use std::rc::Rc;

pub mod meta;
pub mod value;

pub use meta::{Meta, Shape};
pub use value::error::ValueError;
pub use value::{Value, ValueKind};
