// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Shape descriptors.
//!
//! A [`Meta`] describes the structure of a [`Value`](crate::Value) without
//! carrying any data: which case it is and, for containers, the shapes of the
//! nested parts. Nested descriptors are reference counted so a single element
//! or field shape can be reused by many parents without copying:
//!
//! ```ignore
//! let tags = Meta::array(Meta::string());
//! let user = Meta::object([("name", Meta::string()), ("tags", tags.clone())]);
//! let group = Meta::object([("tags", tags)]);
//! ```
//!
//! Descriptors are immutable once built. Factories only wrap children that
//! already exist, so the structure is always a tree (or a DAG through sharing)
//! and never cyclic.

use core::cmp::Ordering;
use core::fmt;
use std::collections::BTreeMap;

use crate::Rc;

mod schema;

/// A shared, immutable shape descriptor.
#[derive(Debug, Clone)]
pub struct Meta {
    t: Rc<Shape>,
}

/// The structure described by a [`Meta`].
///
/// `Map` describes a homogeneous mapping with a key shape and value shape.
/// `Object` describes a record with fixed, named fields. Both are map-shaped,
/// but they are distinct cases; an `Object` with no fields is still an object.
#[derive(Debug, Clone)]
pub enum Shape {
    Null,
    Bool,
    Int,
    Float,
    String,
    Array(Meta),
    Map { key: Meta, value: Meta },
    Object(BTreeMap<String, Meta>),
}

impl Meta {
    fn new(t: Shape) -> Self {
        Meta { t: Rc::new(t) }
    }

    pub fn null() -> Self {
        Self::new(Shape::Null)
    }

    pub fn boolean() -> Self {
        Self::new(Shape::Bool)
    }

    pub fn integer() -> Self {
        Self::new(Shape::Int)
    }

    pub fn float() -> Self {
        Self::new(Shape::Float)
    }

    pub fn string() -> Self {
        Self::new(Shape::String)
    }

    /// A homogeneous sequence of `element`.
    pub fn array(element: Meta) -> Self {
        Self::new(Shape::Array(element))
    }

    /// A homogeneous mapping from `key` to `value`.
    pub fn map(key: Meta, value: Meta) -> Self {
        Self::new(Shape::Map { key, value })
    }

    /// A record with named fields. Fields are kept in name order; a repeated
    /// name keeps the last shape given for it.
    pub fn object<K, I>(fields: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Meta)>,
    {
        Self::new(Shape::Object(
            fields.into_iter().map(|(k, m)| (k.into(), m)).collect(),
        ))
    }

    pub fn shape(&self) -> &Shape {
        &self.t
    }

    pub fn is_null(&self) -> bool {
        matches!(self.shape(), Shape::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self.shape(), Shape::Bool)
    }

    pub fn is_int(&self) -> bool {
        matches!(self.shape(), Shape::Int)
    }

    pub fn is_float(&self) -> bool {
        matches!(self.shape(), Shape::Float)
    }

    pub fn is_string(&self) -> bool {
        matches!(self.shape(), Shape::String)
    }

    pub fn is_array(&self) -> bool {
        matches!(self.shape(), Shape::Array(_))
    }

    /// True for both homogeneous maps and objects.
    pub fn is_map(&self) -> bool {
        matches!(self.shape(), Shape::Map { .. } | Shape::Object(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self.shape(), Shape::Object(_))
    }

    pub fn element(&self) -> Option<&Meta> {
        match self.shape() {
            Shape::Array(element) => Some(element),
            _ => None,
        }
    }

    pub fn key(&self) -> Option<&Meta> {
        match self.shape() {
            Shape::Map { key, .. } => Some(key),
            _ => None,
        }
    }

    pub fn value(&self) -> Option<&Meta> {
        match self.shape() {
            Shape::Map { value, .. } => Some(value),
            _ => None,
        }
    }

    pub fn fields(&self) -> Option<&BTreeMap<String, Meta>> {
        match self.shape() {
            Shape::Object(fields) => Some(fields),
            _ => None,
        }
    }

    /// True if both handles point at the same node.
    pub fn ptr_eq(&self, other: &Meta) -> bool {
        Rc::ptr_eq(&self.t, &other.t)
    }
}

impl Shape {
    // Maps and objects share a rank.
    fn rank(&self) -> u8 {
        match self {
            Shape::Null => 0,
            Shape::Bool => 1,
            Shape::Int => 2,
            Shape::Float => 3,
            Shape::String => 4,
            Shape::Map { .. } | Shape::Object(_) => 5,
            Shape::Array(_) => 6,
        }
    }
}

// Only meant to let descriptors act as keys in ordered collections. Objects
// are not compared field by field: all objects tie with each other and sort
// after every homogeneous map.
impl Ord for Meta {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.shape(), other.shape()) {
            (Shape::Array(a), Shape::Array(b)) => a.cmp(b),
            (Shape::Map { key: ka, value: va }, Shape::Map { key: kb, value: vb }) => {
                ka.cmp(kb).then_with(|| va.cmp(vb))
            }
            (Shape::Object(_), Shape::Object(_)) => Ordering::Equal,
            (Shape::Map { .. }, Shape::Object(_)) => Ordering::Less,
            (Shape::Object(_), Shape::Map { .. }) => Ordering::Greater,
            (a, b) => a.rank().cmp(&b.rank()),
        }
    }
}

impl PartialOrd for Meta {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Meta {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Meta {}

/// Human readable type name, e.g. `Array<Map<String,Int>>`.
impl fmt::Display for Meta {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.shape() {
            Shape::Null => f.write_str("None"),
            Shape::Bool => f.write_str("Bool"),
            Shape::Int => f.write_str("Int"),
            Shape::Float => f.write_str("Float"),
            Shape::String => f.write_str("String"),
            Shape::Array(element) => write!(f, "Array<{element}>"),
            Shape::Map { key, value } => write!(f, "Map<{key},{value}>"),
            Shape::Object(fields) => {
                f.write_str("Object{")?;
                for (idx, (name, field)) in fields.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{name}:{field}")?;
                }
                f.write_str("}")
            }
        }
    }
}
