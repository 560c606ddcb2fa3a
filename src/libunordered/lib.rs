// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This library proposes generic unordered multisets (also called bags). A multiset holds values of one uniform type, permits duplicates and does not guarantee any iteration order. Two containers are provided:
//!
//! * [Set](set/index.html) stores items without interpreting them. It only supports adding an item and combining sets together.
//! * [EqualSet](equal_set/index.html) is built on top of `Set` for items implementing [Comparable](comparable/trait.Comparable.html). It adds removal, deduplication, membership, multiset equality and multiset difference.
//!
//! Every operation returns a new container, the receiver is never modified. Membership and equality are computed by pairwise comparisons (`O(n*m)`), no hashing is involved.
//!
//! # Examples
//!
//! ```rust
//! use unordered::EqualSet;
//!
//! let a: EqualSet<i32> = vec![1, 2, 3, 2, 2].into();
//! let b: EqualSet<i32> = vec![1, 2, 3].into();
//! assert!(a.reduce().equal(&b));
//! assert!(a.remove_all(&2).equal(&vec![3, 1].into()));
//! assert!(b.diff(&vec![2, 2, 3, 1, 2].into()).equal(&vec![2, 2].into()));
//! ```
//!
//! # Custom items
//!
//! Any type can be stored once it implements [Item](item/trait.Item.html), and [Comparable](comparable/trait.Comparable.html) to be used in an `EqualSet`:
//!
//! ```rust
//! use unordered::{Comparable, EqualSet, Item};
//!
//! #[derive(Clone, Copy, Debug, PartialEq)]
//! struct Coordinate { x: i32, y: i32 }
//!
//! impl Item for Coordinate {}
//!
//! impl Comparable for Coordinate {
//!   fn equal(&self, other: &Coordinate) -> bool {
//!     self == other
//!   }
//! }
//!
//! let set = EqualSet::new()
//!   .add(Coordinate { x: 1, y: 2 })
//!   .add(Coordinate { x: 0, y: 0 });
//! assert!(set.has(&Coordinate { x: 0, y: 0 }));
//! ```
//!
//! The item type is fixed at compile time, so mixing types in one container is a type error. Values that must be stored behind a single type can be wrapped in [Dynamic](dynamic/struct.Dynamic.html); the homogeneity of such containers is then verified at runtime.
//!
//! # Invariant checking
//!
//! Precondition violations (mixed concrete types, combining with zero sets, comparing dynamic values of different types) are programming errors and panic immediately. The checks are controlled by the `checked` Cargo feature (enabled by default); building without it compiles them out and violating a precondition is then unspecified behavior. See the [check module](check/index.html).

#[macro_use]
extern crate tracing;

pub mod check;
pub mod item;
pub mod comparable;
pub mod dynamic;
pub mod set;
pub mod equal_set;
mod primitives;

pub use check::Fault;
pub use item::Item;
pub use comparable::Comparable;
pub use dynamic::Dynamic;
pub use set::Set;
pub use equal_set::EqualSet;
