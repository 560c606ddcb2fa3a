// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Values storable in a multiset.

use std::any::{self, TypeId};

/// An item can be stored in a [Set](../set/struct.Set.html).
///
/// All the items of one set must share a single concrete type. For a statically typed item this is guaranteed by the compiler and the default methods are enough:
///
/// ```rust
/// use unordered::Item;
///
/// #[derive(Clone)]
/// struct Point(i32, i32);
///
/// impl Item for Point {}
/// ```
///
/// Type-erased items (see [Dynamic](../dynamic/struct.Dynamic.html)) override both methods to report the type of the value they carry.
pub trait Item: Clone + 'static {
  /// The runtime concrete type of this value.
  fn concrete_type(&self) -> TypeId {
    TypeId::of::<Self>()
  }

  /// Name of the concrete type, used in fault messages.
  fn type_name(&self) -> &'static str {
    any::type_name::<Self>()
  }
}
