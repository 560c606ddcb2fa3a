// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Type-erased items.
//!
//! A `Dynamic` hides the concrete type of the value it carries, so a `Set<Dynamic>` can receive values of any comparable type. The multisets still require all their items to share one concrete type: this is verified at runtime when the `checked` feature is enabled, instead of at compile time.
//!
//! Reading a value back requires narrowing it to its concrete type with `downcast_ref`.
//!
//! # Examples
//!
//! ```rust
//! use unordered::{Dynamic, EqualSet};
//!
//! let set: EqualSet<Dynamic> = vec![Dynamic::new(1), Dynamic::new(2)].into();
//! assert!(set.has(&Dynamic::new(2)));
//! let total: i32 = set.iter().filter_map(|v| v.downcast_ref::<i32>()).sum();
//! assert_eq!(total, 3);
//! ```

use crate::check::{self, Fault, ASSERTING};
use crate::comparable::Comparable;
use crate::item::Item;
use std::any::{self, Any, TypeId};
use std::fmt;
use std::sync::Arc;

trait Erased: Any + fmt::Debug + Send + Sync {
  fn as_any(&self) -> &dyn Any;
  fn erased_type_name(&self) -> &'static str;
  fn erased_equal(&self, other: &dyn Erased) -> bool;
}

impl<T> Erased for T where
 T: Comparable + Any + fmt::Debug + Send + Sync
{
  fn as_any(&self) -> &dyn Any {
    self
  }

  fn erased_type_name(&self) -> &'static str {
    any::type_name::<T>()
  }

  fn erased_equal(&self, other: &dyn Erased) -> bool {
    match other.as_any().downcast_ref::<T>() {
      Some(other) => self.equal(other),
      None => {
        let mismatch = Fault::MismatchedComparison {
          expected: self.erased_type_name(),
          found: other.erased_type_name()
        };
        if ASSERTING {
          check::fault(mismatch);
        }
        warn!(%mismatch, "unordered: comparison of mismatched types treated as unequal");
        false
      }
    }
  }
}

/// A shared, immutable value of any comparable type.
#[derive(Clone)]
pub struct Dynamic {
  value: Arc<dyn Erased>
}

impl Dynamic
{
  pub fn new<T>(value: T) -> Dynamic where
   T: Comparable + Any + fmt::Debug + Send + Sync
  {
    Dynamic { value: Arc::new(value) }
  }

  /// Narrows the value to `T`. Returns `None` if it is of another type.
  pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
    self.value.as_any().downcast_ref::<T>()
  }

  pub fn is<T: Any>(&self) -> bool {
    self.value.as_any().is::<T>()
  }
}

impl Item for Dynamic
{
  fn concrete_type(&self) -> TypeId {
    self.value.as_any().type_id()
  }

  fn type_name(&self) -> &'static str {
    self.value.erased_type_name()
  }
}

impl Comparable for Dynamic
{
  /// Narrows `other` to the concrete type of `self` before comparing. Values of different concrete types are a precondition fault.
  fn equal(&self, other: &Dynamic) -> bool {
    self.value.erased_equal(&*other.value)
  }
}

impl fmt::Debug for Dynamic
{
  fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
    fmt::Debug::fmt(&self.value, formatter)
  }
}
