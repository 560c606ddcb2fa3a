// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Invariant-checking policy.
//!
//! Preconditions of the containers are verified when the `checked` feature is enabled, which is the default. A violated precondition is a programming error: it is logged with `tracing` and the current thread panics. There is no recoverable error in this library.
//!
//! The policy is decided once per build. To compile the checks out, depend on the crate with `default-features = false`.

use crate::item::Item;

/// `true` when the precondition checks are compiled in.
pub const ASSERTING: bool = cfg!(feature = "checked");

/// A violated precondition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Fault {
  #[error("set type {expected} doesn't match new item type {found}")]
  MismatchedItem {
    expected: &'static str,
    found: &'static str
  },
  #[error("set type {expected} doesn't match next set type {found}")]
  MismatchedSets {
    expected: &'static str,
    found: &'static str
  },
  #[error("combine called for zero sets")]
  EmptyCombine,
  #[error("cannot compare a {expected} with a {found}")]
  MismatchedComparison {
    expected: &'static str,
    found: &'static str
  }
}

/// Logs the fault and panics.
#[cold]
#[track_caller]
pub fn fault(fault: Fault) -> ! {
  error!(%fault, "unordered: invalid program state");
  panic!("unordered: {}", fault)
}

/// Checks that `item` has the same concrete type as `witness`.
pub(crate) fn same_item<T: Item>(witness: &T, item: &T) {
  if witness.concrete_type() != item.concrete_type() {
    fault(Fault::MismatchedItem {
      expected: witness.type_name(),
      found: item.type_name()
    });
  }
}

/// Checks that every item of `items` has the concrete type of the first one.
pub(crate) fn homogeneous<T: Item>(items: &[T]) {
  if let Some((first, rest)) = items.split_first() {
    for item in rest {
      same_item(first, item);
    }
  }
}

/// Checks that all the non-empty slices share one concrete item type. Empty slices do not constrain the type.
pub(crate) fn same_sets<'a, T, I>(sets: I) where
 T: Item,
 I: IntoIterator<Item=&'a [T]>
{
  let mut witness: Option<&T> = None;
  for set in sets {
    match (witness, set.first()) {
      (None, first) => witness = first,
      (Some(w), Some(first)) if w.concrete_type() != first.concrete_type() => {
        fault(Fault::MismatchedSets {
          expected: w.type_name(),
          found: first.type_name()
        });
      }
      _ => ()
    }
  }
}
