// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Equality capability of the items of an [EqualSet](../equal_set/struct.EqualSet.html).

/// A value that can be checked for equality against another value of the same type.
///
/// The relation is expected to be an equivalence (reflexive, symmetric and transitive); the multisets rely on it without verifying it. In particular, [EqualSet::equal](../equal_set/struct.EqualSet.html#method.equal) groups elements exclusively through this method, so two values that are `equal` but not identical in memory are counted together.
///
/// ```rust
/// use unordered::Comparable;
///
/// struct Name(String);
///
/// impl Comparable for Name {
///   fn equal(&self, other: &Name) -> bool {
///     self.0.eq_ignore_ascii_case(&other.0)
///   }
/// }
///
/// assert!(Name("Ada".into()).equal(&Name("ADA".into())));
/// ```
pub trait Comparable {
  fn equal(&self, other: &Self) -> bool;
}
