// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Multiset of comparable items.
//!
//! An `EqualSet` follows the same rules as [Set](../set/index.html) (homogeneous items, duplicates allowed, no meaningful order) and is stored as one. Because its items implement [Comparable](../comparable/trait.Comparable.html), it additionally supports removal, deduplication, membership, equality and difference.
//!
//! Equality-based operations compare items pairwise, there is no hashing: `has` and `remove` are linear, `equal`, `diff` and `reduce` are quadratic.
//!
//! # Examples
//!
//! ```rust
//! use unordered::EqualSet;
//!
//! let set: EqualSet<&str> = vec!["a", "b", "a"].into();
//! assert_eq!(set.count(&"a"), 2);
//! assert_eq!(set.remove(&"a").count(&"a"), 1);
//! assert!(!set.remove_all(&"a").has(&"a"));
//! assert_eq!(set, EqualSet::from(vec!["a", "a", "b"]));
//! ```

use crate::comparable::Comparable;
use crate::item::Item;
use crate::set::Set;
use gcollections::kind::*;
use gcollections::ops::*;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::fmt;
use std::iter::FromIterator;

#[derive(Clone)]
pub struct EqualSet<T> {
  set: Set<T>
}

impl<T> EqualSet<T>
{
  pub fn new() -> EqualSet<T> {
    EqualSet { set: Set::new() }
  }

  // precondition: `items` must be homogeneous.
  fn wrap(items: Vec<T>) -> EqualSet<T> {
    EqualSet { set: Set::wrap(items) }
  }

  pub fn len(&self) -> usize {
    self.set.len()
  }

  pub fn is_empty(&self) -> bool {
    self.set.is_empty()
  }

  pub fn iter(&self) -> std::slice::Iter<'_, T> {
    self.set.iter()
  }

  pub fn as_slice(&self) -> &[T] {
    self.set.as_slice()
  }

  pub fn first(&self) -> Option<&T> {
    self.set.first()
  }

  pub fn last(&self) -> Option<&T> {
    self.set.last()
  }

  /// The underlying set, without the equality operations.
  pub fn as_set(&self) -> &Set<T> {
    &self.set
  }

  pub fn into_vec(self) -> Vec<T> {
    self.set.into_vec()
  }
}

impl<T: Item + Comparable> EqualSet<T>
{
  /// Returns a new set with `item` appended. Duplicates are allowed.
  pub fn add(&self, item: T) -> EqualSet<T> {
    EqualSet { set: self.set.add(item) }
  }

  /// Returns a new set with the items of the receiver followed by the items of each set in `with`. Duplicates are not removed.
  ///
  /// Panics if `with` is empty, or if two non-empty sets among the receiver and `with` hold items of different concrete types.
  pub fn combine<'a, I>(&self, with: I) -> EqualSet<T> where
   I: IntoIterator<Item=&'a EqualSet<T>>
  {
    EqualSet { set: self.set.combine(with.into_iter().map(|s| &s.set)) }
  }

  /// Removes the first item equal to `item`, later duplicates are kept. The set is returned unchanged if there is no match.
  pub fn remove(&self, item: &T) -> EqualSet<T> {
    let mut items = self.as_slice().to_vec();
    if let Some(idx) = items.iter().position(|e| e.equal(item)) {
      items.remove(idx);
    }
    EqualSet::wrap(items)
  }

  /// Removes all the items equal to `item`.
  pub fn remove_all(&self, item: &T) -> EqualSet<T> {
    EqualSet::wrap(self.iter()
      .filter(|e| !e.equal(item))
      .cloned()
      .collect())
  }

  /// Eliminates duplicates: only the first item of each group of equal items is kept, in order.
  pub fn reduce(&self) -> EqualSet<T> {
    let mut items: Vec<T> = Vec::with_capacity(self.len());
    for e in self.iter() {
      if !items.iter().any(|kept| e.equal(kept)) {
        items.push(e.clone());
      }
    }
    EqualSet::wrap(items)
  }

  /// `true` if some item of the set is equal to `item`, as reported by `item.equal(element)`.
  pub fn has(&self, item: &T) -> bool {
    self.iter().any(|e| item.equal(e))
  }

  /// Number of items equal to `item`.
  pub fn count(&self, item: &T) -> usize {
    self.iter().filter(|e| item.equal(e)).count()
  }

  /// `true` if both sets contain the same number of each item. The order of the items is irrelevant.
  ///
  /// Items are paired off through `Comparable::equal` only, so values that are equal without being identical are counted together.
  pub fn equal(&self, other: &EqualSet<T>) -> bool {
    if self.len() != other.len() {
      false
    }
    else if self.is_empty() {
      true
    }
    else {
      let (paired, _) = self.pair_off(other);
      paired.iter().all(|p| *p)
    }
  }

  /// Returns the items without a counterpart in the other set: first those of the receiver, then those of `other`. Items are matched one for one, so an item occurring three times in one set and once in the other appears twice in the result. Duplicates are not removed.
  pub fn diff(&self, other: &EqualSet<T>) -> EqualSet<T> {
    let (left, right) = self.pair_off(other);
    let unpaired = |items: &[T], paired: Vec<bool>| -> Vec<T> {
      items.iter().zip(paired)
        .filter(|(_, paired)| !paired)
        .map(|(item, _)| item.clone())
        .collect()
    };
    let mut items = unpaired(self.as_slice(), left);
    items.extend(unpaired(other.as_slice(), right));
    EqualSet::wrap(items)
  }

  // Matches each item of `self` with the first equal and not yet matched item of `other`. The vectors flag the matched positions of each side.
  fn pair_off(&self, other: &EqualSet<T>) -> (Vec<bool>, Vec<bool>) {
    let mut left = vec![false; self.len()];
    let mut right = vec![false; other.len()];
    for (i, a) in self.iter().enumerate() {
      let found = other.iter().enumerate()
        .position(|(j, b)| !right[j] && a.equal(b));
      if let Some(j) = found {
        left[i] = true;
        right[j] = true;
      }
    }
    (left, right)
  }
}

impl<T> Default for EqualSet<T>
{
  fn default() -> EqualSet<T> {
    EqualSet::new()
  }
}

impl<T: Item + Comparable> PartialEq for EqualSet<T>
{
  fn eq(&self, other: &EqualSet<T>) -> bool {
    self.equal(other)
  }
}

impl<T: Item> From<Vec<T>> for EqualSet<T>
{
  /// Panics if `items` are not all of the same concrete type.
  fn from(items: Vec<T>) -> EqualSet<T> {
    EqualSet { set: Set::from(items) }
  }
}

impl<T> From<Set<T>> for EqualSet<T>
{
  fn from(set: Set<T>) -> EqualSet<T> {
    EqualSet { set: set }
  }
}

impl<T> From<EqualSet<T>> for Set<T>
{
  fn from(set: EqualSet<T>) -> Set<T> {
    set.set
  }
}

impl<T: Item> FromIterator<T> for EqualSet<T>
{
  fn from_iter<I>(iterable: I) -> EqualSet<T> where
   I: IntoIterator<Item=T>
  {
    EqualSet { set: Set::from_iter(iterable) }
  }
}

impl<T> IntoIterator for EqualSet<T>
{
  type Item = T;
  type IntoIter = std::vec::IntoIter<T>;

  fn into_iter(self) -> Self::IntoIter {
    self.set.into_iter()
  }
}

impl<'a, T> IntoIterator for &'a EqualSet<T>
{
  type Item = &'a T;
  type IntoIter = std::slice::Iter<'a, T>;

  fn into_iter(self) -> Self::IntoIter {
    self.set.iter()
  }
}

impl<T: fmt::Debug> fmt::Debug for EqualSet<T>
{
  fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
    fmt::Debug::fmt(&self.set, formatter)
  }
}

impl<T> Collection for EqualSet<T>
{
  type Item = T;
}

impl<T> Cardinality for EqualSet<T>
{
  type Size = usize;

  fn size(&self) -> usize {
    self.len()
  }
}

impl<T> Empty for EqualSet<T>
{
  fn empty() -> EqualSet<T> {
    EqualSet::new()
  }
}

impl<T: Item + Comparable> Contains for EqualSet<T>
{
  fn contains(&self, value: &T) -> bool {
    self.has(value)
  }
}

impl<T: Item + Comparable> Union for EqualSet<T>
{
  type Output = EqualSet<T>;

  fn union(&self, rhs: &EqualSet<T>) -> EqualSet<T> {
    self.combine(Some(rhs))
  }
}

impl<T: Item + Comparable> SymmetricDifference for EqualSet<T>
{
  type Output = EqualSet<T>;

  fn symmetric_difference(&self, rhs: &EqualSet<T>) -> EqualSet<T> {
    self.diff(rhs)
  }
}

impl<T: Serialize> Serialize for EqualSet<T>
{
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where
   S: Serializer
  {
    self.set.serialize(serializer)
  }
}

impl<'de, T> Deserialize<'de> for EqualSet<T> where
 T: Item + Deserialize<'de>
{
  fn deserialize<D>(deserializer: D) -> Result<EqualSet<T>, D::Error> where
   D: Deserializer<'de>
  {
    Set::deserialize(deserializer).map(EqualSet::from)
  }
}

#[cfg(any(feature = "quickcheck", test))]
impl<T> quickcheck::Arbitrary for EqualSet<T> where
 T: Item + quickcheck::Arbitrary
{
  fn arbitrary(g: &mut quickcheck::Gen) -> EqualSet<T> {
    EqualSet { set: quickcheck::Arbitrary::arbitrary(g) }
  }

  fn shrink(&self) -> Box<dyn Iterator<Item=EqualSet<T>>> {
    Box::new(quickcheck::Arbitrary::shrink(&self.set).map(EqualSet::from))
  }
}
