// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Homogeneous multiset without equality.
//!
//! A `Set` stores items without interpreting them: duplicates are kept and no operation compares two items. It is the storage layer of [EqualSet](../equal_set/index.html) and can be used alone when only adding and concatenating values is needed.
//!
//! Iteration yields the items in insertion order, `combine` appends the argument sets after the receiver. This order carries no meaning for the multiset but it is stable.
//!
//! Operations never modify the receiver; they return a new set.
//!
//! # Examples
//!
//! ```rust
//! use unordered::Set;
//!
//! let a = Set::new().add(0).add(1).add(2).add(0);
//! assert_eq!(a.len(), 4);
//! assert_eq!(a.first(), Some(&0));
//! assert_eq!(a.last(), Some(&0));
//!
//! let b: Set<i32> = vec![3, 4].into();
//! let c = a.combine(&[b]);
//! assert_eq!(c.as_slice(), &[0, 1, 2, 0, 3, 4]);
//! assert_eq!(a.len(), 4);
//! ```

use crate::check::{self, Fault, ASSERTING};
use crate::item::Item;
use gcollections::kind::*;
use gcollections::ops::*;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::fmt;
use std::iter::FromIterator;

#[derive(Clone)]
pub struct Set<T> {
  items: Vec<T>
}

impl<T> Set<T>
{
  pub fn new() -> Set<T> {
    Set { items: vec![] }
  }

  // precondition: `items` must be homogeneous.
  pub(crate) fn wrap(items: Vec<T>) -> Set<T> {
    Set { items: items }
  }

  pub fn len(&self) -> usize {
    self.items.len()
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  pub fn iter(&self) -> std::slice::Iter<'_, T> {
    self.items.iter()
  }

  pub fn as_slice(&self) -> &[T] {
    &self.items
  }

  pub fn first(&self) -> Option<&T> {
    self.items.first()
  }

  pub fn last(&self) -> Option<&T> {
    self.items.last()
  }

  pub fn into_vec(self) -> Vec<T> {
    self.items
  }
}

impl<T: Item> Set<T>
{
  /// Returns a new set with `item` appended. Duplicates are allowed.
  ///
  /// Panics if the set is not empty and `item` has a different concrete type than the items already stored (only observable with type-erased items).
  pub fn add(&self, item: T) -> Set<T> {
    if ASSERTING {
      if let Some(witness) = self.items.first() {
        check::same_item(witness, &item);
      }
    }
    let mut items = Vec::with_capacity(self.items.len() + 1);
    items.extend_from_slice(&self.items);
    items.push(item);
    Set::wrap(items)
  }

  /// Returns a new set with the items of the receiver followed by the items of each set in `with`, in order. Duplicates are not removed.
  ///
  /// Panics if `with` is empty, or if two non-empty sets among the receiver and `with` hold items of different concrete types.
  pub fn combine<'a, I>(&self, with: I) -> Set<T> where
   I: IntoIterator<Item=&'a Set<T>>
  {
    let with: Vec<&Set<T>> = with.into_iter().collect();
    if ASSERTING {
      if with.is_empty() {
        check::fault(Fault::EmptyCombine);
      }
      check::same_sets(
        Some(self.as_slice()).into_iter()
          .chain(with.iter().map(|set| set.as_slice())));
    }
    let len = with.iter().fold(self.len(), |len, set| len + set.len());
    let mut items = Vec::with_capacity(len);
    items.extend_from_slice(&self.items);
    for set in with {
      items.extend_from_slice(&set.items);
    }
    Set::wrap(items)
  }
}

impl<T> Default for Set<T>
{
  fn default() -> Set<T> {
    Set::new()
  }
}

impl<T: Item> From<Vec<T>> for Set<T>
{
  /// Panics if `items` are not all of the same concrete type.
  fn from(items: Vec<T>) -> Set<T> {
    if ASSERTING {
      check::homogeneous(&items);
    }
    Set::wrap(items)
  }
}

impl<T: Item> FromIterator<T> for Set<T>
{
  fn from_iter<I>(iterable: I) -> Set<T> where
   I: IntoIterator<Item=T>
  {
    Set::from(iterable.into_iter().collect::<Vec<T>>())
  }
}

impl<T> IntoIterator for Set<T>
{
  type Item = T;
  type IntoIter = std::vec::IntoIter<T>;

  fn into_iter(self) -> Self::IntoIter {
    self.items.into_iter()
  }
}

impl<'a, T> IntoIterator for &'a Set<T>
{
  type Item = &'a T;
  type IntoIter = std::slice::Iter<'a, T>;

  fn into_iter(self) -> Self::IntoIter {
    self.items.iter()
  }
}

impl<T: fmt::Debug> fmt::Debug for Set<T>
{
  fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
    formatter.debug_set().entries(self.items.iter()).finish()
  }
}

impl<T> Collection for Set<T>
{
  type Item = T;
}

impl<T> Cardinality for Set<T>
{
  type Size = usize;

  fn size(&self) -> usize {
    self.len()
  }
}

impl<T> Empty for Set<T>
{
  fn empty() -> Set<T> {
    Set::new()
  }
}

impl<T: Item> Union for Set<T>
{
  type Output = Set<T>;

  fn union(&self, rhs: &Set<T>) -> Set<T> {
    self.combine(Some(rhs))
  }
}

impl<T: Serialize> Serialize for Set<T>
{
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where
   S: Serializer
  {
    serializer.collect_seq(self.items.iter())
  }
}

impl<'de, T> Deserialize<'de> for Set<T> where
 T: Item + Deserialize<'de>
{
  fn deserialize<D>(deserializer: D) -> Result<Set<T>, D::Error> where
   D: Deserializer<'de>
  {
    Vec::<T>::deserialize(deserializer).map(Set::from)
  }
}

#[cfg(any(feature = "quickcheck", test))]
impl<T> quickcheck::Arbitrary for Set<T> where
 T: Item + quickcheck::Arbitrary
{
  fn arbitrary(g: &mut quickcheck::Gen) -> Set<T> {
    Set::wrap(quickcheck::Arbitrary::arbitrary(g))
  }

  fn shrink(&self) -> Box<dyn Iterator<Item=Set<T>>> {
    Box::new(quickcheck::Arbitrary::shrink(&self.items).map(Set::wrap))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::dynamic::Dynamic;
  use quickcheck_macros::quickcheck;
  use serde_test::{assert_ser_tokens, assert_de_tokens, assert_de_tokens_error, Token};

  fn test_result<T>(test_id: String, result: &Set<T>, expected: &[T]) where
   T: PartialEq + fmt::Debug
  {
    assert!(result.as_slice() == expected,
      "{} | {:?} is different from the expected value: {:?}.", test_id, result, expected);
  }

  #[test]
  fn test_add() {
    let cases = vec![
      (1, vec![], 0, vec![0]),
      (2, vec![0, 1, 2], 0, vec![0, 1, 2, 0]),
      (3, vec![0, 0, 1, 2, 3, 4, 5], 0, vec![0, 0, 1, 2, 3, 4, 5, 0]),
    ];

    for (id, a, item, expected) in cases {
      let a: Set<i32> = a.into();
      test_result(format!("test #{} of add", id), &a.add(item), &expected);
    }
  }

  #[test]
  fn test_add_scenario() {
    let set = Set::new().add(0).add(1).add(2).add(0);
    assert_eq!(set.len(), 4);
    assert_eq!(set.first(), Some(&0));
    assert_eq!(set.last(), Some(&0));
  }

  #[test]
  fn test_add_leaves_receiver_untouched() {
    let a: Set<&str> = vec!["hello", ",", "world"].into();
    let b = a.add("!");
    let c = a.add("?");
    test_result("receiver".into(), &a, &["hello", ",", "world"]);
    test_result("first branch".into(), &b, &["hello", ",", "world", "!"]);
    test_result("second branch".into(), &c, &["hello", ",", "world", "?"]);
  }

  #[test]
  fn test_combine() {
    // The three first vectors are the operands and the expected result is last.
    let cases = vec![
      (1, vec![0, 1, 2], vec![2, 1, 0], vec![1, 2, 0], vec![0, 1, 2, 2, 1, 0, 1, 2, 0]),
      (2, vec![], vec![], vec![], vec![]),
      (3, vec![], vec![1], vec![], vec![1]),
      (4, vec![1, 1], vec![], vec![1], vec![1, 1, 1]),
    ];

    for (id, a, b, c, expected) in cases {
      let (a, b, c): (Set<i32>, Set<i32>, Set<i32>) = (a.into(), b.into(), c.into());
      let result = a.combine(vec![&b, &c]);
      assert_eq!(result.len(), a.len() + b.len() + c.len());
      test_result(format!("test #{} of combine", id), &result, &expected);
      test_result(format!("test #{} of union", id), &a.union(&b), &[a.as_slice(), b.as_slice()].concat());
    }
  }

  #[test]
  fn test_combine_strings() {
    let a: Set<&str> = vec!["hello"].into();
    let b: Set<&str> = vec!["world"].into();
    let c: Set<&str> = vec![",", "!"].into();
    test_result("strings".into(), &a.combine(&[b, c]), &["hello", "world", ",", "!"]);
  }

  #[test]
  fn test_collection_traits() {
    let empty: Set<u8> = Empty::empty();
    assert_eq!(empty.size(), 0);
    assert!(IsEmpty::is_empty(&empty));
    let set: Set<u8> = (0..5).collect();
    assert_eq!(set.size(), 5);
    assert!(!IsEmpty::is_empty(&set));
    assert_eq!(format!("{:?}", Set::new().add(1).add(1)), "{1, 1}");
    assert_eq!(set.iter().sum::<u8>(), 10);
    assert_eq!(set.into_vec(), vec![0, 1, 2, 3, 4]);
  }

  #[test]
  fn test_dynamic_items() {
    let set = Set::new().add(Dynamic::new(1)).add(Dynamic::new(2));
    let empty: Set<Dynamic> = Set::new();
    let other = Set::new().add(Dynamic::new(3));
    let all = empty.combine(&[set, Set::new(), other]);
    let values: Vec<i32> = all.iter().map(|v| *v.downcast_ref::<i32>().unwrap()).collect();
    assert_eq!(values, vec![1, 2, 3]);
  }

  #[cfg(feature = "checked")]
  #[test]
  #[should_panic(expected = "doesn't match new item type")]
  fn test_add_heterogeneous() {
    Set::new().add(Dynamic::new(0)).add(Dynamic::new("0"));
  }

  #[cfg(feature = "checked")]
  #[test]
  #[should_panic(expected = "doesn't match new item type")]
  fn test_from_heterogeneous() {
    let _: Set<Dynamic> = vec![Dynamic::new(0), Dynamic::new(0u8)].into();
  }

  #[cfg(feature = "checked")]
  #[test]
  #[should_panic(expected = "doesn't match next set type")]
  fn test_combine_heterogeneous() {
    let a = Set::new().add(Dynamic::new(0));
    let b = Set::new().add(Dynamic::new('0'));
    a.combine(&[Set::new(), b]);
  }

  #[cfg(feature = "checked")]
  #[test]
  #[should_panic(expected = "combine called for zero sets")]
  fn test_combine_nothing() {
    let a: Set<i32> = vec![1].into();
    a.combine(vec![]);
  }

  #[test]
  fn test_serde() {
    let set: Set<i32> = vec![3, 1, 3].into();
    let tokens = [
      Token::Seq { len: Some(3) },
      Token::I32(3),
      Token::I32(1),
      Token::I32(3),
      Token::SeqEnd
    ];
    assert_ser_tokens(&set, &tokens);
    assert_de_tokens(&SliceEq(set), &tokens);
    assert_de_tokens_error::<Set<i32>>(&[Token::Str("set")], "invalid type: string \"set\", expected a sequence");
  }

  // `Set` has no equality; compare the underlying sequences for `assert_de_tokens`.
  #[derive(Debug)]
  struct SliceEq(Set<i32>);

  impl PartialEq for SliceEq {
    fn eq(&self, other: &SliceEq) -> bool {
      self.0.as_slice() == other.0.as_slice()
    }
  }

  impl<'de> Deserialize<'de> for SliceEq {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<SliceEq, D::Error> {
      Set::deserialize(deserializer).map(SliceEq)
    }
  }

  #[quickcheck]
  fn add_preserves_order_and_count(set: Set<u8>, item: u8) -> bool {
    let result = set.add(item);
    result.len() == set.len() + 1
      && &result.as_slice()[..set.len()] == set.as_slice()
      && result.last() == Some(&item)
  }

  #[quickcheck]
  fn combine_is_left_to_right(a: Set<u8>, b: Set<u8>, c: Set<u8>) -> bool {
    let result = a.combine(&[b.clone(), c.clone()]);
    result.len() == a.len() + b.len() + c.len()
      && result.as_slice() == [a.as_slice(), b.as_slice(), c.as_slice()].concat().as_slice()
  }

  #[quickcheck]
  fn combine_is_associative(a: Set<u8>, b: Set<u8>, c: Set<u8>) -> bool {
    let left = a.combine(&[b.clone()]).combine(&[c.clone()]);
    let right = a.combine(&[b.combine(&[c])]);
    left.as_slice() == right.as_slice()
  }
}
