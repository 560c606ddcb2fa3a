// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::item::Item;
use crate::comparable::Comparable;

macro_rules! primitive_item_impl
{
  ( $( $source:ty ),* ) =>
  {$(
    impl Item for $source {}

    impl Comparable for $source
    {
      fn equal(&self, other: &$source) -> bool {
        self == other
      }
    }
  )*}
}

primitive_item_impl!(i8,u8,i16,u16,i32,u32,i64,u64,i128,u128,isize,usize,f32,f64,bool,char,(),String,&'static str);
