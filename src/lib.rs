#![no_std]

//! `GrowVec`: a growable, contiguous vector with explicit capacity
//! management.
//!
//! `GrowVec<T>` owns a single heap buffer and tracks a logical length and an
//! allocated capacity separately. Appends are amortized O(1) under a
//! capacity-doubling policy; insertion and removal at arbitrary positions
//! shift the affected suffix in place. The crate is `no_std` compatible and
//! needs only `alloc`.
//!
//! ```
//! use growvec::GrowVec;
//!
//! let mut v = GrowVec::new();
//! assert!(v.is_empty());
//! assert_eq!(v.capacity(), 0);
//!
//! v.push(1);
//! v.push(2);
//! v.push(3);
//! assert_eq!(v.len(), 3);
//! assert_eq!(v, [1, 2, 3]);
//! ```
//!
//! # Capacity management
//!
//! `reserve` takes an absolute slot count and reallocates to exactly that
//! capacity; `shrink_to_fit` trims the buffer back down to the length. Any
//! append that finds the buffer full doubles the capacity (`max(1, cap * 2)`)
//! before placing the element.
//!
//! ```
//! use growvec::GrowVec;
//!
//! let mut v = GrowVec::with_capacity(2);
//! v.push("a");
//! v.push("b");
//! assert_eq!(v.capacity(), 2);
//! v.push("c"); // full: the buffer doubles
//! assert_eq!(v.capacity(), 4);
//!
//! v.shrink_to_fit();
//! assert_eq!(v.capacity(), v.len());
//! ```
//!
//! # Structural mutation
//!
//! Positions are plain indices. `insert` places an element before the given
//! index, `remove` returns the removed element, and the front variants
//! (`push_front`, `pop_front`) shift the whole live prefix, which makes
//! them O(n) by nature.
//!
//! ```
//! use growvec::GrowVec;
//!
//! let mut v = GrowVec::from([2, 3]);
//! v.insert(1, 9);
//! assert_eq!(v, [2, 9, 3]);
//!
//! assert_eq!(v.remove(0), 2);
//! assert_eq!(v, [9, 3]);
//!
//! v.push_front(7);
//! assert_eq!(v.pop_front(), Some(7));
//! ```
//!
//! # Checked access
//!
//! Indexing with `v[i]` panics on an out-of-range index; `try_get` signals
//! the same condition as a recoverable [`GrowVecError`] instead.
//!
//! ```
//! use growvec::{GrowVec, GrowVecError};
//!
//! let v = GrowVec::from([2, 4, 6]);
//! assert_eq!(v.try_get(1), Ok(&4));
//! assert_eq!(
//!     v.try_get(5),
//!     Err(GrowVecError::IndexOutOfBounds { index: 5, length: 3 })
//! );
//! ```
//!
//! # Iterator support
//!
//! `iter` and `iter_mut` return double-ended, exactly-sized cursors over the
//! live prefix; both are also reachable through `IntoIterator` on `&GrowVec`
//! and `&mut GrowVec`. A live iterator borrows the vector, so any mutation
//! that would invalidate it is rejected at compile time.
//!
//! ```
//! use growvec::GrowVec;
//!
//! let mut v = GrowVec::from([1, 2, 3]);
//! for x in v.iter_mut() {
//!     *x *= 10;
//! }
//! let doubled: growvec::GrowVec<i32> = v.iter().map(|x| x * 2).collect();
//! assert_eq!(doubled, [20, 40, 60]);
//! ```

extern crate alloc;

mod core;
mod error;
mod iter;

// Re-export public types and traits
pub use crate::core::GrowVec;
pub use crate::error::GrowVecError;
pub use crate::iter::{GrowVecIter, GrowVecIterMut};
