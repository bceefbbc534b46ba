//! # Ring Deque
//!
//! A fixed-capacity double-ended queue backed by contiguous storage arranged
//! as a ring buffer.
//!
//! `RingDeque<T, N>` owns `N` inline slots chosen at the type level: no heap
//! allocation ever happens, no element storage is reallocated or moved after
//! construction, and every operation other than full traversal is O(1).
//! That makes it a fit for embedded, real-time, and performance-sensitive
//! code where allocation (or allocation jitter) is off the table.
//!
//! ## Key Features
//!
//! * **Inline storage:** all `N` slots live inside the container value; the
//!   crate is `no_std`.
//! * **Double-ended:** O(1) push and pop at both the front and the back,
//!   with wraparound-aware cursor arithmetic.
//! * **Centered start:** a fresh deque places its cursors at the middle of
//!   the ring, so growth from a single side defers wraparound as long as
//!   possible.
//! * **Bidirectional iteration:** `iter()` walks front-to-back and is a
//!   `DoubleEndedIterator`, so `iter().rev()` walks back-to-front.
//! * **Zero-overhead contracts:** preconditions (push on full, pop on empty)
//!   are `debug_assert!`ed — checked in debug builds, free in release
//!   builds.
//!
//! ## Capacity Constraint (`N`)
//!
//! `N` must be at least 2; this is enforced by a compile-time assertion in
//! [`RingDeque::new`].  Any size is allowed — no power-of-two requirement,
//! since the ring arithmetic uses adjacency tests rather than bitmasks.
//!
//! ## Examples
//!
//! ```rust
//! use ring_deque::RingDeque;
//!
//! let mut deque: RingDeque<i32, 4> = RingDeque::new();
//!
//! deque.push_back(1);
//! deque.push_back(2);
//! deque.push_front(0);
//!
//! assert_eq!(deque.len(), 3);
//! assert_eq!(*deque.front(), 0);
//! assert_eq!(*deque.back(), 2);
//! assert!(deque.contains(&1));
//!
//! // Read-then-remove: pop does not return the value.
//! deque.pop_front();
//! assert_eq!(*deque.front(), 1);
//! ```
//!
//! Iteration stays in logical front-to-back order no matter how often the
//! ring has wrapped:
//!
//! ```rust
//! use ring_deque::RingDeque;
//!
//! let mut deque: RingDeque<i32, 4> = RingDeque::new();
//! for i in 0..4 {
//!     deque.push_back(i);
//! }
//! deque.pop_front();
//! deque.pop_front();
//! deque.push_back(4);
//! deque.push_back(5); // the live window now wraps around the ring
//!
//! assert!(deque.is_full());
//! assert!(deque.iter().eq([2, 3, 4, 5].iter()));
//! assert!(deque.iter().rev().eq([5, 4, 3, 2].iter()));
//! ```

#![no_std]

#[cfg(test)]
extern crate std;

// --- Module Declarations ---

pub mod deque;
pub mod iter;

// --- Re-exports ---

pub use deque::RingDeque;
pub use iter::{IntoIter, Iter, IterMut};
