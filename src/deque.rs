//! Fixed-capacity double-ended queue backed by an inline ring buffer.
//!
//! # Storage layout
//! Elements live in a `[MaybeUninit<T>; N]` array that is never moved or
//! reallocated after construction.  Two cursors bound the live window from
//! opposite ends of the ring:
//!
//! * `back` — the slot the next `push_back` writes; the live back element
//!   sits one ring-step *before* it.
//! * `front` — the slot the next `push_front` writes; the live front element
//!   sits one ring-step *after* it.
//!
//! The back cursor advances with `wrap_next` and the front cursor advances
//! with `wrap_prev`, so the two cursors diverge as the window grows and
//! converge as it shrinks.  The live window is the ring range
//! `[front + 1, back)`; when it crosses index `N - 1` it wraps to index `0`,
//! and traversal-style operations (`clear`, `contains`, `Drop`) split into a
//! high-index pass followed by a low-index pass.
//!
//! # Initial cursor placement
//! A fresh (or cleared) deque centers its cursors at `back = N / 2`,
//! `front = N / 2 - 1`, so a workload that grows from only one side has
//! maximal room before its first wraparound.  This placement is a usability
//! optimization only; correctness never depends on it.
//!
//! # Contract checks
//! The deque has no recoverable-error path.  Precondition breaches
//! (`push_*` on a full deque, `pop_*`/`front`/`back` on an empty one) are
//! caller bugs, checked with `debug_assert!`: debug builds abort with a
//! message naming the violated precondition, release builds compile the
//! checks out and the call is undefined behavior.

use core::fmt;
use core::mem::MaybeUninit;
use core::ptr;

use crate::iter::{Iter, IterMut};

/// A fixed-capacity double-ended queue over `N` inline slots.
///
/// `RingDeque` provides O(1) insertion and removal at both ends without ever
/// touching the heap.  Unlike [`VecDeque`], its capacity is fixed at the type
/// level and its storage is inline, which makes it usable in `no_std` and
/// real-time code where allocation (or allocation jitter) is unacceptable.
///
/// # Generic parameters
/// | Parameter | Meaning |
/// |-----------|---------|
/// | `T` | Element type |
/// | `N` | Capacity; **must be at least 2** (compile-time assertion) |
///
/// # Examples
/// ```
/// use ring_deque::RingDeque;
///
/// let mut deque: RingDeque<i32, 4> = RingDeque::new();
/// deque.push_back(1);
/// deque.push_back(2);
/// deque.push_front(0);
///
/// assert_eq!(deque.len(), 3);
/// assert_eq!(*deque.front(), 0);
/// assert_eq!(*deque.back(), 2);
/// assert!(deque.iter().eq([0, 1, 2].iter()));
/// ```
///
/// # Popping does not return the element
/// `pop_front`/`pop_back` follow a read-then-remove model: read the boundary
/// element through [`front`](RingDeque::front)/[`back`](RingDeque::back)
/// first if the value is needed, then pop.
///
/// ```
/// use ring_deque::RingDeque;
///
/// let mut deque: RingDeque<&str, 2> = RingDeque::new();
/// deque.push_back("keep");
/// deque.push_back("drop");
/// assert_eq!(*deque.back(), "drop");
/// deque.pop_back();
/// assert_eq!(deque.len(), 1);
/// ```
///
/// [`VecDeque`]: https://doc.rust-lang.org/std/collections/struct.VecDeque.html
pub struct RingDeque<T, const N: usize> {
    len: usize,
    back: usize,
    front: usize,
    slots: [MaybeUninit<T>; N],
}

impl<T, const N: usize> RingDeque<T, N> {
    /// Capacity of the deque; equal to the const parameter `N`.
    pub const CAPACITY: usize = N;

    const INITIAL_BACK: usize = N / 2;
    const INITIAL_FRONT: usize = N / 2 - 1;

    /// Creates a new empty deque with its cursors in the centered initial
    /// placement.
    ///
    /// # Panics (compile-time)
    /// Asserts that `N >= 2`.
    pub fn new() -> Self {
        const {
            assert!(N >= 2, "RingDeque capacity N must be at least 2");
        }
        Self {
            len: 0,
            back: Self::INITIAL_BACK,
            front: Self::INITIAL_FRONT,
            slots: unsafe { MaybeUninit::uninit().assume_init() },
        }
    }

    // ─── queries ──────────────────────────────────────────────────────────────

    /// Returns the number of live elements.
    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the deque holds no elements.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if the deque holds `N` elements.
    #[inline(always)]
    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    /// Returns the fixed capacity `N`.
    #[inline(always)]
    pub const fn capacity(&self) -> usize {
        N
    }

    // ─── ring arithmetic ──────────────────────────────────────────────────────

    /// One ring-step forward: `N - 1` is adjacent to `0`.
    #[inline(always)]
    pub(crate) const fn wrap_next(index: usize) -> usize {
        if index == N - 1 {
            0
        } else {
            index + 1
        }
    }

    /// One ring-step backward: `0` is adjacent to `N - 1`.
    #[inline(always)]
    pub(crate) const fn wrap_prev(index: usize) -> usize {
        if index == 0 {
            N - 1
        } else {
            index - 1
        }
    }

    /// Physical index of the first live slot (the front element).
    #[inline(always)]
    pub(crate) const fn begin_index(&self) -> usize {
        Self::wrap_next(self.front)
    }

    /// Physical index one past the last live slot (the back cursor).
    #[inline(always)]
    pub(crate) const fn end_index(&self) -> usize {
        self.back
    }

    /// Shared reference to the element stored at physical `index`.
    ///
    /// # Safety
    /// `index` must denote a currently-live slot.
    #[inline(always)]
    pub(crate) unsafe fn slot(&self, index: usize) -> &T {
        unsafe { self.slots.get_unchecked(index).assume_init_ref() }
    }

    /// Exclusive counterpart of [`slot`](RingDeque::slot).
    ///
    /// # Safety
    /// `index` must denote a currently-live slot.
    #[inline(always)]
    unsafe fn slot_mut(&mut self, index: usize) -> &mut T {
        unsafe { self.slots.get_unchecked_mut(index).assume_init_mut() }
    }

    // ─── boundary access ──────────────────────────────────────────────────────

    /// Returns a shared reference to the front element.
    ///
    /// # Panics
    /// In debug builds, panics if the deque is empty.  In release builds the
    /// check compiles out and calling this on an empty deque is undefined
    /// behavior.
    #[inline(always)]
    pub fn front(&self) -> &T {
        debug_assert!(!self.is_empty(), "front on an empty RingDeque");
        unsafe { self.slot(self.begin_index()) }
    }

    /// Returns an exclusive reference to the front element.
    ///
    /// # Panics
    /// In debug builds, panics if the deque is empty.  In release builds the
    /// check compiles out and calling this on an empty deque is undefined
    /// behavior.
    #[inline(always)]
    pub fn front_mut(&mut self) -> &mut T {
        debug_assert!(!self.is_empty(), "front_mut on an empty RingDeque");
        let index = self.begin_index();
        unsafe { self.slot_mut(index) }
    }

    /// Returns a shared reference to the back element.
    ///
    /// # Panics
    /// In debug builds, panics if the deque is empty.  In release builds the
    /// check compiles out and calling this on an empty deque is undefined
    /// behavior.
    #[inline(always)]
    pub fn back(&self) -> &T {
        debug_assert!(!self.is_empty(), "back on an empty RingDeque");
        unsafe { self.slot(Self::wrap_prev(self.back)) }
    }

    /// Returns an exclusive reference to the back element.
    ///
    /// # Panics
    /// In debug builds, panics if the deque is empty.  In release builds the
    /// check compiles out and calling this on an empty deque is undefined
    /// behavior.
    #[inline(always)]
    pub fn back_mut(&mut self) -> &mut T {
        debug_assert!(!self.is_empty(), "back_mut on an empty RingDeque");
        let index = Self::wrap_prev(self.back);
        unsafe { self.slot_mut(index) }
    }

    // ─── insertion / removal ──────────────────────────────────────────────────

    /// Appends `value` at the back.  O(1).
    ///
    /// Takes the value by move; clone at the call site when a copy should be
    /// kept.
    ///
    /// # Panics
    /// In debug builds, panics if the deque is full.  In release builds the
    /// check compiles out and pushing onto a full deque is undefined
    /// behavior.
    #[inline(always)]
    pub fn push_back(&mut self, value: T) {
        debug_assert!(!self.is_full(), "push_back on a full RingDeque");
        unsafe {
            self.slots.get_unchecked_mut(self.back).write(value);
        }
        self.back = Self::wrap_next(self.back);
        self.len += 1;
    }

    /// Prepends `value` at the front.  O(1).
    ///
    /// The front cursor advances in the decreasing-index ring direction,
    /// opposite to the back cursor.
    ///
    /// # Panics
    /// In debug builds, panics if the deque is full.  In release builds the
    /// check compiles out and pushing onto a full deque is undefined
    /// behavior.
    #[inline(always)]
    pub fn push_front(&mut self, value: T) {
        debug_assert!(!self.is_full(), "push_front on a full RingDeque");
        unsafe {
            self.slots.get_unchecked_mut(self.front).write(value);
        }
        self.front = Self::wrap_prev(self.front);
        self.len += 1;
    }

    /// Removes the back element, dropping it in place.  O(1).
    ///
    /// The removed value is not returned; read it via
    /// [`back`](RingDeque::back) beforehand if it is needed.
    ///
    /// # Panics
    /// In debug builds, panics if the deque is empty.  In release builds the
    /// check compiles out and popping an empty deque is undefined behavior.
    #[inline(always)]
    pub fn pop_back(&mut self) {
        debug_assert!(!self.is_empty(), "pop_back on an empty RingDeque");
        self.back = Self::wrap_prev(self.back);
        self.len -= 1;
        unsafe {
            ptr::drop_in_place(self.slots.get_unchecked_mut(self.back).as_mut_ptr());
        }
    }

    /// Removes the front element, dropping it in place.  O(1).
    ///
    /// The removed value is not returned; read it via
    /// [`front`](RingDeque::front) beforehand if it is needed.
    ///
    /// # Panics
    /// In debug builds, panics if the deque is empty.  In release builds the
    /// check compiles out and popping an empty deque is undefined behavior.
    #[inline(always)]
    pub fn pop_front(&mut self) {
        debug_assert!(!self.is_empty(), "pop_front on an empty RingDeque");
        self.front = Self::wrap_next(self.front);
        self.len -= 1;
        unsafe {
            ptr::drop_in_place(self.slots.get_unchecked_mut(self.front).as_mut_ptr());
        }
    }

    /// Removes and returns the front element, or `None` if empty.
    ///
    /// Internal building block for the owning iterator; the public surface
    /// keeps the read-then-remove model.
    #[inline(always)]
    pub(crate) fn take_front(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.front = Self::wrap_next(self.front);
        self.len -= 1;
        Some(unsafe { self.slots.get_unchecked(self.front).assume_init_read() })
    }

    /// Removes and returns the back element, or `None` if empty.
    #[inline(always)]
    pub(crate) fn take_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.back = Self::wrap_prev(self.back);
        self.len -= 1;
        Some(unsafe { self.slots.get_unchecked(self.back).assume_init_read() })
    }

    // ─── bulk operations ──────────────────────────────────────────────────────

    /// Drops every live element and re-centers both cursors.  O(n).
    ///
    /// Clearing an already-empty deque is a no-op apart from the cursor
    /// re-centering, so repeated clears cause no drift.
    pub fn clear(&mut self) {
        if self.len > 0 {
            let first = self.begin_index();
            // A wrapped window (and the full deque, where first == back)
            // needs two destruction passes: high-index tail, low-index head.
            unsafe {
                if first < self.back {
                    self.drop_range(first, self.back);
                } else {
                    self.drop_range(first, N);
                    self.drop_range(0, self.back);
                }
            }
            self.len = 0;
        }
        self.back = Self::INITIAL_BACK;
        self.front = Self::INITIAL_FRONT;
    }

    /// Drops the elements in `slots[from..to]` in place.
    ///
    /// # Safety
    /// Every slot in `from..to` must be live, and the caller must account for
    /// the elements as removed (adjust `len`) afterwards.
    unsafe fn drop_range(&mut self, from: usize, to: usize) {
        for index in from..to {
            unsafe {
                ptr::drop_in_place(self.slots.get_unchecked_mut(index).as_mut_ptr());
            }
        }
    }

    /// Returns `true` if some live element equals `value`.  O(n).
    ///
    /// Walks exactly the live window with the same split-range traversal as
    /// [`clear`](RingDeque::clear); an empty deque contains nothing.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        if self.is_empty() {
            return false;
        }
        let first = self.begin_index();
        if first < self.back {
            for index in first..self.back {
                if unsafe { self.slot(index) } == value {
                    return true;
                }
            }
        } else {
            for index in (first..N).chain(0..self.back) {
                if unsafe { self.slot(index) } == value {
                    return true;
                }
            }
        }
        false
    }

    // ─── raw storage ──────────────────────────────────────────────────────────

    /// Returns the base address of the backing array.
    ///
    /// Only the live window holds constructed elements, and the logical front
    /// is generally **not** at index 0; this pointer is for interop code that
    /// manages the ring layout itself.
    #[inline(always)]
    pub const fn as_ptr(&self) -> *const T {
        self.slots.as_ptr() as *const T
    }

    /// Mutable counterpart of [`as_ptr`](RingDeque::as_ptr).
    #[inline(always)]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.slots.as_mut_ptr() as *mut T
    }

    // ─── iteration ────────────────────────────────────────────────────────────

    /// Returns a front-to-back iterator over shared references.
    ///
    /// The iterator is double-ended; `iter().rev()` walks back-to-front.
    #[inline(always)]
    pub fn iter(&self) -> Iter<'_, T, N> {
        Iter::new(self)
    }

    /// Returns a front-to-back iterator over exclusive references.
    #[inline(always)]
    pub fn iter_mut(&mut self) -> IterMut<'_, T, N> {
        IterMut::new(self)
    }
}

impl<T, const N: usize> Drop for RingDeque<T, N> {
    fn drop(&mut self) {
        if self.len > 0 {
            let first = self.begin_index();
            unsafe {
                if first < self.back {
                    self.drop_range(first, self.back);
                } else {
                    self.drop_range(first, N);
                    self.drop_range(0, self.back);
                }
            }
            self.len = 0;
        }
    }
}

impl<T, const N: usize> Default for RingDeque<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, const N: usize> Clone for RingDeque<T, N> {
    /// Clones into a fresh deque with re-centered cursors; the logical
    /// front-to-back order is preserved, the physical slot positions are not.
    fn clone(&self) -> Self {
        let mut clone = Self::new();
        for item in self.iter() {
            clone.push_back(item.clone());
        }
        clone
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for RingDeque<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq, const N: usize> PartialEq for RingDeque<T, N> {
    fn eq(&self, other: &Self) -> bool {
        if self.len != other.len {
            return false;
        }
        self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq, const N: usize> Eq for RingDeque<T, N> {}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::RefCell;
    use std::rc::Rc;
    use std::vec;
    use std::vec::Vec;

    fn collect<T: Clone, const N: usize>(deque: &RingDeque<T, N>) -> Vec<T> {
        deque.iter().cloned().collect()
    }

    // ─── queries / counting ───────────────────────────────────────────────────

    #[test]
    fn test_deque_new_is_empty() {
        let d: RingDeque<i32, 4> = RingDeque::new();
        assert!(d.is_empty());
        assert!(!d.is_full());
        assert_eq!(d.len(), 0);
        assert_eq!(d.capacity(), 4);
        assert_eq!(RingDeque::<i32, 4>::CAPACITY, 4);
    }

    #[test]
    fn test_deque_len_tracks_pushes_and_pops() {
        let mut d: RingDeque<i32, 6> = RingDeque::new();
        d.push_back(1);
        d.push_front(0);
        d.push_back(2);
        assert_eq!(d.len(), 3);
        d.pop_front();
        assert_eq!(d.len(), 2);
        d.pop_back();
        d.pop_back();
        assert!(d.is_empty());
    }

    #[test]
    fn test_deque_full_iff_len_equals_capacity() {
        let mut d: RingDeque<u8, 3> = RingDeque::new();
        d.push_back(1);
        d.push_back(2);
        assert!(!d.is_full());
        d.push_front(0);
        assert!(d.is_full());
        assert_eq!(d.len(), 3);
        d.pop_back();
        assert!(!d.is_full());
    }

    // ─── boundary access / round-trip ─────────────────────────────────────────

    #[test]
    fn test_deque_round_trip_back() {
        let mut d: RingDeque<i32, 4> = RingDeque::new();
        d.push_back(7);
        assert_eq!(*d.back(), 7);
        assert_eq!(*d.front(), 7);
        d.push_back(8);
        assert_eq!(*d.back(), 8);
        d.pop_back();
        assert_eq!(d.len(), 1);
        assert_eq!(*d.back(), 7);
    }

    #[test]
    fn test_deque_round_trip_front() {
        let mut d: RingDeque<i32, 4> = RingDeque::new();
        d.push_front(7);
        assert_eq!(*d.front(), 7);
        d.push_front(6);
        assert_eq!(*d.front(), 6);
        d.pop_front();
        assert_eq!(*d.front(), 7);
        assert_eq!(d.len(), 1);
    }

    #[test]
    fn test_deque_mut_access() {
        let mut d: RingDeque<i32, 4> = RingDeque::new();
        d.push_back(1);
        d.push_back(2);
        *d.front_mut() = 10;
        *d.back_mut() = 20;
        assert_eq!(collect(&d), vec![10, 20]);
    }

    // ─── initial placement ────────────────────────────────────────────────────

    #[test]
    fn test_deque_initial_placement_is_centered() {
        let mut d: RingDeque<i32, 8> = RingDeque::new();
        let base = d.as_ptr();
        d.push_back(42);
        // First push_back lands at physical index N / 2.
        assert!(core::ptr::eq(d.front(), unsafe { &*base.add(4) }));

        let mut d: RingDeque<i32, 8> = RingDeque::new();
        let base = d.as_ptr();
        d.push_front(42);
        // First push_front lands at physical index N / 2 - 1.
        assert!(core::ptr::eq(d.front(), unsafe { &*base.add(3) }));
    }

    #[test]
    fn test_deque_one_sided_growth_defers_wraparound() {
        // With centered cursors, N / 2 push_backs stay in the high half.
        let mut d: RingDeque<i32, 8> = RingDeque::new();
        let base = d.as_ptr();
        for i in 0..4 {
            d.push_back(i);
        }
        assert!(core::ptr::eq(d.back(), unsafe { &*base.add(7) }));
    }

    // ─── wraparound ───────────────────────────────────────────────────────────

    #[test]
    fn test_deque_wraparound_refill_keeps_order() {
        let mut d: RingDeque<i32, 4> = RingDeque::new();
        for i in 0..4 {
            d.push_back(i); // crosses N - 1 -> 0
        }
        d.pop_front();
        d.pop_front();
        d.push_back(4);
        d.push_back(5);
        assert_eq!(d.len(), 4);
        assert!(d.is_full());
        assert_eq!(collect(&d), vec![2, 3, 4, 5]);
    }

    #[test]
    fn test_deque_front_growth_wraps_low_end() {
        let mut d: RingDeque<i32, 4> = RingDeque::new();
        for i in 0..4 {
            d.push_front(i); // crosses 0 -> N - 1
        }
        assert!(d.is_full());
        assert_eq!(collect(&d), vec![3, 2, 1, 0]);
        assert_eq!(*d.front(), 3);
        assert_eq!(*d.back(), 0);
    }

    #[test]
    fn test_deque_interleaved_scenario() {
        let mut d: RingDeque<i32, 3> = RingDeque::new();
        d.push_back(1);
        d.push_back(2);
        d.push_front(0);
        assert_eq!(d.len(), 3);
        assert!(d.is_full());
        assert_eq!(*d.front(), 0);
        assert_eq!(*d.back(), 2);
        assert_eq!(collect(&d), vec![0, 1, 2]);

        d.pop_back();
        assert_eq!(d.len(), 2);
        assert_eq!(*d.back(), 1);

        d.push_back(9);
        assert!(d.is_full());
        assert_eq!(collect(&d), vec![0, 1, 9]);
    }

    #[test]
    fn test_deque_many_revolutions_keep_order() {
        let mut d: RingDeque<i32, 4> = RingDeque::new();
        d.push_back(0);
        d.push_back(1);
        for i in 2..50 {
            d.pop_front();
            d.push_back(i);
        }
        assert_eq!(collect(&d), vec![48, 49]);
    }

    // ─── clear ────────────────────────────────────────────────────────────────

    #[test]
    fn test_deque_clear_drops_and_recenters() {
        let mut d: RingDeque<i32, 4> = RingDeque::new();
        d.push_back(1);
        d.push_back(2);
        d.clear();
        assert!(d.is_empty());

        // Cursors are back at the centered placement.
        let base = d.as_ptr();
        d.push_back(3);
        assert!(core::ptr::eq(d.front(), unsafe { &*base.add(2) }));
        assert_eq!(collect(&d), vec![3]);
    }

    #[test]
    fn test_deque_clear_idempotent_on_empty() {
        let mut d: RingDeque<i32, 4> = RingDeque::new();
        d.clear();
        d.clear();
        assert!(d.is_empty());
        let base = d.as_ptr();
        d.push_back(1);
        assert!(core::ptr::eq(d.front(), unsafe { &*base.add(2) }));
    }

    #[test]
    fn test_deque_clear_wrapped_window() {
        let mut d: RingDeque<i32, 4> = RingDeque::new();
        for i in 0..4 {
            d.push_back(i);
        }
        d.pop_front();
        d.push_back(4); // live window now wraps past N - 1
        d.clear();
        assert!(d.is_empty());
        d.push_front(9);
        assert_eq!(collect(&d), vec![9]);
    }

    // ─── contains ─────────────────────────────────────────────────────────────

    #[test]
    fn test_deque_contains_empty_is_false() {
        let d: RingDeque<i32, 4> = RingDeque::new();
        assert!(!d.contains(&0));
        assert!(!d.contains(&i32::MAX));
    }

    #[test]
    fn test_deque_contains_linear_window() {
        let mut d: RingDeque<i32, 8> = RingDeque::new();
        d.push_back(1);
        d.push_back(2);
        d.push_back(3);
        assert!(d.contains(&1));
        assert!(d.contains(&3));
        assert!(!d.contains(&4));
    }

    #[test]
    fn test_deque_contains_wrapped_window() {
        let mut d: RingDeque<i32, 4> = RingDeque::new();
        for i in 0..4 {
            d.push_back(i);
        }
        d.pop_front();
        d.pop_front();
        d.push_back(4);
        d.push_back(5); // window wraps
        for v in [2, 3, 4, 5] {
            assert!(d.contains(&v));
        }
        assert!(!d.contains(&0));
        assert!(!d.contains(&1));
    }

    #[test]
    fn test_deque_contains_ignores_popped_slots() {
        // Popped values physically linger in their slots until overwritten;
        // contains must not see them.
        let mut d: RingDeque<i32, 4> = RingDeque::new();
        d.push_back(1);
        d.push_back(2);
        d.pop_back();
        assert!(!d.contains(&2));
        assert!(d.contains(&1));
    }

    // ─── drop accounting ──────────────────────────────────────────────────────

    struct Dropper(Rc<RefCell<i32>>);

    impl Drop for Dropper {
        fn drop(&mut self) {
            *self.0.borrow_mut() += 1;
        }
    }

    #[test]
    fn test_deque_pop_drops_exactly_once() {
        let counter = Rc::new(RefCell::new(0));
        let mut d: RingDeque<Dropper, 4> = RingDeque::new();
        d.push_back(Dropper(counter.clone()));
        d.push_front(Dropper(counter.clone()));
        d.pop_back();
        assert_eq!(*counter.borrow(), 1);
        d.pop_front();
        assert_eq!(*counter.borrow(), 2);
    }

    #[test]
    fn test_deque_clear_drops_wrapped_window() {
        let counter = Rc::new(RefCell::new(0));
        let mut d: RingDeque<Dropper, 4> = RingDeque::new();
        for _ in 0..4 {
            d.push_back(Dropper(counter.clone()));
        }
        d.pop_front();
        assert_eq!(*counter.borrow(), 1);
        d.push_back(Dropper(counter.clone())); // wraps
        d.clear();
        assert_eq!(*counter.borrow(), 5);
    }

    #[test]
    fn test_deque_drop_releases_live_elements_only() {
        let counter = Rc::new(RefCell::new(0));
        {
            let mut d: RingDeque<Dropper, 4> = RingDeque::new();
            d.push_back(Dropper(counter.clone()));
            d.push_back(Dropper(counter.clone()));
            d.push_back(Dropper(counter.clone()));
            d.pop_front();
            assert_eq!(*counter.borrow(), 1);
        }
        assert_eq!(*counter.borrow(), 3);
    }

    // ─── traits ───────────────────────────────────────────────────────────────

    #[test]
    fn test_deque_traits_clone_preserves_order() {
        let mut d: RingDeque<i32, 4> = RingDeque::new();
        for i in 0..4 {
            d.push_back(i);
        }
        d.pop_front();
        d.push_back(4); // wrapped source
        let cloned = d.clone();
        assert_eq!(collect(&cloned), collect(&d));
        assert_eq!(cloned, d);
    }

    #[test]
    fn test_deque_traits_eq_and_debug() {
        let mut a: RingDeque<i32, 4> = RingDeque::new();
        let mut b: RingDeque<i32, 4> = RingDeque::new();
        a.push_back(1);
        b.push_front(1);
        // Same logical content at different physical positions.
        assert_eq!(a, b);
        b.push_back(2);
        assert_ne!(a, b);

        let debug = std::format!("{:?}", b);
        assert_eq!(debug, "[1, 2]");
    }

    #[test]
    fn test_deque_traits_default() {
        let d: RingDeque<i32, 2> = RingDeque::default();
        assert!(d.is_empty());
    }

    // ─── contract checks (debug assertions are on in the test profile) ────────

    #[test]
    #[should_panic(expected = "push_back on a full RingDeque")]
    fn test_deque_contract_push_back_full() {
        let mut d: RingDeque<i32, 2> = RingDeque::new();
        d.push_back(1);
        d.push_back(2);
        d.push_back(3);
    }

    #[test]
    #[should_panic(expected = "push_front on a full RingDeque")]
    fn test_deque_contract_push_front_full() {
        let mut d: RingDeque<i32, 2> = RingDeque::new();
        d.push_front(1);
        d.push_front(2);
        d.push_front(3);
    }

    #[test]
    #[should_panic(expected = "pop_back on an empty RingDeque")]
    fn test_deque_contract_pop_back_empty() {
        let mut d: RingDeque<i32, 2> = RingDeque::new();
        d.pop_back();
    }

    #[test]
    #[should_panic(expected = "pop_front on an empty RingDeque")]
    fn test_deque_contract_pop_front_empty() {
        let mut d: RingDeque<i32, 2> = RingDeque::new();
        d.pop_front();
    }

    #[test]
    #[should_panic(expected = "front on an empty RingDeque")]
    fn test_deque_contract_front_empty() {
        let d: RingDeque<i32, 2> = RingDeque::new();
        let _ = d.front();
    }

    #[test]
    #[should_panic(expected = "back on an empty RingDeque")]
    fn test_deque_contract_back_empty() {
        let d: RingDeque<i32, 2> = RingDeque::new();
        let _ = d.back();
    }
}
