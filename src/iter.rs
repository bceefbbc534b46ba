//! Cursors over a [`RingDeque`]'s live window.
//!
//! Every iterator here is an owner-handle-plus-index pair: it never owns
//! element storage, only a reference (or raw base pointer) into the deque
//! plus ring indices.  A forward step applies the ring's `wrap_next` rule —
//! the same rule that advances the back cursor — and a backward step applies
//! `wrap_prev`, so `iter().rev()` (the standard reverse adaptor) is the
//! back-to-front traversal.
//!
//! The cursor pair alone cannot distinguish an empty window from a full one
//! (both have the first live slot coincide with the back cursor), so each
//! iterator also carries the remaining element count.
//!
//! Structural mutation of the deque invalidates its iterators; the borrow
//! checker enforces this, since `push_*`/`pop_*`/`clear` need `&mut self`,
//! which cannot coexist with a live borrowing iterator.

use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::ptr::{self, NonNull};

use crate::deque::RingDeque;

// ─── Iter ─────────────────────────────────────────────────────────────────────

/// Front-to-back iterator over shared references, created by
/// [`RingDeque::iter`].
pub struct Iter<'a, T, const N: usize> {
    deque: &'a RingDeque<T, N>,
    /// Physical index of the next front-side element.
    head: usize,
    /// Physical index one past the next back-side element.
    tail: usize,
    /// Elements not yet yielded from either end.
    len: usize,
}

impl<'a, T, const N: usize> Iter<'a, T, N> {
    pub(crate) fn new(deque: &'a RingDeque<T, N>) -> Self {
        Self {
            deque,
            head: deque.begin_index(),
            tail: deque.end_index(),
            len: deque.len(),
        }
    }
}

impl<'a, T, const N: usize> Iterator for Iter<'a, T, N> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.len == 0 {
            return None;
        }
        let item = unsafe { self.deque.slot(self.head) };
        self.head = RingDeque::<T, N>::wrap_next(self.head);
        self.len -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T, const N: usize> DoubleEndedIterator for Iter<'a, T, N> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.len == 0 {
            return None;
        }
        self.tail = RingDeque::<T, N>::wrap_prev(self.tail);
        self.len -= 1;
        Some(unsafe { self.deque.slot(self.tail) })
    }
}

impl<T, const N: usize> ExactSizeIterator for Iter<'_, T, N> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<T, const N: usize> FusedIterator for Iter<'_, T, N> {}

impl<T, const N: usize> Clone for Iter<'_, T, N> {
    fn clone(&self) -> Self {
        Self {
            deque: self.deque,
            head: self.head,
            tail: self.tail,
            len: self.len,
        }
    }
}

impl<T, const N: usize> PartialEq for Iter<'_, T, N> {
    /// Two iterators are equal only when they refer to the same position in
    /// the same deque instance; iterators over different deques never
    /// compare equal.
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.deque, other.deque)
            && self.head == other.head
            && self.tail == other.tail
            && self.len == other.len
    }
}

impl<T, const N: usize> Eq for Iter<'_, T, N> {}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Iter<'_, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

// ─── IterMut ──────────────────────────────────────────────────────────────────

/// Front-to-back iterator over exclusive references, created by
/// [`RingDeque::iter_mut`].
///
/// Works over the raw storage base pointer rather than `&mut RingDeque` so
/// that each yielded `&'a mut T` is disjoint from the iterator itself.
pub struct IterMut<'a, T, const N: usize> {
    slots: NonNull<T>,
    head: usize,
    tail: usize,
    len: usize,
    _marker: PhantomData<&'a mut T>,
}

unsafe impl<T: Send, const N: usize> Send for IterMut<'_, T, N> {}
unsafe impl<T: Sync, const N: usize> Sync for IterMut<'_, T, N> {}

impl<'a, T, const N: usize> IterMut<'a, T, N> {
    pub(crate) fn new(deque: &'a mut RingDeque<T, N>) -> Self {
        let head = deque.begin_index();
        let tail = deque.end_index();
        let len = deque.len();
        Self {
            // The base of an inline array is never null.
            slots: unsafe { NonNull::new_unchecked(deque.as_mut_ptr()) },
            head,
            tail,
            len,
            _marker: PhantomData,
        }
    }
}

impl<'a, T, const N: usize> Iterator for IterMut<'a, T, N> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        if self.len == 0 {
            return None;
        }
        let item = unsafe { &mut *self.slots.as_ptr().add(self.head) };
        self.head = RingDeque::<T, N>::wrap_next(self.head);
        self.len -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T, const N: usize> DoubleEndedIterator for IterMut<'a, T, N> {
    fn next_back(&mut self) -> Option<&'a mut T> {
        if self.len == 0 {
            return None;
        }
        self.tail = RingDeque::<T, N>::wrap_prev(self.tail);
        self.len -= 1;
        Some(unsafe { &mut *self.slots.as_ptr().add(self.tail) })
    }
}

impl<T, const N: usize> ExactSizeIterator for IterMut<'_, T, N> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<T, const N: usize> FusedIterator for IterMut<'_, T, N> {}

// ─── IntoIter ─────────────────────────────────────────────────────────────────

/// Owning iterator, created by consuming a [`RingDeque`].
///
/// Yields elements front-to-back (back-to-front via `rev()`).  Elements not
/// yielded when the iterator is dropped are dropped by the deque itself.
pub struct IntoIter<T, const N: usize> {
    deque: RingDeque<T, N>,
}

impl<T, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.deque.take_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.deque.len();
        (len, Some(len))
    }
}

impl<T, const N: usize> DoubleEndedIterator for IntoIter<T, N> {
    fn next_back(&mut self) -> Option<T> {
        self.deque.take_back()
    }
}

impl<T, const N: usize> ExactSizeIterator for IntoIter<T, N> {
    fn len(&self) -> usize {
        self.deque.len()
    }
}

impl<T, const N: usize> FusedIterator for IntoIter<T, N> {}

impl<T: fmt::Debug, const N: usize> fmt::Debug for IntoIter<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.deque.iter()).finish()
    }
}

// ─── IntoIterator ─────────────────────────────────────────────────────────────

impl<T, const N: usize> IntoIterator for RingDeque<T, N> {
    type Item = T;
    type IntoIter = IntoIter<T, N>;

    fn into_iter(self) -> IntoIter<T, N> {
        IntoIter { deque: self }
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a RingDeque<T, N> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, N>;

    fn into_iter(self) -> Iter<'a, T, N> {
        self.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut RingDeque<T, N> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T, N>;

    fn into_iter(self) -> IterMut<'a, T, N> {
        self.iter_mut()
    }
}
