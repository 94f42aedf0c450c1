//  Copyright 2026 dstlib Project Authors
//
//  Licensed under the Apache License, Version 2.0 (the "License");
//  you may not use this file except in compliance with the License.
//  You may obtain a copy of the License at
//
//  http://www.apache.org/licenses/LICENSE-2.0
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.

//! Circularly linked queue that only keeps a pointer to its tail.

use std::fmt::Debug;

use dstlib_common::error::{Error, Result};

use crate::node::{Arena, NodeToken};

/// Link of a ring node. Always valid while the node is in the ring, a single node points at itself.
pub(crate) struct RingLink {
    next: NodeToken,
}

/// A FIFO queue on a circularly linked list.
///
/// Only the tail is stored, the head is `tail.next`. All operations but the concatenations are O(1).
pub struct CircularQueueCore<T> {
    pub(crate) arena: Arena<T, RingLink>,
    tail: Option<NodeToken>,
    len: usize,
}

impl<T> Default for CircularQueueCore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CircularQueueCore<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty queue with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: Arena::with_capacity(capacity),
            tail: None,
            len: 0,
        }
    }

    /// Get the length of the queue.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Add an element to the back of the queue.
    pub fn enqueue(&mut self, element: T) {
        self.enqueue_node(element);
    }

    /// Remove the element at the front of the queue and return it.
    pub fn dequeue(&mut self) -> Result<T> {
        let tail = self.tail.ok_or(Error::EmptyCollection)?;
        let head = self.arena.links(tail).next;
        if head == tail {
            self.tail = None;
        } else {
            let next = self.arena.links(head).next;
            self.arena.links_mut(tail).next = next;
        }
        self.len -= 1;
        let node = self.arena.remove(head);

        self.sanity_check();
        Ok(node.element)
    }

    /// Get the element at the front of the queue.
    pub fn first(&self) -> Result<&T> {
        let head = self.head_token()?;
        Ok(self.arena.element(head))
    }

    /// Get the element at the back of the queue.
    pub fn last(&self) -> Result<&T> {
        let tail = self.tail_token()?;
        Ok(self.arena.element(tail))
    }

    /// Move the front element to the back of the queue.
    ///
    /// No node is created or released, the tail just advances by one.
    pub fn rotate(&mut self) -> Result<()> {
        let head = self.head_token()?;
        self.tail = Some(head);
        Ok(())
    }

    /// Move every element of `other` to the back of this queue, keeping their order. `other` ends up empty.
    pub fn concat_destroy(&mut self, other: &mut CircularQueueCore<T>) {
        let moved = other.len();
        while let Ok(element) = other.dequeue() {
            self.enqueue(element);
        }
        if moved > 0 {
            tracing::trace!(moved, len = self.len(), "[queue]: concat destroy");
        }
    }

    /// Append a copy of every element of `other` to the back of this queue. `other` is unchanged.
    pub fn concat(&mut self, other: &CircularQueueCore<T>)
    where
        T: Clone,
    {
        if other.is_empty() {
            return;
        }
        self.extend(other.iter().cloned());
        tracing::trace!(copied = other.len(), len = self.len(), "[queue]: concat");
    }

    /// Get the item reference iterator of the queue, from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            core: self,
            token: self.tail.map(|tail| self.arena.links(tail).next),
            remaining: self.len,
        }
    }

    pub(crate) fn head_token(&self) -> Result<NodeToken> {
        let tail = self.tail_token()?;
        Ok(self.arena.links(tail).next)
    }

    pub(crate) fn tail_token(&self) -> Result<NodeToken> {
        self.tail.ok_or(Error::EmptyCollection)
    }

    /// Link a new node in as the tail and return its token.
    pub(crate) fn enqueue_node(&mut self, element: T) -> NodeToken {
        let token = match self.tail {
            None => self.arena.insert_with(element, |token| RingLink { next: token }),
            Some(tail) => {
                let head = self.arena.links(tail).next;
                let token = self.arena.insert(element, RingLink { next: head });
                self.arena.links_mut(tail).next = token;
                token
            }
        };
        self.tail = Some(token);
        self.len += 1;

        self.sanity_check();
        token
    }

    fn sanity_check(&self) {
        if cfg!(feature = "sanity") {
            self.assert_invariants();
        }
    }

    /// Verify the ring in O(n).
    pub(crate) fn assert_invariants(&self) {
        assert_eq!(self.arena.len(), self.len);
        let Some(tail) = self.tail else {
            assert_eq!(self.len, 0);
            return;
        };
        let head = self.arena.links(tail).next;
        let mut token = head;
        for _ in 1..self.len {
            token = self.arena.links(token).next;
            assert_ne!(token, head, "ring is shorter than {}", self.len);
        }
        assert_eq!(token, tail, "the node {} steps after the head is not the tail", self.len - 1);
        assert_eq!(self.arena.links(tail).next, head);
    }
}

impl<T> Debug for CircularQueueCore<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Item reference iterator of the queue.
///
/// Follows the ring exactly `len` times, so it ends at the tail instead of wrapping around.
pub struct Iter<'a, T> {
    core: &'a CircularQueueCore<T>,
    token: Option<NodeToken>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let token = self.token?;
        self.remaining -= 1;
        self.token = Some(self.core.arena.links(token).next);
        Some(self.core.arena.element(token))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a CircularQueueCore<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator of the queue, dequeues from the front.
pub struct IntoIter<T> {
    core: CircularQueueCore<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.core.dequeue().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.core.len(), Some(self.core.len()))
    }
}

impl<T> IntoIterator for CircularQueueCore<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { core: self }
    }
}

impl<T> Extend<T> for CircularQueueCore<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|element| self.enqueue(element));
    }
}

impl<T> FromIterator<T> for CircularQueueCore<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut core = Self::new();
        core.extend(iter);
        core
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    fn collect(q: &CircularQueueCore<u64>) -> Vec<u64> {
        q.iter().copied().collect_vec()
    }

    #[test]
    fn test_queue_simple() {
        let mut q = CircularQueueCore::new();
        q.enqueue(1);
        q.enqueue(2);
        q.enqueue(3);
        assert_eq!(q.dequeue(), Ok(1));
        assert_eq!(q.first(), Ok(&2));
        assert_eq!(q.last(), Ok(&3));
        q.rotate().unwrap();
        assert_eq!(q.first(), Ok(&3));
        assert_eq!(q.last(), Ok(&2));
        q.assert_invariants();
        assert_eq!(collect(&q), vec![3, 2]);
    }

    #[test]
    fn test_empty() {
        let mut q = CircularQueueCore::<u64>::new();
        assert!(q.is_empty());
        assert_eq!(q.dequeue(), Err(Error::EmptyCollection));
        assert_eq!(q.first(), Err(Error::EmptyCollection));
        assert_eq!(q.last(), Err(Error::EmptyCollection));
        assert_eq!(q.rotate(), Err(Error::EmptyCollection));
        assert_eq!(q.iter().next(), None);

        q.enqueue(1);
        assert_eq!(q.dequeue(), Ok(1));
        assert!(q.is_empty());
        assert_eq!(q.dequeue(), Err(Error::EmptyCollection));
        q.assert_invariants();
    }

    #[test]
    fn test_single_node_ring() {
        let mut q = CircularQueueCore::new();
        q.enqueue(7);
        q.assert_invariants();
        q.rotate().unwrap();
        assert_eq!(q.first(), Ok(&7));
        assert_eq!(q.last(), Ok(&7));
        assert_eq!(collect(&q), vec![7]);
    }

    #[test]
    fn test_peek_idempotent() {
        let q = (1..=3).collect::<CircularQueueCore<u64>>();
        for _ in 0..4 {
            assert_eq!(q.first(), Ok(&1));
            assert_eq!(q.last(), Ok(&3));
        }
        assert_eq!(q.len(), 3);
        assert_eq!(collect(&q), vec![1, 2, 3]);
    }

    #[test]
    fn test_rotate_full_cycle() {
        let mut q = (0..5).collect::<CircularQueueCore<u64>>();
        for i in 0..5 {
            assert_eq!(q.first(), Ok(&i));
            q.rotate().unwrap();
        }
        assert_eq!(collect(&q), vec![0, 1, 2, 3, 4]);
        q.assert_invariants();
    }

    #[test]
    fn test_concat() {
        let mut q = (1..=3).collect::<CircularQueueCore<u64>>();
        let o = (4..=6).collect::<CircularQueueCore<u64>>();
        q.concat(&o);
        assert_eq!(collect(&q), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(collect(&o), vec![4, 5, 6]);
        q.assert_invariants();
        o.assert_invariants();
    }

    #[test]
    fn test_concat_destroy() {
        let mut q = (1..=3).collect::<CircularQueueCore<u64>>();
        let mut o = (4..=6).collect::<CircularQueueCore<u64>>();
        q.concat_destroy(&mut o);
        assert_eq!(collect(&q), vec![1, 2, 3, 4, 5, 6]);
        assert!(o.is_empty());
        assert_eq!(q.last(), Ok(&6));
        q.assert_invariants();
        o.assert_invariants();

        let mut e = CircularQueueCore::new();
        e.concat_destroy(&mut q);
        assert_eq!(collect(&e), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_into_iter() {
        let q = (1..=3).collect::<CircularQueueCore<u64>>();
        assert_eq!(format!("{q:?}"), "[1, 2, 3]");
        assert_eq!(q.into_iter().collect_vec(), vec![1, 2, 3]);
    }
}
