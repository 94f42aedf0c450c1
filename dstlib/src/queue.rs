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

//! Position based circular queue.

use std::{
    fmt::Debug,
    ops::{Deref, DerefMut},
};

use dstlib_common::error::Result;

use crate::{
    cqueue::{CircularQueueCore, IntoIter, Iter},
    node::NodeToken,
    position::{sealed::Sealed, Positional, QueuePosition},
};

/// A circular queue whose elements can be addressed with [`QueuePosition`]s.
///
/// Dereferences to [`CircularQueueCore`] for the plain queue interface. A position becomes invalid once its element
/// is dequeued.
pub struct Queue<T> {
    core: CircularQueueCore<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for Queue<T> {
    type Target = CircularQueueCore<T>;

    fn deref(&self) -> &Self::Target {
        &self.core
    }
}

impl<T> DerefMut for Queue<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.core
    }
}

impl<T> Queue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty queue with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            core: CircularQueueCore::with_capacity(capacity),
        }
    }

    /// Add an element to the back of the queue and return its position.
    pub fn enqueue_position(&mut self, element: T) -> QueuePosition {
        let token = self.core.enqueue_node(element);
        self.issue(token)
    }

    /// Get the position of the front element.
    ///
    /// Unlike the list, an empty queue is an error instead of `None`.
    pub fn first_position(&self) -> Result<QueuePosition> {
        let token = self.core.head_token()?;
        Ok(self.issue(token))
    }

    /// Get the position of the back element.
    pub fn last_position(&self) -> Result<QueuePosition> {
        let token = self.core.tail_token()?;
        Ok(self.issue(token))
    }

    /// Get the item reference iterator of the queue, from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        self.core.iter()
    }

    fn validate(&self, position: QueuePosition) -> Result<NodeToken> {
        self.core.arena.resolve(position.raw())
    }

    fn issue(&self, token: NodeToken) -> QueuePosition {
        QueuePosition::from_raw(self.core.arena.position(token))
    }
}

impl<T> Positional for Queue<T> {
    type Item = T;
    type Position = QueuePosition;

    fn element(&self, position: QueuePosition) -> Result<&T> {
        let token = self.validate(position)?;
        Ok(self.core.arena.element(token))
    }

    fn element_mut(&mut self, position: QueuePosition) -> Result<&mut T> {
        let token = self.validate(position)?;
        Ok(self.core.arena.element_mut(token))
    }
}

impl<T> Clone for Queue<T>
where
    T: Clone,
{
    /// The clone is a new container: positions of `self` are foreign to it.
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> Debug for Queue<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(&self.core, f)
    }
}

impl<T> PartialEq for Queue<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T> Eq for Queue<T> where T: Eq {}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.core.into_iter()
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.core.extend(iter);
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

#[cfg(test)]
mod tests {
    use dstlib_common::error::{Error, PositionFault};
    use itertools::Itertools;

    use super::*;

    #[test]
    fn test_positions() {
        let mut q = Queue::new();
        assert_eq!(q.first_position(), Err(Error::EmptyCollection));
        assert_eq!(q.last_position(), Err(Error::EmptyCollection));

        let p1 = q.enqueue_position(1);
        q.enqueue(2);
        let p3 = q.enqueue_position(3);

        assert_eq!(q.first_position(), Ok(p1));
        assert_eq!(q.last_position(), Ok(p3));
        assert_eq!(q.element(p3), Ok(&3));

        *q.element_mut(p3).unwrap() = 30;
        assert_eq!(q.last(), Ok(&30));

        q.rotate().unwrap();
        assert_eq!(q.last_position(), Ok(p1));
        assert_eq!(q.element(p1), Ok(&1));
    }

    #[test]
    fn test_dequeue_tombstones() {
        let mut q = Queue::new();
        let p1 = q.enqueue_position(1);
        let p2 = q.enqueue_position(2);

        assert_eq!(q.dequeue(), Ok(1));
        assert!(!q.contains(p1));
        assert_eq!(q.element(p1), Err(Error::InvalidPosition(PositionFault::Stale)));
        assert!(q.contains(p2));

        // The freed slot is reused by the next node.
        let p3 = q.enqueue_position(3);
        assert_ne!(p1, p3);
        assert_eq!(q.element(p1), Err(Error::InvalidPosition(PositionFault::Stale)));
        assert_eq!(q.element(p3), Ok(&3));
    }

    #[test]
    fn test_foreign_position() {
        let mut a = Queue::new();
        let mut b = Queue::new();
        let pa = a.enqueue_position(1);
        b.enqueue(1);
        assert_eq!(
            b.element(pa),
            Err(Error::InvalidPosition(PositionFault::ForeignContainer))
        );
        assert_eq!(a.clone(), a);
        assert!(!a.clone().contains(pa));
    }

    #[test]
    fn test_concat_destroy_positions() {
        let mut q = Queue::new();
        let mut o = Queue::new();
        q.enqueue(1);
        let po = o.enqueue_position(2);

        q.concat_destroy(&mut o);
        assert!(o.is_empty());
        assert!(!o.contains(po));
        assert!(!q.contains(po));
        assert_eq!(q.iter().copied().collect_vec(), vec![1, 2]);
    }

    #[test_log::test]
    fn test_original_walkthrough() {
        let mut q = Queue::new();
        assert!(q.is_empty());
        q.enqueue(1);
        q.enqueue(2);
        q.enqueue(3);
        assert_eq!(q.dequeue(), Ok(1));
        assert_eq!(q.len(), 2);
        q.enqueue(1);
        assert_eq!(q.first(), Ok(&2));
        assert_eq!(q.last(), Ok(&1));
        q.rotate().unwrap();
        q.rotate().unwrap();
        assert_eq!(q.first(), Ok(&1));
        assert_eq!(q.last(), Ok(&3));

        let q2 = [4, 5, 6].into_iter().collect::<Queue<_>>();
        q.concat(&q2);
        assert_eq!(q.len(), 6);
        assert_eq!(q2.len(), 3);
        assert_eq!(q.last(), Ok(&6));

        let mut q3 = [7, 8, 9].into_iter().collect::<Queue<_>>();
        q.concat_destroy(&mut q3);
        assert_eq!(q.len(), 9);
        assert_eq!(q3.len(), 0);
        assert_eq!(q.last(), Ok(&9));

        let p10 = q.enqueue_position(10);
        let p1 = q.first_position().unwrap();
        let pl = q.last_position().unwrap();
        assert_eq!(q.element(p10), Ok(&10));
        assert_eq!(q.element(p1), Ok(&1));
        assert_eq!(q.element(pl), Ok(&10));
        assert_eq!((&q).into_iter().copied().collect_vec(), vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
        q.assert_invariants();
    }
}
