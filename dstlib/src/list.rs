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

//! Position based doubly linked list.

use std::{
    fmt::Debug,
    ops::{Deref, DerefMut},
};

use dstlib_common::error::Result;

use crate::{
    dlist::{DoublyLinkedListCore, Iter, Link},
    node::NodeToken,
    position::{sealed::Sealed, ListPosition, Positional},
};

/// A doubly linked list whose elements can be addressed with [`ListPosition`]s.
///
/// Dereferences to [`DoublyLinkedListCore`] for the index based interface.
pub struct LinkedList<T> {
    core: DoublyLinkedListCore<T>,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for LinkedList<T> {
    type Target = DoublyLinkedListCore<T>;

    fn deref(&self) -> &Self::Target {
        &self.core
    }
}

impl<T> DerefMut for LinkedList<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.core
    }
}

impl<T> LinkedList<T> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty list with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            core: DoublyLinkedListCore::with_capacity(capacity),
        }
    }

    /// Get the position of the first element, `None` if the list is empty.
    pub fn first_position(&self) -> Option<ListPosition> {
        self.position_of(self.core.first())
    }

    /// Get the position of the last element, `None` if the list is empty.
    pub fn last_position(&self) -> Option<ListPosition> {
        self.position_of(self.core.last())
    }

    /// Get the position right after `position`, `None` if `position` is the last one.
    pub fn position_after(&self, position: ListPosition) -> Result<Option<ListPosition>> {
        let token = self.validate(position)?;
        Ok(self.position_of(self.core.next(token)))
    }

    /// Get the position right before `position`, `None` if `position` is the first one.
    pub fn position_before(&self, position: ListPosition) -> Result<Option<ListPosition>> {
        let token = self.validate(position)?;
        Ok(self.position_of(self.core.prev(token)))
    }

    /// Add an element to the front of the list.
    pub fn add_first(&mut self, element: T) -> ListPosition {
        let token = self.core.insert_between(element, Link::Head, self.core.first());
        self.issue(token)
    }

    /// Add an element to the end of the list.
    pub fn add_last(&mut self, element: T) -> ListPosition {
        let token = self.core.insert_between(element, self.core.last(), Link::Tail);
        self.issue(token)
    }

    /// Add an element right before `position`.
    pub fn add_before(&mut self, position: ListPosition, element: T) -> Result<ListPosition> {
        let successor = self.validate(position)?;
        let predecessor = self.core.prev(successor);
        let token = self.core.insert_between(element, predecessor, Link::Node(successor));
        Ok(self.issue(token))
    }

    /// Add an element right after `position`.
    pub fn add_after(&mut self, position: ListPosition, element: T) -> Result<ListPosition> {
        let predecessor = self.validate(position)?;
        let successor = self.core.next(predecessor);
        let token = self.core.insert_between(element, Link::Node(predecessor), successor);
        Ok(self.issue(token))
    }

    /// Delete the element at `position` and return it.
    ///
    /// `position` and every copy of it become invalid.
    pub fn delete(&mut self, position: ListPosition) -> Result<T> {
        let token = self.validate(position)?;
        Ok(self.core.delete_node(token))
    }

    /// Replace the element at `position` in place and return the same position.
    pub fn replace(&mut self, position: ListPosition, element: T) -> Result<ListPosition> {
        let token = self.validate(position)?;
        *self.core.arena.element_mut(token) = element;
        Ok(position)
    }

    /// Move every element of `other` to the end of this list, keeping their order.
    ///
    /// `other` is drained and all of its positions become invalid.
    pub fn concat(&mut self, other: &mut LinkedList<T>) {
        if other.is_empty() {
            return;
        }
        let moved = other.len();
        while let Some(element) = other.core.pop_front() {
            self.core.append(element);
        }
        tracing::trace!(moved, len = self.len(), "[list]: concat");
    }

    /// Sort the list in nondecreasing order with a stable insertion sort.
    ///
    /// Nodes are relinked, not reallocated, so every position keeps pointing at its element. O(n) on a sorted list,
    /// O(n^2) in the worst case.
    pub fn sort(&mut self)
    where
        T: PartialOrd,
    {
        let Some(mut marker) = self.core.first().node() else {
            return;
        };
        let mut moves = 0usize;

        // Everything up to `marker` is sorted.
        while let Link::Node(pivot) = self.core.next(marker) {
            if self.element_of(marker) > self.element_of(pivot) {
                let mut walk = marker;
                while let Link::Node(prev) = self.core.prev(walk) {
                    if self.element_of(prev) > self.element_of(pivot) {
                        walk = prev;
                    } else {
                        break;
                    }
                }
                self.core.move_before(pivot, walk);
                moves += 1;
            } else {
                marker = pivot;
            }
        }

        tracing::trace!(len = self.len(), moves, "[list]: sorted");
    }

    /// Get the item reference iterator of the list, from the first to the last position.
    pub fn iter(&self) -> Iter<'_, T> {
        self.core.iter()
    }

    fn element_of(&self, token: NodeToken) -> &T {
        self.core.arena.element(token)
    }

    fn validate(&self, position: ListPosition) -> Result<NodeToken> {
        self.core.arena.resolve(position.raw())
    }

    fn issue(&self, token: NodeToken) -> ListPosition {
        ListPosition::from_raw(self.core.arena.position(token))
    }

    fn position_of(&self, link: Link) -> Option<ListPosition> {
        link.node().map(|token| self.issue(token))
    }
}

impl<T> Positional for LinkedList<T> {
    type Item = T;
    type Position = ListPosition;

    fn element(&self, position: ListPosition) -> Result<&T> {
        let token = self.validate(position)?;
        Ok(self.core.arena.element(token))
    }

    fn element_mut(&mut self, position: ListPosition) -> Result<&mut T> {
        let token = self.validate(position)?;
        Ok(self.core.arena.element_mut(token))
    }
}

impl<T> Clone for LinkedList<T>
where
    T: Clone,
{
    /// The clone is a new container: positions of `self` are foreign to it.
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> Debug for LinkedList<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(&self.core, f)
    }
}

impl<T> PartialEq for LinkedList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T> Eq for LinkedList<T> where T: Eq {}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = crate::dlist::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.core.into_iter()
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.core.extend(iter);
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}
