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

//! Sentinel bounded doubly linked list.

use std::fmt::Debug;

use dstlib_common::{
    error::{Error, Result},
    strict_assert, strict_assert_eq,
};

use crate::node::{Arena, NodeToken};

/// One end of a link: a sentinel or a node.
///
/// The two sentinels are fixed slots of the list, never nodes of the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Link {
    Head,
    Tail,
    Node(NodeToken),
}

impl Link {
    pub(crate) fn node(self) -> Option<NodeToken> {
        match self {
            Link::Node(token) => Some(token),
            Link::Head | Link::Tail => None,
        }
    }
}

#[derive(Clone, Copy)]
pub(crate) struct DoubleLinks {
    prev: Link,
    next: Link,
}

/// A doubly linked list bounded by a head and a tail sentinel.
///
/// Insertion and removal at either end or next to a known node take O(1). Index based access walks from the
/// nearer end.
pub struct DoublyLinkedListCore<T> {
    pub(crate) arena: Arena<T, DoubleLinks>,
    /// `next` of the head sentinel.
    first: Link,
    /// `prev` of the tail sentinel.
    last: Link,
    len: usize,
}

impl<T> Default for DoublyLinkedListCore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DoublyLinkedListCore<T> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty list with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: Arena::with_capacity(capacity),
            first: Link::Tail,
            last: Link::Head,
            len: 0,
        }
    }

    /// Get the length of the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the element at `index`.
    pub fn element_at(&self, index: usize) -> Result<&T> {
        let token = self.token_at(index)?;
        Ok(self.arena.element(token))
    }

    /// Get the mutable element at `index`.
    pub fn element_at_mut(&mut self, index: usize) -> Result<&mut T> {
        let token = self.token_at(index)?;
        Ok(self.arena.element_mut(token))
    }

    /// Get the reference of the first element.
    pub fn front(&self) -> Option<&T> {
        self.first.node().map(|token| self.arena.element(token))
    }

    /// Get the reference of the last element.
    pub fn back(&self) -> Option<&T> {
        self.last.node().map(|token| self.arena.element(token))
    }

    /// Add an element to the end of the list.
    pub fn append(&mut self, element: T) {
        self.insert_between(element, self.last, Link::Tail);
    }

    /// Add an element to the front of the list.
    pub fn prepend(&mut self, element: T) {
        self.insert_between(element, Link::Head, self.first);
    }

    /// Insert an element so that it ends up at `index`.
    ///
    /// `index == 0` prepends and any `index >= len` appends.
    pub fn insert_at(&mut self, index: usize, element: T) {
        if index == 0 {
            self.prepend(element);
        } else if index >= self.len {
            self.append(element);
        } else {
            let token = self.walk_to(index);
            let prev = self.arena.links(token).prev;
            self.insert_between(element, prev, Link::Node(token));
        }
    }

    /// Remove the first element.
    pub fn pop_front(&mut self) -> Option<T> {
        self.first.node().map(|token| self.delete_node(token))
    }

    /// Remove the last element.
    pub fn pop_back(&mut self) -> Option<T> {
        self.last.node().map(|token| self.delete_node(token))
    }

    /// Reverse the list in place.
    ///
    /// Only the direction of the interior chain flips, the sentinels keep their roles. Nodes are not moved between
    /// slots, so every position stays valid.
    pub fn reverse(&mut self) {
        if self.len < 2 {
            return;
        }

        let mut link = self.first;
        while let Link::Node(token) = link {
            let links = self.arena.links_mut(token);
            std::mem::swap(&mut links.prev, &mut links.next);
            link = links.prev;
        }

        std::mem::swap(&mut self.first, &mut self.last);
        // The old ends still point at the sentinel on the wrong side.
        self.set_prev(self.first, Link::Head);
        self.set_next(self.last, Link::Tail);

        tracing::trace!(len = self.len, "[list]: reversed");
        self.sanity_check();
    }

    /// Get the item reference iterator of the list, from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            core: self,
            link: self.first,
            remaining: self.len,
        }
    }

    pub(crate) fn first(&self) -> Link {
        self.first
    }

    pub(crate) fn last(&self) -> Link {
        self.last
    }

    pub(crate) fn next(&self, token: NodeToken) -> Link {
        self.arena.links(token).next
    }

    pub(crate) fn prev(&self, token: NodeToken) -> Link {
        self.arena.links(token).prev
    }

    /// Link a new node between two adjacent links and return its token.
    ///
    /// `predecessor` and `successor` MUST be neighbors in the current chain.
    pub(crate) fn insert_between(&mut self, element: T, predecessor: Link, successor: Link) -> NodeToken {
        strict_assert_eq!(self.successor_of(predecessor), successor);

        let token = self.arena.insert(
            element,
            DoubleLinks {
                prev: predecessor,
                next: successor,
            },
        );
        self.set_next(predecessor, Link::Node(token));
        self.set_prev(successor, Link::Node(token));
        self.len += 1;

        self.sanity_check();
        token
    }

    /// Unlink a node, release it and return its element.
    ///
    /// Releasing the slot invalidates every position of the node. `token` MUST address a live node of this list.
    pub(crate) fn delete_node(&mut self, token: NodeToken) -> T {
        let node = self.arena.remove(token);
        self.set_next(node.links.prev, node.links.next);
        self.set_prev(node.links.next, node.links.prev);
        self.len -= 1;

        self.sanity_check();
        node.element
    }

    /// Move a live node in front of `successor` without releasing it, so its positions stay valid.
    ///
    /// `successor` MUST NOT be the node itself.
    pub(crate) fn move_before(&mut self, token: NodeToken, successor: NodeToken) {
        strict_assert!(token != successor);

        let DoubleLinks { prev, next } = *self.arena.links(token);
        self.set_next(prev, next);
        self.set_prev(next, prev);

        let predecessor = self.arena.links(successor).prev;
        *self.arena.links_mut(token) = DoubleLinks {
            prev: predecessor,
            next: Link::Node(successor),
        };
        self.set_next(predecessor, Link::Node(token));
        self.set_prev(Link::Node(successor), Link::Node(token));

        self.sanity_check();
    }

    fn token_at(&self, index: usize) -> Result<NodeToken> {
        if index >= self.len {
            return Err(Error::IndexOutOfRange { index, len: self.len });
        }
        Ok(self.walk_to(index))
    }

    /// Walk from the nearer end to the node at `index`, at most `len / 2` steps.
    ///
    /// `index` MUST be less than `len`.
    fn walk_to(&self, index: usize) -> NodeToken {
        let max = self.len - 1;
        let (mut link, steps, forward) = if index <= max.div_ceil(2) {
            (self.first, index, true)
        } else {
            (self.last, max - index, false)
        };
        for _ in 0..steps {
            let links = self.arena.links(self.expect_node(link));
            link = if forward { links.next } else { links.prev };
        }
        self.expect_node(link)
    }

    fn expect_node(&self, link: Link) -> NodeToken {
        match link {
            Link::Node(token) => token,
            sentinel => unreachable!("walked onto the {sentinel:?} sentinel of a list with {} nodes", self.len),
        }
    }

    fn successor_of(&self, link: Link) -> Link {
        match link {
            Link::Head => self.first,
            Link::Node(token) => self.arena.links(token).next,
            Link::Tail => unreachable!("the tail sentinel has no successor"),
        }
    }

    fn set_next(&mut self, link: Link, next: Link) {
        match link {
            Link::Head => self.first = next,
            Link::Node(token) => self.arena.links_mut(token).next = next,
            Link::Tail => unreachable!("the tail sentinel has no successor"),
        }
    }

    fn set_prev(&mut self, link: Link, prev: Link) {
        match link {
            Link::Tail => self.last = prev,
            Link::Node(token) => self.arena.links_mut(token).prev = prev,
            Link::Head => unreachable!("the head sentinel has no predecessor"),
        }
    }

    fn sanity_check(&self) {
        if cfg!(feature = "sanity") {
            self.assert_invariants();
        }
    }

    /// Verify the complete chain in O(n).
    pub(crate) fn assert_invariants(&self) {
        let mut prev = Link::Head;
        let mut link = self.first;
        let mut count = 0;
        while let Link::Node(token) = link {
            let links = self.arena.links(token);
            assert_eq!(links.prev, prev, "broken back link at node #{count}");
            prev = link;
            link = links.next;
            count += 1;
            assert!(count <= self.len, "chain is longer than {}", self.len);
        }
        assert_eq!(link, Link::Tail);
        assert_eq!(self.last, prev);
        assert_eq!(count, self.len);
        assert_eq!(self.arena.len(), self.len);
    }
}

impl<T> Debug for DoublyLinkedListCore<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Item reference iterator of the list.
pub struct Iter<'a, T> {
    core: &'a DoublyLinkedListCore<T>,
    link: Link,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.link.node()?;
        self.link = self.core.next(token);
        self.remaining -= 1;
        Some(self.core.arena.element(token))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a DoublyLinkedListCore<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator of the list, from front to back.
pub struct IntoIter<T> {
    core: DoublyLinkedListCore<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.core.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.core.len(), Some(self.core.len()))
    }
}

impl<T> IntoIterator for DoublyLinkedListCore<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { core: self }
    }
}

impl<T> Extend<T> for DoublyLinkedListCore<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|element| self.append(element));
    }
}

impl<T> FromIterator<T> for DoublyLinkedListCore<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut core = Self::new();
        core.extend(iter);
        core
    }
}
