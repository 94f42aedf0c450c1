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

//! Singly linked LIFO stack.

use std::fmt::Debug;

use dstlib_common::error::{Error, Result};

use crate::node::{Arena, NodeToken};

pub(crate) struct StackLink {
    next: Option<NodeToken>,
}

/// A LIFO stack on a singly linked list. Every operation is O(1).
pub struct SinglyLinkedStackCore<T> {
    pub(crate) arena: Arena<T, StackLink>,
    top: Option<NodeToken>,
    len: usize,
}

impl<T> Default for SinglyLinkedStackCore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SinglyLinkedStackCore<T> {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty stack with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: Arena::with_capacity(capacity),
            top: None,
            len: 0,
        }
    }

    /// Get the length of the stack.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Push an element on top of the stack.
    pub fn push(&mut self, element: T) {
        self.push_node(element);
    }

    /// Remove the top element and return it.
    pub fn pop(&mut self) -> Result<T> {
        let top = self.top_token()?;
        let node = self.arena.remove(top);
        self.top = node.links.next;
        self.len -= 1;

        self.sanity_check();
        Ok(node.element)
    }

    /// Get the top element.
    pub fn top(&self) -> Result<&T> {
        let top = self.top_token()?;
        Ok(self.arena.element(top))
    }

    /// Get the item reference iterator of the stack, from top to bottom.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            core: self,
            token: self.top,
            remaining: self.len,
        }
    }

    pub(crate) fn top_token(&self) -> Result<NodeToken> {
        self.top.ok_or(Error::EmptyCollection)
    }

    /// Link a new node in as the top and return its token.
    pub(crate) fn push_node(&mut self, element: T) -> NodeToken {
        let token = self.arena.insert(element, StackLink { next: self.top });
        self.top = Some(token);
        self.len += 1;

        self.sanity_check();
        token
    }

    fn sanity_check(&self) {
        if cfg!(feature = "sanity") {
            self.assert_invariants();
        }
    }

    /// Verify the chain in O(n).
    pub(crate) fn assert_invariants(&self) {
        assert_eq!(self.arena.len(), self.len);
        assert_eq!(self.top.is_none(), self.len == 0);
        let mut count = 0;
        let mut token = self.top;
        while let Some(t) = token {
            count += 1;
            assert!(count <= self.len, "chain is longer than {}", self.len);
            token = self.arena.links(t).next;
        }
        assert_eq!(count, self.len);
    }
}

impl<T> Debug for SinglyLinkedStackCore<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Item reference iterator of the stack.
pub struct Iter<'a, T> {
    core: &'a SinglyLinkedStackCore<T>,
    token: Option<NodeToken>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.token?;
        self.token = self.core.arena.links(token).next;
        self.remaining -= 1;
        Some(self.core.arena.element(token))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a SinglyLinkedStackCore<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator of the stack, pops from the top.
pub struct IntoIter<T> {
    core: SinglyLinkedStackCore<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.core.pop().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.core.len(), Some(self.core.len()))
    }
}

impl<T> IntoIterator for SinglyLinkedStackCore<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { core: self }
    }
}

impl<T> Extend<T> for SinglyLinkedStackCore<T> {
    /// Push every element in order, the last one ends up on top.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|element| self.push(element));
    }
}

impl<T> FromIterator<T> for SinglyLinkedStackCore<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut core = Self::new();
        core.extend(iter);
        core
    }
}
