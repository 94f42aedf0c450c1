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

//! Position based linked stack.

use std::{
    fmt::Debug,
    ops::{Deref, DerefMut},
};

use dstlib_common::error::Result;

use crate::{
    node::NodeToken,
    position::{sealed::Sealed, Positional, StackPosition},
    slstack::{IntoIter, Iter, SinglyLinkedStackCore},
};

/// A linked stack whose elements can be addressed with [`StackPosition`]s.
///
/// Dereferences to [`SinglyLinkedStackCore`] for the plain stack interface.
pub struct Stack<T> {
    core: SinglyLinkedStackCore<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for Stack<T> {
    type Target = SinglyLinkedStackCore<T>;

    fn deref(&self) -> &Self::Target {
        &self.core
    }
}

impl<T> DerefMut for Stack<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.core
    }
}

impl<T> Stack<T> {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty stack with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            core: SinglyLinkedStackCore::with_capacity(capacity),
        }
    }

    /// Push an element and return its position.
    pub fn push_position(&mut self, element: T) -> StackPosition {
        let token = self.core.push_node(element);
        self.issue(token)
    }

    /// Get the position of the top element.
    pub fn top_position(&self) -> Result<StackPosition> {
        let token = self.core.top_token()?;
        Ok(self.issue(token))
    }

    /// Get the item reference iterator of the stack, from top to bottom.
    pub fn iter(&self) -> Iter<'_, T> {
        self.core.iter()
    }

    fn validate(&self, position: StackPosition) -> Result<NodeToken> {
        self.core.arena.resolve(position.raw())
    }

    fn issue(&self, token: NodeToken) -> StackPosition {
        StackPosition::from_raw(self.core.arena.position(token))
    }
}

impl<T> Positional for Stack<T> {
    type Item = T;
    type Position = StackPosition;

    fn element(&self, position: StackPosition) -> Result<&T> {
        let token = self.validate(position)?;
        Ok(self.core.arena.element(token))
    }

    fn element_mut(&mut self, position: StackPosition) -> Result<&mut T> {
        let token = self.validate(position)?;
        Ok(self.core.arena.element_mut(token))
    }
}

impl<T> Clone for Stack<T>
where
    T: Clone,
{
    /// The clone is a new container: positions of `self` are foreign to it.
    fn clone(&self) -> Self {
        let mut elements = self.iter().cloned().collect::<Vec<_>>();
        elements.reverse();
        elements.into_iter().collect()
    }
}

impl<T> Debug for Stack<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(&self.core, f)
    }
}

impl<T> PartialEq for Stack<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T> Eq for Stack<T> where T: Eq {}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for Stack<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.core.into_iter()
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.core.extend(iter);
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}

#[cfg(test)]
mod tests {
    use dstlib_common::error::{Error, PositionFault};

    use super::*;

    #[test]
    fn test_positions() {
        let mut s = Stack::new();
        assert_eq!(s.top_position(), Err(Error::EmptyCollection));

        s.push(1);
        s.push(2);
        s.push(3);
        s.push(4);
        assert_eq!(s.pop(), Ok(4));
        assert_eq!(s.top(), Ok(&3));

        let p4 = s.push_position(4);
        s.push(5);
        let top = s.top_position().unwrap();
        assert_eq!(s.element(p4), Ok(&4));
        assert_eq!(s.element(top), Ok(&5));
        assert!(!s.is_empty());

        *s.element_mut(p4).unwrap() = 40;
        assert_eq!(s.iter().copied().collect::<Vec<_>>(), vec![5, 40, 3, 2, 1]);
    }

    #[test]
    fn test_pop_tombstones() {
        let mut s = Stack::new();
        let p1 = s.push_position(1);
        let p2 = s.push_position(2);
        assert_eq!(s.pop(), Ok(2));
        assert_eq!(s.element(p2), Err(Error::InvalidPosition(PositionFault::Stale)));

        let p3 = s.push_position(3);
        assert_ne!(p2, p3);
        assert!(!s.contains(p2));
        assert!(s.contains(p1));
        assert!(s.contains(p3));
    }

    #[test]
    fn test_clone() {
        let mut s = Stack::new();
        let p = s.push_position(1);
        s.push(2);
        let c = s.clone();
        assert_eq!(c, s);
        assert_eq!(c.top(), Ok(&2));
        assert_eq!(
            c.element(p),
            Err(Error::InvalidPosition(PositionFault::ForeignContainer))
        );
    }
}
