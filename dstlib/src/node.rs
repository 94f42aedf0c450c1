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

use std::num::NonZeroUsize;

use dstlib_common::{
    assert::OptionExt,
    error::{Error, PositionFault, Result},
    id::ContainerId,
};
use slab::Slab;

/// Address of a node inside the [`Arena`] of its container.
///
/// The slab key is shifted by one so that `Option<NodeToken>` costs no extra space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeToken(NonZeroUsize);

impl NodeToken {
    fn from_key(key: usize) -> Self {
        Self(NonZeroUsize::MIN.saturating_add(key))
    }

    fn key(&self) -> usize {
        self.0.get() - 1
    }
}

/// A node owns one element plus the links of its container kind.
pub(crate) struct Node<T, L> {
    /// Issue stamp of the node, unique within its arena.
    stamp: u64,
    pub(crate) links: L,
    pub(crate) element: T,
}

/// The raw identity a position carries: who issued it, where the node lives, and which node it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawPosition {
    pub(crate) container: ContainerId,
    pub(crate) token: NodeToken,
    pub(crate) stamp: u64,
}

/// Exclusive node storage of one container instance.
///
/// Removing a node frees its slab slot. A node inserted later into the same slot gets a fresh stamp, which is what
/// keeps positions to removed nodes permanently stale.
pub(crate) struct Arena<T, L> {
    id: ContainerId,
    slab: Slab<Node<T, L>>,
    stamp: u64,
}

impl<T, L> Arena<T, L> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            id: ContainerId::allocate(),
            slab: Slab::with_capacity(capacity),
            stamp: 0,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.slab.len()
    }

    pub(crate) fn insert(&mut self, element: T, links: L) -> NodeToken {
        self.insert_with(element, |_| links)
    }

    /// Insert a node whose links depend on its own token, e.g. a single node ring pointing at itself.
    pub(crate) fn insert_with<F>(&mut self, element: T, f: F) -> NodeToken
    where
        F: FnOnce(NodeToken) -> L,
    {
        self.stamp += 1;
        let entry = self.slab.vacant_entry();
        let token = NodeToken::from_key(entry.key());
        entry.insert(Node {
            stamp: self.stamp,
            links: f(token),
            element,
        });
        token
    }

    /// Remove the node and release its slot.
    ///
    /// `token` MUST address a node of this arena.
    pub(crate) fn remove(&mut self, token: NodeToken) -> Node<T, L> {
        self.slab.remove(token.key())
    }

    pub(crate) fn node(&self, token: NodeToken) -> &Node<T, L> {
        unsafe { self.slab.get(token.key()).strict_unwrap_unchecked() }
    }

    pub(crate) fn node_mut(&mut self, token: NodeToken) -> &mut Node<T, L> {
        unsafe { self.slab.get_mut(token.key()).strict_unwrap_unchecked() }
    }

    pub(crate) fn links(&self, token: NodeToken) -> &L {
        &self.node(token).links
    }

    pub(crate) fn links_mut(&mut self, token: NodeToken) -> &mut L {
        &mut self.node_mut(token).links
    }

    pub(crate) fn element(&self, token: NodeToken) -> &T {
        &self.node(token).element
    }

    pub(crate) fn element_mut(&mut self, token: NodeToken) -> &mut T {
        &mut self.node_mut(token).element
    }

    /// Issue a position for a live node.
    pub(crate) fn position(&self, token: NodeToken) -> RawPosition {
        RawPosition {
            container: self.id,
            token,
            stamp: self.node(token).stamp,
        }
    }

    /// Check a position against this arena and return the token of the node it refers to.
    pub(crate) fn resolve(&self, position: &RawPosition) -> Result<NodeToken> {
        let fault = if position.container != self.id {
            PositionFault::ForeignContainer
        } else {
            match self.slab.get(position.token.key()) {
                Some(node) if node.stamp == position.stamp => return Ok(position.token),
                _ => PositionFault::Stale,
            }
        };
        tracing::debug!(
            container = self.id.get(),
            issuer = position.container.get(),
            %fault,
            "[arena]: reject position"
        );
        Err(Error::InvalidPosition(fault))
    }
}
