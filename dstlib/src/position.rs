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

//! The position capability shared by all containers.
//!
//! A position is a small copyable handle to one node of one container instance. Every container kind has its own
//! position type, so handing a list position to a queue does not compile. The two runtime checks left, issuing
//! container and liveness of the node, are done by the container on every use.

use std::fmt::Debug;

use dstlib_common::{error::Result, id::ContainerId};

use crate::node::RawPosition;

pub(crate) mod sealed {
    use crate::node::RawPosition;

    /// Keeps [`Position`](super::Position) implementations inside this crate.
    pub trait Sealed {
        /// Raw identity of the position.
        fn raw(&self) -> &RawPosition;

        /// Wrap a raw identity issued by a container arena.
        fn from_raw(raw: RawPosition) -> Self;
    }
}

/// A handle to a node of a specific container instance.
pub trait Position: sealed::Sealed + Copy + Eq + Debug {
    /// Id of the container that issued this position.
    fn container(&self) -> ContainerId {
        self.raw().container
    }
}

/// Containers whose nodes can be addressed with positions.
pub trait Positional {
    /// Element type.
    type Item;
    /// Position type issued by the container.
    type Position: Position;

    /// Get the element at `position`.
    fn element(&self, position: Self::Position) -> Result<&Self::Item>;

    /// Get the mutable element at `position`.
    fn element_mut(&mut self, position: Self::Position) -> Result<&mut Self::Item>;

    /// Check if `position` was issued by this container and still refers to a live node.
    fn contains(&self, position: Self::Position) -> bool {
        self.element(position).is_ok()
    }
}

macro_rules! position {
    ($(#[$attr:meta])* $name:ident) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(RawPosition);

        impl sealed::Sealed for $name {
            fn raw(&self) -> &RawPosition {
                &self.0
            }

            fn from_raw(raw: RawPosition) -> Self {
                Self(raw)
            }
        }

        impl Position for $name {}
    };
}

position! {
    /// Position of an element in a [`LinkedList`](crate::list::LinkedList).
    ///
    /// Stays valid until its element is deleted, including across `replace`, `reverse` and `sort`.
    ListPosition
}

position! {
    /// Position of an element in a [`Queue`](crate::queue::Queue).
    ///
    /// Becomes invalid once its element is dequeued.
    QueuePosition
}

position! {
    /// Position of an element in a [`Stack`](crate::stack::Stack).
    ///
    /// Becomes invalid once its element is popped.
    StackPosition
}
