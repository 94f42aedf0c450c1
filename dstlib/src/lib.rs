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

//! Classic linked data structures with stable positions.
//!
//! Three containers are provided, each as an index or value based core plus a position based wrapper:
//!
//! - [`LinkedList`] over [`DoublyLinkedListCore`], a sentinel bounded doubly linked list.
//! - [`Queue`] over [`CircularQueueCore`], a circularly linked queue that only keeps its tail.
//! - [`Stack`] over [`SinglyLinkedStackCore`], a singly linked stack.
//!
//! A position is a copyable handle to one node of one container instance. It allows O(1) access and mutation at a
//! known place without walking the list again, and it is checked on every use: handing it to another instance, or
//! using it after its node was removed, fails with [`Error::InvalidPosition`].
//!
//! ```
//! use dstlib::{LinkedList, Positional};
//!
//! let mut list = LinkedList::new();
//! list.append(5);
//! let three = list.add_first(3);
//! list.add_after(three, 4).unwrap();
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![3, 4, 5]);
//!
//! assert_eq!(list.delete(three), Ok(3));
//! assert!(!list.contains(three));
//! ```
//!
//! The containers are single threaded and provide no internal synchronization.

mod node;

pub mod cqueue;
pub mod dlist;
pub mod list;
pub mod position;
pub mod queue;
pub mod slstack;
pub mod stack;

pub use cqueue::CircularQueueCore;
pub use dlist::DoublyLinkedListCore;
pub use dstlib_common::{
    error::{Error, PositionFault, Result},
    id::ContainerId,
};
pub use list::LinkedList;
pub use position::{ListPosition, Position, Positional, QueuePosition, StackPosition};
pub use queue::Queue;
pub use slstack::SinglyLinkedStackCore;
pub use stack::Stack;
