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

//! End to end scenarios over the public API.

use dstlib::{CircularQueueCore, Error, LinkedList, PositionFault, Positional, Queue, SinglyLinkedStackCore, Stack};
use itertools::Itertools;

#[test_log::test]
fn test_list_scenario() {
    let mut l = LinkedList::new();
    l.append(5);
    l.prepend(3);
    l.append(6);
    l.prepend(2);
    assert_eq!(l.iter().copied().collect_vec(), vec![2, 3, 5, 6]);
    assert_eq!(l.len(), 4);

    let p3 = l.position_after(l.first_position().unwrap()).unwrap().unwrap();
    assert_eq!(l.element(p3), Ok(&3));
    assert_eq!(l.delete(p3), Ok(3));
    assert_eq!(l.iter().copied().collect_vec(), vec![2, 5, 6]);
    assert_eq!(l.len(), 3);

    assert_eq!(l.delete(p3), Err(Error::InvalidPosition(PositionFault::Stale)));
}

#[test_log::test]
fn test_queue_scenario() {
    let mut q = CircularQueueCore::new();
    q.enqueue(1);
    q.enqueue(2);
    q.enqueue(3);
    assert_eq!(q.dequeue(), Ok(1));
    assert_eq!(q.first(), Ok(&2));
    assert_eq!(q.last(), Ok(&3));
    q.rotate().unwrap();
    assert_eq!(q.first(), Ok(&3));
}

#[test_log::test]
fn test_stack_scenario() {
    let mut s = SinglyLinkedStackCore::new();
    s.push(1);
    s.push(2);
    s.push(3);
    s.push(4);
    assert_eq!(s.pop(), Ok(4));
    assert_eq!(s.top(), Ok(&3));
}

#[test_log::test]
fn test_sort_scenario() {
    let mut l = LinkedList::new();
    for v in [6, 5, 3, 2] {
        l.append(v);
    }
    l.sort();
    assert_eq!(l.iter().copied().collect_vec(), vec![2, 3, 5, 6]);
}

#[test]
fn test_drain_to_empty() {
    let mut q = Queue::new();
    q.enqueue("a");
    assert_eq!(q.dequeue(), Ok("a"));
    assert!(q.is_empty());
    assert_eq!(q.dequeue(), Err(Error::EmptyCollection));

    let mut s = Stack::new();
    s.push("a");
    assert_eq!(s.pop(), Ok("a"));
    assert!(s.is_empty());
    assert_eq!(s.pop(), Err(Error::EmptyCollection));
}

#[test]
fn test_generic_position_access() {
    fn bump<C>(container: &mut C, position: C::Position)
    where
        C: Positional<Item = u64>,
    {
        *container.element_mut(position).unwrap() += 1;
    }

    let mut l = LinkedList::new();
    let pl = l.add_last(1);
    bump(&mut l, pl);

    let mut q = Queue::new();
    let pq = q.enqueue_position(1);
    bump(&mut q, pq);

    let mut s = Stack::new();
    let ps = s.push_position(1);
    bump(&mut s, ps);

    assert_eq!(l.element(pl), Ok(&2));
    assert_eq!(q.element(pq), Ok(&2));
    assert_eq!(s.element(ps), Ok(&2));
}

#[test]
fn test_structurally_equal_containers_do_not_share_positions() {
    let mut a = LinkedList::new();
    let mut b = LinkedList::new();
    let pa = a.add_last(1);
    let pb = b.add_last(1);

    assert_eq!(a, b);
    assert_ne!(pa, pb);
    assert_eq!(a.element(pb), Err(Error::InvalidPosition(PositionFault::ForeignContainer)));
    assert_eq!(b.element(pa), Err(Error::InvalidPosition(PositionFault::ForeignContainer)));
}
