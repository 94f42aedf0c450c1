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

use std::{
    num::NonZeroU64,
    sync::atomic::{AtomicU64, Ordering},
};

static CONTAINER_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Process-wide unique identity of a container instance.
///
/// Positions carry the id of the container that issued them, so a position can never be used against another
/// instance, even one holding structurally identical data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContainerId(NonZeroU64);

impl ContainerId {
    /// Allocate an id that has never been handed out before in this process.
    pub fn allocate() -> Self {
        let raw = CONTAINER_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        Self(NonZeroU64::MIN.saturating_add(raw))
    }

    /// Raw value of the id.
    pub fn get(&self) -> u64 {
        self.0.get()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_allocate_unique() {
        let ids = (0..1000).map(|_| ContainerId::allocate()).collect::<HashSet<_>>();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_repr() {
        assert_eq!(
            std::mem::size_of::<ContainerId>(),
            std::mem::size_of::<Option<ContainerId>>()
        );
    }
}
