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

use std::fmt::Display;

/// Why a position was rejected by a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PositionFault {
    /// The position was issued by another container instance.
    ForeignContainer,
    /// The node behind the position has been removed.
    Stale,
}

impl Display for PositionFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PositionFault::ForeignContainer => write!(f, "position does not belong to this container"),
            PositionFault::Stale => write!(f, "position is no longer valid"),
        }
    }
}

/// Errors raised by the dstlib containers.
///
/// Every error is raised before any link is touched, so a failed operation leaves the container unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Peek, remove or rotate on a queue or stack without elements.
    #[error("collection is empty")]
    EmptyCollection,
    /// Index based access outside `[0, len)`.
    #[error("index {index} is out of range for length {len}")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Length of the container at the time of the access.
        len: usize,
    },
    /// The position cannot be used with this container.
    #[error("invalid position: {0}")]
    InvalidPosition(PositionFault),
}

/// dstlib result type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(Error::EmptyCollection.to_string(), "collection is empty");
        assert_eq!(
            Error::IndexOutOfRange { index: 3, len: 2 }.to_string(),
            "index 3 is out of range for length 2"
        );
        assert_eq!(
            Error::InvalidPosition(PositionFault::Stale).to_string(),
            "invalid position: position is no longer valid"
        );
        assert_eq!(
            Error::InvalidPosition(PositionFault::ForeignContainer).to_string(),
            "invalid position: position does not belong to this container"
        );
    }
}
