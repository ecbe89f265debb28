// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

use crate::TransformId;

/// Errors raised by [`crate::TransformTree`] operations.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum GeomError {
    /// The handle refers to a removed node or was never issued by this tree.
    #[error("stale transform handle {0}")]
    StaleHandle(TransformId),
    /// Parenting `child` under `parent` would make a node its own ancestor.
    #[error("parenting {child} under {parent} would create a cycle")]
    Cycle {
        /// Node being re-parented.
        child: TransformId,
        /// Requested parent.
        parent: TransformId,
    },
    /// The arena already holds [`crate::hierarchy::MAX_SLOTS`] slots.
    #[error("transform tree is full")]
    CapacityExceeded,
}
