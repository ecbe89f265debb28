// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Parent/child transform hierarchy stored in a generational arena.
//!
//! Nodes refer to their parent by [`TransformId`], never by reference. Each
//! node caches its parent's model matrix. The cache refreshes lazily when the
//! parent chain reports a change, or when the cached value itself was taken
//! while an ancestor was mid-change. Re-parenting, removal and
//! [`TransformTree::update`] flush the caches of the affected subtree, so no
//! node keeps a matrix computed from a pose that is no longer current.

use core::cell::Cell;
use core::fmt;

use gimbal_math::Mat4;
use tracing::{debug, trace};

use crate::{GeomError, Pose, SpatialTransform};

/// Handle to a node in a [`TransformTree`].
///
/// Handles stay valid until the node is removed. A removed slot is reused
/// with a higher generation, so old handles fail with
/// [`GeomError::StaleHandle`] instead of aliasing the new node.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransformId {
    index: u32,
    generation: u32,
}

impl TransformId {
    /// Slot index in the arena.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.index
    }

    /// Generation of the slot when this handle was issued.
    #[must_use]
    pub const fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Display for TransformId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}v{}", self.index, self.generation)
    }
}

/// Maximum number of slots a [`TransformTree`] can hold. Inserting past it
/// fails with [`GeomError::CapacityExceeded`].
pub const MAX_SLOTS: u32 = u32::MAX;

#[derive(Debug, Copy, Clone)]
struct ParentCache {
    matrix: Mat4,
    // Computed while some ancestor differed from its committed pose. Such a
    // value may not survive the ancestor reverting, so it is recomputed on
    // the next read.
    provisional: bool,
}

impl ParentCache {
    fn root() -> Self {
        Self {
            matrix: Mat4::identity(),
            provisional: false,
        }
    }
}

#[derive(Debug)]
struct Node {
    transform: SpatialTransform,
    parent: Option<TransformId>,
    children: Vec<TransformId>,
    // Model matrix of `parent` as last observed; identity for roots.
    cache: Cell<ParentCache>,
}

#[derive(Debug)]
struct Slot {
    generation: u32,
    node: Option<Node>,
}

fn next_index(len: usize) -> Result<u32, GeomError> {
    u32::try_from(len)
        .ok()
        .filter(|index| *index < MAX_SLOTS)
        .ok_or(GeomError::CapacityExceeded)
}

/// Arena of transforms with parent links and cached parent matrices.
///
/// The cache lives in a [`Cell`], so reads through `&self` may refresh it and
/// the tree is not `Sync`.
#[derive(Debug, Default)]
pub struct TransformTree {
    slots: Vec<Slot>,
    free: Vec<u32>,
    len: usize,
}

impl TransformTree {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a root node holding `pose` (committed, so not dirty).
    ///
    /// Fails only when the arena already holds [`MAX_SLOTS`] slots and none
    /// is free.
    pub fn insert(&mut self, pose: Pose) -> Result<TransformId, GeomError> {
        let node = Node {
            transform: SpatialTransform::new(pose),
            parent: None,
            children: Vec::new(),
            cache: Cell::new(ParentCache::root()),
        };
        let id = if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.node = Some(node);
            TransformId {
                index,
                generation: slot.generation,
            }
        } else {
            let index = next_index(self.slots.len())?;
            self.slots.push(Slot {
                generation: 0,
                node: Some(node),
            });
            TransformId {
                index,
                generation: 0,
            }
        };
        self.len += 1;
        Ok(id)
    }

    /// Number of live nodes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// `true` when the tree holds no nodes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// `true` when `id` refers to a live node.
    #[must_use]
    pub fn contains(&self, id: TransformId) -> bool {
        self.node(id).is_ok()
    }

    /// Live handles in arena order.
    pub fn ids(&self) -> impl Iterator<Item = TransformId> + '_ {
        self.slots.iter().zip(0_u32..).filter_map(|(slot, index)| {
            slot.node.as_ref().map(|_| TransformId {
                index,
                generation: slot.generation,
            })
        })
    }

    /// The node's transform, including its committed snapshot.
    pub fn get(&self, id: TransformId) -> Result<&SpatialTransform, GeomError> {
        self.node(id).map(|n| &n.transform)
    }

    /// Mutable access to the node's live pose. Changes show up through
    /// [`TransformTree::has_changed`] until the node is updated; committing
    /// only happens through [`TransformTree::update`].
    pub fn get_mut(&mut self, id: TransformId) -> Result<&mut Pose, GeomError> {
        self.node_mut(id).map(|n| n.transform.pose_mut())
    }

    /// The node's parent, if any.
    pub fn parent(&self, id: TransformId) -> Result<Option<TransformId>, GeomError> {
        self.node(id).map(|n| n.parent)
    }

    /// The node's children in insertion order.
    pub fn children(&self, id: TransformId) -> Result<&[TransformId], GeomError> {
        self.node(id).map(|n| n.children.as_slice())
    }

    /// Removes a node and returns its live pose the way it was at removal.
    ///
    /// Children become roots: their parent link is cleared, their cached
    /// parent matrix resets to identity and their subtrees are flushed. The
    /// handle (and any copy of it) is stale afterwards.
    pub fn remove(&mut self, id: TransformId) -> Result<Pose, GeomError> {
        self.node(id)?;
        let slot = &mut self.slots[id.index as usize];
        let Some(node) = slot.node.take() else {
            return Err(GeomError::StaleHandle(id));
        };
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        self.len -= 1;

        if let Some(parent) = node.parent {
            if let Ok(p) = self.node_mut(parent) {
                p.children.retain(|c| *c != id);
            }
        }
        for child in &node.children {
            if let Ok(c) = self.node_mut(*child) {
                c.parent = None;
            }
            self.flush_subtree(*child)?;
        }
        debug!(
            node = %id,
            detached = node.children.len(),
            "removed transform"
        );
        Ok(*node.transform.pose())
    }

    /// Attaches `child` under `parent`, or makes it a root with `None`.
    ///
    /// The cached parent matrices of `child` and its descendants are
    /// recomputed immediately. Fails with [`GeomError::Cycle`] when `parent`
    /// is `child` or one of its descendants; the tree is unchanged on error.
    pub fn set_parent(
        &mut self,
        child: TransformId,
        parent: Option<TransformId>,
    ) -> Result<(), GeomError> {
        let old = self.node(child)?.parent;
        if let Some(p) = parent {
            self.node(p)?;
            let mut cursor = Some(p);
            while let Some(ancestor) = cursor {
                if ancestor == child {
                    return Err(GeomError::Cycle { child, parent: p });
                }
                cursor = self.node(ancestor)?.parent;
            }
        }

        if let Some(old) = old {
            if let Ok(o) = self.node_mut(old) {
                o.children.retain(|c| *c != child);
            }
        }
        if let Some(p) = parent {
            self.node_mut(p)?.children.push(child);
        }
        self.node_mut(child)?.parent = parent;
        self.flush_subtree(child)
    }

    /// `true` when the node or any ancestor differs from its committed
    /// snapshot. Walks the parent chain on every call.
    pub fn has_changed(&self, id: TransformId) -> Result<bool, GeomError> {
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let node = self.node(current)?;
            if node.transform.is_dirty() {
                return Ok(true);
            }
            cursor = node.parent;
        }
        Ok(false)
    }

    /// Model matrix of the node's parent (identity for roots).
    ///
    /// The cached value is recomputed first when the parent chain has
    /// changed, or when it was computed during an earlier change.
    pub fn parent_matrix(&self, id: TransformId) -> Result<Mat4, GeomError> {
        let node = self.node(id)?;
        let cached = node.cache.get();
        let Some(parent) = node.parent else {
            return Ok(cached.matrix);
        };
        let changed = self.has_changed(parent)?;
        if !changed && !cached.provisional {
            return Ok(cached.matrix);
        }
        trace!(node = %id, parent = %parent, "refreshing parent matrix");
        let fresh = ParentCache {
            matrix: self.model_matrix(parent)?,
            provisional: changed,
        };
        node.cache.set(fresh);
        Ok(fresh.matrix)
    }

    /// World matrix `parent_matrix · T · R · S`.
    pub fn model_matrix(&self, id: TransformId) -> Result<Mat4, GeomError> {
        let parent = self.parent_matrix(id)?;
        Ok(parent * self.node(id)?.transform.local_matrix())
    }

    /// Commits the node's snapshot for this frame.
    ///
    /// When the node has changed, the cached parent matrices of the node and
    /// every descendant are recomputed top-down after the commit.
    pub fn update(&mut self, id: TransformId) -> Result<(), GeomError> {
        let changed = self.has_changed(id)?;
        self.node_mut(id)?.transform.commit();
        if changed {
            self.flush_subtree(id)?;
        }
        Ok(())
    }

    /// [`TransformTree::update`] for every live node in arena order.
    pub fn update_all(&mut self) {
        let ids: Vec<TransformId> = self.ids().collect();
        for id in ids {
            if let Err(err) = self.update(id) {
                debug!(node = %id, %err, "skipped update");
            }
        }
    }

    fn flush_subtree(&self, root: TransformId) -> Result<(), GeomError> {
        let root_node = self.node(root)?;
        let root_cache = match root_node.parent {
            Some(parent) => ParentCache {
                provisional: self.has_changed(parent)?,
                matrix: self.model_matrix(parent)?,
            },
            None => ParentCache::root(),
        };
        root_node.cache.set(root_cache);

        let mut stack = vec![(root, root_cache.provisional)];
        while let Some((id, ancestors_dirty)) = stack.pop() {
            let node = self.node(id)?;
            let dirty = ancestors_dirty || node.transform.is_dirty();
            let matrix = node.cache.get().matrix * node.transform.local_matrix();
            for &child in &node.children {
                self.node(child)?.cache.set(ParentCache {
                    matrix,
                    provisional: dirty,
                });
                stack.push((child, dirty));
            }
        }
        trace!(root = %root, "flushed subtree parent matrices");
        Ok(())
    }

    fn node(&self, id: TransformId) -> Result<&Node, GeomError> {
        self.slots
            .get(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_ref())
            .ok_or(GeomError::StaleHandle(id))
    }

    fn node_mut(&mut self, id: TransformId) -> Result<&mut Node, GeomError> {
        self.slots
            .get_mut(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_mut())
            .ok_or(GeomError::StaleHandle(id))
    }
}
