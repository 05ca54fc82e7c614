//! Group registry.
//!
//! Groups live in an arena keyed by [`GroupId`]. Stones on the grid carry the
//! id of their group instead of a reference, so merging and capturing only
//! ever touch ids and the arena.

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::fmt;

use crate::board::{Color, Point};

/// Stable identifier of a group. Ids are never reused once a group dies.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupId(pub u32);

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A maximal set of orthogonally connected stones of one color.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    pub id: GroupId,
    pub color: Color,
    /// Member stones, by coordinate.
    pub stones: BTreeSet<Point>,
    /// Cached count of distinct empty points next to the group.
    pub liberties: usize,
}

impl Group {
    fn new(id: GroupId, color: Color, first: Point) -> Self {
        Self {
            id,
            color,
            stones: BTreeSet::from([first]),
            liberties: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.stones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stones.is_empty()
    }

    pub fn contains(&self, pt: Point) -> bool {
        self.stones.contains(&pt)
    }
}

/// Arena of live groups plus the id counter.
#[derive(Clone, Debug, Default)]
pub struct GroupRegistry {
    groups: BTreeMap<GroupId, Group>,
    next_id: u32,
}

impl GroupRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh id and register a one-stone group under it.
    pub fn create(&mut self, color: Color, first: Point) -> GroupId {
        let id = GroupId(self.next_id);
        self.next_id += 1;
        self.groups.insert(id, Group::new(id, color, first));
        id
    }

    pub fn get(&self, id: GroupId) -> Option<&Group> {
        self.groups.get(&id)
    }

    pub fn get_mut(&mut self, id: GroupId) -> Option<&mut Group> {
        self.groups.get_mut(&id)
    }

    /// Unregister a group and hand back its contents. Clearing the grid is
    /// the caller's job, see `Board::delete_group`.
    pub fn remove(&mut self, id: GroupId) -> Option<Group> {
        self.groups.remove(&id)
    }

    /// Live groups in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &Group> {
        self.groups.values()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// The id the next call to [`create`](Self::create) will hand out.
    pub fn peek_next_id(&self) -> GroupId {
        GroupId(self.next_id)
    }
}
