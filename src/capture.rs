//! Liberty counting and capture.
//!
//! A group's liberty count is cached on the group and refreshed whenever a
//! placement could have changed it. A recount that finds no liberties removes
//! the group and refreshes the groups that bordered it. That follow-up only
//! updates counts: every bordering group gains at least one of the freed
//! points, so it can never reach zero and a capture never cascades.

use std::collections::BTreeSet;

use crate::board::{Board, Point, neighbors};
use crate::group::{Group, GroupId};

/// Outcome of recounting one group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Recount {
    pub liberties: usize,
    /// Stones removed because the group had no liberties left.
    pub captured: usize,
}

impl Board {
    /// Distinct empty points orthogonally adjacent to any stone of `group`.
    pub fn liberty_points(&self, group: &Group) -> BTreeSet<Point> {
        group
            .stones
            .iter()
            .flat_map(|&pt| neighbors(self.size(), pt))
            .filter(|&n| self.stone_at(n).is_none())
            .collect()
    }

    /// Ids of other groups with a stone next to `group`, smallest first.
    fn bordering_groups(&self, group: &Group) -> BTreeSet<GroupId> {
        group
            .stones
            .iter()
            .flat_map(|&pt| neighbors(self.size(), pt))
            .filter_map(|n| self.stone_at(n))
            .map(|s| s.group())
            .filter(|&id| id != group.id)
            .collect()
    }

    /// Recount the liberties of group `id`, capturing it if it has none.
    ///
    /// Returns the new count, `Some(0)` meaning the group was just removed,
    /// or `None` if `id` is not a live group. Running it again without a
    /// placement in between gives the same answer.
    pub fn recompute(&mut self, id: GroupId) -> Option<usize> {
        self.recount(id).map(|r| r.liberties)
    }

    pub(crate) fn recount(&mut self, id: GroupId) -> Option<Recount> {
        let group = self.groups.get(id)?;
        let liberties = self.liberty_points(group).len();

        if liberties > 0 {
            if let Some(group) = self.groups.get_mut(id) {
                group.liberties = liberties;
            }
            return Some(Recount {
                liberties,
                captured: 0,
            });
        }

        let bordering = self.bordering_groups(group);
        let removed = self.delete_group(id)?;
        for other in bordering {
            self.refresh_liberties(other);
        }

        Some(Recount {
            liberties: 0,
            captured: removed.len(),
        })
    }

    /// Update the cached count of `id` without capturing.
    fn refresh_liberties(&mut self, id: GroupId) {
        let Some(group) = self.groups.get(id) else {
            return;
        };
        let liberties = self.liberty_points(group).len();
        debug_assert!(liberties > 0, "group {id} bordered a capture but has no liberties");
        if let Some(group) = self.groups.get_mut(id) {
            group.liberties = liberties;
        }
    }
}
