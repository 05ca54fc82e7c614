//! Joining a new stone to the groups it touches.

use crate::board::{Board, Color, Point, Stone, neighbors};
use crate::group::GroupId;

impl Board {
    /// Distinct ids of the `color` groups orthogonally adjacent to `pt`,
    /// smallest first.
    pub(crate) fn friendly_groups(&self, pt: Point, color: Color) -> Vec<GroupId> {
        let mut ids: Vec<GroupId> = neighbors(self.size(), pt)
            .filter_map(|n| self.stone_at(n))
            .filter(|s| s.color() == color)
            .map(|s| s.group())
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }

    /// Write a `color` stone at the empty point `pt` and attach it to a group.
    ///
    /// With no friendly neighbor the stone starts a new group. Otherwise every
    /// touching group is folded into the one with the smallest id, which also
    /// receives the new stone. Returns the id of the stone's group; its
    /// liberty count is stale until the caller recounts it.
    pub(crate) fn join_groups(&mut self, pt: Point, color: Color) -> GroupId {
        let touching = self.friendly_groups(pt, color);

        let Some((&target, absorbed)) = touching.split_first() else {
            let id = self.groups.create(color, pt);
            let i = self.idx(pt);
            self.cells[i] = Some(Stone::new(pt, color, id));
            return id;
        };

        let i = self.idx(pt);
        self.cells[i] = Some(Stone::new(pt, color, target));
        self.add_member(target, pt);

        for &source in absorbed {
            self.absorb(target, source);
        }
        target
    }

    fn add_member(&mut self, id: GroupId, pt: Point) {
        match self.groups.get_mut(id) {
            Some(group) => {
                group.stones.insert(pt);
            }
            None => panic!("stone points at missing group {id}"),
        }
    }

    /// Move every stone of `source` into `target` and drop `source`.
    fn absorb(&mut self, target: GroupId, source: GroupId) {
        let Some(moved) = self.groups.remove(source) else {
            panic!("stone points at missing group {source}");
        };
        for &pt in &moved.stones {
            let i = self.idx(pt);
            if let Some(stone) = self.cells[i].as_mut() {
                stone.set_group(target);
            }
            self.add_member(target, pt);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Board, Color};
    use crate::group::GroupId;

    /// Play the given points alternately, panicking on an illegal move.
    fn play(board: &mut Board, moves: &[(usize, usize)]) {
        for &(x, y) in moves {
            assert!(board.place(x, y), "move ({x}, {y}) was refused");
        }
    }

    #[test]
    fn test_lone_stone_starts_group() {
        let mut board = Board::new(5);
        play(&mut board, &[(1, 1)]);
        let stone = board.at(1, 1).unwrap();
        assert_eq!(stone.group(), GroupId(0));
        let g = board.group(GroupId(0)).unwrap();
        assert_eq!(g.color, Color::Black);
        assert_eq!(g.len(), 1);
    }

    #[test]
    fn test_extending_group_keeps_id() {
        let mut board = Board::new(5);
        // Black (1,1), White (4,4), Black (1,2)
        play(&mut board, &[(1, 1), (4, 4), (1, 2)]);
        let a = board.at(1, 1).unwrap().group();
        let b = board.at(1, 2).unwrap().group();
        assert_eq!(a, b);
        assert_eq!(board.group(a).unwrap().len(), 2);
        assert_eq!(board.groups().count(), 2);
    }

    #[test]
    fn test_merge_picks_smallest_id() {
        let mut board = Board::new(5);
        // Black at (0,1) [#0], White (4,4) [#1], Black (2,1) [#2],
        // White (4,3) joins #1, Black (1,1) bridges #0 and #2.
        play(&mut board, &[(0, 1), (4, 4), (2, 1), (4, 3), (1, 1)]);

        let g = board.group_at(1, 1).unwrap();
        assert_eq!(g.id, GroupId(0));
        assert_eq!(g.len(), 3);
        assert!(board.group(GroupId(2)).is_none());
        for x in 0..3 {
            assert_eq!(board.at(x, 1).unwrap().group(), GroupId(0));
        }
    }

    #[test]
    fn test_friendly_groups_dedupes() {
        let mut board = Board::new(5);
        // Black (0,1) and (1,0) are one group through (0,0); both touch (1,1).
        play(&mut board, &[(0, 1), (4, 4), (0, 0), (4, 3), (1, 0), (4, 2)]);
        let ids = board.friendly_groups((1, 1), Color::Black);
        assert_eq!(ids.len(), 1);
        assert!(board.friendly_groups((1, 1), Color::White).is_empty());
    }
}
