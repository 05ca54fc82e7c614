//! Board state: the stone grid, the group registry and the color to move.
//!
//! [`Board::place`] is the only mutation. It validates the point, joins the new
//! stone to its friendly neighbors (see [`crate::merge`]), recounts liberties
//! and captures (see [`crate::capture`]), then hands the turn to the other
//! color.

use std::fmt;
use std::str::FromStr;

use crate::constants::{DIRECTIONS, EMPTY, STONE_BLACK, STONE_WHITE};
use crate::group::{Group, GroupId, GroupRegistry};

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Character used for this color in the board serialization.
    pub fn symbol(self) -> char {
        match self {
            Color::Black => STONE_BLACK,
            Color::White => STONE_WHITE,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "Black"),
            Color::White => write!(f, "White"),
        }
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "b" | "black" => Ok(Color::Black),
            "w" | "white" => Ok(Color::White),
            _ => Err(format!("invalid color: {s}")),
        }
    }
}

/// A grid coordinate `(x, y)`: column, then row, row 0 at the top.
pub type Point = (usize, usize);

/// Orthogonal neighbors of `pt` that lie on a board of side `size`.
pub fn neighbors(size: usize, (x, y): Point) -> impl Iterator<Item = Point> {
    DIRECTIONS.into_iter().filter_map(move |(dx, dy)| {
        let nx = x.checked_add_signed(dx)?;
        let ny = y.checked_add_signed(dy)?;
        (nx < size && ny < size).then_some((nx, ny))
    })
}

/// A stone on the grid. Its point and color never change; its group id is
/// rewritten when its group is merged into another.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Stone {
    point: Point,
    color: Color,
    group: GroupId,
}

impl Stone {
    pub(crate) fn new(point: Point, color: Color, group: GroupId) -> Self {
        Self {
            point,
            color,
            group,
        }
    }

    pub fn point(&self) -> Point {
        self.point
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn group(&self) -> GroupId {
        self.group
    }

    pub(crate) fn set_group(&mut self, group: GroupId) {
        self.group = group;
    }
}

/// Why a placement was refused. The board is untouched in both cases.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlaceError {
    #[error("point ({x}, {y}) is off a {size}x{size} board")]
    OutOfBounds { x: usize, y: usize, size: usize },
    #[error("point ({x}, {y}) is not empty")]
    Occupied { x: usize, y: usize },
}

/// What a successful placement did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub point: Point,
    pub color: Color,
    /// Group now holding the stone, or `None` if the move captured itself.
    pub group: Option<GroupId>,
    /// Opponent stones removed by this move.
    pub captured: usize,
    pub self_captured: bool,
}

#[derive(Clone, Debug)]
pub struct Board {
    size: usize,
    pub(crate) cells: Vec<Option<Stone>>,
    pub(crate) groups: GroupRegistry,
    to_move: Color,
}

impl Board {
    /// An empty board of side `size` with Black to move.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
            groups: GroupRegistry::new(),
            to_move: Color::Black,
        }
    }

    pub(crate) fn idx(&self, (x, y): Point) -> usize {
        y * self.size + x
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn to_move(&self) -> Color {
        self.to_move
    }

    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size
    }

    /// The stone at `(x, y)`, or `None` if the point is empty or off the board.
    pub fn at(&self, x: usize, y: usize) -> Option<Stone> {
        if !self.in_bounds(x, y) {
            return None;
        }
        self.cells[self.idx((x, y))]
    }

    pub(crate) fn stone_at(&self, pt: Point) -> Option<Stone> {
        self.at(pt.0, pt.1)
    }

    /// Live groups in ascending id order.
    pub fn groups(&self) -> impl Iterator<Item = &Group> {
        self.groups.iter()
    }

    pub fn group(&self, id: GroupId) -> Option<&Group> {
        self.groups.get(id)
    }

    /// The group owning the stone at `(x, y)`, if any.
    pub fn group_at(&self, x: usize, y: usize) -> Option<&Group> {
        self.at(x, y).and_then(|s| self.groups.get(s.group()))
    }

    pub fn stone_count(&self) -> usize {
        self.groups.iter().map(Group::len).sum()
    }

    /// Points with no stone, row by row.
    pub fn empty_points(&self) -> Vec<Point> {
        (0..self.size)
            .flat_map(|y| (0..self.size).map(move |x| (x, y)))
            .filter(|&(x, y)| self.at(x, y).is_none())
            .collect()
    }

    /// Play a stone of the color to move. Returns `false`, leaving the board
    /// and the turn untouched, if the point is off the board or occupied.
    pub fn place(&mut self, x: usize, y: usize) -> bool {
        self.try_place(x, y).is_ok()
    }

    /// Like [`place`](Self::place), reporting why a move was refused and what
    /// an accepted one captured.
    ///
    /// The mover's own group is recounted before any opponent group, so a
    /// move that fills its own last liberty removes itself even when it would
    /// otherwise have captured.
    pub fn try_place(&mut self, x: usize, y: usize) -> Result<Placement, PlaceError> {
        if !self.in_bounds(x, y) {
            return Err(PlaceError::OutOfBounds {
                x,
                y,
                size: self.size,
            });
        }
        if self.at(x, y).is_some() {
            return Err(PlaceError::Occupied { x, y });
        }

        let pt = (x, y);
        let color = self.to_move;
        let group = self.join_groups(pt, color);

        let own = self
            .recount(group)
            .expect("group joined by the placed stone must be live");
        let self_captured = own.liberties == 0;

        let mut opponents: Vec<GroupId> = Vec::with_capacity(4);
        for n in neighbors(self.size, pt) {
            if let Some(stone) = self.stone_at(n) {
                if stone.color() != color && !opponents.contains(&stone.group()) {
                    opponents.push(stone.group());
                }
            }
        }

        let mut captured = 0;
        for id in opponents {
            if let Some(r) = self.recount(id) {
                captured += r.captured;
            }
        }

        self.advance_turn();

        Ok(Placement {
            point: pt,
            color,
            group: (!self_captured).then_some(group),
            captured,
            self_captured,
        })
    }

    fn advance_turn(&mut self) {
        self.to_move = self.to_move.opponent();
    }

    /// Unregister a group and clear its stones from the grid.
    pub(crate) fn delete_group(&mut self, id: GroupId) -> Option<Group> {
        let group = self.groups.remove(id)?;
        for &pt in &group.stones {
            let i = self.idx(pt);
            self.cells[i] = None;
        }
        Some(group)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.size {
            for x in 0..self.size {
                let ch = match self.at(x, y) {
                    Some(stone) => stone.color().symbol(),
                    None => EMPTY,
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
