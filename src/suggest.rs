//! Move suggestions from automated opponents.
//!
//! A suggester looks at the board and answers with a point. External
//! suggesters answer in text, `"x, y"`; [`parse_suggestion`] turns that into a
//! [`Suggestion`]. Whatever the source, a suggestion is played through
//! [`Board::place`] and is refused exactly like a bad click.

use std::collections::VecDeque;

use crate::board::{Board, Color, Point};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SuggestError {
    #[error("invalid response format: {0:?}")]
    Malformed(String),
    #[error("invalid coordinate: {0:?}")]
    BadCoordinate(String),
    #[error("no empty point left to suggest")]
    NoMove,
    #[error("no scripted responses left")]
    Exhausted,
}

/// A candidate move. Coordinates are signed because they come from outside;
/// negative values are rejected when played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suggestion {
    pub x: i64,
    pub y: i64,
}

impl Suggestion {
    /// The board point, if both coordinates are non-negative.
    pub fn point(&self) -> Option<Point> {
        let x = usize::try_from(self.x).ok()?;
        let y = usize::try_from(self.y).ok()?;
        Some((x, y))
    }
}

impl From<Point> for Suggestion {
    fn from((x, y): Point) -> Self {
        Self {
            x: x as i64,
            y: y as i64,
        }
    }
}

/// Parse `"x,y"`: two integers, one comma, whitespace allowed around each.
pub fn parse_suggestion(text: &str) -> Result<Suggestion, SuggestError> {
    let content = text.trim();
    let parts: Vec<&str> = content.split(',').collect();
    let &[x, y] = parts.as_slice() else {
        return Err(SuggestError::Malformed(content.to_string()));
    };
    let coord = |field: &str| {
        let field = field.trim();
        field
            .parse::<i64>()
            .map_err(|_| SuggestError::BadCoordinate(field.to_string()))
    };
    Ok(Suggestion {
        x: coord(x)?,
        y: coord(y)?,
    })
}

/// Play a suggestion for the color to move. Returns `false`, with the board
/// unchanged, for negative, off-board or occupied points.
pub fn play_suggestion(board: &mut Board, suggestion: Suggestion) -> bool {
    match suggestion.point() {
        Some((x, y)) => board.place(x, y),
        None => false,
    }
}

/// Request text for an external suggester: who moves, the board size and
/// the serialized board.
pub fn describe_board(board: &Board, color: Color) -> String {
    let size = board.size();
    format!(
        "You are playing Go. You are {color}. The board size is {size}x{size}. \
         Current Board State:\n{board}\
         Return only the coordinates for your next move in the format 'x,y' (0-indexed)."
    )
}

/// Source of candidate moves for the player `color`.
pub trait MoveSuggester {
    fn suggest(&mut self, board: &Board, color: Color) -> Result<Suggestion, SuggestError>;
}

/// Picks uniformly among the empty points.
pub struct RandomSuggester {
    rng: fastrand::Rng,
}

impl RandomSuggester {
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl Default for RandomSuggester {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSuggester for RandomSuggester {
    fn suggest(&mut self, board: &Board, _color: Color) -> Result<Suggestion, SuggestError> {
        let empty = board.empty_points();
        if empty.is_empty() {
            return Err(SuggestError::NoMove);
        }
        let pick = empty[self.rng.usize(..empty.len())];
        Ok(pick.into())
    }
}

/// Replays raw text responses in order, as an external suggester would have
/// sent them.
#[derive(Debug, Default)]
pub struct ScriptedSuggester {
    responses: VecDeque<String>,
}

impl ScriptedSuggester {
    pub fn new<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            responses: responses.into_iter().map(Into::into).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.responses.len()
    }
}

impl MoveSuggester for ScriptedSuggester {
    fn suggest(&mut self, _board: &Board, _color: Color) -> Result<Suggestion, SuggestError> {
        let text = self.responses.pop_front().ok_or(SuggestError::Exhausted)?;
        parse_suggestion(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_and_spaced() {
        assert_eq!(parse_suggestion("3,4"), Ok(Suggestion { x: 3, y: 4 }));
        assert_eq!(parse_suggestion("  3, 4 \n"), Ok(Suggestion { x: 3, y: 4 }));
        assert_eq!(parse_suggestion("-1,0"), Ok(Suggestion { x: -1, y: 0 }));
    }

    #[test]
    fn test_parse_rejects_bad_shapes() {
        assert_eq!(
            parse_suggestion("3 4"),
            Err(SuggestError::Malformed("3 4".to_string()))
        );
        assert_eq!(
            parse_suggestion("1,2,3"),
            Err(SuggestError::Malformed("1,2,3".to_string()))
        );
        assert_eq!(
            parse_suggestion("D4, 5"),
            Err(SuggestError::BadCoordinate("D4".to_string()))
        );
        assert_eq!(
            parse_suggestion("4,"),
            Err(SuggestError::BadCoordinate(String::new()))
        );
    }

    #[test]
    fn test_negative_suggestion_is_refused() {
        let mut board = Board::new(5);
        assert!(!play_suggestion(&mut board, Suggestion { x: -1, y: 2 }));
        assert_eq!(board.to_move(), Color::Black);
        assert!(play_suggestion(&mut board, Suggestion { x: 1, y: 2 }));
        assert_eq!(board.at(1, 2).unwrap().color(), Color::Black);
    }

    #[test]
    fn test_random_suggester_picks_empty_points() {
        let mut board = Board::new(3);
        let mut bot = RandomSuggester::with_seed(7);
        for _ in 0..20 {
            let color = board.to_move();
            let s = bot.suggest(&board, color).unwrap();
            let (x, y) = s.point().unwrap();
            assert!(board.at(x, y).is_none());
            assert!(play_suggestion(&mut board, s));
        }
    }

    #[test]
    fn test_random_suggester_without_empty_points() {
        let board = Board::new(0);
        let mut bot = RandomSuggester::with_seed(1);
        assert_eq!(bot.suggest(&board, Color::Black), Err(SuggestError::NoMove));
    }

    #[test]
    fn test_scripted_suggester_replays_text() {
        let board = Board::new(5);
        let mut bot = ScriptedSuggester::new(["1, 1", "oops"]);
        assert_eq!(
            bot.suggest(&board, Color::Black),
            Ok(Suggestion { x: 1, y: 1 })
        );
        assert!(matches!(
            bot.suggest(&board, Color::Black),
            Err(SuggestError::Malformed(_))
        ));
        assert_eq!(bot.suggest(&board, Color::Black), Err(SuggestError::Exhausted));
        assert_eq!(bot.remaining(), 0);
    }

    #[test]
    fn test_describe_board() {
        let mut board = Board::new(2);
        board.place(0, 0);
        let text = describe_board(&board, Color::White);
        assert!(text.contains("You are White"));
        assert!(text.contains("2x2"));
        assert!(text.contains("X . \n. . \n"));
    }
}
