//! Gogol-Rust: a Go board-state engine.
//!
//! The engine tracks stones, connected groups and their liberties, and
//! removes groups that run out of liberties. Black and White alternate;
//! there is no passing, scoring or ko.
//!
//! ## Modules
//!
//! - [`constants`] - Default board size and text-format characters
//! - [`board`] - Board state and the placement entry point
//! - [`group`] - Group arena keyed by stable ids
//! - [`merge`] - Joining a new stone to its friendly neighbors
//! - [`capture`] - Liberty counting and capture
//! - [`suggest`] - Move suggestions from automated opponents
//! - [`gtp`] - Go Text Protocol front end
//!
//! ## Example
//!
//! ```
//! use gogol_rust::board::{Board, Color};
//!
//! let mut board = Board::new(5);
//! assert!(board.place(2, 2)); // Black
//! assert!(board.place(2, 1)); // White
//! assert!(!board.place(2, 2)); // occupied
//!
//! assert_eq!(board.to_move(), Color::Black);
//! assert_eq!(board.group_at(2, 2).unwrap().liberties, 3);
//! println!("{board}");
//! ```

pub mod board;
pub mod capture;
pub mod constants;
pub mod group;
pub mod gtp;
pub mod merge;
pub mod suggest;
