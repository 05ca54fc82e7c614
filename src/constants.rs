//! Board dimensions and text-format constants.
//!
//! The default board size is controlled by Cargo features:
//! - `board9x9` (default): 9x9 board
//! - `board13x13`: 13x13 board
//! - `board19x19`: 19x19 board
//!
//! ```sh
//! cargo build                                               # 9x9 (default)
//! cargo build --no-default-features --features board19x19   # 19x19
//! ```
//!
//! The size only picks the board created at startup; `Board::new` accepts any
//! side and `boardsize` can change it at runtime.

// =============================================================================
// Board Geometry
// =============================================================================

/// Default board side (NxN).
#[cfg(feature = "board9x9")]
pub const DEFAULT_SIZE: usize = 9;

#[cfg(feature = "board13x13")]
pub const DEFAULT_SIZE: usize = 13;

#[cfg(feature = "board19x19")]
pub const DEFAULT_SIZE: usize = 19;

#[cfg(any(
    all(feature = "board9x9", feature = "board13x13"),
    all(feature = "board9x9", feature = "board19x19"),
    all(feature = "board13x13", feature = "board19x19"),
))]
compile_error!("Enable only one of 'board9x9', 'board13x13' or 'board19x19'");

#[cfg(not(any(feature = "board9x9", feature = "board13x13", feature = "board19x19")))]
compile_error!("Must enable exactly one board size feature: 'board9x9', 'board13x13' or 'board19x19'");

/// Smallest side accepted by the text protocol.
pub const MIN_SIZE: usize = 2;

/// Largest side accepted by the text protocol (25 letters once 'I' is skipped).
pub const MAX_SIZE: usize = 25;

/// Orthogonal neighbor offsets as (dx, dy): left, right, up, down.
pub const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

// =============================================================================
// Text Serialization
// =============================================================================

/// Black stone in the board serialization.
pub const STONE_BLACK: char = 'X';

/// White stone in the board serialization.
pub const STONE_WHITE: char = 'O';

/// Empty point in the board serialization.
pub const EMPTY: char = '.';
