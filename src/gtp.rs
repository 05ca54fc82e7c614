//! Go Text Protocol (GTP) front end.
//!
//! Lets scripts and Go GUIs drive a [`Board`] over stdin/stdout. Moves can be
//! given as GTP vertices (`D4`) or as `x,y` grid coordinates; `genmove` asks
//! the configured [`MoveSuggester`] and plays its answer through the normal
//! placement path.
//!
//! ## Supported Commands
//!
//! - `name`, `version`, `protocol_version`
//! - `list_commands`, `known_command <cmd>`
//! - `quit`
//! - `boardsize <size>` - Resize and clear the board
//! - `clear_board` - Reset the board to empty, Black to move
//! - `play <color> <vertex>` - Play a move for the color to move
//! - `genmove <color>` - Ask the suggester for a move and play it
//! - `showboard` - Print the board
//! - `groups` - List live groups with their liberties
//! - `turn` - Print the color to move
//!
//! There is no pass, so `play` and `genmove` only accept the color to move.

use std::io::{self, BufRead, Write};

use crate::board::{Board, Color, Point};
use crate::constants::{DEFAULT_SIZE, MAX_SIZE, MIN_SIZE};
use crate::suggest::{MoveSuggester, RandomSuggester, parse_suggestion, play_suggestion};

/// The list of known GTP commands.
const KNOWN_COMMANDS: &[&str] = &[
    "boardsize",
    "clear_board",
    "genmove",
    "groups",
    "known_command",
    "list_commands",
    "name",
    "play",
    "protocol_version",
    "quit",
    "showboard",
    "turn",
    "version",
];

/// Column letters; 'I' is skipped by Go convention.
const COLUMNS: &[u8] = b"ABCDEFGHJKLMNOPQRSTUVWXYZ";

/// Parse a vertex for a board of side `size`.
///
/// Accepts GTP form (`D4`, row 1 at the bottom) and `x,y` grid form. Returns
/// `None` for anything that does not name a point, including GTP rows outside
/// `1..=size`. Columns or `x,y` points past the edge are returned as-is and
/// refused when played.
pub fn parse_vertex(s: &str, size: usize) -> Option<Point> {
    if s.contains(',') {
        return parse_suggestion(s).ok()?.point();
    }

    let bytes = s.as_bytes();
    let (&col_char, row_digits) = bytes.split_first()?;
    let x = COLUMNS
        .iter()
        .position(|&c| c == col_char.to_ascii_uppercase())?;

    let row: usize = std::str::from_utf8(row_digits).ok()?.parse().ok()?;
    if row == 0 || row > size {
        return None;
    }
    Some((x, size - row))
}

/// Format a point as a GTP vertex for a board of side `size`.
pub fn format_vertex((x, y): Point, size: usize) -> String {
    let col = COLUMNS.get(x).map_or('?', |&c| c as char);
    format!("{col}{}", size - y)
}

/// GTP engine state.
pub struct GtpEngine {
    board: Board,
    suggester: Box<dyn MoveSuggester>,
}

impl Default for GtpEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GtpEngine {
    /// A default-size board with an unseeded random opponent.
    pub fn new() -> Self {
        Self::with_suggester(DEFAULT_SIZE, Box::new(RandomSuggester::new()))
    }

    pub fn with_suggester(size: usize, suggester: Box<dyn MoveSuggester>) -> Self {
        Self {
            board: Board::new(size),
            suggester,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Run the GTP command loop on stdin/stdout.
    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    /// Run the GTP command loop until `quit` or end of input.
    pub fn run_with<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);

            let parts: Vec<&str> = command_line.split_whitespace().collect();
            let Some((command, args)) = parts.split_first() else {
                continue;
            };
            let command = command.to_lowercase();

            let (success, message) = self.execute(&command, args);
            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();

            write!(output, "{prefix}{id_str} {message}\n\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command ID from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        if end > 0 {
            if let Ok(id) = trimmed[..end].parse::<u32>() {
                return (Some(id), trimmed[end..].trim());
            }
        }
        (None, trimmed)
    }

    /// Check that `arg` names the color to move.
    fn mover(&self, arg: &str) -> Result<Color, String> {
        let color: Color = arg.parse()?;
        if color != self.board.to_move() {
            return Err(format!("it is {}'s turn", self.board.to_move()));
        }
        Ok(color)
    }

    /// Execute a GTP command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, "gogol-rust".to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, "2".to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                let Some(name) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let known = KNOWN_COMMANDS.contains(&name.to_lowercase().as_str());
                (true, known.to_string())
            }

            "quit" => (true, String::new()),

            "boardsize" => {
                let Some(arg) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                match arg.parse::<usize>() {
                    Ok(size) if (MIN_SIZE..=MAX_SIZE).contains(&size) => {
                        self.board = Board::new(size);
                        (true, String::new())
                    }
                    Ok(size) => (
                        false,
                        format!("unacceptable size {size}, expected {MIN_SIZE}..={MAX_SIZE}"),
                    ),
                    Err(_) => (false, "invalid size".to_string()),
                }
            }

            "clear_board" => {
                self.board = Board::new(self.board.size());
                (true, String::new())
            }

            "play" => {
                let &[color, vertex, ..] = args else {
                    return (false, "missing arguments".to_string());
                };
                if let Err(e) = self.mover(color) {
                    return (false, e);
                }
                let Some((x, y)) = parse_vertex(vertex, self.board.size()) else {
                    return (false, format!("invalid vertex: {vertex}"));
                };
                match self.board.try_place(x, y) {
                    Ok(_) => (true, String::new()),
                    Err(e) => (false, format!("illegal move: {e}")),
                }
            }

            "genmove" => {
                let Some(color) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let color = match self.mover(color) {
                    Ok(c) => c,
                    Err(e) => return (false, e),
                };
                let suggestion = match self.suggester.suggest(&self.board, color) {
                    Ok(s) => s,
                    Err(e) => {
                        eprintln!("suggester error: {e}");
                        return (false, e.to_string());
                    }
                };
                match suggestion.point() {
                    Some(pt) if play_suggestion(&mut self.board, suggestion) => {
                        (true, format_vertex(pt, self.board.size()))
                    }
                    _ => {
                        eprintln!("rejected suggestion {},{}", suggestion.x, suggestion.y);
                        (
                            false,
                            format!("illegal suggestion {},{}", suggestion.x, suggestion.y),
                        )
                    }
                }
            }

            "showboard" => (true, format!("\n{}", self.board.to_string().trim_end())),

            "groups" => {
                let lines: Vec<String> = self
                    .board
                    .groups()
                    .map(|g| {
                        let stones: Vec<String> = g
                            .stones
                            .iter()
                            .map(|&pt| format_vertex(pt, self.board.size()))
                            .collect();
                        format!("{} {} {} {}", g.id, g.color, g.liberties, stones.join(" "))
                    })
                    .collect();
                (true, lines.join("\n"))
            }

            "turn" => (true, self.board.to_move().to_string()),

            _ => (false, format!("unknown command: {command}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suggest::ScriptedSuggester;

    fn scripted(size: usize, responses: &[&str]) -> GtpEngine {
        GtpEngine::with_suggester(size, Box::new(ScriptedSuggester::new(responses.to_vec())))
    }

    #[test]
    fn test_parse_id_with_id() {
        let (id, cmd) = GtpEngine::parse_id("123 name");
        assert_eq!(id, Some(123));
        assert_eq!(cmd, "name");
    }

    #[test]
    fn test_parse_id_without_id() {
        let (id, cmd) = GtpEngine::parse_id("name");
        assert_eq!(id, None);
        assert_eq!(cmd, "name");
    }

    #[test]
    fn test_parse_vertex_forms() {
        assert_eq!(parse_vertex("A9", 9), Some((0, 0)));
        assert_eq!(parse_vertex("a1", 9), Some((0, 8)));
        assert_eq!(parse_vertex("J1", 9), Some((8, 8)));
        assert_eq!(parse_vertex("3, 4", 9), Some((3, 4)));
        assert_eq!(parse_vertex("I5", 9), None);
        assert_eq!(parse_vertex("A10", 9), None);
        assert_eq!(parse_vertex("A0", 9), None);
        assert_eq!(parse_vertex("-1,2", 9), None);
        assert_eq!(parse_vertex("", 9), None);
    }

    #[test]
    fn test_vertex_skips_i() {
        let h = parse_vertex("H5", 9).unwrap();
        let j = parse_vertex("J5", 9).unwrap();
        assert_eq!(j.0 - h.0, 1, "J should be one column after H (skipping I)");
        assert_eq!(format_vertex(j, 9), "J5");
    }

    #[test]
    fn test_name_command() {
        let mut engine = GtpEngine::new();
        let (success, response) = engine.execute("name", &[]);
        assert!(success);
        assert_eq!(response, "gogol-rust");
    }

    #[test]
    fn test_known_command() {
        let mut engine = GtpEngine::new();

        let (success, response) = engine.execute("known_command", &["groups"]);
        assert!(success);
        assert_eq!(response, "true");

        let (success, response) = engine.execute("known_command", &["komi"]);
        assert!(success);
        assert_eq!(response, "false");
    }

    #[test]
    fn test_boardsize() {
        let mut engine = GtpEngine::new();

        let (success, _) = engine.execute("boardsize", &["13"]);
        assert!(success);
        assert_eq!(engine.board().size(), 13);

        let (success, _) = engine.execute("boardsize", &["26"]);
        assert!(!success);
        let (success, _) = engine.execute("boardsize", &["1"]);
        assert!(!success);
        assert_eq!(engine.board().size(), 13);
    }

    #[test]
    fn test_play_and_clear() {
        let mut engine = scripted(9, &[]);

        let (success, _) = engine.execute("play", &["black", "D4"]);
        assert!(success);
        assert_eq!(engine.board().stone_count(), 1);

        // Wrong color, and an occupied point
        let (success, _) = engine.execute("play", &["black", "E5"]);
        assert!(!success);
        let (success, msg) = engine.execute("play", &["white", "D4"]);
        assert!(!success);
        assert!(msg.contains("not empty"));

        let (success, _) = engine.execute("clear_board", &[]);
        assert!(success);
        assert_eq!(engine.board().stone_count(), 0);
        assert_eq!(engine.board().to_move(), Color::Black);
    }

    #[test]
    fn test_genmove_plays_suggestion() {
        let mut engine = scripted(5, &["2, 2", "9,9", "nonsense"]);

        let (success, vertex) = engine.execute("genmove", &["b"]);
        assert!(success);
        assert_eq!(vertex, "C3");
        assert_eq!(engine.board().to_move(), Color::White);

        // Off the board: refused, turn unchanged
        let (success, _) = engine.execute("genmove", &["w"]);
        assert!(!success);
        assert_eq!(engine.board().to_move(), Color::White);

        // Malformed reply
        let (success, msg) = engine.execute("genmove", &["w"]);
        assert!(!success);
        assert!(msg.contains("invalid response format"));

        // Out of replies
        let (success, _) = engine.execute("genmove", &["w"]);
        assert!(!success);
        assert_eq!(engine.board().stone_count(), 1);
    }

    #[test]
    fn test_groups_and_showboard() {
        let mut engine = scripted(3, &[]);
        engine.execute("play", &["b", "A3"]);
        engine.execute("play", &["w", "C1"]);

        let (_, groups) = engine.execute("groups", &[]);
        assert_eq!(groups, "#0 Black 2 A3\n#1 White 2 C1");

        let (_, board) = engine.execute("showboard", &[]);
        assert_eq!(board, "\nX . . \n. . . \n. . O");

        let (_, turn) = engine.execute("turn", &[]);
        assert_eq!(turn, "Black");
    }

    #[test]
    fn test_run_with_session() {
        let mut engine = scripted(5, &[]);
        let input = "1 play black 1,1\n# comment\n\n2 turn\nbogus\nquit\nname\n";
        let mut out = Vec::new();
        engine.run_with(input.as_bytes(), &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(out, "=1 \n\n=2 White\n\n? unknown command: bogus\n\n= \n\n");
    }
}
