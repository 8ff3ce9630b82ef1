//! Puzzle file loading
//!
//! Puzzle files are TOML documents with the seed text and a table of clues:
//!
//! ```toml
//! text = "The quick brown [animal that jumps] jumps."
//!
//! [clues]
//! "animal that jumps" = "fox"
//! ```

use super::{Puzzle, PuzzleError};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PuzzleFile {
    text: String,
    #[serde(default)]
    clues: BTreeMap<String, String>,
}

/// Parse and validate a puzzle from TOML source
///
/// # Errors
///
/// Returns `PuzzleError::Parse` for malformed TOML and any validation error
/// reported by [`Puzzle::new`].
///
/// # Examples
/// ```
/// use bracket_city::puzzles::loader::parse_toml;
///
/// let puzzle = parse_toml(r#"
/// text = "I prefer [a common red fruit]."
/// [clues]
/// "a common red fruit" = "apple"
/// "#).unwrap();
/// assert_eq!(puzzle.seed(), "I prefer [a common red fruit].");
/// ```
pub fn parse_toml(source: &str) -> Result<Puzzle, PuzzleError> {
    let file: PuzzleFile = toml::from_str(source)?;
    Puzzle::new(file.text, file.clues)
}

/// Load a puzzle from a TOML file
///
/// # Errors
///
/// Returns `PuzzleError::Io` if the file cannot be read, otherwise the errors of
/// [`parse_toml`].
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Puzzle, PuzzleError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| PuzzleError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let puzzle = parse_toml(&source)?;
    info!(
        path = %path.display(),
        clues = puzzle.clues().len(),
        "Loaded puzzle file"
    );
    Ok(puzzle)
}
