//! Embedded default puzzle
//!
//! Compiled into the binary so the game runs without any puzzle file.

/// Seed text of the default puzzle
pub const SEED_TEXT: &str = "[drink from a [farm animal that makes a [sound a sheep makes] sound]]. \
The quick brown [animal that jumps] jumps over the lazy [animal that barks]. \
Is the sky [opposite of black] or [color of the sun]? I prefer [a common red fruit].";

/// Clue → answer pairs of the default puzzle
pub const SEED_CLUES: &[(&str, &str)] = &[
    ("sound a sheep makes", "baa"),
    ("farm animal that makes a baa sound", "sheep"),
    ("drink from a sheep", "milk"),
    ("animal that jumps", "fox"),
    ("animal that barks", "dog"),
    ("opposite of black", "white"),
    ("color of the sun", "yellow"),
    ("a common red fruit", "apple"),
];

/// Number of clues in the default puzzle
pub const SEED_CLUES_COUNT: usize = SEED_CLUES.len();
