//! Crate constants and command-line defaults

/// Raw `catch_len` value selecting the full length of the source
pub const FULL_LENGTH_SENTINEL: isize = -1;

// Command-line defaults
/// Default step for the `range` command
pub const DEFAULT_RANGE_STEP: i64 = 1;
/// Separator between the elements of one written tuple
pub const TUPLE_SEPARATOR: &str = " ";
/// Separator between items of one `--set` argument of the `product` command
pub const SET_DELIMITER: char = ',';

// Progress bar display settings
/// Expected tuple count above which a progress bar is shown
pub const PROGRESS_THRESHOLD: usize = 10_000;
/// Number of tuples written between progress bar updates
pub const PROGRESS_UPDATE_INTERVAL: u64 = 1_024;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
