//! Requested tuple length for the selection generators

use crate::io::configuration::FULL_LENGTH_SENTINEL;
use crate::io::error::{GeneratorError, Result, invalid_parameter};

/// Length of each tuple produced by a selection generator
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Length {
    /// Use the full length of the source collection
    #[default]
    Full,
    /// Use exactly this many elements per tuple
    Exactly(usize),
}

impl Length {
    /// Interpret a raw `catch_len`, where `-1` selects the full source length
    ///
    /// # Errors
    ///
    /// Returns an error for any negative value other than the sentinel
    pub fn from_catch_len(catch_len: isize) -> Result<Self> {
        if catch_len == FULL_LENGTH_SENTINEL {
            return Ok(Self::Full);
        }

        match usize::try_from(catch_len) {
            Ok(len) => Ok(Self::Exactly(len)),
            Err(_negative) => Err(invalid_parameter(
                "catch_len",
                &catch_len,
                &format!("must be non-negative or {FULL_LENGTH_SENTINEL} for the full length"),
            )),
        }
    }

    /// Concrete tuple length for a source of `source_len` elements
    pub const fn resolve(self, source_len: usize) -> usize {
        match self {
            Self::Full => source_len,
            Self::Exactly(len) => len,
        }
    }

    /// Concrete tuple length for selections that cannot repeat positions
    ///
    /// # Errors
    ///
    /// Returns an error if the length exceeds `source_len`
    pub fn resolve_distinct(self, source_len: usize) -> Result<usize> {
        let len = self.resolve(source_len);
        if len > source_len {
            return Err(invalid_parameter(
                "catch_len",
                &len,
                &format!("cannot select more than the {source_len} available elements"),
            ));
        }
        Ok(len)
    }
}

impl From<usize> for Length {
    fn from(len: usize) -> Self {
        Self::Exactly(len)
    }
}

impl TryFrom<isize> for Length {
    type Error = GeneratorError;

    fn try_from(catch_len: isize) -> Result<Self> {
        Self::from_catch_len(catch_len)
    }
}
