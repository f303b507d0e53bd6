//! Word count statistics of a split.
use std::fmt;

/// Min/max word counts over the examples kept in a split.
///
/// `min` is `None` until an example is recorded, so an empty split reports no minimum and a max of 0.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LengthStats {
    min: Option<usize>,
    max: usize,
}

impl LengthStats {
    pub fn update(&mut self, word_count: usize) {
        self.max = self.max.max(word_count);
        self.min = Some(match self.min {
            Some(min) => min.min(word_count),
            None => word_count,
        });
    }

    pub fn min(&self) -> Option<usize> {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }
}

impl fmt::Display for LengthStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.min {
            Some(min) => writeln!(f, "text_min_length:{}", min)?,
            None => writeln!(f, "text_min_length:none")?,
        }
        write!(f, "text_max_length:{}", self.max)
    }
}
