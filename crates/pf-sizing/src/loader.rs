//! Text loader for size distributions.
//!
//! Format: the first line holds the fraction count `N`; each following line
//! holds four whitespace-separated numbers
//! `passing retained fractional_weight cumulative_weight`, top size first.
//! Numeric fields are not validated: a field that does not parse reads as 0.

use std::path::Path;

use pf_core::Real;

use crate::distribution::{SizeDistribution, SizeFraction};
use crate::error::{SizingError, SizingResult};

impl SizeDistribution {
    /// Parse a distribution from its text form.
    pub fn parse(text: &str) -> SizingResult<Self> {
        let mut lines = text.lines();
        let header = lines.next().unwrap_or_default();
        let count: usize = header
            .split_whitespace()
            .next()
            .and_then(|tok| tok.parse().ok())
            .ok_or_else(|| SizingError::Parse {
                line: header.to_string(),
            })?;

        let fractions = lines
            .filter(|line| !line.trim().is_empty())
            .take(count)
            .map(parse_row)
            .collect();

        Ok(Self { fractions })
    }

    /// Read a distribution file.
    pub fn from_path(path: impl AsRef<Path>) -> SizingResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SizingError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Replace this table with the contents of a file.
    ///
    /// The current table is discarded before reading, so a failed load leaves
    /// the distribution empty.
    pub fn load(&mut self, path: impl AsRef<Path>) -> SizingResult<()> {
        self.unload();
        *self = Self::from_path(path)?;
        Ok(())
    }
}

fn parse_row(line: &str) -> SizeFraction {
    let mut fields = line
        .split_whitespace()
        .map(|tok| tok.parse::<Real>().unwrap_or(0.0));
    let mut next = || fields.next().unwrap_or(0.0);
    let passing = next();
    let retained = next();
    let fractional_weight = next();
    let cumulative_weight = next();
    SizeFraction::new(passing, retained, fractional_weight, cumulative_weight)
}
