//! Size distribution table and range queries.

use core::fmt;
use core::ops::Range;
use pf_core::Real;

/// One row of a size distribution: material passing `passing` and retained
/// on `retained` (both in millimetres).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeFraction {
    pub passing: Real,
    pub retained: Real,
    /// Share of the total solids in this fraction, in percent.
    pub fractional_weight: Real,
    /// Cumulative share from the top size down to this fraction, in percent.
    pub cumulative_weight: Real,
    /// Mean of the passing and retained sizes, used for average grain size.
    pub average_size: Real,
}

impl SizeFraction {
    /// Build a fraction, deriving the average size from the sieve sizes.
    pub fn new(
        passing: Real,
        retained: Real,
        fractional_weight: Real,
        cumulative_weight: Real,
    ) -> Self {
        Self {
            passing,
            retained,
            fractional_weight,
            cumulative_weight,
            average_size: (passing + retained) / 2.0,
        }
    }
}

/// Index window into a size distribution.
///
/// Either bound may be missing when the requested sieve size is not in the
/// table; such a range covers no fractions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FractionRange {
    pub start: Option<usize>,
    pub end: Option<usize>,
}

impl FractionRange {
    /// The covered indices, `start..=end` as a half-open range.
    pub fn indices(&self) -> Range<usize> {
        match (self.start, self.end) {
            (Some(start), Some(end)) if start <= end => start..end + 1,
            _ => 0..0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.indices().is_empty()
    }
}

/// An ordered size distribution; index 0 is the top size.
///
/// Rows are trusted as loaded: ordering and weight sums are not validated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SizeDistribution {
    pub(crate) fractions: Vec<SizeFraction>,
}

impl SizeDistribution {
    /// Create an empty distribution.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a distribution directly from rows.
    pub fn from_fractions(fractions: Vec<SizeFraction>) -> Self {
        Self { fractions }
    }

    /// Discard the table.
    pub fn unload(&mut self) {
        self.fractions.clear();
    }

    /// Number of size fractions.
    pub fn len(&self) -> usize {
        self.fractions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fractions.is_empty()
    }

    pub fn fractions(&self) -> &[SizeFraction] {
        &self.fractions
    }

    pub fn fraction(&self, index: usize) -> Option<&SizeFraction> {
        self.fractions.get(index)
    }

    /// Passing size of the top fraction, `None` when nothing is loaded.
    pub fn top_size(&self) -> Option<Real> {
        self.fractions.first().map(|f| f.passing)
    }

    /// Locate the fractions between a passing and a retained sieve size.
    ///
    /// `start` is the first row whose passing size equals `passing`, or row 0
    /// when `passing` is above the top size. `end` is the last row whose
    /// retained size equals `retained`. Sizes are matched exactly.
    pub fn range(&self, passing: Real, retained: Real) -> FractionRange {
        let mut range = FractionRange::default();
        if self.top_size().is_some_and(|top| top < passing) {
            range.start = Some(0);
        }
        for (i, f) in self.fractions.iter().enumerate() {
            if f.passing == passing && range.start.is_none() {
                range.start = Some(i);
            }
            if f.retained == retained {
                range.end = Some(i);
            }
        }
        range
    }

    /// Cumulative weight down to the first row retained on `retained`.
    pub fn cumulative_weight(&self, retained: Real) -> Option<Real> {
        self.fractions
            .iter()
            .find(|f| f.retained == retained)
            .map(|f| f.cumulative_weight)
    }

    /// Sum of fractional weights between two sieve sizes.
    pub fn fractional_weight(&self, passing: Real, retained: Real) -> Real {
        self.fractional_weight_in(self.range(passing, retained))
    }

    pub fn fractional_weight_in(&self, range: FractionRange) -> Real {
        self.rows_in(range)
            .iter()
            .map(|f| f.fractional_weight)
            .sum()
    }

    /// Weighted average grain size (mm) between two sieve sizes.
    ///
    /// `sum(w) / sum(w / avg)`; `None` when the range is empty or carries no
    /// weight.
    pub fn average_size(&self, passing: Real, retained: Real) -> Option<Real> {
        self.average_size_in(self.range(passing, retained))
    }

    pub fn average_size_in(&self, range: FractionRange) -> Option<Real> {
        let (weight, inverse) = self.rows_in(range)
            .iter()
            .fold((0.0, 0.0), |(w, inv), f| {
                (w + f.fractional_weight, inv + f.fractional_weight / f.average_size)
            });
        (inverse != 0.0).then(|| weight / inverse)
    }

    /// Rows covered by `range`; a range reaching past the table covers none.
    fn rows_in(&self, range: FractionRange) -> &[SizeFraction] {
        self.fractions.get(range.indices()).unwrap_or(&[])
    }
}

impl fmt::Display for SizeDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.fractions.is_empty() {
            return Ok(());
        }
        writeln!(f, "Passing | Retained | Fract Wt | Cum Wt | Avg Size")?;
        for row in &self.fractions {
            writeln!(
                f,
                "{}\t{}\t{}\t{}\t{}",
                row.passing, row.retained, row.fractional_weight, row.cumulative_weight, row.average_size
            )?;
        }
        Ok(())
    }
}
