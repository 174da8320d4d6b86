use std::fmt::{Display, Formatter};

use crate::core::comparison::Comparison;

const HIGH_SAVINGS: f64 = 50.0;
const MODERATE_SAVINGS: f64 = 10.0;
const MODERATE_LOSS: f64 = -10.0;
const HIGH_LOSS: f64 = -50.0;

/// Savings segment, from fixed thresholds on `original − simulated`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SavingsBand {
    HighSavings,
    ModerateSavings,
    MinimalChange,
    ModerateLoss,
    HighLoss,
}

impl SavingsBand {
    pub const ALL: [Self; 5] = [
        Self::HighSavings,
        Self::ModerateSavings,
        Self::MinimalChange,
        Self::ModerateLoss,
        Self::HighLoss,
    ];

    #[must_use]
    pub fn from_savings(savings: f64) -> Self {
        if savings >= HIGH_SAVINGS {
            Self::HighSavings
        } else if savings >= MODERATE_SAVINGS {
            Self::ModerateSavings
        } else if savings > MODERATE_LOSS {
            Self::MinimalChange
        } else if savings > HIGH_LOSS {
            Self::ModerateLoss
        } else {
            Self::HighLoss
        }
    }
}

impl Display for SavingsBand {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::HighSavings => "High Savings",
            Self::ModerateSavings => "Moderate Savings",
            Self::MinimalChange => "Minimal Change",
            Self::ModerateLoss => "Moderate Loss",
            Self::HighLoss => "High Loss",
        })
    }
}

/// Customer counts derived from a comparison table.
///
/// Rows with no baseline match have no savings value; they are excluded from
/// the counts and tallied separately.
#[derive(Debug, Default, Eq, PartialEq)]
pub struct ComparisonSummary {
    pub increases: usize,
    pub decreases: usize,
    pub unchanged: usize,
    pub unmatched: usize,
    bands: [usize; 5],
}

impl ComparisonSummary {
    #[must_use]
    pub fn of(comparison: &Comparison) -> Self {
        let mut summary = Self::default();
        for row in &comparison.rows {
            match row.savings() {
                None => summary.unmatched += 1,
                Some(savings) => {
                    if savings < 0.0 {
                        summary.increases += 1;
                    } else if savings > 0.0 {
                        summary.decreases += 1;
                    } else {
                        summary.unchanged += 1;
                    }
                    summary.bands[SavingsBand::from_savings(savings) as usize] += 1;
                }
            }
        }
        summary
    }

    #[must_use]
    pub fn band_count(&self, band: SavingsBand) -> usize {
        self.bands[band as usize]
    }
}
