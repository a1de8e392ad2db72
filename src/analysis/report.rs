//! Tabular output of the empirical analysis.
//!
//! ```text
//!   Size |     Dist |   Deterministic |   Randomized
//! -------------------------------------------------------
//!   1000 |   random |        0.000151 |     0.000170
//!   1000 |   sorted |        0.011846 |     0.000141
//! ```

use std::fmt;
use std::time::Duration;

use crate::error::SortError;

use super::Distribution;

const RULE_LEN: usize = 55;
const STATS_RULE_LEN: usize = 60;

/// How one variant fared on one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Sorted {
        /// Median over all samples.
        duration: Duration,
        /// Mean over all samples.
        comparisons: u64,
        /// Deepest recursion-tree level over all samples.
        max_depth: usize,
    },
    LimitExceeded(SortError),
}

impl Outcome {
    fn time_cell(&self) -> String {
        match self {
            Outcome::Sorted { duration, .. } => format!("{:.6}", duration.as_secs_f64()),
            Outcome::LimitExceeded(err) => limit_cell(err),
        }
    }

    fn comparisons_cell(&self) -> String {
        match self {
            Outcome::Sorted { comparisons, .. } => comparisons.to_string(),
            Outcome::LimitExceeded(err) => limit_cell(err),
        }
    }

    fn depth_cell(&self) -> String {
        match self {
            Outcome::Sorted { max_depth, .. } => max_depth.to_string(),
            Outcome::LimitExceeded(err) => limit_cell(err),
        }
    }
}

fn limit_cell(err: &SortError) -> String {
    match err {
        SortError::DepthLimitExceeded { max_depth, .. } => format!("depth>{max_depth}"),
        SortError::InputTooLarge { max_len, .. } => format!("len>{max_len}"),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub len: usize,
    pub distribution: Distribution,
    pub deterministic: Outcome,
    pub randomized: Outcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub rows: Vec<Row>,
    pub show_comparisons: bool,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>6} | {:>8} | {:>15} | {:>12}",
            "Size", "Dist", "Deterministic", "Randomized"
        )?;
        if self.show_comparisons {
            write!(
                f,
                " | {:>12} | {:>12} | {:>12} | {:>12}",
                "Det comps", "Rand comps", "Det depth", "Rand depth"
            )?;
        }
        writeln!(f)?;

        let rule_len = if self.show_comparisons {
            RULE_LEN + STATS_RULE_LEN
        } else {
            RULE_LEN
        };
        writeln!(f, "{}", "-".repeat(rule_len))?;

        for row in &self.rows {
            write!(
                f,
                "{:>6} | {:>8} | {:>15} | {:>12}",
                row.len,
                row.distribution,
                row.deterministic.time_cell(),
                row.randomized.time_cell()
            )?;
            if self.show_comparisons {
                write!(
                    f,
                    " | {:>12} | {:>12} | {:>12} | {:>12}",
                    row.deterministic.comparisons_cell(),
                    row.randomized.comparisons_cell(),
                    row.deterministic.depth_cell(),
                    row.randomized.depth_cell()
                )?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
