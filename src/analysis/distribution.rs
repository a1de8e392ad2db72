use std::fmt;

use crate::patterns;

/// Named input distributions of the empirical analysis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Distribution {
    /// Uniform values in `0..=len`.
    Random,
    /// `0..len`, the worst case of the deterministic variant.
    Sorted,
    /// `len` down to `1`.
    Reverse,
}

impl Distribution {
    pub const ALL: [Distribution; 3] = [
        Distribution::Random,
        Distribution::Sorted,
        Distribution::Reverse,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Distribution::Random => "random",
            Distribution::Sorted => "sorted",
            Distribution::Reverse => "reverse",
        }
    }

    pub fn generate(self, len: usize) -> Vec<i32> {
        match self {
            Distribution::Random => patterns::random_uniform(len, 0..=(len as i32)),
            Distribution::Sorted => patterns::ascending(len),
            Distribution::Reverse => patterns::descending(len),
        }
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `pad` keeps width and alignment flags working for the report table.
        f.pad(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_names_match_display() {
        use clap::ValueEnum;

        for dist in Distribution::ALL {
            let value = dist.to_possible_value().unwrap();
            assert_eq!(value.get_name(), dist.name());
            assert_eq!(Distribution::from_str(dist.name(), false), Ok(dist));
        }
        assert!(Distribution::from_str("zipf", false).is_err());
    }

    #[test]
    fn display_pads() {
        assert_eq!(format!("{:>8}", Distribution::Sorted), "  sorted");
    }

    #[test]
    fn generate() {
        assert_eq!(Distribution::Sorted.generate(5), [0, 1, 2, 3, 4]);
        assert_eq!(Distribution::Reverse.generate(5), [5, 4, 3, 2, 1]);

        let random = Distribution::Random.generate(100);
        assert_eq!(random.len(), 100);
        assert!(random.iter().all(|x| (0..=100).contains(x)));

        assert!(Distribution::Random.generate(0).is_empty());
    }
}
