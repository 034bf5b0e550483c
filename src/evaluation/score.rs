use std::fmt::Display;
use std::iter::Sum;
use std::ops::Add;

/// Material value of a player's pieces.
///
/// The score is stored in centipawns (100 CP = 1 "pawn") so that fractional
/// values such as a knight's 2.5 stay exact and scores can be compared and
/// hashed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score {
    centipawns: u32,
}

impl Score {
    /// No material at all.
    pub const ZERO: Self = Self { centipawns: 0 };

    /// Creates a new score in centipawn units.
    #[must_use]
    pub const fn cp(centipawns: u32) -> Self {
        Self { centipawns }
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn centipawns(self) -> u32 {
        self.centipawns
    }

    /// Converts the score to pawn units for human interpretation.
    #[must_use]
    pub fn pawns(self) -> f64 {
        f64::from(self.centipawns) / 100.0
    }
}

impl Add for Score {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self {
            centipawns: self.centipawns + other.centipawns,
        }
    }
}

impl Sum for Score {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl Display for Score {
    /// Formats the score in pawns: "38", "2.5".
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.pawns())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn cp() {
        let cp = Score::cp(42);
        assert_eq!(cp, Score { centipawns: 42 });
        assert_eq!(cp.centipawns(), 42);

        assert!(Score::cp(42) < Score::cp(43));
        assert!(Score::ZERO < Score::cp(50));
    }

    #[test]
    fn sum() {
        assert_eq!(Score::cp(100) + Score::cp(50), Score::cp(150));
        assert_eq!(
            [Score::cp(900), Score::cp(250), Score::cp(50)]
                .into_iter()
                .sum::<Score>(),
            Score::cp(1200)
        );
        assert_eq!(std::iter::empty::<Score>().sum::<Score>(), Score::ZERO);
    }

    #[test]
    fn display() {
        assert_eq!(Score::cp(3800).to_string(), "38");
        assert_eq!(Score::cp(250).to_string(), "2.5");
        assert_eq!(Score::cp(150).to_string(), "1.5");
        assert_eq!(Score::ZERO.to_string(), "0");
    }
}
