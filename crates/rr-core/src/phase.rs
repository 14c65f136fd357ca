//! Traffic signal phases.

use std::fmt;

/// The phase a signal is showing.
///
/// Phases cycle in the fixed order GREEN → YELLOW → RED → GREEN; see
/// [`Phase::next`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    Red,
    Green,
    Yellow,
}

impl Phase {
    /// All phases in cycle order, starting from GREEN.
    pub const CYCLE: [Phase; 3] = [Phase::Green, Phase::Yellow, Phase::Red];

    /// The phase that follows `self` in the cycle.
    #[inline]
    pub fn next(self) -> Phase {
        match self {
            Phase::Green  => Phase::Yellow,
            Phase::Yellow => Phase::Red,
            Phase::Red    => Phase::Green,
        }
    }

    /// `true` if a vehicle must not enter the signal's cell.
    #[inline]
    pub fn is_stop(self) -> bool {
        matches!(self, Phase::Red | Phase::Yellow)
    }

    /// Numeric code used by the console report: RED = 0, GREEN = 1,
    /// YELLOW = 2.
    #[inline]
    pub fn code(self) -> u8 {
        match self {
            Phase::Red    => 0,
            Phase::Green  => 1,
            Phase::Yellow => 2,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::Red    => "RED",
            Phase::Green  => "GREEN",
            Phase::Yellow => "YELLOW",
        })
    }
}
