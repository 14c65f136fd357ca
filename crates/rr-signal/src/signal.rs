//! Per-signal state and its phase transition.

use rr_core::{Phase, SignalId};

/// How long each phase lasts, in ticks.  All three are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhaseDurations {
    pub green:  u32,
    pub yellow: u32,
    pub red:    u32,
}

impl PhaseDurations {
    pub fn new(green: u32, yellow: u32, red: u32) -> Self {
        Self { green, yellow, red }
    }

    /// Split a full cycle 50% GREEN, 20% YELLOW, remainder RED.
    ///
    /// Each share is floored, then raised to at least 1 tick, so very short
    /// cycles end up slightly longer than requested (a cycle of 1 becomes
    /// 1 / 1 / 1).
    pub fn from_cycle(cycle: u32) -> Self {
        let green  = cycle / 2;
        let yellow = cycle / 5;
        let red    = cycle.saturating_sub(green + yellow);
        Self {
            green:  green.max(1),
            yellow: yellow.max(1),
            red:    red.max(1),
        }
    }

    /// Duration of `phase`.
    #[inline]
    pub fn of(&self, phase: Phase) -> u32 {
        match phase {
            Phase::Green  => self.green,
            Phase::Yellow => self.yellow,
            Phase::Red    => self.red,
        }
    }

    /// Total ticks for one full GREEN → YELLOW → RED cycle.
    #[inline]
    pub fn cycle(&self) -> u32 {
        self.green + self.yellow + self.red
    }
}

/// One traffic signal at a fixed cell of the road.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Signal {
    pub id: SignalId,

    /// Cell index in `[0, road_length)`.  Never changes after creation.
    pub position: u32,

    /// The phase currently shown.
    pub phase: Phase,

    /// Ticks spent in `phase`.  Always `< durations.of(phase)` between ticks.
    pub elapsed: u32,

    pub durations: PhaseDurations,
}

impl Signal {
    /// A signal that has just entered `phase`.
    pub fn new(id: SignalId, position: u32, phase: Phase, durations: PhaseDurations) -> Self {
        Self {
            id,
            position,
            phase,
            elapsed: 0,
            durations,
        }
    }

    /// Advance by one tick.  Returns `true` if the phase changed.
    #[inline]
    pub fn advance(&mut self) -> bool {
        self.elapsed += 1;
        if self.elapsed >= self.durations.of(self.phase) {
            self.phase = self.phase.next();
            self.elapsed = 0;
            true
        } else {
            false
        }
    }
}
