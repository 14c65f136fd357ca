//! `SignalSet` — the live, validated signal population.

use rustc_hash::FxHashMap;

use rr_core::road::even_spacing;
use rr_core::{Phase, SignalId};

use crate::{PhaseDurations, Signal, SignalError, SignalResult, SignalSnapshot};

/// All signals of one run, stored in ascending id order (`signals[i].id ==
/// SignalId(i)`).
///
/// Construction validates that every signal sits on the road, that no two
/// signals share a cell, and that every counter is within its phase.  The
/// `Vec` itself is private so those invariants cannot be broken afterwards;
/// only [`advance_all`][crate::advance_all] mutates it, and only `phase` and
/// `elapsed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignalSet {
    pub(crate) signals: Vec<Signal>,
    road_length:        u32,
}

impl SignalSet {
    /// Validate and wrap hand-built signals.
    pub fn new(signals: Vec<Signal>, road_length: u32) -> SignalResult<Self> {
        if signals.len() > road_length as usize {
            return Err(SignalError::TooMany { count: signals.len(), road_length });
        }

        let mut occupied: FxHashMap<u32, SignalId> = FxHashMap::default();
        for (index, s) in signals.iter().enumerate() {
            if s.id.index() != index {
                return Err(SignalError::IdMismatch { index, got: s.id });
            }
            if s.position >= road_length {
                return Err(SignalError::OutOfRoad {
                    signal: s.id,
                    position: s.position,
                    road_length,
                });
            }
            let d = s.durations;
            if d.green == 0 || d.yellow == 0 || d.red == 0 {
                return Err(SignalError::ZeroDuration(s.id));
            }
            let duration = d.of(s.phase);
            if s.elapsed >= duration {
                return Err(SignalError::ElapsedOutOfRange {
                    signal: s.id,
                    elapsed: s.elapsed,
                    duration,
                });
            }
            if let Some(&first) = occupied.get(&s.position) {
                return Err(SignalError::DuplicatePosition {
                    position: s.position,
                    first,
                    second: s.id,
                });
            }
            occupied.insert(s.position, s.id);
        }

        Ok(Self { signals, road_length })
    }

    /// Default layout: `count` signals evenly spaced from cell 0, alternating
    /// GREEN (even ids) and RED (odd ids), every signal on the same
    /// `cycle_length` split.
    pub fn generate(count: usize, road_length: u32, cycle_length: u32) -> SignalResult<Self> {
        if count > road_length as usize {
            return Err(SignalError::TooMany { count, road_length });
        }

        let spacing = even_spacing(count, road_length);
        let durations = PhaseDurations::from_cycle(cycle_length);
        let signals = (0..count)
            .map(|i| {
                let position = ((i as u64 * spacing) % road_length as u64) as u32;
                let phase = if i % 2 == 0 { Phase::Green } else { Phase::Red };
                Signal::new(SignalId(i as u32), position, phase, durations)
            })
            .collect();

        Self::new(signals, road_length)
    }

    /// Take an owned copy of every signal for one tick's movement pass.
    #[inline]
    pub fn snapshot(&self) -> SignalSnapshot {
        SignalSnapshot::capture(self)
    }

    #[inline]
    pub fn signals(&self) -> &[Signal] {
        &self.signals
    }

    #[inline]
    pub fn get(&self, id: SignalId) -> Option<&Signal> {
        self.signals.get(id.index())
    }

    #[inline]
    pub fn road_length(&self) -> u32 {
        self.road_length
    }

    pub fn len(&self) -> usize {
        self.signals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }
}
