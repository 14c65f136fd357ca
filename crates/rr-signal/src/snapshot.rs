//! Owned per-tick copy of the signal population.

use rustc_hash::FxHashMap;

use rr_core::Phase;

use crate::{Signal, SignalSet};

/// An immutable copy of every signal, taken once per tick.
///
/// The copy is independent of the live [`SignalSet`]: advancing the live set
/// after [`capture`](Self::capture) is not visible here.  A snapshot lives
/// only for the tick that took it and is dropped once that tick's movement
/// pass has returned.
///
/// `SignalSnapshot` is `Sync` and has no interior mutability, so every
/// vehicle task can read it at once.
#[derive(Debug, Clone)]
pub struct SignalSnapshot {
    signals:     Box<[Signal]>,
    by_position: FxHashMap<u32, usize>,
}

impl SignalSnapshot {
    /// Copy every signal of `set` by value and index it by cell.
    pub fn capture(set: &SignalSet) -> Self {
        let signals: Box<[Signal]> = set.signals().into();
        // SignalSet guarantees distinct positions, so no entry is overwritten.
        let by_position = signals
            .iter()
            .enumerate()
            .map(|(i, s)| (s.position, i))
            .collect();
        Self { signals, by_position }
    }

    /// The signal at `position`, as it was when captured.
    #[inline]
    pub fn signal_at(&self, position: u32) -> Option<&Signal> {
        self.by_position.get(&position).map(|&i| &self.signals[i])
    }

    /// The captured phase of the signal at `position`, if there is one.
    #[inline]
    pub fn phase_at(&self, position: u32) -> Option<Phase> {
        self.signal_at(position).map(|s| s.phase)
    }

    /// All captured signals in ascending id order.
    #[inline]
    pub fn signals(&self) -> &[Signal] {
        &self.signals
    }

    pub fn len(&self) -> usize {
        self.signals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }
}
