//! The signal phase engine.

use rayon::prelude::*;

use crate::SignalSet;

/// Advance every signal by one tick.
///
/// Runs on whichever Rayon pool the caller is installed in; each signal is
/// its own unit of work and no signal reads another.  Returns once every
/// signal has advanced, with the number that changed phase.
pub fn advance_all(set: &mut SignalSet) -> usize {
    set.signals
        .par_iter_mut()
        .map(|signal| usize::from(signal.advance()))
        .sum()
}
