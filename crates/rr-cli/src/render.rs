//! Plain-text console rendering of per-tick reports.

use std::io::{self, Write};

use rr_core::Tick;
use rr_sim::{SimObserver, TickReport};

/// A [`SimObserver`] that prints every tick's report as text.
///
/// Write errors are stored internally because `SimObserver` methods have no
/// return value.  After `sim.run()` returns, check with
/// [`take_error`][Self::take_error].
pub struct ConsoleObserver<W: Write> {
    out:        W,
    last_error: Option<io::Error>,
}

impl<W: Write> ConsoleObserver<W> {
    pub fn new(out: W) -> Self {
        Self { out, last_error: None }
    }

    /// Take the stored write error (if any).
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.last_error.take()
    }

    fn write_report(&mut self, report: &TickReport) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "Iteration {}", report.tick.0 + 1)?;
        for (id, position) in &report.vehicles {
            writeln!(self.out, "Vehicle {:>2} - Position: {position}", id.0)?;
        }
        for (id, phase) in &report.signals {
            writeln!(self.out, "Signal {} - Phase: {} ({phase})", id.0, phase.code())?;
        }
        // Flush per tick so the inter-tick delay shows each block as it lands.
        self.out.flush()
    }

    fn store_err(&mut self, result: io::Result<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: Write> SimObserver for ConsoleObserver<W> {
    fn on_report(&mut self, report: &TickReport) {
        let result = self.write_report(report);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.out.flush();
        self.store_err(result);
    }
}
