//! Tests for argument parsing and console rendering.

#[cfg(test)]
mod cli_tests {
    use clap::Parser;
    use rr_core::ExecutionPolicy;

    use crate::cli::Cli;

    #[test]
    fn positional_arguments_and_defaults() {
        let cli = Cli::try_parse_from(["ringroad", "20", "4", "5", "100", "--seed", "42"]).unwrap();
        let config = cli.to_config();
        assert_eq!(config.vehicle_count, 20);
        assert_eq!(config.signal_count, 4);
        assert_eq!(config.total_ticks, 5);
        assert_eq!(config.road_length, 100);
        assert_eq!(config.tick_delay_secs, 0);
        assert_eq!(config.cycle_length, 9);
        assert_eq!(config.policy, ExecutionPolicy::Combined);
        assert_eq!(config.seed, 42);
        assert_eq!(config.num_threads, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn options() {
        let cli = Cli::try_parse_from([
            "ringroad", "3", "2", "10", "30",
            "--delay", "1", "--cycle", "12", "--mode", "sequential",
            "--seed", "7", "--threads", "5",
        ])
        .unwrap();
        let config = cli.to_config();
        assert_eq!(config.tick_delay_secs, 1);
        assert_eq!(config.cycle_length, 12);
        assert_eq!(config.policy, ExecutionPolicy::Sequential);
        assert_eq!(config.seed, 7);
        assert_eq!(config.num_threads, Some(5));
    }

    #[test]
    fn missing_positionals_rejected() {
        assert!(Cli::try_parse_from(["ringroad", "20", "4", "5"]).is_err());
    }

    #[test]
    fn negative_counts_rejected_by_parser() {
        assert!(Cli::try_parse_from(["ringroad", "-1", "4", "5", "100"]).is_err());
    }

    #[test]
    fn unknown_mode_rejected() {
        assert!(Cli::try_parse_from(["ringroad", "1", "1", "1", "10", "--mode", "both"]).is_err());
    }

    #[test]
    fn short_road_fails_validation() {
        let cli = Cli::try_parse_from(["ringroad", "20", "4", "5", "5", "--seed", "1"]).unwrap();
        assert!(cli.to_config().validate().is_err());
    }
}

#[cfg(test)]
mod render_tests {
    use rr_core::{Phase, SignalId, Tick, VehicleId};
    use rr_sim::{SimObserver, TickReport};

    use crate::render::ConsoleObserver;

    #[test]
    fn renders_one_block_per_report() {
        let report = TickReport {
            tick:     Tick(0),
            vehicles: vec![(VehicleId(0), 8), (VehicleId(1), 13)],
            signals:  vec![(SignalId(0), Phase::Red), (SignalId(1), Phase::Green)],
        };

        let mut buf = Vec::new();
        let mut obs = ConsoleObserver::new(&mut buf);
        obs.on_report(&report);
        obs.on_sim_end(Tick(1));
        assert!(obs.take_error().is_none());
        drop(obs);

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "\nIteration 1\n\
             Vehicle  0 - Position: 8\n\
             Vehicle  1 - Position: 13\n\
             Signal 0 - Phase: 0 (RED)\n\
             Signal 1 - Phase: 1 (GREEN)\n"
        );
    }

    #[test]
    fn write_errors_are_kept() {
        struct Broken;
        impl std::io::Write for Broken {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("closed"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let report = TickReport { tick: Tick(2), vehicles: vec![], signals: vec![] };
        let mut obs = ConsoleObserver::new(Broken);
        obs.on_report(&report);
        assert!(obs.take_error().is_some());
        assert!(obs.take_error().is_none());
    }
}
