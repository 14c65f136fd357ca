//! Unit tests for rr-core primitives.

#[cfg(test)]
mod ids {
    use crate::{SignalId, VehicleId};

    #[test]
    fn index_roundtrip() {
        let id = VehicleId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(VehicleId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(VehicleId(0) < VehicleId(1));
        assert!(SignalId(100) > SignalId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(VehicleId::INVALID.0, u32::MAX);
        assert_eq!(SignalId::default(), SignalId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(SignalId(7).to_string(), "SignalId(7)");
    }
}

#[cfg(test)]
mod phase {
    use crate::Phase;

    #[test]
    fn cycle_order() {
        assert_eq!(Phase::Green.next(), Phase::Yellow);
        assert_eq!(Phase::Yellow.next(), Phase::Red);
        assert_eq!(Phase::Red.next(), Phase::Green);
    }

    #[test]
    fn three_steps_return_to_start() {
        for p in Phase::CYCLE {
            assert_eq!(p.next().next().next(), p);
        }
    }

    #[test]
    fn stop_phases() {
        assert!(Phase::Red.is_stop());
        assert!(Phase::Yellow.is_stop());
        assert!(!Phase::Green.is_stop());
    }

    #[test]
    fn codes_and_display() {
        assert_eq!(Phase::Red.code(), 0);
        assert_eq!(Phase::Green.code(), 1);
        assert_eq!(Phase::Yellow.code(), 2);
        assert_eq!(Phase::Yellow.to_string(), "YELLOW");
    }
}

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(t.next(), Tick(11));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick(3).to_string(), "T3");
    }
}

#[cfg(test)]
mod config {
    use std::time::Duration;

    use crate::{CoreError, ExecutionPolicy, MIN_ROAD_LENGTH, SimConfig, Tick};

    #[test]
    fn default_is_valid() {
        let cfg = SimConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.end_tick(), Tick(5));
        assert_eq!(cfg.policy, ExecutionPolicy::Combined);
        assert_eq!(cfg.tick_delay(), Duration::ZERO);
    }

    #[test]
    fn zero_counts_rejected() {
        let cfg = SimConfig { vehicle_count: 0, ..SimConfig::default() };
        assert_eq!(cfg.validate(), Err(CoreError::ZeroCount { what: "vehicle count" }));

        let cfg = SimConfig { signal_count: 0, ..SimConfig::default() };
        assert_eq!(cfg.validate(), Err(CoreError::ZeroCount { what: "signal count" }));

        let cfg = SimConfig { total_ticks: 0, ..SimConfig::default() };
        assert_eq!(cfg.validate(), Err(CoreError::ZeroCount { what: "iteration count" }));

        let cfg = SimConfig { num_threads: Some(0), ..SimConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn road_length_boundary() {
        let short = SimConfig { road_length: MIN_ROAD_LENGTH - 1, signal_count: 1, ..SimConfig::default() };
        assert_eq!(
            short.validate(),
            Err(CoreError::RoadTooShort { length: 5, min: 6 })
        );

        let min = SimConfig { road_length: MIN_ROAD_LENGTH, signal_count: 1, ..SimConfig::default() };
        assert!(min.validate().is_ok());
    }

    #[test]
    fn zero_cycle_rejected() {
        let cfg = SimConfig { cycle_length: 0, ..SimConfig::default() };
        assert_eq!(cfg.validate(), Err(CoreError::ZeroCycle));
    }

    #[test]
    fn more_signals_than_cells_rejected() {
        let cfg = SimConfig { signal_count: 11, road_length: 10, ..SimConfig::default() };
        assert!(matches!(cfg.validate(), Err(CoreError::TooManySignals { signals: 11, .. })));

        let full = SimConfig { signal_count: 10, road_length: 10, ..SimConfig::default() };
        assert!(full.validate().is_ok());
    }

    #[test]
    fn policy_parsing() {
        assert_eq!("combined".parse(), Ok(ExecutionPolicy::Combined));
        assert_eq!("Sequential".parse(), Ok(ExecutionPolicy::Sequential));
        assert_eq!("0".parse(), Ok(ExecutionPolicy::Sequential));
        assert!("both".parse::<ExecutionPolicy>().is_err());
        assert_eq!(ExecutionPolicy::Sequential.to_string(), "sequential");
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: u64 = r1.random();
            let b: u64 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v = rng.gen_range(1..=2u32);
            assert!((1..=2).contains(&v));
        }
    }
}

#[cfg(test)]
mod road {
    use crate::road::{advance, even_spacing};

    #[test]
    fn advance_wraps() {
        assert_eq!(advance(8, 2, 20), 10);
        assert_eq!(advance(19, 2, 20), 1);
        assert_eq!(advance(0, 40, 20), 0);
        assert_eq!(advance(u32::MAX - 1, 3, u32::MAX), 2);
    }

    #[test]
    fn spacing() {
        assert_eq!(even_spacing(4, 100), 25);
        assert_eq!(even_spacing(3, 100), 33);
        assert_eq!(even_spacing(6, 6), 1);
        assert_eq!(even_spacing(10, 6), 1);
        assert_eq!(even_spacing(0, 6), 1);
    }
}
