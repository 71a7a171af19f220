//! Unit tests for qs-core primitives.

#[cfg(test)]
mod ids {
    use crate::CustomerId;

    #[test]
    fn first_and_next() {
        assert_eq!(CustomerId::FIRST, CustomerId(1));
        assert_eq!(CustomerId(7).next(), CustomerId(8));
        assert_eq!(CustomerId::default(), CustomerId::FIRST);
    }

    #[test]
    fn ordering_is_arrival_order() {
        assert!(CustomerId(1) < CustomerId(2));
    }

    #[test]
    fn display() {
        assert_eq!(CustomerId(3).to_string(), "Customer 3");
    }
}

#[cfg(test)]
mod time {
    use crate::{CoreError, SimTime};

    #[test]
    fn rejects_bad_values() {
        assert_eq!(SimTime::new(-1.0), Err(CoreError::InvalidTime(-1.0)));
        assert!(SimTime::new(f64::NAN).is_err());
        assert!(SimTime::new(f64::INFINITY).is_err());
    }

    #[test]
    fn negative_zero_equals_zero() {
        assert_eq!(SimTime::new(-0.0).unwrap(), SimTime::ZERO);
    }

    #[test]
    fn offset_and_since() {
        let t = SimTime::new(2.5).unwrap();
        let later = t.offset(1.5).unwrap();
        assert_eq!(later.as_f64(), 4.0);
        assert_eq!(later.since(t), 1.5);
        assert_eq!(t.since(later), 0.0, "since clamps at zero");
    }

    #[test]
    fn offset_rejects_negative_delay() {
        assert!(SimTime::ZERO.offset(-0.1).is_err());
        assert!(SimTime::ZERO.offset(f64::NAN).is_err());
    }

    #[test]
    fn total_order() {
        let a = SimTime::new(1.0).unwrap();
        let b = SimTime::new(1.0000001).unwrap();
        assert!(a < b);
        assert_eq!(a.max(b), b);
    }

    #[test]
    fn display_two_decimals() {
        assert_eq!(SimTime::new(12.3456).unwrap().to_string(), "12.35");
    }
}

#[cfg(test)]
mod config {
    use crate::{BankConfig, CoreError, HorizonPolicy};

    #[test]
    fn default_matches_reference_scenario() {
        let cfg = BankConfig::default();
        assert_eq!(cfg.random_seed, 42);
        assert_eq!(cfg.mean_interarrival_time, 5.0);
        assert_eq!(cfg.mean_service_time, 3.0);
        assert_eq!(cfg.simulation_horizon, 60.0);
        assert_eq!(cfg.teller_count, 2);
        assert_eq!(cfg.horizon_policy, HorizonPolicy::Drain);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_tellers_rejected() {
        let cfg = BankConfig { teller_count: 0, ..BankConfig::default() };
        assert!(matches!(cfg.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn non_positive_means_rejected() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let a = BankConfig { mean_interarrival_time: bad, ..BankConfig::default() };
            let s = BankConfig { mean_service_time: bad, ..BankConfig::default() };
            let h = BankConfig { simulation_horizon: bad, ..BankConfig::default() };
            assert!(a.validate().is_err(), "interarrival {bad}");
            assert!(s.validate().is_err(), "service {bad}");
            assert!(h.validate().is_err(), "horizon {bad}");
        }
    }

    #[test]
    fn with_seed_keeps_everything_else() {
        let cfg = BankConfig { teller_count: 5, ..BankConfig::default() };
        let other = cfg.with_seed(7);
        assert_eq!(other.random_seed, 7);
        assert_eq!(other.teller_count, 5);
    }

    #[test]
    fn policy_display() {
        assert_eq!(HorizonPolicy::Drain.to_string(), "drain");
        assert_eq!(HorizonPolicy::Truncate.to_string(), "truncate");
    }
}

#[cfg(test)]
mod rng {
    use crate::{CoreError, DurationSource, ExpDurations, next_positive};

    #[test]
    fn deterministic_same_seed() {
        let mut a = ExpDurations::new(12345, 5.0, 3.0).unwrap();
        let mut b = ExpDurations::new(12345, 5.0, 3.0).unwrap();
        for _ in 0..100 {
            assert_eq!(a.next_interarrival().to_bits(), b.next_interarrival().to_bits());
            assert_eq!(a.next_service_time().to_bits(), b.next_service_time().to_bits());
        }
    }

    #[test]
    fn different_seeds_differ() {
        let mut a = ExpDurations::new(1, 5.0, 3.0).unwrap();
        let mut b = ExpDurations::new(2, 5.0, 3.0).unwrap();
        assert_ne!(a.next_interarrival(), b.next_interarrival());
    }

    #[test]
    fn draws_are_positive_with_plausible_mean() {
        let mut src = ExpDurations::new(7, 5.0, 3.0).unwrap();
        let n = 20_000;
        let mut sum = 0.0;
        for _ in 0..n {
            let d = src.next_service_time();
            assert!(d > 0.0);
            sum += d;
        }
        let mean = sum / n as f64;
        assert!((mean - 3.0).abs() < 0.15, "sample mean {mean}");
    }

    #[test]
    fn sim_rng_samples_through_distribution() {
        use rand_distr::Exp;

        let exp = Exp::new(0.5).unwrap();
        let mut a = crate::SimRng::new(9);
        let mut b = crate::SimRng::new(9);
        for _ in 0..10 {
            let x: f64 = a.sample(&exp);
            assert!(x > 0.0);
            assert_eq!(x.to_bits(), b.sample(&exp).to_bits());
        }
    }

    #[test]
    fn invalid_mean_rejected() {
        assert!(matches!(ExpDurations::new(0, 0.0, 1.0), Err(CoreError::Config(_))));
        assert!(matches!(ExpDurations::new(0, 1.0, -3.0), Err(CoreError::Config(_))));
    }

    #[test]
    fn next_positive_resamples() {
        let mut draws = vec![0.0, -2.0, f64::NAN, 1.25].into_iter();
        let v = next_positive(|| draws.next().unwrap_or(0.0)).unwrap();
        assert_eq!(v, 1.25);
    }

    #[test]
    fn next_positive_gives_up() {
        let err = next_positive(|| 0.0).unwrap_err();
        assert!(matches!(err, CoreError::DegenerateDuration { last, .. } if last == 0.0));
    }
}
