//! Unit tests for qs-stats.

use qs_core::SimTime;

use crate::StatsCollector;

fn t(v: f64) -> SimTime {
    SimTime::new(v).unwrap()
}

#[cfg(test)]
mod stream {
    use super::*;

    #[test]
    fn appends_in_order() {
        let mut c = StatsCollector::new(1);
        c.record_wait_time(t(1.0), 0.5);
        c.record_wait_time(t(2.0), 1.5);
        let times: Vec<f64> = c.wait_times().iter().map(|s| s.time.as_f64()).collect();
        let values: Vec<f64> = c.wait_times().values().collect();
        assert_eq!(times, vec![1.0, 2.0]);
        assert_eq!(values, vec![0.5, 1.5]);
        assert_eq!(c.wait_times().last().unwrap().value, 1.5);
    }

    #[test]
    fn empty_mean_is_zero() {
        let c = StatsCollector::new(2);
        assert!(c.queue_lengths().is_empty());
        assert_eq!(c.queue_lengths().mean(), 0.0);
    }
}

#[cfg(test)]
mod aggregates {
    use super::*;

    #[test]
    fn empty_collector_is_all_zero() {
        let c = StatsCollector::new(2);
        assert_eq!(c.mean_wait_time(), 0.0);
        assert_eq!(c.mean_queue_length(), 0.0);
        assert_eq!(c.utilization(), 0.0);
        assert_eq!(c.time_weighted_utilization(t(60.0)), 0.0);
    }

    #[test]
    fn means() {
        let mut c = StatsCollector::new(2);
        c.record_queue_length(t(1.0), 0);
        c.record_queue_length(t(2.0), 1);
        c.record_queue_length(t(3.0), 2);
        c.record_wait_time(t(1.0), 0.0);
        c.record_wait_time(t(4.0), 3.0);
        assert_eq!(c.mean_queue_length(), 1.0);
        assert_eq!(c.mean_wait_time(), 1.5);
    }

    #[test]
    fn sample_mean_utilization() {
        let mut c = StatsCollector::new(2);
        c.record_busy_count(t(1.0), 1);
        c.record_busy_count(t(2.0), 2);
        c.record_busy_count(t(3.0), 1);
        c.record_busy_count(t(4.0), 0);
        // (1 + 2 + 1 + 0) / (2 × 4)
        assert_eq!(c.utilization(), 0.5);
    }

    #[test]
    fn time_weighted_utilization_integrates_steps() {
        let mut c = StatsCollector::new(2);
        c.record_busy_count(t(2.0), 1); // 1 busy over [2, 6)
        c.record_busy_count(t(6.0), 2); // 2 busy over [6, 8)
        c.record_busy_count(t(8.0), 0); // idle afterwards
        // busy_time = 4 + 4 = 8; capacity × horizon = 2 × 10
        assert!((c.time_weighted_utilization(t(10.0)) - 0.4).abs() < 1e-12);
    }

    #[test]
    fn time_weighted_utilization_clips_at_horizon() {
        let mut c = StatsCollector::new(1);
        c.record_busy_count(t(0.0), 1);
        c.record_busy_count(t(15.0), 0);
        assert_eq!(c.time_weighted_utilization(t(10.0)), 1.0);
    }

    #[test]
    fn simultaneous_samples_have_zero_width() {
        let mut c = StatsCollector::new(1);
        c.record_busy_count(t(5.0), 0);
        c.record_busy_count(t(5.0), 1);
        assert_eq!(c.time_weighted_utilization(t(10.0)), 0.5);
    }

    #[test]
    fn aggregates_are_idempotent() {
        let mut c = StatsCollector::new(3);
        for i in 0..10 {
            c.record_queue_length(t(i as f64), i % 3);
            c.record_wait_time(t(i as f64), i as f64 * 0.1);
            c.record_busy_count(t(i as f64), i % 4);
        }
        let first = c.summary(t(10.0));
        let second = c.summary(t(10.0));
        assert_eq!(first, second);
        assert_eq!(c.queue_lengths().len(), 10, "reads never mutate");
    }

    #[test]
    fn summary_counts() {
        let mut c = StatsCollector::new(1);
        c.record_queue_length(t(1.0), 0);
        c.record_queue_length(t(2.0), 1);
        c.record_wait_time(t(1.0), 0.0);
        c.record_departure(t(3.0), 2.0);
        let s = c.summary(t(5.0));
        assert_eq!(s.arrivals, 2);
        assert_eq!(s.service_starts, 1);
        assert_eq!(s.departures, 1);
        assert_eq!(s.mean_time_in_system, 2.0);
    }

    #[test]
    fn summary_display() {
        let mut c = StatsCollector::new(1);
        c.record_wait_time(t(1.0), 1.0);
        let text = c.summary(t(1.0)).to_string();
        assert!(text.contains("Average wait time: 1.00 time units."));
        assert!(text.contains("Server utilization: 0.00."));
    }
}
