//! Per-run summaries and batch-level aggregation.

use outbreak_core::IterationRecord;
use serde::Serialize;

/// Summary statistics of a single simulation run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    /// Highest infected count observed in any record (peak prevalence).
    pub peak_infected: usize,

    /// Susceptible count in the final record.
    pub final_susceptible: usize,

    /// Fraction of the population infected at some point during the run.
    pub attack_fraction: f64,

    /// Number of sampled time steps in the series.
    pub ticks: usize,
}

impl RunSummary {
    /// Summarize one iteration series.
    ///
    /// `initial` is the post-seeding snapshot, supplied by the caller: the
    /// series' first entry cannot stand in for it, because events mutate
    /// the last record in place and before the first time-advance append
    /// the last record is the first record. Everyone ever infected is the
    /// initial seed plus every node that left the susceptible compartment
    /// afterwards.
    pub fn from_series(
        node_count: usize,
        initial: IterationRecord,
        series: &[IterationRecord],
    ) -> Self {
        let last = series.last().expect("series holds at least one record");
        let peak_infected = series
            .iter()
            .map(|r| r.infected)
            .max()
            .unwrap_or(0)
            .max(initial.infected);
        let ever_infected = initial.susceptible - last.susceptible + initial.infected;

        Self {
            peak_infected,
            final_susceptible: last.susceptible,
            attack_fraction: ever_infected as f64 / node_count as f64,
            ticks: series.len(),
        }
    }
}

/// Aggregated results of a batch of independent runs.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    /// Number of nodes in the simulated network.
    pub node_count: usize,

    /// One summary per run, in execution order.
    pub runs: Vec<RunSummary>,
}

impl BatchReport {
    /// Mean attack fraction over all runs.
    pub fn mean_attack_fraction(&self) -> f64 {
        if self.runs.is_empty() {
            return 0.0;
        }
        self.runs.iter().map(|r| r.attack_fraction).sum::<f64>() / self.runs.len() as f64
    }

    /// Mean peak prevalence over all runs.
    pub fn mean_peak_infected(&self) -> f64 {
        if self.runs.is_empty() {
            return 0.0;
        }
        self.runs.iter().map(|r| r.peak_infected as f64).sum::<f64>() / self.runs.len() as f64
    }

    /// Largest peak prevalence seen in any run.
    pub fn max_peak_infected(&self) -> usize {
        self.runs.iter().map(|r| r.peak_infected).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(susceptible: usize, infected: usize) -> IterationRecord {
        IterationRecord {
            susceptible,
            infected,
        }
    }

    #[test]
    fn test_summary_of_full_outbreak() {
        let series = vec![
            record(2, 1),
            record(1, 2),
            record(0, 3),
            record(0, 2),
            record(0, 1),
            record(0, 0),
        ];
        let summary = RunSummary::from_series(3, record(2, 1), &series);
        assert_eq!(summary.peak_infected, 3);
        assert_eq!(summary.final_susceptible, 0);
        assert_eq!(summary.attack_fraction, 1.0);
        assert_eq!(summary.ticks, 6);
    }

    #[test]
    fn test_summary_of_stifled_outbreak() {
        // Seed recovers before transmitting; only the seed was infected.
        let series = vec![record(9, 1), record(9, 0)];
        let summary = RunSummary::from_series(10, record(9, 1), &series);
        assert_eq!(summary.peak_infected, 1);
        assert_eq!(summary.final_susceptible, 9);
        assert_eq!(summary.attack_fraction, 0.1);
    }

    #[test]
    fn test_seed_recovery_before_first_append_still_counts() {
        // The recover event can fire before any time-advance append,
        // leaving a single record that no longer shows the seed infection.
        // The summary must count it through the supplied initial snapshot.
        let series = vec![record(9, 0)];
        let summary = RunSummary::from_series(10, record(9, 1), &series);
        assert_eq!(summary.peak_infected, 1);
        assert_eq!(summary.final_susceptible, 9);
        assert_eq!(summary.attack_fraction, 0.1);
        assert_eq!(summary.ticks, 1);
    }

    #[test]
    fn test_report_means() {
        let report = BatchReport {
            node_count: 10,
            runs: vec![
                RunSummary::from_series(10, record(9, 1), &[record(9, 1), record(9, 0)]),
                RunSummary::from_series(
                    10,
                    record(9, 1),
                    &[record(9, 1), record(5, 5), record(5, 0)],
                ),
            ],
        };
        assert_eq!(report.mean_attack_fraction(), 0.3);
        assert_eq!(report.mean_peak_infected(), 3.0);
        assert_eq!(report.max_peak_infected(), 5);
    }

    #[test]
    fn test_empty_report() {
        let report = BatchReport {
            node_count: 10,
            runs: Vec::new(),
        };
        assert_eq!(report.mean_attack_fraction(), 0.0);
        assert_eq!(report.max_peak_infected(), 0);
    }
}
