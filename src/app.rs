//! The probe run orchestrator
//!
//! Drives the run through its phases: validate the configuration,
//! resolve the host once, run the nested cycle/operation/port probe
//! loop, then summarize. Probes are strictly sequential; each one is
//! awaited before the next is issued so connection attempts never
//! overlap and corrupt the timing.

use crate::dns::{HostResolver, ResolvedHost};
use crate::error::Result;
use crate::models::{Config, CycleOutcome, Sample};
use crate::output::{ConsoleReporter, Reporter};
use crate::probe::probe_once;
use crate::stats::{cycle_time, summarize, SummaryStatistics};
use tokio::time::Instant;

/// Everything a completed run produced.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Full ordered sample sequence (cycle-major, then op, then port)
    pub samples: Vec<Sample>,
    /// True when any cycle contained an unavailable probe
    pub host_absent: bool,
    /// Wall-clock time of the cycling phase in milliseconds
    pub elapsed_ms: f64,
    /// Summary statistics, or `None` when undefined
    pub summary: Option<SummaryStatistics>,
    /// The address every probe was issued against
    pub resolved: ResolvedHost,
}

impl RunReport {
    /// Process exit code for this run: absent hosts exit nonzero.
    pub fn exit_code(&self) -> i32 {
        if self.host_absent {
            1
        } else {
            0
        }
    }
}

/// One probe run over an immutable configuration.
pub struct ProbeRun {
    config: Config,
}

impl ProbeRun {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Execute the run, reporting through `reporter`.
    ///
    /// Cycle 0 is the warm-up: its samples enter the sequence but its
    /// report line is suppressed. After the first absent cycle, later
    /// per-cycle lines are suppressed as well, but probing continues so
    /// the sample-count invariant and the final summary both hold.
    pub async fn execute(&self, reporter: &mut dyn Reporter) -> Result<RunReport> {
        self.config.validate()?;

        let resolver = HostResolver::new(self.config.family);
        let resolved = resolver.resolve(&self.config.host).await?;

        let ops_per_cycle = self.config.ops_per_cycle();
        reporter.run_header(&resolved, self.config.ports.len(), ops_per_cycle);

        let mut samples: Vec<Sample> = Vec::with_capacity(self.config.expected_samples());
        let mut host_absent = false;
        let mut reporting_suppressed = false;

        let run_start = Instant::now();

        for cycle in 0..=self.config.count {
            let mut raw_sum_ms = 0.0;
            let mut cycle_absent = false;

            for _op in 0..self.config.limit {
                for &port in &self.config.ports {
                    let sample =
                        probe_once(resolved.socket_addr(port), self.config.timeout()).await;
                    match sample.value_ms() {
                        Some(ms) => raw_sum_ms += ms,
                        None => cycle_absent = true,
                    }
                    samples.push(sample);
                }
            }

            if cycle_absent {
                host_absent = true;
            }

            if cycle > 0 && !reporting_suppressed {
                let outcome = if cycle_absent {
                    reporting_suppressed = true;
                    CycleOutcome::Absent
                } else {
                    CycleOutcome::Active {
                        time_ms: cycle_time(
                            raw_sum_ms,
                            self.config.ports.len(),
                            self.config.limit,
                        ),
                    }
                };
                reporter.cycle_report(cycle, ops_per_cycle, &resolved, outcome);
            }
        }

        let elapsed_ms = run_start.elapsed().as_secs_f64() * 1000.0;
        let summary = summarize(&samples);

        reporter.run_summary(&resolved, samples.len(), elapsed_ms, summary.as_ref());

        Ok(RunReport {
            samples,
            host_absent,
            elapsed_ms,
            summary,
            resolved,
        })
    }
}

/// Parse-free entry point used by the binary: run the configuration
/// against the console reporter and return the process exit code.
pub async fn run_application(config: Config) -> Result<i32> {
    let run = ProbeRun::new(config);
    let mut reporter = ConsoleReporter::new();
    let report = run.execute(&mut reporter).await?;
    Ok(report.exit_code())
}
