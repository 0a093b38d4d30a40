//! Console reporting of cycle and summary results
//!
//! The orchestrator talks to a [`Reporter`] trait so tests can capture
//! what a run would print; [`ConsoleReporter`] is the production
//! implementation. Output is human-readable text, not a
//! machine-parseable contract.

use crate::dns::ResolvedHost;
use crate::models::CycleOutcome;
use crate::stats::SummaryStatistics;
use colored::Colorize;

/// Reporting collaborator driven by the probe orchestrator.
pub trait Reporter {
    /// One header line at the start of the cycling phase
    fn run_header(&mut self, host: &ResolvedHost, port_count: usize, ops_per_cycle: usize);

    /// One line per non-warm-up cycle
    fn cycle_report(
        &mut self,
        cycle: u32,
        ops_per_cycle: usize,
        host: &ResolvedHost,
        outcome: CycleOutcome,
    );

    /// Final summary block after all cycles complete
    fn run_summary(
        &mut self,
        host: &ResolvedHost,
        total_ops: usize,
        elapsed_ms: f64,
        stats: Option<&SummaryStatistics>,
    );
}

/// Prints reports to stdout, with color when attached to a terminal.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for ConsoleReporter {
    fn run_header(&mut self, host: &ResolvedHost, port_count: usize, ops_per_cycle: usize) {
        println!(
            "ZING: {} ({}): {} ports used, {} ops per cycle",
            host.display_name, host.address, port_count, ops_per_cycle
        );
    }

    fn cycle_report(
        &mut self,
        cycle: u32,
        ops_per_cycle: usize,
        host: &ResolvedHost,
        outcome: CycleOutcome,
    ) {
        match outcome {
            CycleOutcome::Active { time_ms } => println!(
                "#{} ... {} ops to {} ({}): {} time = {:.3} ms",
                cycle,
                ops_per_cycle,
                host.display_name,
                host.address,
                "Active".green(),
                time_ms
            ),
            CycleOutcome::Absent => println!(
                "#{} ... {} ops to {} ({}): {}",
                cycle,
                ops_per_cycle,
                host.display_name,
                host.address,
                "Absent!".red()
            ),
        }
    }

    fn run_summary(
        &mut self,
        host: &ResolvedHost,
        total_ops: usize,
        elapsed_ms: f64,
        stats: Option<&SummaryStatistics>,
    ) {
        println!();
        println!(
            "--- zing summary for {}/{} ---",
            host.display_name, host.address
        );
        println!(
            "{} total ops used; total time: {:.3} ms",
            total_ops, elapsed_ms
        );
        match stats {
            Some(s) => println!(
                "total-time min/avg/max/stddev = {:.3}/{:.3}/{:.3}/{:.3} ms",
                s.min_ms, s.avg_ms, s.max_ms, s.std_dev_ms
            ),
            None => println!(
                "total-time min/avg/max/stddev = undefined (need at least 2 samples)"
            ),
        }
    }
}
