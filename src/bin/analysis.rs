//! Scheduling analysis over a binary PCB file.
//!
//! Loads a process batch, runs one policy (or all of them with `--all`) and
//! prints the batch averages, or the full reports with KPIs as JSON.

use std::fmt::Write as _;
use std::io::Write as _;
use std::{env, process};

use anyhow::{anyhow, Context, Result};
use arguments::Arguments;
use env_logger::Builder;
use log::{info, LevelFilter};
use serde::Serialize;

use cpu_schedule::pcb_file::load_process_control_blocks;
use cpu_schedule::{simulate, PolicyKind, ScheduleKpi, ScheduleReport};

const DEFAULT_QUANTUM: u32 = 4;

const USAGE: &str = "
Usage: analysis <pcb file> <algorithm> [quantum] [options]
       analysis <pcb file> [quantum] --all [options]

Algorithms:
    FCFS    First-Come-First-Served
    SJF     Shortest-Job-First (non-preemptive)
    P       Priority (non-preemptive, lower value first)
    RR      Round-Robin, quantum defaults to 4
    SRT     Shortest-Remaining-Time (preemptive)

Options (after the positional arguments):
    --all        Run every algorithm on the same batch.
    --json       Print full reports with KPIs as JSON.
    --verbose    Display debug information and KPIs.
    --help       Display this message.
";

/// Flags parsed from the command line plus the positional arguments.
#[derive(Debug)]
struct Options {
    help: bool,
    verbose: bool,
    all: bool,
    json: bool,
    positionals: Vec<String>,
}

/// What to run.
#[derive(Debug)]
struct Invocation {
    path: String,
    kinds: Vec<PolicyKind>,
    quantum: u32,
}

/// A report together with its KPI view, as printed by `--json`.
#[derive(Serialize)]
struct ReportView<'a> {
    #[serde(flatten)]
    report: &'a ScheduleReport,
    kpi: ScheduleKpi,
}

fn main() {
    if let Err(error) = start() {
        eprintln!("Error: {error:#}");
        process::exit(1);
    }
}

fn start() -> Result<()> {
    let arguments =
        arguments::parse(env::args()).map_err(|error| anyhow!("invalid arguments: {error}"))?;
    let options = read_options(&arguments);

    if options.help {
        print!("{USAGE}");
        return Ok(());
    }
    setup_logger(options.verbose);

    let invocation = plan(&options.positionals, options.all)?;
    let batch = load_process_control_blocks(&invocation.path)
        .with_context(|| format!("failed to load pcb file '{}'", invocation.path))?;
    info!("{} processes loaded from {}", batch.len(), invocation.path);

    let mut reports = Vec::with_capacity(invocation.kinds.len());
    for kind in &invocation.kinds {
        let policy = kind.build(invocation.quantum);
        let report = simulate(policy.as_ref(), Some(batch.as_slice()))
            .with_context(|| format!("{} scheduling failed", policy.description()))?;
        reports.push(report);
    }

    if options.json {
        println!("{}", render_json(&reports)?);
    } else {
        let headed = reports.len() > 1;
        for report in &reports {
            print!("{}", render_text(report, headed, options.verbose));
        }
    }

    Ok(())
}

/// Reads the boolean flags.
///
/// A flag directly followed by a positional argument swallows it as its
/// value (`--all 2`); such a value is handed back as a positional.
fn read_options(arguments: &Arguments) -> Options {
    let mut positionals = arguments.orphans.clone();
    let mut flag = |name: &str| match arguments.get::<String>(name) {
        None => false,
        Some(value) => match value.parse::<bool>() {
            Ok(set) => set,
            Err(_) => {
                positionals.push(value);
                true
            }
        },
    };

    let help = flag("help");
    let verbose = flag("verbose");
    let all = flag("all");
    let json = flag("json");

    Options {
        help,
        verbose,
        all,
        json,
        positionals,
    }
}

/// Resolves the positional arguments into a run plan.
///
/// With `all`, the algorithm name is optional and the quantum may follow the
/// file path directly.
fn plan(positionals: &[String], all: bool) -> Result<Invocation> {
    let mut rest = positionals.iter();
    let path = rest
        .next()
        .with_context(|| format!("a pcb file is required\n{USAGE}"))?
        .clone();

    let mut next = rest.next();
    let kinds = if all {
        if next.is_some_and(|value| value.parse::<PolicyKind>().is_ok()) {
            next = rest.next();
        }
        PolicyKind::ALL.to_vec()
    } else {
        let name = next.with_context(|| format!("an algorithm is required\n{USAGE}"))?;
        next = rest.next();
        vec![name.parse::<PolicyKind>()?]
    };

    let quantum = match next {
        Some(value) => value
            .parse::<u32>()
            .with_context(|| format!("quantum '{value}' is not a non-negative integer"))?,
        None => DEFAULT_QUANTUM,
    };

    if let Some(extra) = rest.next() {
        return Err(anyhow!("unexpected argument '{extra}'\n{USAGE}"));
    }

    Ok(Invocation {
        path,
        kinds,
        quantum,
    })
}

fn render_text(report: &ScheduleReport, headed: bool, verbose: bool) -> String {
    let mut out = String::new();
    if headed {
        let _ = writeln!(out, "[{}]", report.policy);
    }
    let _ = writeln!(out, "Avg Wait: {:.2}", report.result.average_waiting_time);
    let _ = writeln!(out, "Avg Turnaround: {:.2}", report.result.average_turnaround_time);
    let _ = writeln!(out, "Total Time: {}", report.result.total_run_time);
    if verbose {
        let kpi = report.kpi();
        let _ = writeln!(out, "Avg Response: {:.2}", report.average_response_time);
        let _ = writeln!(out, "CPU Utilization: {:.2}%", kpi.utilization * 100.0);
        let _ = writeln!(out, "Throughput: {:.4}", kpi.throughput);
        let _ = writeln!(out, "Max Wait: {}", kpi.max_waiting);
    }
    if headed {
        out.push('\n');
    }
    out
}

fn render_json(reports: &[ScheduleReport]) -> Result<String> {
    let views: Vec<ReportView<'_>> = reports
        .iter()
        .map(|report| ReportView {
            report,
            kpi: report.kpi(),
        })
        .collect();
    Ok(serde_json::to_string_pretty(&views)?)
}

fn setup_logger(verbose: bool) {
    let mut builder = Builder::from_default_env();
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder
        .format(|buf, record| writeln!(buf, "{:>5} {}", record.level(), record.args()))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use cpu_schedule::ProcessDescriptor;

    fn options(line: &[&str]) -> Options {
        let words = std::iter::once("analysis")
            .chain(line.iter().copied())
            .map(String::from);
        read_options(&arguments::parse(words).unwrap())
    }

    fn invocation(line: &[&str]) -> Result<Invocation> {
        let options = options(line);
        plan(&options.positionals, options.all)
    }

    fn staggered_report(kind: PolicyKind) -> ScheduleReport {
        let batch = vec![
            ProcessDescriptor::new(10, 1, 0),
            ProcessDescriptor::new(2, 1, 2),
            ProcessDescriptor::new(1, 1, 3),
        ];
        simulate(kind.build(DEFAULT_QUANTUM).as_ref(), Some(batch.as_slice())).unwrap()
    }

    #[test]
    fn test_single_policy_default_quantum() {
        let invocation = invocation(&["f.bin", "RR"]).unwrap();
        assert_eq!(invocation.path, "f.bin");
        assert_eq!(invocation.kinds, vec![PolicyKind::RoundRobin]);
        assert_eq!(invocation.quantum, 4);
    }

    #[test]
    fn test_explicit_quantum() {
        let invocation = invocation(&["f.bin", "rr", "2"]).unwrap();
        assert_eq!(invocation.quantum, 2);
    }

    #[test]
    fn test_non_numeric_quantum_rejected() {
        let err = invocation(&["f.bin", "RR", "two"]).unwrap_err();
        assert!(err.to_string().contains("quantum 'two'"));
        assert!(invocation(&["f.bin", "RR", "-1"]).is_err());
    }

    #[test]
    fn test_unknown_policy_rejected() {
        assert!(invocation(&["f.bin", "LIFO"]).is_err());
    }

    #[test]
    fn test_missing_arguments() {
        assert!(invocation(&[]).is_err());
        assert!(invocation(&["f.bin"]).is_err());
        assert!(invocation(&["f.bin", "RR", "2", "3"]).is_err());
    }

    #[test]
    fn test_all_without_quantum() {
        let invocation = invocation(&["f.bin", "--all"]).unwrap();
        assert_eq!(invocation.kinds, PolicyKind::ALL.to_vec());
        assert_eq!(invocation.quantum, 4);
    }

    #[test]
    fn test_all_with_quantum_after_path() {
        let invocation = invocation(&["f.bin", "2", "--all"]).unwrap();
        assert_eq!(invocation.kinds, PolicyKind::ALL.to_vec());
        assert_eq!(invocation.quantum, 2);
    }

    #[test]
    fn test_all_followed_by_quantum() {
        // `--all 2` hands `2` to the flag as its value
        let options = options(&["f.bin", "--all", "2"]);
        assert!(options.all);
        let invocation = plan(&options.positionals, options.all).unwrap();
        assert_eq!(invocation.kinds, PolicyKind::ALL.to_vec());
        assert_eq!(invocation.quantum, 2);
    }

    #[test]
    fn test_all_after_algorithm_and_quantum() {
        let invocation = invocation(&["f.bin", "RR", "2", "--all"]).unwrap();
        assert_eq!(invocation.kinds, PolicyKind::ALL.to_vec());
        assert_eq!(invocation.quantum, 2);
    }

    #[test]
    fn test_flags() {
        let options = options(&["f.bin", "SJF", "--json", "--verbose"]);
        assert!(options.json);
        assert!(options.verbose);
        assert!(!options.all);
        assert!(!options.help);
        assert_eq!(options.positionals, vec!["f.bin", "SJF"]);

        assert!(!self::options(&["f.bin", "SJF", "--no-json"]).json);
    }

    #[test]
    fn test_text_output() {
        let report = staggered_report(PolicyKind::Fcfs);
        let text = render_text(&report, false, false);
        assert_eq!(text, "Avg Wait: 5.67\nAvg Turnaround: 10.00\nTotal Time: 13\n");
    }

    #[test]
    fn test_verbose_text_shows_kpis() {
        let report = staggered_report(PolicyKind::Fcfs);
        let text = render_text(&report, true, true);
        assert!(text.starts_with("[FCFS]\n"));
        // Bursts 13 over a makespan of 13
        assert!(text.contains("CPU Utilization: 100.00%"));
        assert!(text.contains("Max Wait: 9"));
        assert!(text.contains("Avg Response: 5.67"));
    }

    #[test]
    fn test_json_output_includes_kpi() {
        let reports: Vec<ScheduleReport> = PolicyKind::ALL
            .iter()
            .map(|&kind| staggered_report(kind))
            .collect();
        let json: serde_json::Value =
            serde_json::from_str(&render_json(&reports).unwrap()).unwrap();

        let views = json.as_array().unwrap();
        assert_eq!(views.len(), 5);
        assert_eq!(views[0]["policy"], "FCFS");
        assert_eq!(views[0]["result"]["total_run_time"], 13);
        assert_eq!(views[0]["kpi"]["makespan"], 13);
        assert_eq!(views[0]["kpi"]["busy_time"], 13);
        assert_eq!(views[0]["outcomes"].as_array().unwrap().len(), 3);
    }
}
