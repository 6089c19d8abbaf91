use conv3x3::config::bench::{self as bench_cfg, BenchConfig};
use conv3x3::io::write_json_file;
use conv3x3::{run_benchmark, BenchReport};
use std::env;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "conv3x3".to_string());
    let config = bench_cfg::parse_cli(&program, args)?;

    let report = run_benchmark(&config.bench).map_err(|e| format!("Benchmark aborted: {e}"))?;
    print_summary(&report);
    print_table(&config, &report);

    if let Some(path) = &config.output.report_json {
        write_json_file(path, &report)?;
        println!("JSON report written to {}", path.display());
    }

    if report.passed {
        Ok(())
    } else {
        Err(format!("verification failed (code {})", report.outcome.code()))
    }
}

fn print_summary(report: &BenchReport) {
    let runs = report.runs.len().max(1) as f64;
    println!(
        "{} {}x{}: runs={} passed={} convolve_avg_ms={:.4} verify_avg_ms={:.4}",
        report.variant,
        report.width,
        report.height,
        report.runs.len(),
        report.passed,
        report.timing.total_for("convolve") / runs,
        report.timing.total_for("verify") / runs,
    );
}

fn print_table(config: &BenchConfig, report: &BenchReport) {
    if !config.output.print_table {
        return;
    }
    match &report.table {
        Some(table) => print!("{table}"),
        None => eprintln!("No comparison table recorded (set bench.verbose = true)"),
    }
}
