//! Repeated generate → convolve → verify cycles over one set of buffers.
//!
//! The image and output are allocated once. Every repetition convolves into
//! the same output and relies on [`verify_and_reset`] to zero it again, so a
//! kernel that skips pixels is caught on the next run.
use super::{generate_image, verify_and_reset, verify_verbose, MatchResult, TEST_KERNEL};
use crate::conv::{convolve3x3_verbose, convolve3x3_with, KernelVariant};
use crate::diagnostics::TimingBreakdown;
use crate::error::ConvError;
use crate::image::ImageI32;

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Parameters for [`run_benchmark`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchParams {
    pub width: usize,
    pub height: usize,
    pub variant: KernelVariant,
    pub repetitions: usize,
    /// Trace the kernel and record the full comparison table of the first run.
    pub verbose: bool,
}

impl Default for BenchParams {
    fn default() -> Self {
        Self {
            width: 64,
            height: 64,
            variant: KernelVariant::default(),
            repetitions: 4,
            verbose: false,
        }
    }
}

/// One timed repetition.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunRecord {
    pub run: usize,
    pub convolve_ms: f64,
    pub verify_ms: f64,
    pub code: i64,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchReport {
    pub width: usize,
    pub height: usize,
    pub variant: KernelVariant,
    pub runs: Vec<RunRecord>,
    pub timing: TimingBreakdown,
    pub passed: bool,
    /// Result of the last verification performed.
    pub outcome: MatchResult,
    /// Comparison table of the first run, only when `verbose` is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<super::VerificationReport>,
}

pub fn run_benchmark(params: &BenchParams) -> Result<BenchReport, ConvError> {
    let total_start = Instant::now();
    let mut timing = TimingBreakdown::default();

    let gen_start = Instant::now();
    let image = generate_image(params.width, params.height)?;
    timing.push("generate", elapsed_ms(gen_start));

    let mut output = ImageI32::new(params.width, params.height);
    let mut runs = Vec::with_capacity(params.repetitions);
    let mut outcome = MatchResult::Pass;
    let mut table = None;

    for run in 0..params.repetitions {
        let conv_start = Instant::now();
        if params.verbose && run == 0 {
            convolve3x3_verbose(params.variant, image.as_view(), &TEST_KERNEL, &mut output)?;
            table = Some(verify_verbose(&output));
        } else {
            convolve3x3_with(params.variant, image.as_view(), &TEST_KERNEL, &mut output)?;
        }
        let convolve_ms = elapsed_ms(conv_start);

        let verify_start = Instant::now();
        outcome = verify_and_reset(&mut output);
        let verify_ms = elapsed_ms(verify_start);

        timing.push(format!("convolve[{run}]"), convolve_ms);
        timing.push(format!("verify[{run}]"), verify_ms);
        runs.push(RunRecord {
            run,
            convolve_ms,
            verify_ms,
            code: outcome.code(),
        });

        if !outcome.is_pass() {
            warn!(
                "bench: {} run {run} failed with code {}",
                params.variant,
                outcome.code()
            );
            break;
        }
    }

    timing.total_ms = elapsed_ms(total_start);
    let passed = outcome.is_pass();
    info!(
        "bench: {} {}x{} runs={} passed={} total_ms={:.3}",
        params.variant,
        params.width,
        params.height,
        runs.len(),
        passed,
        timing.total_ms
    );

    Ok(BenchReport {
        width: params.width,
        height: params.height,
        variant: params.variant,
        runs,
        timing,
        passed,
        outcome,
        table,
    })
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
