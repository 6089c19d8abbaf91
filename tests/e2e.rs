mod common;

use common::synthetic_image::{is_border, noise_i8, BORDER_SENTINEL};
use conv3x3::prelude::*;
use conv3x3::{run_benchmark, BenchParams};

#[test]
fn generate_convolve_verify_cycle_passes_for_both_variants() {
    let _ = env_logger::builder().is_test(true).try_init();
    for (w, h) in [(3usize, 3usize), (5, 5), (64, 17), (17, 64), (40, 40)] {
        let image = generate_image(w, h).unwrap();
        let mut out = ImageI32::new(w, h);
        for variant in KernelVariant::ALL {
            convolve3x3_with(variant, image.as_view(), &TEST_KERNEL, &mut out).unwrap();
            assert_eq!(
                verify_and_reset(&mut out),
                MatchResult::Pass,
                "{variant} on {w}x{h}"
            );
            assert!(out.data().iter().all(|&v| v == 0));
        }
    }
}

#[test]
fn second_verification_of_reset_buffer_fails_at_first_interior_pixel() {
    let (w, h) = (12, 9);
    let image = generate_image(w, h).unwrap();
    let mut out = ImageI32::new(w, h);
    convolve3x3(image.as_view(), &TEST_KERNEL, &mut out).unwrap();

    assert!(verify_and_reset(&mut out).is_pass());
    let again = verify_and_reset(&mut out);
    assert_eq!(again.code(), (w + 1) as i64);
}

#[test]
fn border_is_preserved_on_noise_input() {
    let (w, h) = (23, 14);
    let data = noise_i8(w, h, 0xC0FFEE);
    let input = ImageI8::new(w, h, &data);
    let kernel = Kernel3::new([3, 0, 7, 1, 255, 1, 9, 0, 2]);

    for variant in KernelVariant::ALL {
        let mut out = ImageI32::new(w, h);
        out.fill(BORDER_SENTINEL);
        convolve3x3_with(variant, input, &kernel, &mut out).unwrap();
        for y in 0..h {
            for x in 0..w {
                if is_border(x, y, w, h) {
                    assert_eq!(out.get(x, y), BORDER_SENTINEL, "{variant} wrote border ({x},{y})");
                }
            }
        }
    }
}

#[test]
fn variants_agree_on_noise_input() {
    let (w, h) = (31, 29);
    let data = noise_i8(w, h, 7);
    let input = ImageI8::new(w, h, &data);
    let kernel = Kernel3::new([1, 4, 1, 4, 16, 4, 1, 4, 1]);

    let mut scalar = ImageI32::new(w, h);
    let mut vectorized = ImageI32::new(w, h);
    convolve3x3_with(KernelVariant::Scalar, input, &kernel, &mut scalar).unwrap();
    convolve3x3_with(KernelVariant::Vectorized, input, &kernel, &mut vectorized).unwrap();
    assert_eq!(scalar, vectorized);
}

#[test]
fn caller_allocated_output_is_reused() {
    let (w, h) = (8, 6);
    let buffer = vec![0i32; w * h];
    let mut out = ImageI32::from_vec(w, h, buffer).unwrap();
    let image = generate_image(w, h).unwrap();
    convolve3x3(image.as_view(), &TEST_KERNEL, &mut out).unwrap();
    assert!(verify_and_reset(&mut out).is_pass());
    assert_eq!(out.into_vec().len(), w * h);

    assert!(ImageI32::from_vec(w, h, vec![0; 3]).is_err());
}

#[test]
fn benchmark_report_serializes_to_json() {
    let report = run_benchmark(&BenchParams {
        width: 10,
        height: 10,
        variant: KernelVariant::Vectorized,
        repetitions: 2,
        verbose: false,
    })
    .unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["variant"], "vectorized");
    assert_eq!(json["passed"], true);
    assert_eq!(json["outcome"]["status"], "pass");
    assert_eq!(json["runs"].as_array().map(Vec::len), Some(2));
    assert!(json.get("table").is_none());
}
