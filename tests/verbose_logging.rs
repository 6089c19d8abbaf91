use conv3x3::prelude::*;
use conv3x3::convolve3x3_verbose;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::atomic::{AtomicUsize, Ordering};

struct CountingLogger {
    info_lines: AtomicUsize,
}

impl Log for CountingLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= Level::Info
    }

    fn log(&self, record: &Record<'_>) {
        if record.level() == Level::Info && record.target().starts_with("conv3x3") {
            self.info_lines.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn flush(&self) {}
}

static LOGGER: CountingLogger = CountingLogger {
    info_lines: AtomicUsize::new(0),
};

#[test]
fn verbose_kernels_emit_one_info_line_per_output_pixel() {
    log::set_logger(&LOGGER).expect("logger installed once");
    log::set_max_level(LevelFilter::Info);

    let (w, h) = (6, 5);
    let image = generate_image(w, h).unwrap();
    let interior = (w - 2) * (h - 2);

    for (pass, variant) in KernelVariant::ALL.into_iter().enumerate() {
        let mut out = ImageI32::new(w, h);
        convolve3x3_verbose(variant, image.as_view(), &TEST_KERNEL, &mut out).unwrap();
        assert!(verify_and_reset(&mut out).is_pass());
        assert_eq!(
            LOGGER.info_lines.load(Ordering::SeqCst),
            interior * (pass + 1),
            "variant {variant}"
        );
    }

    // the quiet path stays silent at info level
    let mut out = ImageI32::new(w, h);
    convolve3x3_with(KernelVariant::Scalar, image.as_view(), &TEST_KERNEL, &mut out).unwrap();
    assert_eq!(LOGGER.info_lines.load(Ordering::SeqCst), interior * 2);
}
