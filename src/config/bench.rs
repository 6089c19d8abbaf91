use crate::harness::bench::BenchParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Where to write the JSON `BenchReport`; nothing is written when unset.
    pub report_json: Option<PathBuf>,
    /// Print the actual/expected table of the first run (needs `bench.verbose`).
    pub print_table: bool,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    pub bench: BenchParams,
    pub output: OutputConfig,
}

pub fn load_config(path: &Path) -> Result<BenchConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&contents).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

pub fn parse_config(contents: &str) -> Result<BenchConfig, serde_json::Error> {
    serde_json::from_str(contents)
}

/// Resolve the config from the command line: `<program> [config.json]`.
pub fn parse_cli(
    program: &str,
    mut args: impl Iterator<Item = String>,
) -> Result<BenchConfig, String> {
    match args.next().as_deref() {
        None => Ok(BenchConfig::default()),
        Some("-h") | Some("--help") => Err(usage(program)),
        Some(path) => {
            if args.next().is_some() {
                return Err(usage(program));
            }
            load_config(Path::new(path))
        }
    }
}

fn usage(program: &str) -> String {
    format!("Usage: {program} [config.json]")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conv::KernelVariant;

    #[test]
    fn empty_object_yields_defaults() {
        let cfg = parse_config("{}").unwrap();
        assert_eq!(cfg.bench, BenchParams::default());
        assert!(cfg.output.report_json.is_none());
        assert!(!cfg.output.print_table);
    }

    #[test]
    fn partial_bench_section_keeps_other_defaults() {
        let cfg = parse_config(
            r#"{ "bench": { "width": 32, "variant": "vectorized" },
                 "output": { "report_json": "out/report.json" } }"#,
        )
        .unwrap();
        assert_eq!(cfg.bench.width, 32);
        assert_eq!(cfg.bench.height, BenchParams::default().height);
        assert_eq!(cfg.bench.variant, KernelVariant::Vectorized);
        assert_eq!(
            cfg.output.report_json.as_deref(),
            Some(Path::new("out/report.json"))
        );
    }

    #[test]
    fn unknown_variant_is_a_parse_error() {
        assert!(parse_config(r#"{ "bench": { "variant": "avx" } }"#).is_err());
    }

    #[test]
    fn cli_without_arguments_uses_defaults() {
        let cfg = parse_cli("conv3x3", std::iter::empty()).unwrap();
        assert_eq!(cfg.bench, BenchParams::default());
    }

    #[test]
    fn cli_help_and_extra_arguments_print_usage() {
        let help = parse_cli("conv3x3", ["--help".to_string()].into_iter()).unwrap_err();
        assert!(help.starts_with("Usage: conv3x3"));
        let extra = parse_cli("conv3x3", ["a.json".to_string(), "b".to_string()].into_iter())
            .unwrap_err();
        assert!(extra.starts_with("Usage:"));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_config(Path::new("/nonexistent/conv3x3.json")).unwrap_err();
        assert!(err.contains("/nonexistent/conv3x3.json"));
    }
}
