use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::models::ScanConfig;
use crate::scan::Override;

/// Correlate font names with text layers by their byte proximity in design files
#[derive(Parser, Debug)]
#[command(name = "fontcorr", version, about, long_about = None)]
pub struct Cli {
    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Associate every text token with a font in one file
    Scan {
        /// The design file to scan
        file: PathBuf,

        #[command(flatten)]
        scan: ScanArgs,

        /// Write the JSON report to this path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List font-like names found in a file
    Discover {
        file: PathBuf,

        /// Print JSON entries with guessed family and weight instead of names
        #[arg(long)]
        json: bool,
    },

    /// List the fonts in a directory of .ttf/.otf files
    Fonts {
        dir: PathBuf,

        #[arg(long)]
        json: bool,
    },

    /// Scan several files with the same vocabularies
    Batch {
        #[arg(required = true)]
        files: Vec<PathBuf>,

        #[command(flatten)]
        scan: ScanArgs,

        /// Write one `<stem>_fonts.json` report next to each input
        #[arg(long)]
        write_reports: bool,
    },
}

/// Vocabulary and scoring options shared by `scan` and `batch`
#[derive(Args, Debug, Clone)]
pub struct ScanArgs {
    /// Text token to associate (repeatable)
    #[arg(short, long = "text", value_name = "TEXT")]
    pub texts: Vec<String>,

    /// File with one text token per line
    #[arg(long, value_name = "FILE")]
    pub texts_file: Option<PathBuf>,

    /// Font name token (repeatable)
    #[arg(short, long = "font", value_name = "NAME")]
    pub fonts: Vec<String>,

    /// Directory of font files whose names join the font vocabulary
    #[arg(long, value_name = "DIR")]
    pub fonts_dir: Option<PathBuf>,

    /// Add style-keyword names found in the file to the font vocabulary
    #[arg(long)]
    pub discover: bool,

    /// JSON file of `{"text": ..., "fonts": [...]}` entries from a structured reader
    #[arg(long, value_name = "FILE")]
    pub layers: Option<PathBuf>,

    /// Force a font for a text, as TEXT=FONT (repeatable)
    #[arg(long = "override", value_name = "TEXT=FONT")]
    pub overrides: Vec<Override>,

    /// Search radius around each text occurrence
    #[arg(long, value_name = "N")]
    pub window: Option<usize>,

    /// Characters kept on each side of a match in report snippets
    #[arg(long, value_name = "N")]
    pub snippet: Option<usize>,

    /// Distances below this are high confidence
    #[arg(long, value_name = "N")]
    pub high: Option<usize>,

    /// Distances below this are medium confidence
    #[arg(long, value_name = "N")]
    pub medium: Option<usize>,

    /// Score added per supporting occurrence
    #[arg(long, value_name = "K")]
    pub frequency_weight: Option<f64>,

    /// Print the JSON report instead of the summary
    #[arg(long)]
    pub json: bool,
}

impl ScanArgs {
    /// Build a scan configuration, unset flags keeping their defaults
    pub fn config(&self, debug: bool) -> ScanConfig {
        let defaults = ScanConfig::default();
        let mut config = ScanConfig::new()
            .with_confidence_distances(
                self.high.unwrap_or(defaults.high_confidence_distance),
                self.medium.unwrap_or(defaults.medium_confidence_distance),
            )
            .with_discover_fonts(self.discover)
            .with_debug_mode(debug);
        if let Some(window) = self.window {
            config = config.with_window_radius(window);
        }
        if let Some(radius) = self.snippet {
            config = config.with_snippet_radius(radius);
        }
        if let Some(weight) = self.frequency_weight {
            config = config.with_frequency_weight(weight);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_flags_map_to_config() {
        let cli = Cli::try_parse_from([
            "fontcorr", "scan", "case.psd", "--text", "WOQM", "-t", "LIGHT", "--font",
            "AvianoSansBold", "--override", "LIGHT=AvianoSansThin", "--window", "2000",
            "--high", "100", "--medium", "300", "--snippet", "20", "--debug",
        ])
        .unwrap();
        assert!(cli.debug);
        let Command::Scan { file, scan, output } = cli.command else {
            panic!("expected scan");
        };
        assert_eq!(file, PathBuf::from("case.psd"));
        assert!(output.is_none());
        assert_eq!(scan.texts, vec!["WOQM", "LIGHT"]);
        assert_eq!(scan.overrides, vec![Override::new("LIGHT", "AvianoSansThin")]);

        let config = scan.config(cli.debug);
        assert_eq!(config.window_radius, 2000);
        assert_eq!(config.high_confidence_distance, 100);
        assert_eq!(config.medium_confidence_distance, 300);
        assert_eq!(config.snippet_radius, 20);
        assert_eq!(config.frequency_weight, 10.0);
        assert!(config.debug_mode);
    }

    #[test]
    fn malformed_override_is_rejected() {
        let parsed = Cli::try_parse_from(["fontcorr", "scan", "a.psd", "--override", "no-equals"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn batch_requires_files() {
        assert!(Cli::try_parse_from(["fontcorr", "batch", "--text", "WOQM"]).is_err());
    }
}
