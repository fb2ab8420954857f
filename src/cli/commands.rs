use super::args::{Cli, Command, ScanArgs};
use crate::error::{Error, Result};
use crate::font::{discover_entries, discover_font_names, FontLibrary};
use crate::models::{ScanReport, TokenVocabulary};
use crate::scan::{scan_file, scan_files, ByteDocument, ScanInput};
use crate::utils::file::{
    default_report_path, read_layer_hints, read_source, read_token_list, write_report,
};
use crate::utils::logging::LogSink;

/// Execute one parsed command line
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Scan { file, scan, output } => {
            let config = scan.config(cli.debug);
            let input = build_input(&scan)?;
            let report = scan_file(&file, &input, &config, &mut LogSink)?;

            if let Some(path) = &output {
                write_report(path, &report)?;
            }
            if scan.json {
                println!("{}", report.to_json_pretty()?);
            } else {
                print_summary(&report);
                if let Some(path) = &output {
                    println!("Report written to {}", path.display());
                }
            }
            Ok(())
        }
        Command::Discover { file, json } => {
            let raw = read_source(&file)?;
            let doc = ByteDocument::normalize(&raw);
            if json {
                println!("{}", serde_json::to_string_pretty(&discover_entries(&doc))?);
            } else {
                for name in discover_font_names(&doc) {
                    println!("{}", name);
                }
            }
            Ok(())
        }
        Command::Fonts { dir, json } => {
            let library = FontLibrary::load(&dir)?;
            if json {
                println!("{}", serde_json::to_string_pretty(library.entries())?);
            } else {
                for entry in library.entries() {
                    println!(
                        "{} ({} {}, weight {}{})",
                        entry.postscript_name,
                        entry.family,
                        entry.subfamily,
                        entry.weight,
                        if entry.is_italic { ", italic" } else { "" }
                    );
                }
            }
            Ok(())
        }
        Command::Batch {
            files,
            scan,
            write_reports,
        } => {
            let config = scan.config(cli.debug);
            config.validate()?;
            let input = build_input(&scan)?;

            let mut failed = 0;
            for outcome in scan_files(&files, &input, &config) {
                match outcome.result {
                    Ok(report) => {
                        if write_reports {
                            write_report(&default_report_path(&outcome.path), &report)?;
                        }
                        if scan.json {
                            println!("{}", report.to_json_pretty()?);
                        } else {
                            println!("== {}", outcome.path.display());
                            print_summary(&report);
                        }
                    }
                    Err(e) => {
                        eprintln!("Error scanning {}: {}", outcome.path.display(), e);
                        failed += 1;
                    }
                }
            }

            if failed > 0 {
                return Err(Error::Batch(format!(
                    "{} of {} files could not be scanned",
                    failed,
                    files.len()
                )));
            }
            Ok(())
        }
    }
}

/// Merge flag, list-file and font-directory tokens into scan input
fn build_input(args: &ScanArgs) -> Result<ScanInput> {
    let mut texts = TokenVocabulary::texts(args.texts.iter().cloned());
    if let Some(path) = &args.texts_file {
        for token in read_token_list(path)? {
            texts.push_unique(token);
        }
    }
    if texts.is_empty() {
        log::warn!("No text tokens given; the report will be empty");
    }

    let mut fonts = TokenVocabulary::fonts(args.fonts.iter().cloned());
    if let Some(dir) = &args.fonts_dir {
        for token in FontLibrary::load(dir)?.vocabulary().distinct() {
            fonts.push_unique(token);
        }
    }

    let layers = match &args.layers {
        Some(path) => read_layer_hints(path)?,
        None => Vec::new(),
    };

    Ok(ScanInput::new(texts, fonts)
        .with_layers(layers)
        .with_overrides(args.overrides.clone()))
}

fn print_summary(report: &ScanReport) {
    let summary = &report.summary;
    println!(
        "{} text layers, {} fonts ({} found in document)",
        summary.total_text_layers,
        summary.total_fonts,
        report.fonts_found.len()
    );
    println!(
        "Associated {} ({} by proximity, {} by fallback)",
        summary.association_success, summary.proximity_associations, summary.fallback_associations
    );
    for (text, association) in &report.associations {
        println!(
            "- '{}': {} ({}, {})",
            text,
            association.font.as_deref().unwrap_or("<none>"),
            association.method,
            association.confidence
        );
    }
}
