//! Search a Document and Export Matches
//!
//! Extracts the text of a document, searches it for one or more terms and
//! writes the matches to `<document>_matches.csv`.
//!
//! Usage:
//!   cargo run --release --bin doc_matcher -- report.pdf --term "revenue growth" --term risk
//!   cargo run --release --bin doc_matcher -- notes.docx --term todo --summary --output-dir out
//!
//! Each `--term` is one search input; its words are searched separately.

use doc_matcher::config::{HighlightMarkers, MatchConfig};
use doc_matcher::export::{summaries_to_json, to_json, CsvExporter};
use doc_matcher::extractors::{ExtractedDocument, TextExtractor, PREVIEW_CHARS};
use doc_matcher::results::{deduplicate, summarize, DedupKey};
use doc_matcher::search::{MatchEngine, MatchRecord};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

struct SearchArgs {
    document: Option<PathBuf>,
    terms: Vec<String>,
    output_dir: PathBuf,
    summary: bool,
    dedup: Option<DedupKey>,
    json: bool,
    radius: Option<usize>,
    highlight: bool,
    verbose: bool,
}

impl SearchArgs {
    fn from_args() -> Result<Self, String> {
        let args: Vec<String> = std::env::args().collect();
        let mut parsed = Self {
            document: None,
            terms: Vec::new(),
            output_dir: PathBuf::from("."),
            summary: false,
            dedup: None,
            json: false,
            radius: None,
            highlight: false,
            verbose: false,
        };

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--term" | "-t" => {
                    i += 1;
                    let term = args.get(i).ok_or("--term needs a value")?;
                    parsed.terms.push(term.clone());
                },
                "--output-dir" => {
                    i += 1;
                    let dir = args.get(i).ok_or("--output-dir needs a value")?;
                    parsed.output_dir = PathBuf::from(dir);
                },
                "--dedup" => {
                    i += 1;
                    parsed.dedup = match args.get(i).map(String::as_str) {
                        Some("coarse") => Some(DedupKey::Coarse),
                        Some("strict") => Some(DedupKey::Strict),
                        other => return Err(format!("--dedup expects coarse|strict, got {:?}", other)),
                    };
                },
                "--radius" => {
                    i += 1;
                    let radius = args.get(i).ok_or("--radius needs a value")?;
                    parsed.radius =
                        Some(radius.parse().map_err(|e| format!("bad --radius: {}", e))?);
                },
                "--summary" => parsed.summary = true,
                "--json" => parsed.json = true,
                "--highlight" => parsed.highlight = true,
                "--verbose" | "-v" => parsed.verbose = true,
                flag if flag.starts_with('-') => return Err(format!("unknown option {}", flag)),
                path => {
                    if parsed.document.is_some() {
                        return Err(format!("unexpected argument {}", path));
                    }
                    parsed.document = Some(PathBuf::from(path));
                },
            }
            i += 1;
        }

        Ok(parsed)
    }

    fn match_config(&self) -> MatchConfig {
        let mut config = MatchConfig::new();
        if let Some(radius) = self.radius {
            config = config.with_context_radius(radius);
        }
        if self.highlight {
            config = config.with_highlight(HighlightMarkers::brackets());
        }
        config
    }
}

fn print_usage() {
    eprintln!("Usage: doc_matcher <file> --term <text> [--term <text>]...");
    eprintln!("       [--output-dir DIR] [--summary] [--dedup coarse|strict]");
    eprintln!("       [--json] [--radius N] [--highlight] [--verbose]");
}

fn print_document(doc: &ExtractedDocument, verbose: bool) {
    println!("File: {} ({})", doc.name, doc.format);
    if let Some(pages) = doc.page_count {
        println!("Pages: {}", pages);
    }
    println!("Text extracted: {} characters", doc.char_count());
    if verbose {
        println!("Preview: {}", doc.preview(PREVIEW_CHARS));
    }
    println!();
}

fn print_records(records: &[MatchRecord]) {
    println!("{:<5} {:<20} {:<20} {:>5}  Context", "Box", "Search Term", "Matched", "Page");
    for r in records {
        println!(
            "{:<5} {:<20} {:<20} {:>5}  {}",
            r.input_box_id, r.search_term, r.matched_text, r.page_number, r.context
        );
    }
}

fn run(args: &SearchArgs) -> Result<(), Box<dyn std::error::Error>> {
    let Some(path) = &args.document else {
        print_usage();
        return Err("no document given".into());
    };
    if args.terms.iter().all(|t| t.trim().is_empty()) {
        print_usage();
        return Err("no search terms given".into());
    }

    let start = Instant::now();
    let doc = TextExtractor::new().extract_file(path)?;
    print_document(&doc, args.verbose);

    if doc.is_empty() {
        println!("No searchable text found in {}", doc.name);
        return Ok(());
    }

    let engine = MatchEngine::new(args.match_config());
    let mut records = engine.search(&args.terms, &doc.text);
    if let Some(key) = args.dedup {
        records = deduplicate(&records, key);
    }
    let summaries = summarize(&records);

    if args.json {
        if args.summary {
            println!("{}", summaries_to_json(&summaries)?);
        } else {
            println!("{}", to_json(&records)?);
        }
    } else {
        print_records(&records);
        println!();
        for s in &summaries {
            println!(
                "{}: {} occurrences on pages {:?}",
                s.search_term,
                s.occurrence_count,
                s.page_list()
            );
        }
    }

    if records.is_empty() {
        println!("No matches found, nothing to export.");
        return Ok(());
    }

    std::fs::create_dir_all(&args.output_dir)?;
    let exporter = CsvExporter::new();
    let written = exporter.export(&records, &doc.name)?.write_to_dir(&args.output_dir)?;
    println!("\nMatches: {}", written.display());
    if args.summary {
        let written = exporter
            .export_summaries(&summaries, &doc.name)?
            .write_to_dir(&args.output_dir)?;
        println!("Summary: {}", written.display());
    }

    println!("Found {} matches in {:?}", records.len(), start.elapsed());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match SearchArgs::from_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}", e);
            print_usage();
            return ExitCode::FAILURE;
        },
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        },
    }
}
