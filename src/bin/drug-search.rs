// Drug Search CLI Tool
// Command-line interface over the drug catalog

use clap::{Parser, Subcommand};
use drug_search::pattern::MIN_SUGGEST_CHARS;
use drug_search::{
    validate_query, DrugCatalog, DrugRecord, DrugSearch, SearchField, SearchMode, SearchOptions,
};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Drug Search Tool - look up drugs by name, symptom or label text
#[derive(Parser, Debug)]
#[command(name = "drug-search")]
#[command(about = "Search a drug-information catalog", long_about = None)]
#[command(version)]
struct Args {
    /// Catalog JSON file (defaults to the embedded dataset)
    #[arg(short, long, global = true, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Show detailed information
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Ranked free-text search
    Search {
        query: String,

        /// Use keyword match-count ranking instead of weighted scoring
        #[arg(long)]
        smart: bool,

        /// Maximum number of results to display
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Fields to score: generic, brand, uses, side-effects
        #[arg(short, long, value_delimiter = ',')]
        fields: Vec<SearchField>,

        /// Compare text without case folding
        #[arg(long)]
        case_sensitive: bool,

        /// Show score breakdown (weighted mode only)
        #[arg(short, long)]
        scores: bool,
    },

    /// Show one drug by brand or generic name
    Show { name: String },

    /// Autocomplete a partial drug name
    Suggest {
        partial: String,

        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// List drugs related to the named drug
    Similar {
        name: String,

        #[arg(short, long, default_value = "5")]
        limit: usize,
    },

    /// List dosage forms with drug counts
    Forms,

    /// Match drugs from text read off a label
    Scan { text: String },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "drug_search=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let catalog = match &args.catalog {
        Some(path) => DrugCatalog::from_path(path)?,
        None => DrugCatalog::embedded()?,
    };
    let engine = DrugSearch::new(&catalog);

    if args.verbose {
        let (total, forms) = engine.stats();
        info!(total, forms, "catalog ready");
    }

    match args.command {
        Command::Search {
            query,
            smart,
            limit,
            fields,
            case_sensitive,
            scores,
        } => {
            if let Err(e) = validate_query(&query, 1) {
                println!("⚠️  {}", e);
                return Ok(());
            }

            let mut options = SearchOptions::default()
                .with_case_sensitive(case_sensitive)
                .with_limit(limit);
            if !fields.is_empty() {
                options = options.with_fields(&fields);
            }

            let mode = if smart {
                SearchMode::Smart
            } else {
                SearchMode::Advanced
            };
            println!("Mode: {}", mode);

            if mode == SearchMode::Advanced && scores {
                let ranked = engine.rank(&query, &options);
                if ranked.is_empty() {
                    println!("❌ No matches found.");
                    return Ok(());
                }
                println!("✅ Found {} matches:\n", ranked.len());
                for (idx, candidate) in ranked.iter().enumerate() {
                    print_summary(idx, candidate.record);
                    println!(
                        "      Score: {} (exact {}, partial {})",
                        candidate.score, candidate.exact_matches, candidate.partial_matches
                    );
                }
                return Ok(());
            }

            let mut results = engine.search(&query, mode, &options);
            results.truncate(limit);
            print_list(&results);
        }

        Command::Show { name } => match engine.find_by_name(&name) {
            Some(record) => print_details(record),
            None => println!("❌ No drug named '{}'.", name),
        },

        Command::Suggest { partial, limit } => {
            if let Err(e) = validate_query(&partial, MIN_SUGGEST_CHARS) {
                warn!(error = %e, "suggestion query rejected");
            }
            for name in engine.suggest(&partial, limit) {
                println!("{}", name);
            }
        }

        Command::Similar { name, limit } => match engine.find_by_name(&name) {
            Some(record) => {
                println!("Drugs similar to {}:\n", record.display_name());
                print_list(&engine.find_similar(record, limit));
            }
            None => println!("❌ No drug named '{}'.", name),
        },

        Command::Forms => {
            for summary in engine.group_by_form() {
                println!("{:<24} {}", summary.form, summary.count);
            }
        }

        Command::Scan { text } => {
            let keywords = drug_search::extract_label_keywords(&text);
            if args.verbose {
                println!("Keywords: {}", keywords.join(", "));
            }
            print_list(&engine.search_label_text(&text));
        }
    }

    Ok(())
}

fn print_list(records: &[&DrugRecord]) {
    if records.is_empty() {
        println!("❌ No matches found.");
        return;
    }

    println!("✅ Found {} matches:\n", records.len());
    for (idx, record) in records.iter().enumerate() {
        print_summary(idx, record);
    }
}

fn print_summary(idx: usize, record: &DrugRecord) {
    println!(
        "{}. {:<20} ({}) - {}",
        idx + 1,
        record.brand_name,
        record.generic_name,
        record.dosage_form
    );
    if !record.indications.is_empty() {
        println!("      {}", record.indications);
    }
}

fn print_details(record: &DrugRecord) {
    let sections = [
        ("Generic name", &record.generic_name),
        ("Brand name", &record.brand_name),
        ("Dosage form", &record.dosage_form),
        ("Used for", &record.indications),
        ("How to use", &record.usage_instructions),
        ("Tell your doctor", &record.doctor_notices),
        ("Missed dose", &record.missed_dose_instructions),
        ("Common side effects", &record.common_side_effects),
        ("Urgent side effects", &record.urgent_side_effects),
        ("Storage", &record.storage_instructions),
        ("Reference", &record.reference_url),
    ];

    for (label, value) in sections {
        if !value.is_empty() {
            println!("{:<20} {}", label, value);
        }
    }
}
