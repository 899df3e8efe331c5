//! flagphone — Command-line country picker
//!
//! This binary drives the `flagphone-core` picker from your terminal. It can
//! print the grouped country list, its section index, search results, pick a
//! row, and look countries up by code or dial code.
//!
//! Usage examples
//! --------------
//!
//! - List all countries grouped by initial
//!   $ flagphone list
//!
//! - Search by name, code or dial code
//!   $ flagphone search swi
//!   $ flagphone search +44
//!
//! - Pick the first hit of a search
//!   $ flagphone pick --query germ 0 0
//!
//! - Lookup by code or dial code prefix
//!   $ flagphone country de
//!   $ flagphone phone +1
//!
//! Data source
//! -----------
//!
//! By default the dataset embedded in `flagphone-core` is used. Point
//! `--input <path>` (or `FLAGPHONE_DATASET`) at a `.json` or `.json.gz` file
//! to use your own.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use flagphone_core::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    // Load the repository (bundled dataset unless --input is given)
    let owned;
    let repository: &CountryRepository = match &args.input {
        Some(path) => {
            owned = CountryRepository::load_from_path(path)
                .with_context(|| format!("failed to load dataset {path}"))?;
            &owned
        }
        None => CountryRepository::load()?,
    };

    let mode = if args.fold_accents {
        MatchMode::Folded
    } else {
        MatchMode::Lowercase
    };
    let config = PickerConfig::default()
        .with_phone_code(!args.hide_phone_code)
        .with_match_mode(mode);

    match args.command {
        Commands::List => {
            let picker = Picker::with_repository(repository, config)?;
            print_display(&picker)?;
        }

        Commands::Sections => {
            let picker = Picker::with_repository(repository, config)?;
            println!("{}", picker.section_index_titles()?.join(" "));
        }

        Commands::Search { query } => {
            let mut picker = Picker::with_repository(repository, config)?;
            picker.activate_search();
            picker.update_query(&query)?;
            if picker.display_model()?.is_empty() {
                println!("No countries found matching: {query}");
            } else {
                print_display(&picker)?;
            }
        }

        Commands::Pick {
            query,
            section,
            row,
        } => {
            let mut picker = Picker::with_repository(repository, config)?;
            picker.on_select(|c: &Country| {
                println!(
                    "Selected: {} {} ({}) {}",
                    c.flag().emoji(),
                    c.name(),
                    c.code(),
                    c.phone_code()
                );
            });
            if let Some(query) = query.as_deref() {
                picker.activate_search();
                picker.update_query(query)?;
            }
            picker
                .select(section, row)
                .with_context(|| format!("cannot pick section {section}, row {row}"))?;
        }

        Commands::Country { code } => match repository.find_by_code(&code) {
            Some(c) => {
                println!("Country: {}", c.name());
                println!("Code: {}", c.code());
                println!("Flag: {}", c.flag().emoji());
                println!("Phone Code: {}", c.phone_code());
            }
            None => {
                eprintln!("No country found for: {code}");
            }
        },

        Commands::Phone { prefix } => {
            let matches = repository.find_by_phone_code(&prefix);
            if matches.is_empty() {
                println!("No countries found with dial code: {prefix}");
            } else {
                for c in matches {
                    println!("{} {} ({})", c.phone_code(), c.name(), c.code());
                }
            }
        }
    }

    Ok(())
}

fn print_display(picker: &Picker<'_>) -> anyhow::Result<()> {
    let model = picker.display_model()?;
    for (section, bucket) in model.buckets().iter().enumerate() {
        println!("{}", bucket.key);
        for row in 0..bucket.len() {
            let display = picker.row(section, row)?;
            match display.phone_code {
                Some(code) => println!("  {} {} {}", display.flag.emoji(), display.name, code),
                None => println!("  {} {}", display.flag.emoji(), display.name),
            }
        }
    }
    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
