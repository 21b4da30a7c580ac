use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process::ExitCode;

use chrono::NaiveDate;
use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use birthbook::birthday::CalendarDate;
use birthbook::document::{parse_reader, parse_str};
use birthbook::error::Result;
use birthbook::roster::evaluate;
use birthbook::settings::{Loader, Settings};

const SAMPLE: &str = include_str!("../data/sample.txt");

#[derive(Parser, Debug)]
#[command(name = "birthbook", about = "Greets everyone in a roster whose birthday is today")]
struct Args {
    /// Roster to read, defaults to the bundled sample
    input: Option<PathBuf>,
    /// Additional TOML settings file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Pretend today is this date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_day)]
    today: Option<NaiveDate>,
    /// Keep '"' characters in the fields
    #[arg(long)]
    keep_quotes: bool,
}

fn parse_day(text: &str) -> std::result::Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
}

fn load_settings(args: &Args) -> Result<Settings> {
    let mut loader = Loader::new().with_optional_file("birthbook.toml");
    if let Some(path) = &args.config {
        loader = loader.with_file(path);
    }
    if let Some(input) = &args.input {
        loader = loader.set_override("input", input.to_string_lossy().into_owned())?;
    }
    if args.keep_quotes {
        loader = loader.set_override("strip_quotes", false)?;
    }
    loader.build()
}

fn run(args: &Args, settings: &Settings) -> Result<()> {
    let records = match &settings.input {
        Some(path) => {
            info!(path = %path.display(), "reading roster");
            parse_reader(BufReader::new(File::open(path)?))?
        }
        None => {
            info!("reading bundled sample roster");
            parse_str(SAMPLE)?
        }
    };
    let today = args.today.map(CalendarDate::from).unwrap_or_else(CalendarDate::today);
    info!(
        day = today.day,
        month = today.month,
        year = today.year,
        records = records.len(),
        "evaluating"
    );

    for evaluation in evaluate(records, today, settings.strip_quotes) {
        match evaluation.outcome {
            Ok(celebrant) => {
                let person = &celebrant.person;
                println!("{} {} born {}", person.name, person.surname, person.birthdate);
                if celebrant.celebrating {
                    println!("\t{}, {}!", settings.greeting, person.name);
                }
            }
            Err(e) => warn!(record = %evaluation.record, error = %e, "skipping record"),
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    let settings = match load_settings(&args) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    match run(&args, &settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "roster could not be processed");
            ExitCode::FAILURE
        }
    }
}
