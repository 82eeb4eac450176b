use anyhow::Context;
use chrono::{NaiveDate, NaiveTime};
use clap::Parser;

use dentalab::config::cli::{Cli, Command, OverrideCommand};
use dentalab::core::schedule::{clinic_now, hour_label};
use dentalab::utils::validation::{validate_open_interval, validate_positive_number, Validate};
use dentalab::utils::logger;
use dentalab::{
    AppointmentDescriptor, CalendarEventEncoder, ClinicConfig, ContactClassification,
    ContactClassifier, JsonOverrideStore, OpenInterval, Override, OverrideStore, ScheduleResolver,
    ICS_FILENAME,
};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    let config = if std::path::Path::new(&cli.config).exists() {
        ClinicConfig::from_file(&cli.config)
            .with_context(|| format!("failed to load config from {}", cli.config))?
    } else {
        tracing::debug!("config file {} not found, using defaults", cli.config);
        ClinicConfig::default()
    };
    config.validate()?;

    match cli.command {
        Command::Status => {
            let resolver = ScheduleResolver::new(config.schedule.weekly());
            let store = JsonOverrideStore::new(config.storage.overrides_path.as_str());
            let now = clinic_now(&config.clinic.timezone);
            let status = resolver.resolve(&now, &store.load());
            println!("{}", status.spoken);
        }
        Command::Classify { raw } => {
            let classifier = ContactClassifier::new(config.clinic.default_country_code.clone());
            match classifier.classify(&raw) {
                ContactClassification::Email(value) => println!("email: {}", value),
                ContactClassification::Phone(value) => println!("phone: {}", value),
                ContactClassification::Text(value) => println!("text: {}", value),
            }
        }
        Command::Ics {
            summary,
            date,
            time,
            duration,
            description,
            location,
            output,
        } => {
            validate_positive_number("duration", duration as usize, 1)?;
            let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
                .with_context(|| format!("invalid date '{}', expected YYYY-MM-DD", date))?;
            let time = NaiveTime::parse_from_str(time.trim(), "%H:%M")
                .with_context(|| format!("invalid time '{}', expected HH:MM", time))?;

            let appointment = AppointmentDescriptor {
                summary,
                start_local: date.and_time(time),
                timezone: config.clinic.timezone.clone(),
                duration_minutes: duration,
                description,
                location,
            };
            let encoded = CalendarEventEncoder::encode(&appointment)?;

            println!("{}", encoded.google_url);
            if let Some(dir) = output {
                let path = std::path::Path::new(&dir).join(ICS_FILENAME);
                std::fs::write(&path, &encoded.ics)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                println!("wrote {}", path.display());
            } else {
                print!("{}", encoded.ics);
            }
        }
        Command::Override(command) => {
            let store = JsonOverrideStore::new(config.storage.overrides_path.as_str());
            run_override_command(&store, command)?;
        }
    }

    Ok(())
}

fn run_override_command(store: &JsonOverrideStore, command: OverrideCommand) -> anyhow::Result<()> {
    match command {
        OverrideCommand::Set { date, start, end } => {
            let date = parse_date_key(&date)?;
            validate_open_interval("override", start, end)?;
            store.set(&date, Override::Open(OpenInterval::new(start, end)))?;
            println!(
                "{}: open {} to {}",
                date,
                hour_label(start),
                hour_label(end)
            );
        }
        OverrideCommand::Close { date } => {
            let date = parse_date_key(&date)?;
            store.set(&date, Override::Closed)?;
            println!("{}: closed", date);
        }
        OverrideCommand::Remove { date } => {
            let date = parse_date_key(&date)?;
            if store.remove(&date)? {
                println!("{}: override removed", date);
            } else {
                println!("{}: no override stored", date);
            }
        }
        OverrideCommand::List => {
            let overrides = store.load();
            if overrides.is_empty() {
                println!("no overrides stored");
            }
            for (date, entry) in overrides {
                match entry {
                    Override::Closed => println!("{}  closed", date),
                    Override::Open(interval) => println!(
                        "{}  {} to {}",
                        date,
                        hour_label(interval.start),
                        hour_label(interval.end)
                    ),
                    Override::Malformed => println!("{}  (malformed entry, ignored)", date),
                }
            }
        }
    }
    Ok(())
}

fn parse_date_key(raw: &str) -> anyhow::Result<String> {
    let date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .with_context(|| format!("invalid date '{}', expected YYYY-MM-DD", raw))?;
    Ok(date.format("%Y-%m-%d").to_string())
}
