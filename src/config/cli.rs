use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "dentalab")]
#[command(about = "Clinic opening hours, contact intake and calendar export")]
pub struct Cli {
    #[arg(long, default_value = "clinic.toml", help = "Path to the TOML config")]
    pub config: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show whether the clinic is open right now
    Status,
    /// Classify a free-text contact field as email, phone or plain text
    Classify { raw: String },
    /// Emit an ICS payload and Google Calendar link for an appointment
    Ics {
        #[arg(long)]
        summary: String,
        #[arg(long, help = "Local date, YYYY-MM-DD")]
        date: String,
        #[arg(long, help = "Local time, HH:MM")]
        time: String,
        #[arg(long, default_value = "60")]
        duration: u32,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "")]
        location: String,
        #[arg(long, help = "Directory to write termin.ics into")]
        output: Option<String>,
    },
    /// Manage per-date schedule overrides
    #[command(subcommand)]
    Override(OverrideCommand),
}

#[derive(Debug, Subcommand)]
pub enum OverrideCommand {
    /// Set working hours for a date
    Set { date: String, start: f64, end: f64 },
    /// Mark a date as a non-working day
    Close { date: String },
    /// Remove the override for a date
    Remove { date: String },
    /// List stored overrides, oldest date first
    List,
}
