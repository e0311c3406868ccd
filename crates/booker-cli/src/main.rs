use clap::{Parser, Subcommand};
use dotenv::dotenv;
use std::process::ExitCode;

mod components;
use components::calendar::{CalendarArgs, handle_calendar};
use components::select::{SelectArgs, handle_select};
use components::slots::{SlotsArgs, handle_slots};

#[derive(Parser)]
#[command(name = "booker")]
#[command(version, about = "Consultation date and time picker", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive scheduler in the terminal (default)
    Tui,
    /// Print a month of the booking calendar
    Calendar(CalendarArgs),
    /// List the bookable time slots
    Slots(SlotsArgs),
    /// Select a date and time slot and print the notification
    Select(SelectArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    let cli = Cli::parse();

    let command = cli.command.unwrap_or(Commands::Tui);
    // the TUI installs its own in-memory logger
    if !matches!(command, Commands::Tui) {
        env_logger::init();
    }

    match command {
        Commands::Tui => match booker_tui::tui_main().await {
            Ok(()) => ExitCode::SUCCESS,
            Err(_) => ExitCode::FAILURE,
        },
        Commands::Calendar(args) => handle_calendar(args),
        Commands::Slots(args) => handle_slots(args),
        Commands::Select(args) => handle_select(args),
    }
}
