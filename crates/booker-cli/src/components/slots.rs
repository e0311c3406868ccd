use booker_core::{GenericError, AVAILABLE_TIME_SLOTS};
use std::process::ExitCode;

/// List the bookable time slots
#[derive(clap::Args)]
pub struct SlotsArgs {
    /// Print the catalog as a JSON array
    #[arg(long, short)]
    pub json: bool,
}

pub fn handle_slots(args: SlotsArgs) -> ExitCode {
    match render_slots(args.json) {
        Ok(text) => {
            println!("{}", text);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn render_slots(json: bool) -> Result<String, GenericError> {
    if json {
        return Ok(serde_json::to_string(&AVAILABLE_TIME_SLOTS)?);
    }
    Ok(AVAILABLE_TIME_SLOTS
        .iter()
        .map(|slot| slot.label())
        .collect::<Vec<_>>()
        .join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_listing() {
        let text = render_slots(false).unwrap();
        assert_eq!(text.lines().count(), 5);
        assert_eq!(text.lines().next(), Some("09:00 - 09:30 ( BST )"));
    }

    #[test]
    fn test_json_listing() {
        let text = render_slots(true).unwrap();
        let labels: Vec<String> = serde_json::from_str(&text).unwrap();
        assert_eq!(labels.len(), 5);
        assert_eq!(labels[4], "13:00 - 13:30 ( BST )");
    }
}
