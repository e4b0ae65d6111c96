use chrono::{TimeZone, Utc};
use parkdemand_core::{project_sidebar, SidebarState};

use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["parkdemand"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_locations_command() {
    let cli = Cli::try_parse_from(["parkdemand", "locations"]).unwrap();
    assert!(matches!(cli.command, Some(Commands::Locations)));
}

#[test]
fn parses_examples_command() {
    let cli = Cli::try_parse_from(["parkdemand", "examples"]).unwrap();
    assert!(matches!(cli.command, Some(Commands::Examples)));
}

#[test]
fn sidebar_without_flags_has_no_events() {
    let cli = Cli::try_parse_from(["parkdemand", "sidebar"]).unwrap();
    let Some(Commands::Sidebar(args)) = cli.command else {
        panic!("expected sidebar command");
    };
    assert!(args.events().is_empty());
    assert!(!args.json);
}

#[test]
fn sidebar_flags_become_events_in_order() {
    let cli = Cli::try_parse_from([
        "parkdemand",
        "sidebar",
        "--location",
        "miami",
        "--daterange",
        "next_7_days",
        "--radius",
        "3.5",
    ])
    .unwrap();
    let Some(Commands::Sidebar(args)) = cli.command else {
        panic!("expected sidebar command");
    };
    assert_eq!(
        args.events(),
        vec![
            SidebarEvent::SelectLocation("miami".to_owned()),
            SidebarEvent::SelectDateRange("next_7_days".to_owned()),
            SidebarEvent::SetRadius(3.5),
        ]
    );
}

#[test]
fn radius_conflicts_with_reset() {
    let result = Cli::try_parse_from([
        "parkdemand",
        "sidebar",
        "--radius",
        "1.0",
        "--reset-radius",
    ]);
    assert!(result.is_err());
}

#[test]
fn sidebar_display_shows_selections() {
    let now = Utc.with_ymd_and_hms(2026, 10, 18, 20, 0, 0).unwrap();
    let view = project_sidebar(&SidebarState::default(), now, true);
    let text = display::sidebar(&view);

    assert!(text.contains("Parking Building: 1417 Bellevue Ave, Seattle\n"));
    assert!(text.contains("Date Range: Next 90 days (2026-10-18 to 2027-01-16)\n"));
    assert!(text.contains("Suggested Radius around parking building (mi): 2.0"));
    assert!(!text.contains("(disabled)"));
}

#[test]
fn sidebar_display_marks_disabled_controls() {
    let now = Utc.with_ymd_and_hms(2026, 10, 18, 20, 0, 0).unwrap();
    let view = project_sidebar(&SidebarState::default(), now, false);
    assert!(display::sidebar(&view).contains("(disabled)"));
}

#[test]
fn locations_display_lists_catalog_in_order() {
    let text = display::locations(&LOCATIONS);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 9);
    assert!(lines[0].starts_with("0  seattle"));
    assert!(lines[5].starts_with("5  miami"));
    assert!(lines[5].ends_with("(America/New_York, mi)"));
}

#[test]
fn code_examples_display_wraps_panel() {
    let panel = load_panel(&SnippetStore::Bundled).unwrap();
    let text = display::code_examples(&panel);
    assert!(text.starts_with("## Code examples\n\n### Suggested Radius API\n"));
    assert!(text.trim_end().ends_with("(https://github.com/predicthq/streamlit-parking-demo)"));
}

fn broken_config() -> Result<AppConfig, ConfigError> {
    Err(ConfigError::InvalidEnvVar {
        var: "PARKDEMAND_REQUEST_TIMEOUT_SECS".to_owned(),
        reason: "invalid digit found in string".to_owned(),
    })
}

#[tokio::test]
async fn locations_runs_without_valid_config() {
    let cli = Cli::try_parse_from(["parkdemand", "locations"]).unwrap();
    dispatch(cli.command, broken_config())
        .await
        .expect("locations does not read the configuration");
}

#[tokio::test]
async fn sidebar_reports_invalid_config() {
    let cli = Cli::try_parse_from(["parkdemand", "sidebar"]).unwrap();
    let err = dispatch(cli.command, broken_config())
        .await
        .expect_err("sidebar needs the configuration");
    assert!(err.to_string().contains("PARKDEMAND_REQUEST_TIMEOUT_SECS"));
}

#[test]
fn help_does_not_need_config() {
    let err = Cli::try_parse_from(["parkdemand", "--help"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
}

#[test]
fn sidebar_display_is_four_lines() {
    let now = Utc.with_ymd_and_hms(2026, 10, 18, 20, 0, 0).unwrap();
    let view = project_sidebar(&SidebarState::default(), now, true);
    let text = display::sidebar(&view);
    assert_eq!(text.lines().count(), 4);
    assert!(text.ends_with("suggested 2.0]\n"));
}
