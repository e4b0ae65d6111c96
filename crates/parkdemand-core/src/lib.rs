//! Domain model and sidebar controller for the parking demand demo.

pub mod app_config;
pub mod code_examples;
pub mod config;
pub mod date_range;
pub mod error;
pub mod locations;
pub mod radius;
pub mod selection;
pub mod sidebar;
pub mod units;

pub use app_config::AppConfig;
pub use code_examples::{load_panel, CodeExample, PanelEntry, SnippetStore, CODE_EXAMPLES};
pub use config::{load_app_config, load_app_config_from_env};
pub use date_range::{date_range_options, today_in, DateRangeOption};
pub use error::{ConfigError, SnippetError};
pub use locations::{find_location, Location, UnitSystem, LOCATIONS};
pub use radius::{RadiusQuery, RadiusSource, SuggestedRadius, PARKING_INDUSTRY};
pub use selection::{resolve_selection, Identified, Selection};
pub use sidebar::{
    apply_event, project_sidebar, render_sidebar, SidebarEvent, SidebarRender, SidebarState,
    SidebarView,
};
pub use units::{radius_unit, RadiusUnit};
