//! Sidebar controller.
//!
//! Session state is an explicit [`SidebarState`] value. User interactions are
//! folded in with [`apply_event`]; [`render_sidebar`] performs the one
//! external lookup (suggested radius) and hands the state to
//! [`project_sidebar`], a pure projection into widget descriptions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::date_range::{
    date_range_options, today_in, DateRangeOption, DEFAULT_DATE_RANGE_INDEX,
};
use crate::locations::{Location, LOCATIONS};
use crate::radius::{RadiusQuery, RadiusSource, SuggestedRadius, FALLBACK_RADIUS};
use crate::selection::{resolve_selection, Selection};
use crate::units::{radius_unit, RadiusUnit};

pub const DEFAULT_LOCATION_INDEX: usize = 0;

pub const RADIUS_MIN: f64 = 0.0;
pub const RADIUS_MAX: f64 = 10.0;
pub const RADIUS_STEP: f64 = 0.1;

const LOCATION_LABEL: &str = "Parking Building";
const LOCATION_HELP: &str = "Select the parking building location.";
const DATE_RANGE_LABEL: &str = "Date Range";
const DATE_RANGE_HELP: &str = "Select the date range for fetching event data.";
const RADIUS_HELP: &str =
    "[Suggested Radius Docs](https://docs.predicthq.com/resources/suggested-radius)";

/// Per-session selections, persisted between render cycles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SidebarState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Selection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daterange: Option<Selection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_radius: Option<SuggestedRadius>,
    /// Lookup that produced `suggested_radius`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_for: Option<RadiusQuery>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SidebarEvent {
    SelectLocation(String),
    SelectDateRange(String),
    SetRadius(f64),
    /// Drop the manual radius so the slider follows the suggestion again.
    ResetRadius,
}

/// Fold one user interaction into the session state.
#[must_use]
pub fn apply_event(mut state: SidebarState, event: SidebarEvent) -> SidebarState {
    match event {
        SidebarEvent::SelectLocation(id) => {
            let changed = state.location.as_ref().is_none_or(|prev| prev.id != id);
            if changed {
                state.radius = None;
            }
            state.location = Some(Selection::new(id));
        }
        SidebarEvent::SelectDateRange(id) => {
            state.daterange = Some(Selection::new(id));
        }
        SidebarEvent::SetRadius(value) => {
            state.radius = value.is_finite().then(|| clamp_radius(value));
        }
        SidebarEvent::ResetRadius => {
            state.radius = None;
        }
    }
    state
}

fn clamp_radius(value: f64) -> f64 {
    value.clamp(RADIUS_MIN, RADIUS_MAX)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dropdown<T> {
    pub label: &'static str,
    pub help: &'static str,
    pub options: Vec<T>,
    pub index: usize,
    pub disabled: bool,
}

impl<T> Dropdown<T> {
    #[must_use]
    pub fn selected(&self) -> &T {
        &self.options[self.index]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slider {
    pub label: String,
    pub help: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    /// Value the slider resets to: the suggested radius.
    pub default: f64,
    pub value: f64,
}

/// Widget descriptions for one render of the sidebar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SidebarView {
    pub location: Dropdown<&'static Location>,
    pub date_range: Dropdown<DateRangeOption>,
    pub radius_unit: RadiusUnit,
    pub radius: Slider,
}

/// Project session state into widgets without touching the network.
///
/// `controls_enabled` is false when no API credentials are configured.
#[must_use]
pub fn project_sidebar(
    state: &SidebarState,
    now: DateTime<Utc>,
    controls_enabled: bool,
) -> SidebarView {
    let location_index =
        resolve_selection(state.location.as_ref(), &LOCATIONS, DEFAULT_LOCATION_INDEX);
    let location = &LOCATIONS[location_index];

    let date_options = date_range_options(today_in(location.tz, now));
    let date_index = resolve_selection(
        state.daterange.as_ref(),
        &date_options,
        DEFAULT_DATE_RANGE_INDEX,
    );

    let unit = radius_unit(location);
    let default = state
        .suggested_radius
        .as_ref()
        .map_or(FALLBACK_RADIUS, SuggestedRadius::slider_default);
    let value = state
        .radius
        .filter(|r| r.is_finite())
        .map_or(default, clamp_radius);

    SidebarView {
        location: Dropdown {
            label: LOCATION_LABEL,
            help: LOCATION_HELP,
            options: LOCATIONS.iter().collect(),
            index: location_index,
            disabled: !controls_enabled,
        },
        date_range: Dropdown {
            label: DATE_RANGE_LABEL,
            help: DATE_RANGE_HELP,
            options: date_options,
            index: date_index,
            disabled: !controls_enabled,
        },
        radius_unit: unit,
        radius: Slider {
            label: format!("Suggested Radius around parking building ({unit})"),
            help: RADIUS_HELP,
            min: RADIUS_MIN,
            max: RADIUS_MAX,
            step: RADIUS_STEP,
            default,
            value,
        },
    }
}

/// Result of one render cycle: the reconciled state and what to display.
#[derive(Debug, Clone)]
pub struct SidebarRender {
    pub state: SidebarState,
    pub view: SidebarView,
}

/// Run one render cycle.
///
/// Resolves the selected location, asks `source` for its suggested radius
/// and projects the result. With no source the controls are disabled and the
/// slider falls back to its default radius.
///
/// # Errors
///
/// Propagates the source's error unchanged; nothing is retried or defaulted.
pub async fn render_sidebar<S: RadiusSource>(
    state: &SidebarState,
    now: DateTime<Utc>,
    source: Option<&S>,
) -> Result<SidebarRender, S::Error> {
    let mut state = state.clone();

    let location_index =
        resolve_selection(state.location.as_ref(), &LOCATIONS, DEFAULT_LOCATION_INDEX);
    let location = &LOCATIONS[location_index];

    match source {
        Some(source) => {
            let query = RadiusQuery::for_location(location);
            state.suggested_radius = Some(source.suggested_radius(&query).await?);
            state.suggested_for = Some(query);
        }
        None => {
            tracing::debug!("no radius source configured; sidebar controls disabled");
            state.suggested_radius = None;
            state.suggested_for = None;
        }
    }

    let view = project_sidebar(&state, now, source.is_some());

    state.location = Some(Selection::from(*view.location.selected()));
    state.daterange = Some(Selection::from(view.date_range.selected()));
    // Only a manual radius is persisted; otherwise the slider keeps
    // following the suggestion.
    state.radius = state
        .radius
        .filter(|r| r.is_finite())
        .map(|_| view.radius.value);

    Ok(SidebarRender { state, view })
}
