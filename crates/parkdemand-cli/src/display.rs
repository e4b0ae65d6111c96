//! Plain-text rendering of the sidebar for the terminal.

use parkdemand_core::code_examples::{PANEL_CAPTION, PANEL_HEADING};
use parkdemand_core::{radius_unit, Location, PanelEntry, SidebarView};

pub(crate) fn sidebar(view: &SidebarView) -> String {
    let mut out = String::new();
    let disabled = if view.location.disabled {
        " (disabled)"
    } else {
        ""
    };

    let location = view.location.selected();
    out.push_str(&format!(
        "{}: {}{disabled}\n  {}\n",
        view.location.label, location.name, location.address
    ));

    let range = view.date_range.selected();
    out.push_str(&format!(
        "{}: {} ({} to {}){disabled}\n",
        view.date_range.label, range.name, range.date_from, range.date_to
    ));

    let slider = &view.radius;
    out.push_str(&format!(
        "{}: {:.1} [{:.1}-{:.1}, step {:.1}, suggested {:.1}]\n",
        slider.label, slider.value, slider.min, slider.max, slider.step, slider.default
    ));
    out
}

pub(crate) fn locations(locations: &[Location]) -> String {
    let mut out = String::new();
    for (idx, location) in locations.iter().enumerate() {
        out.push_str(&format!(
            "{idx}  {:<12} {} ({}, {})\n",
            location.id,
            location.name,
            location.tz,
            radius_unit(location)
        ));
    }
    out
}

pub(crate) fn code_examples(panel: &[PanelEntry]) -> String {
    let mut out = format!("{PANEL_HEADING}\n\n");
    for entry in panel {
        out.push_str(&format!(
            "### {}\n\n{}\n\n",
            entry.label,
            entry.markdown.trim_end()
        ));
    }
    out.push_str(PANEL_CAPTION);
    out.push('\n');
    out
}
