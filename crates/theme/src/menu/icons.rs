//! Icon font classes for known navigation tabs.

/// Icon used for tabs without a dedicated entry.
pub const DEFAULT_ICON: &str = "fa fa-circle-o";

/// Tab id -> icon class.
static MENU_ICONS: &[(&str, &str)] = &[
    ("coursehome", "fa fa-bookmark"),
    ("editsettings", "fa fa-sliders"),
    ("modedit", "fa fa-sliders"),
    ("participants", "fa fa-users"),
    ("grades", "fa fa-font"),
    ("advgrading", "fa fa-font"),
    ("coursereports", "fa fa-bar-chart"),
    ("filtermanage", "fa fa-filter"),
    ("roleoverride", "fa fa-check-square-o"),
    ("mod_assign_useroverrides", "fa fa-check-square-o"),
    ("backup", "fa fa-download"),
    ("competencies", "fa fa-lightbulb-o"),
];

/// Icon class for a tab id, falling back to [`DEFAULT_ICON`].
pub fn icon_for(id: &str) -> &'static str {
    MENU_ICONS
        .iter()
        .find(|(tab, _)| *tab == id)
        .map(|(_, icon)| *icon)
        .unwrap_or(DEFAULT_ICON)
}
