//! Course secondary navigation for the theme's course menu bar.
//!
//! The host hands over the course's secondary navigation as an ordered tab
//! list. The theme shows the first few tabs directly, always starting with
//! the course home tab, and collapses the rest into a "more" dropdown.

mod icons;
mod partition;

pub use icons::{DEFAULT_ICON, icon_for};
pub use partition::{
    COURSE_HOME_ID, MenuEntry, MenuSplit, TabDescriptor, TabLink, build_secondary_menu,
    course_home_entry, partition,
};
