//! Secondary navigation -> primary tabs plus "more" menu.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::icons::icon_for;
use crate::config::ThemeStrings;
use crate::host::{CourseInfo, SiteInfo};

/// Id of the course home tab that always leads the primary menu.
pub const COURSE_HOME_ID: &str = "coursehome";

/// Link of a navigation tab as the host's navigation export shapes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TabLink {
    /// A plain URL.
    Url(String),
    /// An action object carrying its URL one level down.
    Nested {
        #[serde(default)]
        url: serde_json::Value,
    },
    /// Anything else; resolves to an empty URL.
    Other(serde_json::Value),
}

impl TabLink {
    /// The URL this link points at, or `""` when there is none.
    pub fn url(&self) -> &str {
        match self {
            TabLink::Url(url) => url,
            TabLink::Nested { url } => url.as_str().unwrap_or(""),
            TabLink::Other(_) => "",
        }
    }
}

/// A single secondary navigation tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabDescriptor {
    /// Navigation key (e.g. "coursehome", "participants").
    pub id: String,
    /// Display title.
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: Option<TabLink>,
}

impl TabDescriptor {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            link: None,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.link = Some(TabLink::Url(url.into()));
        self
    }
}

/// A rendered course menu item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub id: String,
    pub name: String,
    /// Target URL with `&amp;` decoded to `&`.
    pub url: String,
    /// Course format the menu belongs to.
    pub format: String,
    /// Icon font class.
    pub icon: String,
}

impl MenuEntry {
    fn from_tab(tab: &TabDescriptor, course_format: &str) -> Self {
        let url = tab.link.as_ref().map(TabLink::url).unwrap_or("");
        Self {
            id: tab.id.clone(),
            name: tab.title.clone(),
            url: url.replace("&amp;", "&"),
            format: course_format.to_string(),
            icon: icon_for(&tab.id).to_string(),
        }
    }
}

/// Primary tabs and the overflow "more" menu.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuSplit {
    pub primary: Vec<MenuEntry>,
    pub overflow: Vec<MenuEntry>,
}

impl MenuSplit {
    /// Whether the "more" dropdown has anything to show.
    pub fn has_more(&self) -> bool {
        !self.overflow.is_empty()
    }
}

/// Split `tabs` at `split_index` into primary and overflow menus.
///
/// The primary menu always starts with an entry whose id is `home_id`: when
/// the first tab is something else (or there are no tabs at all),
/// `home_fallback` is prepended. Order is otherwise preserved and no tab is
/// dropped or duplicated.
pub fn partition(
    tabs: &[TabDescriptor],
    split_index: usize,
    home_id: &str,
    home_fallback: MenuEntry,
    course_format: &str,
) -> MenuSplit {
    let boundary = split_index.min(tabs.len());
    let (head, tail) = tabs.split_at(boundary);

    let mut primary: Vec<MenuEntry> = Vec::with_capacity(head.len() + 1);
    let starts_with_home = head.first().is_some_and(|tab| tab.id == home_id);
    if !starts_with_home {
        primary.push(home_fallback);
    }
    primary.extend(head.iter().map(|tab| MenuEntry::from_tab(tab, course_format)));

    let overflow: Vec<MenuEntry> = tail
        .iter()
        .map(|tab| MenuEntry::from_tab(tab, course_format))
        .collect();

    debug!(
        tabs = tabs.len(),
        primary = primary.len(),
        overflow = overflow.len(),
        home_added = !starts_with_home,
        "partitioned secondary navigation"
    );

    MenuSplit { primary, overflow }
}

/// The synthesized course home tab pointing at the course landing page.
pub fn course_home_entry(course: &CourseInfo, site: &SiteInfo, label: &str) -> MenuEntry {
    let id = course.id.to_string();
    MenuEntry {
        id: COURSE_HOME_ID.to_string(),
        name: label.to_string(),
        url: site.link("course/view.php", &[("id", id.as_str())]),
        format: course.format.clone(),
        icon: icon_for(COURSE_HOME_ID).to_string(),
    }
}

/// Build the course menu bar from the course's secondary navigation.
pub fn build_secondary_menu(
    tabs: &[TabDescriptor],
    course: &CourseInfo,
    site: &SiteInfo,
    strings: &ThemeStrings,
    split_index: usize,
) -> MenuSplit {
    let home = course_home_entry(course, site, &strings.course);
    partition(tabs, split_index, COURSE_HOME_ID, home, &course.format)
}
