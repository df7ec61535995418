//! Page layout contexts.
//!
//! Each layout gathers everything its template needs into one serializable
//! context. The host passes page state in explicitly and renders the result
//! with its own template engine; [`LayoutContext::to_tera_context`] hands the
//! context over in the form a Tera-based host expects.

pub mod incourse;
pub mod mypublic;

use serde::{Deserialize, Serialize};

use crate::error::ThemeResult;
use crate::host::SiteInfo;

pub use incourse::{CourseCapabilities, DrawerPreferences, IncourseContext, IncoursePage};
pub use mypublic::{MypublicContext, ProfileButton, ProfilePage};

/// Placeholder the host stores in rich text in place of its file URL prefix.
pub const PLUGINFILE_PLACEHOLDER: &str = "@@PLUGINFILE@@/";

/// Result of running a layout.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutOutcome<T> {
    /// Render the layout's template with this context.
    Render(T),
    /// Send the browser elsewhere instead.
    Redirect(String),
}

impl<T> LayoutOutcome<T> {
    /// The context, if the layout renders.
    pub fn into_context(self) -> Option<T> {
        match self {
            LayoutOutcome::Render(ctx) => Some(ctx),
            LayoutOutcome::Redirect(_) => None,
        }
    }
}

/// A template context produced by a layout.
pub trait LayoutContext: Serialize {
    /// Template the host should render with this context.
    const TEMPLATE: &'static str;

    /// Convert into a Tera context.
    fn to_tera_context(&self) -> ThemeResult<tera::Context> {
        Ok(tera::Context::from_serialize(self)?)
    }
}

/// Pre-rendered navigation pieces exported by the host's own navigation
/// renderers. The theme only places them in the context.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostFragments {
    pub primarymoremenu: serde_json::Value,
    pub mobileprimarynav: serde_json::Value,
    pub usermenu: serde_json::Value,
    pub langmenu: serde_json::Value,
    /// Exported secondary "more" menu; `null` when the page has none.
    pub secondarymoremenu: serde_json::Value,
    pub overflow: serde_json::Value,
    pub headercontent: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regionmainsettingsmenu: Option<String>,
}

impl HostFragments {
    fn has_region_main_settings_menu(&self) -> bool {
        self.regionmainsettingsmenu
            .as_deref()
            .is_some_and(|menu| !menu.is_empty())
    }
}

/// Replace the file placeholder in stored rich text with real file URLs.
///
/// URLs take the form `{wwwroot}/pluginfile.php/{context}/{component}/{area}/{item}/`;
/// the item segment is left out when `item_id` is `None`.
pub fn rewrite_pluginfile_urls(
    text: &str,
    site: &SiteInfo,
    context_id: i64,
    component: &str,
    file_area: &str,
    item_id: Option<i64>,
) -> String {
    if !text.contains(PLUGINFILE_PLACEHOLDER) {
        return text.to_string();
    }
    let mut path = format!("pluginfile.php/{context_id}/{component}/{file_area}/");
    if let Some(item) = item_id {
        path.push_str(&format!("{item}/"));
    }
    text.replace(PLUGINFILE_PLACEHOLDER, &site.link(&path, &[]))
}
