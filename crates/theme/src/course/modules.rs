//! Per-course index of activity types.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::host::{CourseModule, ModuleArchetype, SiteInfo};

/// Key under which all resource-type modules are collapsed.
pub const RESOURCES_KEY: &str = "resources";

/// Modules without a view page that are still listed (shown inline on the course page).
const INLINE_LISTED: &[&str] = &["folder"];

/// Link to the index page of one activity type in a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleLink {
    /// Module type name, or `resources`.
    pub name: String,
    /// Display name (plural).
    pub fullname: String,
    pub courseid: i64,
    pub url: String,
}

/// One link per activity type the current user can see, sorted by display name.
///
/// Hidden modules and modules without a view page are skipped. All
/// resource-archetype modules share a single `resources` entry.
pub fn course_module_index(
    course_id: i64,
    modules: &[CourseModule],
    site: &SiteInfo,
    resources_label: &str,
) -> Vec<ModuleLink> {
    let mut names: Vec<(String, String)> = Vec::new();

    for cm in modules {
        let listable = cm.has_view || INLINE_LISTED.contains(&cm.modname.as_str());
        if !cm.user_visible || !listable {
            continue;
        }

        let (key, label) = match cm.archetype {
            ModuleArchetype::Resource => (RESOURCES_KEY, resources_label),
            ModuleArchetype::Other => (cm.modname.as_str(), cm.modplural.as_str()),
        };
        if names.iter().any(|(name, _)| name == key) {
            continue;
        }
        names.push((key.to_string(), label.to_string()));
    }

    names.sort_by_cached_key(|(_, label)| label.to_lowercase());

    let id = course_id.to_string();
    let links: Vec<ModuleLink> = names
        .into_iter()
        .map(|(name, fullname)| {
            let url = if name == RESOURCES_KEY {
                site.link("course/resources.php", &[("id", id.as_str())])
            } else {
                site.link(&format!("mod/{name}/index.php"), &[("id", id.as_str())])
            };
            ModuleLink {
                name,
                fullname,
                courseid: course_id,
                url,
            }
        })
        .collect();

    debug!(course_id, modules = modules.len(), links = links.len(), "built module index");
    links
}
