//! Drawer-based layout for pages inside a course.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{HostFragments, LayoutContext, LayoutOutcome};
use crate::config::ThemeSettings;
use crate::course::{ModuleLink, Teacher, course_module_index, teacher_roster};
use crate::error::ThemeResult;
use crate::host::{CourseCatalog, CourseDirectory, CourseInfo, SiteInfo};
use crate::menu::{MenuEntry, TabDescriptor, build_secondary_menu};

/// Course format that renders its own tab bar.
pub const MENUTAB_FORMAT: &str = "menutab";

/// Marker the host's block renderer puts on every real block.
const BLOCK_MARKER: &str = "data-block=";

/// Stored drawer preferences. `None` means the user never toggled it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawerPreferences {
    pub index_open: Option<bool>,
    pub block_open: Option<bool>,
}

/// What the current user may do in the course.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CourseCapabilities {
    pub update_course: bool,
    pub edit_grades: bool,
    pub view_reports: bool,
}

/// Page state for an in-course page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncoursePage {
    pub course: CourseInfo,
    /// Request path and query as received.
    #[serde(default)]
    pub request_uri: String,
    #[serde(default)]
    pub logged_in: bool,
    #[serde(default)]
    pub preferences: DrawerPreferences,
    /// Running under the acceptance-test harness.
    #[serde(default)]
    pub acceptance_test_site: bool,
    /// Rendered side-pre block region.
    #[serde(default)]
    pub blocks_html: String,
    /// Rendered "add a block" button; empty outside editing mode.
    #[serde(default)]
    pub add_block_button: String,
    /// Rendered course index; empty when the course has none.
    #[serde(default)]
    pub course_index: String,
    #[serde(default)]
    pub force_block_drawer_open: bool,
    #[serde(default)]
    pub capabilities: CourseCapabilities,
    /// Secondary navigation tabs; `None` when the page has no secondary navigation.
    #[serde(default)]
    pub secondary_tabs: Option<Vec<TabDescriptor>>,
    #[serde(default)]
    pub fragments: HostFragments,
}

/// Template context for `trellis/incourse`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IncourseContext {
    pub sitename: String,
    pub sidepreblocks: String,
    pub hasblocks: bool,
    /// Extra classes for the body element.
    pub bodyclasses: Vec<String>,
    pub courseindexopen: bool,
    pub blockdraweropen: bool,
    pub courseindex: String,
    pub forceblockdraweropen: bool,
    pub addblockbutton: String,
    #[serde(flatten)]
    pub fragments: HostFragments,
    pub hasregionmainsettingsmenu: bool,
    pub edit_settings: bool,
    pub edit_grades: bool,
    pub view_reports: bool,
    pub visibility: bool,
    pub courseid: i64,
    pub is_menutab_format: bool,
    pub is_site_course: bool,
    pub teachers: Vec<Teacher>,
    pub course_mods: Vec<ModuleLink>,
    pub main_menu: Vec<MenuEntry>,
    pub more_menu: Vec<MenuEntry>,
    pub has_more_menu: bool,
    #[serde(flatten)]
    pub footer: BTreeMap<String, serde_json::Value>,
}

impl LayoutContext for IncourseContext {
    const TEMPLATE: &'static str = "trellis/incourse";
}

/// Where in-course pages are sent when they are outside the portal.
fn portal_redirect(page: &IncoursePage, settings: &ThemeSettings, site: &SiteInfo) -> Option<String> {
    let portal = settings
        .portal_path
        .as_deref()
        .map(|p| p.trim_matches('/'))
        .filter(|p| !p.is_empty())?;
    if page.request_uri.contains(portal) {
        return None;
    }
    Some(site.link(&format!("{portal}/"), &[]))
}

/// Assemble the in-course layout.
pub async fn build<H>(
    page: IncoursePage,
    site: &SiteInfo,
    settings: &ThemeSettings,
    host: &H,
) -> ThemeResult<LayoutOutcome<IncourseContext>>
where
    H: CourseDirectory + CourseCatalog + ?Sized,
{
    if let Some(target) = portal_redirect(&page, settings, site) {
        info!(uri = %page.request_uri, target = %target, "redirecting into portal");
        return Ok(LayoutOutcome::Redirect(target));
    }

    let (mut course_index_open, mut block_drawer_open) = if page.logged_in {
        (
            page.preferences.index_open.unwrap_or(true),
            page.preferences.block_open.unwrap_or(false),
        )
    } else {
        (false, false)
    };
    if page.acceptance_test_site {
        block_drawer_open = true;
    }

    let has_blocks = page.blocks_html.contains(BLOCK_MARKER) || !page.add_block_button.is_empty();
    if !has_blocks {
        block_drawer_open = false;
    }

    let course_index = if settings.enable_course_index {
        page.course_index
    } else {
        String::new()
    };
    if course_index.is_empty() {
        course_index_open = false;
    }

    let mut body_classes = vec!["uses-drawers".to_string()];
    if course_index_open {
        body_classes.push("drawer-open-index".to_string());
    }

    let tabs = page.secondary_tabs.unwrap_or_default();
    let menus = if tabs.is_empty() {
        Default::default()
    } else {
        body_classes.push("has-secondarynavigation".to_string());
        build_secondary_menu(
            &tabs,
            &page.course,
            site,
            &settings.strings,
            settings.primary_menu_size(),
        )
    };
    let has_more_menu = menus.has_more();

    let teachers = teacher_roster(host, page.course.context_id).await?;
    let modules = host.course_modules(page.course.id).await?;
    let course_mods = course_module_index(page.course.id, &modules, site, &settings.strings.resources);

    debug!(
        course_id = page.course.id,
        blocks = has_blocks,
        main_menu = menus.primary.len(),
        more_menu = menus.overflow.len(),
        "built incourse layout"
    );

    let fragments = page.fragments;
    Ok(LayoutOutcome::Render(IncourseContext {
        sitename: site.shortname.clone(),
        sidepreblocks: page.blocks_html,
        hasblocks: has_blocks,
        bodyclasses: body_classes,
        courseindexopen: course_index_open,
        blockdraweropen: block_drawer_open,
        courseindex: course_index,
        forceblockdraweropen: page.force_block_drawer_open,
        addblockbutton: page.add_block_button,
        hasregionmainsettingsmenu: fragments.has_region_main_settings_menu(),
        fragments,
        edit_settings: page.capabilities.update_course,
        edit_grades: page.capabilities.edit_grades,
        view_reports: page.capabilities.view_reports,
        visibility: page.course.visible,
        courseid: page.course.id,
        is_menutab_format: page.course.format == MENUTAB_FORMAT,
        is_site_course: page.course.is_site_course(),
        teachers,
        course_mods,
        main_menu: menus.primary,
        more_menu: menus.overflow,
        has_more_menu,
        footer: settings.footer.context(),
    }))
}
