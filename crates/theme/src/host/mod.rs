//! Host framework collaborators.
//!
//! The theme never reaches for ambient page, course, or user state. Everything
//! it needs from the learning platform arrives either as plain input structs
//! (`SiteInfo`, `CourseInfo`) or through the traits below, which the host
//! implements on top of its own database, file storage, and user services.

mod fixture;
mod fs;

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{ThemeError, ThemeResult};

pub use fixture::StaticHost;
pub use fs::FsAssets;

/// Id of the front-page course every site has.
pub const SITE_COURSE_ID: i64 = 1;

/// Site-wide values needed to build links.
#[derive(Debug, Clone)]
pub struct SiteInfo {
    wwwroot: Url,
    /// Short site name shown in the navbar.
    pub shortname: String,
}

impl SiteInfo {
    /// Validate the site root URL.
    pub fn new(wwwroot: &str, shortname: impl Into<String>) -> ThemeResult<Self> {
        let wwwroot = Url::parse(wwwroot)?;
        if wwwroot.cannot_be_a_base() {
            return Err(ThemeError::Settings(format!(
                "site url cannot carry paths: {wwwroot}"
            )));
        }
        Ok(Self {
            wwwroot,
            shortname: shortname.into(),
        })
    }

    /// Site root URL as configured.
    pub fn wwwroot(&self) -> &Url {
        &self.wwwroot
    }

    /// Build an absolute link below the site root.
    ///
    /// `path` is relative to the root (`course/view.php`); a trailing slash is
    /// preserved. Query pairs are form-encoded and joined with a plain `&`.
    pub fn link(&self, path: &str, query: &[(&str, &str)]) -> String {
        let mut url = self.wwwroot.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(path.trim_start_matches('/').split('/'));
        }
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        url.to_string()
    }
}

/// The course a page belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseInfo {
    pub id: i64,
    /// Course format plugin name (`topics`, `weeks`, `menutab`, ...).
    pub format: String,
    #[serde(default = "default_true")]
    pub visible: bool,
    /// Context id of the course, used for role lookups.
    #[serde(default)]
    pub context_id: i64,
}

fn default_true() -> bool {
    true
}

impl CourseInfo {
    /// Whether this is the site front page rather than a real course.
    pub fn is_site_course(&self) -> bool {
        self.id == SITE_COURSE_ID
    }
}

/// A user record as the host exposes it to the theme.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub firstname: String,
    pub lastname: String,
    #[serde(default)]
    pub email: String,
    /// Email visibility preference; zero hides the address from others.
    #[serde(default)]
    pub mail_display: i32,
    /// Profile description, may contain `@@PLUGINFILE@@` placeholders.
    #[serde(default)]
    pub description: String,
    /// The user's own context, where profile files are stored.
    #[serde(default)]
    pub context_id: i64,
}

impl UserRecord {
    pub fn fullname(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
            .trim()
            .to_string()
    }
}

/// Whether a course module type is a plain resource or an activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleArchetype {
    Resource,
    #[serde(other)]
    Other,
}

/// One course module instance from the course's module info.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseModule {
    /// Module type name (`forum`, `quiz`, `page`, ...).
    pub modname: String,
    /// Localized plural display name of the module type.
    pub modplural: String,
    #[serde(default = "default_true")]
    pub user_visible: bool,
    #[serde(default = "default_true")]
    pub has_view: bool,
    #[serde(default = "default_archetype")]
    pub archetype: ModuleArchetype,
}

fn default_archetype() -> ModuleArchetype {
    ModuleArchetype::Other
}

/// User and role lookups.
#[async_trait]
pub trait CourseDirectory: Send + Sync {
    /// Resolve a role id from its short name.
    async fn role_id(&self, shortname: &str) -> Result<Option<i64>>;

    /// Users holding `role_id` in the given context.
    async fn role_users(&self, role_id: i64, context_id: i64) -> Result<Vec<UserRecord>>;

    /// Fetch a single user.
    async fn user(&self, user_id: i64) -> Result<Option<UserRecord>>;

    /// Profile picture URL for a user at the given pixel size.
    async fn picture_url(&self, user_id: i64, size: u32) -> Result<String>;
}

/// Course module information.
#[async_trait]
pub trait CourseCatalog: Send + Sync {
    async fn course_modules(&self, course_id: i64) -> Result<Vec<CourseModule>>;
}

/// Theme files shipped with the platform plus presets uploaded by admins.
#[async_trait]
pub trait AssetSource: Send + Sync {
    /// Read a file relative to the platform install root.
    async fn read_asset(&self, relative_path: &str) -> Result<String>;

    /// Content of an uploaded preset, if one with that name exists.
    async fn stored_preset(&self, filename: &str) -> Result<Option<String>>;
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn link_joins_below_root() {
        let site = SiteInfo::new("http://example.org", "ex").unwrap();
        assert_eq!(
            site.link("course/view.php", &[("id", "7")]),
            "http://example.org/course/view.php?id=7"
        );
    }

    #[test]
    fn link_keeps_subdirectory_install() {
        let site = SiteInfo::new("https://example.org/lms/", "ex").unwrap();
        assert_eq!(
            site.link("/mod/quiz/index.php", &[("id", "3")]),
            "https://example.org/lms/mod/quiz/index.php?id=3"
        );
    }

    #[test]
    fn link_preserves_trailing_slash_and_joins_query_plainly() {
        let site = SiteInfo::new("http://example.org", "ex").unwrap();
        assert_eq!(site.link("local/portal/", &[]), "http://example.org/local/portal/");
        assert_eq!(
            site.link("user/edit.php", &[("id", "2"), ("course", "1")]),
            "http://example.org/user/edit.php?id=2&course=1"
        );
    }

    #[test]
    fn rejects_relative_site_url() {
        assert!(SiteInfo::new("/relative", "ex").is_err());
        assert!(SiteInfo::new("mailto:someone@example.org", "ex").is_err());
    }

    #[test]
    fn fullname_trims_missing_parts() {
        let user = UserRecord {
            id: 1,
            firstname: "Ada".to_string(),
            lastname: String::new(),
            email: String::new(),
            mail_display: 0,
            description: String::new(),
            context_id: 0,
        };
        assert_eq!(user.fullname(), "Ada");
    }
}
