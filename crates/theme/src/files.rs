//! Routing for files attached to theme settings.
//!
//! Administrators upload logos, favicons, slider images and marketing icons
//! through the theme settings page. The host's file endpoint asks the theme
//! whether a request addresses one of those areas; serving the bytes stays
//! with the host.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[allow(clippy::expect_used)]
static SLIDER_AREA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^sliderimage[1-9][0-9]?$").expect("slider pattern is valid"));

/// File areas that proxies and browsers may cache publicly by default.
const PUBLIC_AREAS: &[&str] = &["logo", "loginbgimg", "favicon"];

const MARKETING_ICON_AREAS: &[&str] = &[
    "marketing1icon",
    "marketing2icon",
    "marketing3icon",
    "marketing4icon",
];

/// Serving option key for cache headers.
pub const CACHEABILITY: &str = "cacheability";

/// Context level a file request was made in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContextLevel {
    System,
    User,
    Category,
    Course,
    Module,
    Block,
}

/// A request for a theme setting file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileRequest {
    pub context_level: ContextLevel,
    pub file_area: String,
    /// Remaining path segments (item id, path, file name).
    #[serde(default)]
    pub args: Vec<String>,
    #[serde(default)]
    pub force_download: bool,
    /// Serving options such as `cacheability`.
    #[serde(default)]
    pub options: BTreeMap<String, String>,
}

/// What the host should do with a file request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileDecision {
    /// Serve the setting file with these parameters.
    Serve {
        file_area: String,
        args: Vec<String>,
        force_download: bool,
        options: BTreeMap<String, String>,
    },
    NotFound,
}

/// Decide whether a request addresses a theme setting file.
pub fn route_file_request(request: FileRequest) -> FileDecision {
    if request.context_level != ContextLevel::System {
        debug!(area = %request.file_area, "theme file outside system context");
        return FileDecision::NotFound;
    }

    let area = request.file_area.as_str();
    let mut options = request.options;

    if PUBLIC_AREAS.contains(&area) {
        options
            .entry(CACHEABILITY.to_string())
            .or_insert_with(|| "public".to_string());
    } else if !SLIDER_AREA.is_match(area) && !MARKETING_ICON_AREAS.contains(&area) {
        debug!(area = %area, "unknown theme file area");
        return FileDecision::NotFound;
    }

    FileDecision::Serve {
        file_area: request.file_area,
        args: request.args,
        force_download: request.force_download,
        options,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn request(level: ContextLevel, area: &str) -> FileRequest {
        FileRequest {
            context_level: level,
            file_area: area.to_string(),
            args: vec!["0".to_string(), "logo.png".to_string()],
            force_download: false,
            options: BTreeMap::new(),
        }
    }

    fn served_options(decision: FileDecision) -> BTreeMap<String, String> {
        match decision {
            FileDecision::Serve { options, .. } => options,
            FileDecision::NotFound => panic!("expected file to be served"),
        }
    }

    #[test]
    fn public_areas_default_to_public_cacheability() {
        for area in ["logo", "loginbgimg", "favicon"] {
            let options = served_options(route_file_request(request(ContextLevel::System, area)));
            assert_eq!(options.get(CACHEABILITY).map(String::as_str), Some("public"));
        }
    }

    #[test]
    fn explicit_cacheability_is_kept() {
        let mut req = request(ContextLevel::System, "logo");
        req.options.insert(CACHEABILITY.to_string(), "private".to_string());
        let options = served_options(route_file_request(req));
        assert_eq!(options.get(CACHEABILITY).map(String::as_str), Some("private"));
    }

    #[test]
    fn slider_and_marketing_areas_are_served_unchanged() {
        for area in ["sliderimage1", "sliderimage12", "sliderimage99", "marketing3icon"] {
            let decision = route_file_request(request(ContextLevel::System, area));
            match decision {
                FileDecision::Serve { file_area, args, options, .. } => {
                    assert_eq!(file_area, area);
                    assert_eq!(args, ["0", "logo.png"]);
                    assert!(options.is_empty());
                }
                FileDecision::NotFound => panic!("{area} should be served"),
            }
        }
    }

    #[test]
    fn unknown_areas_are_not_found() {
        for area in ["sliderimage0", "sliderimage100", "sliderimage", "marketing5icon", "backgrounds"] {
            assert_eq!(
                route_file_request(request(ContextLevel::System, area)),
                FileDecision::NotFound,
                "{area}"
            );
        }
    }

    #[test]
    fn non_system_context_is_not_found() {
        assert_eq!(
            route_file_request(request(ContextLevel::Course, "logo")),
            FileDecision::NotFound
        );
    }
}
