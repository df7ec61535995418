//! Theme settings and preview configuration.
//!
//! `ThemeSettings` mirrors the administrator-facing theme options. The host
//! usually hands them over already deserialized; the preview CLI loads them
//! from a TOML or YAML file.

use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::{ThemeError, ThemeResult};
use crate::host::FsAssets;

/// Number of secondary-navigation tabs shown before the "more" menu.
pub const DEFAULT_PRIMARY_MENU_SIZE: usize = 5;

/// Brightness delta used for the darker `-2` shade variables.
pub const DEFAULT_SHADE_PERCENT: f64 = -10.0;

/// Administrator-configured theme options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSettings {
    /// Main brand color (hex or `rgb()`).
    pub brand_color: String,
    /// Background color of the course secondary menu.
    pub secondary_menu_color: String,
    /// Percentage applied to derive the darker shade variables.
    pub shade_percent: f64,
    /// Raw SCSS injected before the preset.
    pub scss_pre: String,
    /// Raw SCSS appended after everything else.
    pub scss: String,
    /// Preset file name (`default.scss`, `plain.scss`, or an uploaded preset).
    pub preset: Option<String>,
    /// Whether the course index drawer is offered at all.
    pub enable_course_index: bool,
    /// Tabs shown in the course menu before overflowing into "more".
    pub primary_menu_size: usize,
    /// When set, in-course pages outside this path redirect into it.
    pub portal_path: Option<String>,
    pub footer: FooterSettings,
    pub strings: ThemeStrings,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            brand_color: "#0f47ad".to_string(),
            secondary_menu_color: "#0f47ad".to_string(),
            shade_percent: DEFAULT_SHADE_PERCENT,
            scss_pre: String::new(),
            scss: String::new(),
            preset: None,
            enable_course_index: true,
            primary_menu_size: DEFAULT_PRIMARY_MENU_SIZE,
            portal_path: None,
            footer: FooterSettings::default(),
            strings: ThemeStrings::default(),
        }
    }
}

impl ThemeSettings {
    /// Parse settings from TOML text.
    pub fn from_toml_str(text: &str) -> ThemeResult<Self> {
        toml::from_str(text).map_err(|e| ThemeError::Settings(e.to_string()))
    }

    /// Parse settings from YAML text.
    pub fn from_yaml_str(text: &str) -> ThemeResult<Self> {
        serde_yml::from_str(text).map_err(|e| ThemeError::Settings(e.to_string()))
    }

    /// Load settings from a file, choosing the format by extension.
    ///
    /// `.yml`/`.yaml` files are read as YAML, everything else as TOML.
    pub fn from_path(path: &Path) -> ThemeResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ThemeError::SettingsIo {
            path: path.display().to_string(),
            source,
        })?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("yml" | "yaml") => Self::from_yaml_str(&text),
            _ => Self::from_toml_str(&text),
        }
    }

    /// Primary menu size, never below one so the home entry always fits.
    pub fn primary_menu_size(&self) -> usize {
        self.primary_menu_size.max(1)
    }
}

/// Footer contact and social links.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterSettings {
    pub website: String,
    pub mobile: String,
    pub mail: String,
    pub facebook: String,
    pub twitter: String,
    pub linkedin: String,
    pub youtube: String,
    pub instagram: String,
    pub whatsapp: String,
    pub telegram: String,
    pub get_in_touch: String,
}

impl FooterSettings {
    /// Template values for the footer partial, merged into every layout.
    pub fn context(&self) -> BTreeMap<String, serde_json::Value> {
        let mut ctx = BTreeMap::new();
        let fields = [
            ("website", &self.website),
            ("mobile", &self.mobile),
            ("mail", &self.mail),
            ("facebook", &self.facebook),
            ("twitter", &self.twitter),
            ("linkedin", &self.linkedin),
            ("youtube", &self.youtube),
            ("instagram", &self.instagram),
            ("whatsapp", &self.whatsapp),
            ("telegram", &self.telegram),
            ("getintouchcontent", &self.get_in_touch),
        ];
        for (key, value) in fields {
            ctx.insert(key.to_string(), non_empty(value));
        }

        let has_contacts = [&self.website, &self.mobile, &self.mail]
            .iter()
            .any(|v| !v.is_empty());
        let has_social = [
            &self.facebook,
            &self.twitter,
            &self.linkedin,
            &self.youtube,
            &self.instagram,
            &self.whatsapp,
            &self.telegram,
        ]
        .iter()
        .any(|v| !v.is_empty());

        ctx.insert("hasfootercontacts".to_string(), has_contacts.into());
        ctx.insert("hassocialnetworks".to_string(), has_social.into());
        ctx
    }
}

fn non_empty(value: &str) -> serde_json::Value {
    if value.is_empty() {
        serde_json::Value::Bool(false)
    } else {
        serde_json::Value::String(value.to_string())
    }
}

/// Localized labels the theme needs but does not own.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeStrings {
    /// Label of the synthesized course home tab.
    pub course: String,
    /// Label of the collapsed resources entry in the module index.
    pub resources: String,
    pub send_message: String,
    pub add_contact: String,
    pub remove_contact: String,
}

impl Default for ThemeStrings {
    fn default() -> Self {
        Self {
            course: "Course".to_string(),
            resources: "Resources".to_string(),
            send_message: "Message".to_string(),
            add_contact: "Add to contacts".to_string(),
            remove_contact: "Remove from contacts".to_string(),
        }
    }
}

/// Preview CLI configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Site root URL used to build links (default: http://localhost).
    pub wwwroot: String,

    /// Optional theme settings file (TRELLIS_SETTINGS).
    pub settings_path: Option<PathBuf>,

    /// Host install root holding theme assets (default: current directory).
    pub dirroot: PathBuf,

    /// Directory of admin-uploaded presets (TRELLIS_PRESETS_DIR).
    pub presets_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let wwwroot = env::var("TRELLIS_WWWROOT").unwrap_or_else(|_| "http://localhost".to_string());
        url::Url::parse(&wwwroot).context("TRELLIS_WWWROOT must be an absolute URL")?;

        let settings_path = env::var("TRELLIS_SETTINGS").ok().map(PathBuf::from);

        let dirroot = env::var("TRELLIS_DIRROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."));

        let presets_dir = env::var("TRELLIS_PRESETS_DIR").ok().map(PathBuf::from);

        Ok(Self {
            wwwroot,
            settings_path,
            dirroot,
            presets_dir,
        })
    }

    /// Asset source over the install root and the uploaded presets directory.
    pub fn assets(&self) -> FsAssets {
        let assets = FsAssets::new(&self.dirroot);
        match &self.presets_dir {
            Some(dir) => assets.with_presets_dir(dir),
            None => assets,
        }
    }

    /// Theme settings from the configured file, or defaults.
    pub fn load_settings(&self) -> ThemeResult<ThemeSettings> {
        match &self.settings_path {
            Some(path) => ThemeSettings::from_path(path),
            None => Ok(ThemeSettings::default()),
        }
    }
}
