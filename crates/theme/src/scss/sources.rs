//! Preset selection and theme SCSS files.

use tracing::{debug, warn};

use crate::config::ThemeSettings;
use crate::error::ThemeResult;
use crate::host::AssetSource;

/// Directory of the base theme's bundled presets, relative to the install root.
pub const BASE_PRESET_DIR: &str = "theme/boost/scss/preset";

/// Theme SCSS appended after the preset.
pub const THEME_MAIN_SCSS: &str = "theme/trellis/scss/default.scss";

/// Theme variables placed before the preset.
pub const THEME_VARIABLES_SCSS: &str = "theme/trellis/scss/trellis/_variables.scss";

/// Stylesheet served when SCSS compilation is unavailable.
pub const PRECOMPILED_CSS: &str = "theme/trellis/style/moodle.css";

const BUNDLED_PRESETS: &[&str] = &["default.scss", "plain.scss"];

/// Resolve the configured preset's content.
///
/// Bundled presets come from the base theme; any other name is looked up among
/// uploaded presets. Unknown or missing presets fall back to the default.
async fn preset_content(settings: &ThemeSettings, assets: &dyn AssetSource) -> ThemeResult<String> {
    let filename = settings.preset.as_deref().filter(|name| !name.is_empty());

    if let Some(name) = filename {
        if BUNDLED_PRESETS.contains(&name) {
            return Ok(assets.read_asset(&format!("{BASE_PRESET_DIR}/{name}")).await?);
        }
        if let Some(content) = assets.stored_preset(name).await? {
            debug!(preset = %name, "using uploaded preset");
            return Ok(content);
        }
        warn!(preset = %name, "configured preset not found, using default");
    }

    Ok(assets
        .read_asset(&format!("{BASE_PRESET_DIR}/default.scss"))
        .await?)
}

/// Main SCSS: theme variables, the preset, then the theme's own rules.
pub async fn main_scss(settings: &ThemeSettings, assets: &dyn AssetSource) -> ThemeResult<String> {
    let preset = preset_content(settings, assets).await?;
    let theme = assets.read_asset(THEME_MAIN_SCSS).await?;
    let vars = assets.read_asset(THEME_VARIABLES_SCSS).await?;

    Ok(format!("\n{}", [vars, preset, theme].join("\n")))
}

/// SCSS appended last: the administrator's raw SCSS and the login background.
pub fn extra_scss(settings: &ThemeSettings, login_bg_url: Option<&str>) -> String {
    let mut content = String::new();

    if let Some(url) = login_bg_url.filter(|u| !u.is_empty()) {
        content.push_str("body.pagelayout-login #page { ");
        content.push_str(&format!(
            "background-image: url('{url}'); background-size: cover;"
        ));
        content.push_str(" }");
    }

    if settings.scss.is_empty() {
        content
    } else {
        format!("{} {content}", settings.scss)
    }
}

/// The theme's precompiled stylesheet.
pub async fn precompiled_css(assets: &dyn AssetSource) -> ThemeResult<String> {
    Ok(assets.read_asset(PRECOMPILED_CSS).await?)
}
