//! Theme color variables.
//!
//! Settings colors are published twice: as CSS custom properties on `:root`
//! so they can be swapped at runtime, and as declarations on a marker class
//! whose values Sass computes (`lighten()`, `rgba()`) at compile time.

use std::fmt::Write;

use tracing::debug;

use crate::color::adjust_brightness;
use crate::config::ThemeSettings;

/// Class whose declarations expose Sass-computed values.
pub const EXPOSE_CLASS: &str = "sass-var-expose";

/// Ordered variable name -> value pairs.
pub type ScssVars = Vec<(String, String)>;

/// Variables linked to CSS custom properties, in declaration order.
pub fn theme_vars(settings: &ThemeSettings) -> ScssVars {
    let brand = settings.brand_color.trim();
    let secondary = settings.secondary_menu_color.trim();
    let shade = settings.shade_percent;

    vec![
        ("primary".to_string(), brand.to_string()),
        ("brand-primary".to_string(), brand.to_string()),
        ("secondary-menu-color".to_string(), secondary.to_string()),
        ("brand-primary-2".to_string(), adjust_brightness(brand, shade)),
        (
            "secondary-menu-color-2".to_string(),
            adjust_brightness(secondary, shade),
        ),
    ]
}

/// Values Sass derives from the brand color. Empty when there is no brand color.
fn derived_vars(brand: &str) -> ScssVars {
    if brand.is_empty() {
        return Vec::new();
    }
    vec![
        ("primary-2".to_string(), format!("lighten({brand}, 50%)")),
        ("primary-3".to_string(), format!("lighten({brand}, 40%)")),
        ("primary-4".to_string(), format!("rgba({brand}, .75)")),
    ]
}

/// `:root` block declaring `--name: value!important;` for each non-empty var.
pub fn link_vars_block(vars: &[(String, String)]) -> String {
    let mut scss = String::from(":root {\n");
    for (key, value) in vars.iter().filter(|(_, v)| !v.is_empty()) {
        // SAFETY: write!() to String is infallible
        #[allow(clippy::unwrap_used)]
        writeln!(scss, "--{key}: {value}!important;").unwrap();
    }
    scss.push_str("}\n");
    scss
}

/// `.class_name` block declaring `name: value;` for each non-empty var.
pub fn expose_vars_block(class_name: &str, vars: &[(String, String)]) -> String {
    let mut scss = format!(".{class_name} {{\n");
    for (key, value) in vars.iter().filter(|(_, v)| !v.is_empty()) {
        // SAFETY: write!() to String is infallible
        #[allow(clippy::unwrap_used)]
        writeln!(scss, "{key}: {value};").unwrap();
    }
    scss.push_str("}\n");
    scss
}

/// SCSS prepended before the preset: linked vars, exposed vars, then the
/// administrator's raw pre-SCSS.
pub fn pre_scss(settings: &ThemeSettings) -> String {
    let linked = theme_vars(settings);
    let mut exposed = linked.clone();
    exposed.extend(derived_vars(settings.brand_color.trim()));

    let mut scss = link_vars_block(&linked);
    scss.push_str(&expose_vars_block(EXPOSE_CLASS, &exposed));
    if !settings.scss_pre.is_empty() {
        scss.push_str(&settings.scss_pre);
    }

    debug!(
        linked = linked.len(),
        exposed = exposed.len(),
        bytes = scss.len(),
        "built pre-scss"
    );
    scss
}
