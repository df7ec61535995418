//! SCSS assembly for the theme stylesheet.
//!
//! The host's SCSS compiler asks the theme for three pieces: variables to
//! prepend, the main content (base preset plus theme files), and extra SCSS
//! appended last. The theme also ships a precompiled stylesheet for when
//! compilation is unavailable.

mod sources;
mod vars;

pub use sources::{
    BASE_PRESET_DIR, PRECOMPILED_CSS, THEME_MAIN_SCSS, THEME_VARIABLES_SCSS, extra_scss, main_scss,
    precompiled_css,
};
pub use vars::{EXPOSE_CLASS, ScssVars, expose_vars_block, link_vars_block, pre_scss, theme_vars};
