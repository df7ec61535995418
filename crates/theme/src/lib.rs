//! Trellis Theme Library
//!
//! Layout contexts, course navigation, and stylesheet variables for the
//! Trellis learning-platform theme. The host framework calls into this
//! library while rendering a page; the `trellis` binary previews the same
//! output from fixture files.

pub mod color;
pub mod config;
pub mod course;
pub mod error;
pub mod files;
pub mod host;
pub mod layout;
pub mod menu;
pub mod scss;

pub use color::adjust_brightness;
pub use config::ThemeSettings;
pub use error::{ThemeError, ThemeResult};
pub use menu::{MenuEntry, MenuSplit, TabDescriptor, partition};
