//! Trellis theme preview tool
//!
//! Runs the theme's helpers outside the host so designers can inspect their
//! output.
//!
//! Usage:
//!   trellis color "#0f47ad" -10
//!   trellis menu --tabs tabs.json --course-id 7 --format topics
//!   trellis scss pre
//!   trellis layout incourse --fixture page.json

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Deserialize;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use trellis_theme::config::Config;
use trellis_theme::host::{CourseInfo, SiteInfo, StaticHost};
use trellis_theme::layout::{self, IncoursePage, LayoutContext, LayoutOutcome, ProfilePage};
use trellis_theme::menu::{TabDescriptor, build_secondary_menu};
use trellis_theme::{ThemeSettings, adjust_brightness, scss};

/// Preview theme output.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Adjust a color's brightness by a percentage.
    Color {
        color: String,
        #[arg(allow_hyphen_values = true)]
        percent: f64,
    },
    /// Split a secondary navigation tab list into course menus.
    Menu {
        /// JSON file holding an array of tabs.
        #[arg(long)]
        tabs: PathBuf,
        #[arg(long, default_value = "2")]
        course_id: i64,
        #[arg(long, default_value = "topics")]
        format: String,
    },
    /// Print generated SCSS.
    Scss {
        #[arg(value_enum)]
        part: ScssPart,
        /// Login background image URL for the extra part.
        #[arg(long)]
        login_bg: Option<String>,
    },
    /// Build a layout context from a fixture file.
    Layout {
        #[arg(value_enum)]
        kind: LayoutKind,
        #[arg(long)]
        fixture: PathBuf,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ScssPart {
    Pre,
    Main,
    Extra,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum LayoutKind {
    Incourse,
    Mypublic,
}

/// Layout fixture: host data plus the page state for one layout.
#[derive(Debug, Deserialize)]
struct LayoutFixture {
    #[serde(default)]
    host: StaticHost,
    #[serde(default)]
    site_name: String,
    incourse: Option<IncoursePage>,
    profile: Option<ProfilePage>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_tracing();

    let args = Args::parse();
    let config = Config::from_env().context("failed to load configuration")?;
    let settings = config.load_settings().context("failed to load theme settings")?;

    match args.command {
        Command::Color { color, percent } => {
            println!("{}", adjust_brightness(&color, percent));
        }
        Command::Menu {
            tabs,
            course_id,
            format,
        } => {
            let json = std::fs::read_to_string(&tabs)
                .with_context(|| format!("failed to read {}", tabs.display()))?;
            let tabs: Vec<TabDescriptor> = serde_json::from_str(&json).context("invalid tab list")?;
            let site = SiteInfo::new(&config.wwwroot, "")?;
            let course = CourseInfo {
                id: course_id,
                format,
                visible: true,
                context_id: 0,
            };
            let menus = build_secondary_menu(
                &tabs,
                &course,
                &site,
                &settings.strings,
                settings.primary_menu_size(),
            );
            println!("{}", serde_json::to_string_pretty(&menus)?);
        }
        Command::Scss { part, login_bg } => {
            let output = match part {
                ScssPart::Pre => scss::pre_scss(&settings),
                ScssPart::Main => {
                    scss::main_scss(&settings, &config.assets()).await?
                }
                ScssPart::Extra => scss::extra_scss(&settings, login_bg.as_deref()),
            };
            println!("{output}");
        }
        Command::Layout { kind, fixture } => {
            run_layout(kind, &fixture, &config, &settings).await?;
        }
    }

    Ok(())
}

async fn run_layout(
    kind: LayoutKind,
    fixture: &Path,
    config: &Config,
    settings: &ThemeSettings,
) -> Result<()> {
    let json = std::fs::read_to_string(fixture)
        .with_context(|| format!("failed to read {}", fixture.display()))?;
    let fixture: LayoutFixture = serde_json::from_str(&json).context("invalid layout fixture")?;
    let site = SiteInfo::new(&config.wwwroot, fixture.site_name)?;

    match kind {
        LayoutKind::Incourse => {
            let page = fixture.incourse.context("fixture has no incourse page")?;
            match layout::incourse::build(page, &site, settings, &fixture.host).await? {
                LayoutOutcome::Render(ctx) => {
                    info!(template = layout::IncourseContext::TEMPLATE, "layout rendered");
                    println!("{}", serde_json::to_string_pretty(&ctx.to_tera_context()?.into_json())?);
                }
                LayoutOutcome::Redirect(url) => println!("redirect: {url}"),
            }
        }
        LayoutKind::Mypublic => {
            let page = fixture.profile.context("fixture has no profile page")?;
            let ctx = layout::mypublic::build(page, &site, settings, &fixture.host).await?;
            info!(template = layout::MypublicContext::TEMPLATE, "layout rendered");
            println!("{}", serde_json::to_string_pretty(&ctx.to_tera_context()?.into_json())?);
        }
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
