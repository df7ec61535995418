#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Layout context tests against a host fixture.

use serde::Deserialize;
use tera::Tera;

use trellis_theme::ThemeSettings;
use trellis_theme::config::FooterSettings;
use trellis_theme::host::{SiteInfo, StaticHost};
use trellis_theme::layout::{IncourseContext, IncoursePage, LayoutContext, LayoutOutcome, incourse};

#[derive(Deserialize)]
struct Fixture {
    site_name: String,
    host: StaticHost,
    incourse: IncoursePage,
}

fn fixture() -> Fixture {
    let json = std::fs::read_to_string(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/fixtures/incourse_layout.json"
    ))
    .unwrap();
    serde_json::from_str(&json).unwrap()
}

async fn build(settings: &ThemeSettings) -> IncourseContext {
    let fixture = fixture();
    let site = SiteInfo::new("https://campus.test", fixture.site_name).unwrap();
    match incourse::build(fixture.incourse, &site, settings, &fixture.host)
        .await
        .unwrap()
    {
        LayoutOutcome::Render(ctx) => ctx,
        LayoutOutcome::Redirect(url) => panic!("unexpected redirect to {url}"),
    }
}

#[tokio::test]
async fn test_incourse_context_from_fixture() {
    let ctx = build(&ThemeSettings::default()).await;

    assert_eq!(ctx.sitename, "Campus");
    assert_eq!(ctx.courseid, 70);
    assert!(ctx.hasblocks);
    assert!(ctx.blockdraweropen);
    assert!(!ctx.courseindexopen);
    assert_eq!(ctx.bodyclasses, ["uses-drawers", "has-secondarynavigation"]);
    assert!(ctx.edit_settings);
    assert!(!ctx.edit_grades);
    assert!(ctx.view_reports);
    assert!(!ctx.hasregionmainsettingsmenu);

    let main: Vec<&str> = ctx.main_menu.iter().map(|e| e.id.as_str()).collect();
    let more: Vec<&str> = ctx.more_menu.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(main, ["coursehome", "editsettings", "participants", "grades", "coursereports"]);
    assert_eq!(more, ["backup", "competencies"]);
    assert!(ctx.has_more_menu);

    assert_eq!(ctx.teachers.len(), 2);
    assert_eq!(ctx.teachers[0].fullname, "Maria Montessori");
    assert_eq!(ctx.teachers[0].email.as_deref(), Some("maria@campus.test"));
    assert_eq!(ctx.teachers[1].email, None);

    let mods: Vec<&str> = ctx.course_mods.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(mods, ["assign", "forum", "resources"]);
    assert_eq!(ctx.course_mods[2].url, "https://campus.test/course/resources.php?id=70");
}

#[tokio::test]
async fn test_incourse_context_renders_with_tera() {
    let settings = ThemeSettings {
        footer: FooterSettings {
            website: "https://campus.test/about".to_string(),
            ..FooterSettings::default()
        },
        ..ThemeSettings::default()
    };
    let ctx = build(&settings).await;

    let mut tera = Tera::default();
    tera.add_raw_template(
        IncourseContext::TEMPLATE,
        "{% for item in main_menu %}[{{ item.name }}|{{ item.icon }}]{% endfor %}\
         {% if has_more_menu %}+{{ more_menu | length }}{% endif %}\
         {% if hasfootercontacts %} {{ website }}{% endif %}",
    )
    .unwrap();

    let html = tera
        .render(IncourseContext::TEMPLATE, &ctx.to_tera_context().unwrap())
        .unwrap();
    assert_eq!(
        html,
        "[Course|fa fa-bookmark][Settings|fa fa-sliders][Participants|fa fa-users]\
         [Grades|fa fa-font][Reports|fa fa-bar-chart]+2 https://campus.test/about"
    );
}

#[tokio::test]
async fn test_incourse_redirects_outside_portal() {
    let fixture = fixture();
    let site = SiteInfo::new("https://campus.test", fixture.site_name).unwrap();
    let settings = ThemeSettings {
        portal_path: Some("local/campus".to_string()),
        ..ThemeSettings::default()
    };

    let outcome = incourse::build(fixture.incourse, &site, &settings, &fixture.host)
        .await
        .unwrap();
    assert_eq!(
        outcome.into_context().map(|c| c.courseid),
        None,
        "page outside the portal should redirect"
    );
}
