#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Course menu partitioning tests.

use trellis_theme::config::ThemeStrings;
use trellis_theme::host::{CourseInfo, SiteInfo};
use trellis_theme::menu::{COURSE_HOME_ID, MenuEntry, TabDescriptor, build_secondary_menu, partition};

fn fallback() -> MenuEntry {
    MenuEntry {
        id: COURSE_HOME_ID.to_string(),
        name: "Course".to_string(),
        url: "http://lms.test/course/view.php?id=3".to_string(),
        format: "topics".to_string(),
        icon: "fa fa-bookmark".to_string(),
    }
}

fn tabs(ids: &[&str]) -> Vec<TabDescriptor> {
    ids.iter()
        .map(|id| TabDescriptor::new(*id, *id).with_url(format!("http://lms.test/{id}?a=1&amp;b=2")))
        .collect()
}

#[test]
fn test_partition_keeps_leading_home() {
    let input = tabs(&["coursehome", "participants", "grades"]);
    let split = partition(&input, 5, COURSE_HOME_ID, fallback(), "topics");

    let ids: Vec<&str> = split.primary.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["coursehome", "participants", "grades"]);
    assert!(split.overflow.is_empty());
    assert_eq!(split.primary.len() + split.overflow.len(), input.len());
}

#[test]
fn test_partition_synthesizes_home_and_overflows() {
    let input = tabs(&["t0", "t1", "t2", "t3", "t4", "t5", "t6"]);
    let split = partition(&input, 5, COURSE_HOME_ID, fallback(), "topics");

    let primary: Vec<&str> = split.primary.iter().map(|e| e.id.as_str()).collect();
    let overflow: Vec<&str> = split.overflow.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(primary, ["coursehome", "t0", "t1", "t2", "t3", "t4"]);
    assert_eq!(overflow, ["t5", "t6"]);
    assert_eq!(split.primary.len(), input[..5].len() + 1);
}

#[test]
fn test_partition_every_split_index() {
    let input = tabs(&["coursehome", "a", "b", "c", "d", "e", "f"]);
    for split_index in 0..=input.len() + 2 {
        let split = partition(&input, split_index, COURSE_HOME_ID, fallback(), "topics");
        assert_eq!(split.primary[0].id, COURSE_HOME_ID, "split {split_index}");

        // Everything except a synthesized home comes from the input, in order.
        let synthesized = usize::from(split_index == 0);
        let ids: Vec<&str> = split
            .primary
            .iter()
            .skip(synthesized)
            .chain(split.overflow.iter())
            .map(|e| e.id.as_str())
            .collect();
        let expected: Vec<&str> = input.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, expected, "split {split_index}");
    }
}

#[test]
fn test_partition_decodes_ampersands() {
    let split = partition(&tabs(&["coursehome"]), 5, COURSE_HOME_ID, fallback(), "topics");
    assert_eq!(split.primary[0].url, "http://lms.test/coursehome?a=1&b=2");
}

#[test]
fn test_partition_empty_input() {
    let split = partition(&[], 5, COURSE_HOME_ID, fallback(), "topics");
    assert_eq!(split.primary, vec![fallback()]);
    assert!(split.overflow.is_empty());
}

#[test]
fn test_secondary_menu_from_navigation_export() {
    let json = std::fs::read_to_string(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/fixtures/secondary_tabs.json"
    ))
    .unwrap();
    let input: Vec<TabDescriptor> = serde_json::from_str(&json).unwrap();

    let site = SiteInfo::new("https://campus.example.org/lms", "Campus").unwrap();
    let course = CourseInfo {
        id: 42,
        format: "weeks".to_string(),
        visible: true,
        context_id: 420,
    };
    let split = build_secondary_menu(&input, &course, &site, &ThemeStrings::default(), 5);

    // Home is synthesized in front of the first five tabs.
    assert_eq!(split.primary.len(), 6);
    assert_eq!(split.primary[0].id, "coursehome");
    assert_eq!(split.primary[0].url, "https://campus.example.org/lms/course/view.php?id=42");
    assert_eq!(split.primary[2].icon, "fa fa-users");
    assert_eq!(
        split.primary[3].url,
        "https://campus.example.org/lms/grade/report/index.php?id=42&mode=grader"
    );
    let overflow: Vec<&str> = split.overflow.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(overflow, ["questionbank"]);
    assert_eq!(split.overflow[0].icon, "fa fa-circle-o");
    assert_eq!(split.primary[4].url, "");
    assert!(split.has_more());
}
