use folio_content_core::{
    ContentError, ContentRecord, ExperienceKind, SkillIcon, SocialIcon, TimelineSide,
    PLACEHOLDER_IMAGE,
};
use folio_test_fixtures::content;

fn portfolio() -> ContentRecord {
    let json = content::json("portfolio").expect("portfolio fixture");
    ContentRecord::from_json(&json).expect("portfolio should validate")
}

fn minimal() -> ContentRecord {
    let json = content::json("minimal").expect("minimal fixture");
    ContentRecord::from_json(&json).expect("minimal should validate")
}

#[test]
fn portfolio_keeps_display_order() {
    let record = portfolio();
    let labels: Vec<&str> = record.nav.iter().map(|n| n.label.as_str()).collect();
    assert_eq!(
        labels,
        ["About", "Skills", "Projects", "Experience", "Contact"]
    );
    let first_skills: Vec<&str> = record.skills.categories[0]
        .items
        .iter()
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(first_skills[0], "TypeScript");
    assert_eq!(first_skills[5], "Go");
    assert_eq!(record.skills.categories[1].icon, SkillIcon::Layers);
}

#[test]
fn nav_anchor_strips_hash() {
    let record = portfolio();
    assert_eq!(record.nav[0].anchor(), Some("about"));
}

#[test]
fn project_lookup_by_slug() {
    let record = portfolio();
    let raqam = record.project_by_slug("raqam").expect("raqam exists");
    assert_eq!(raqam.title, "Raqam");
    assert_eq!(raqam.gallery().len(), 11);
    assert_eq!(raqam.code_link(), Some("https://github.com/kayyali05/Raqam"));
    assert_eq!(raqam.demo_link(), None);
    assert_eq!(record.featured_projects().count(), 1);
}

#[test]
fn unmatched_slugs_find_nothing() {
    let record = portfolio();
    for slug in ["", "Raqam", "raqam ", "missing", "/raqam"] {
        assert!(record.project_by_slug(slug).is_none(), "slug {slug:?}");
    }
}

#[test]
fn empty_gallery_uses_placeholder() {
    let record = minimal();
    let bare = record.project_by_slug("bare").unwrap();
    assert_eq!(bare.gallery(), vec![PLACEHOLDER_IMAGE.to_string()]);
    assert_eq!(bare.code_link(), None);
}

#[test]
fn unknown_icon_tags_fall_back() {
    let record = minimal();
    assert_eq!(record.socials[0].icon, SocialIcon::Mail);
    assert_eq!(record.skills.categories[0].icon, SkillIcon::Code);
}

#[test]
fn timeline_alternates_sides() {
    let record = portfolio();
    let sides: Vec<TimelineSide> = record.timeline().map(|(side, _)| side).collect();
    assert_eq!(sides, [TimelineSide::Left, TimelineSide::Right]);
    assert!(record
        .experience
        .iter()
        .all(|e| e.kind == ExperienceKind::Education));
}

#[test]
fn duplicate_slugs_are_rejected() {
    let json = content::json("duplicate-slug").unwrap();
    match ContentRecord::from_json(&json) {
        Err(ContentError::DuplicateSlug(slug)) => assert_eq!(slug, "bare"),
        other => panic!("expected duplicate slug error, got {other:?}"),
    }
}

#[test]
fn out_of_range_skill_level_is_rejected() {
    let mut record = minimal();
    record.skills.categories[0].items[0].level = 101;
    assert!(matches!(
        record.validate(),
        Err(ContentError::SkillLevel { level: 101, .. })
    ));
}

#[test]
fn nav_must_point_at_anchor() {
    let mut record = portfolio();
    record.nav[1].href = "/skills".into();
    assert!(matches!(
        record.validate(),
        Err(ContentError::NavAnchor { .. })
    ));
}

#[test]
fn malformed_json_is_a_parse_error() {
    assert!(matches!(
        ContentRecord::from_json("{ \"personal\": 3 }"),
        Err(ContentError::Parse(_))
    ));
}

#[test]
fn seo_tags_follow_record() {
    let record = portfolio();
    let tags = record.seo.meta_tags();
    let og_title = tags.iter().find(|t| t.key() == "og:title").unwrap();
    assert_eq!(og_title.content(), record.seo.title);
}

#[test]
fn landing_view_resolves_every_glyph() {
    let record = portfolio();
    let view = record.landing_view();

    let facts: Vec<&str> = view.facts.iter().map(|f| f.icon).collect();
    assert_eq!(facts, ["MapPin", "GraduationCap", "Target", "Heart"]);

    let skills: Vec<&str> = view.skills.iter().map(|c| c.icon).collect();
    assert_eq!(skills, ["Code", "Layers"]);

    let socials: Vec<&str> = view.socials.iter().map(|s| s.icon).collect();
    assert_eq!(socials, ["Github", "Linkedin", "Instagram"]);

    let achievements: Vec<&str> = view.achievements.iter().map(|a| a.icon).collect();
    assert_eq!(achievements, ["Trophy", "Award", "Medal", "Star"]);

    assert_eq!(view.timeline.len(), 2);
    assert_eq!(view.timeline[1].side, TimelineSide::Right);
    assert!(view.timeline.iter().all(|e| e.icon == "GraduationCap"));
    assert_eq!(view.featured.len(), 1);
    assert_eq!(view.featured[0].slug, "raqam");
}

#[test]
fn landing_view_serializes_with_glyph_names() {
    let record = minimal();
    let json = serde_json::to_value(record.landing_view()).unwrap();
    assert_eq!(json["socials"][0]["icon"], "Mail");
    assert_eq!(json["skills"][0]["icon"], "Code");
    assert_eq!(json["skills"][0]["items"][0]["level"], 100);
}
