use kurukuru_core::catalog::{published_section_list, published_sections, section_by_slug};
use kurukuru_core::{motion_for, Direction, Section, SectionList, SectionListError};

fn section(id: &str) -> Section {
    Section {
        id: id.to_string(),
        title: id.to_string(),
        description: None,
        body: None,
    }
}

#[test]
fn duplicate_ids_are_rejected() {
    let err = SectionList::new(vec![section("a"), section("b"), section("a")]).unwrap_err();
    assert_eq!(
        err,
        SectionListError::DuplicateId {
            id: "a".to_string()
        }
    );
    assert_eq!(err.to_string(), "duplicate section id 'a'");
}

#[test]
fn empty_ids_are_rejected() {
    let err = SectionList::new(vec![section("a"), section("  ")]).unwrap_err();
    assert_eq!(err, SectionListError::EmptyId { index: 1 });
}

#[test]
fn next_after_follows_list_order() {
    let list = SectionList::new(vec![section("a"), section("b"), section("c")]).unwrap();
    assert_eq!(list.next_after("a").map(|s| s.id.as_str()), Some("b"));
    assert_eq!(list.next_after("b").map(|s| s.id.as_str()), Some("c"));
    assert!(list.next_after("c").is_none());
    assert!(list.next_after("ghost").is_none());
}

#[test]
fn catalog_drops_unpublished_and_sorts_by_order() {
    let sections = published_sections();
    let ids: Vec<&str> = sections.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["about", "campaigns", "content-studio", "analytics", "contact"]
    );
    assert!(sections.iter().all(|s| s.id != "speaking"));
    assert!(sections.iter().all(|s| s.body.is_some()));
    // Empty authored description maps to None, not Some("").
    let contact = sections.iter().find(|s| s.id == "contact").unwrap();
    assert!(contact.description.is_none());
}

#[test]
fn catalog_produces_a_valid_section_list() {
    let list = published_section_list().unwrap();
    assert_eq!(list.first().map(|s| s.id.as_str()), Some("about"));
    assert_eq!(list.len(), 5);
}

#[test]
fn slug_lookup_is_case_insensitive() {
    assert!(section_by_slug("Campaigns").is_some());
    assert!(section_by_slug("  analytics  ").is_some());
    assert!(section_by_slug("nope").is_none());
}

#[test]
fn forward_motion_enters_from_below_and_exits_above() {
    let motion = motion_for(Direction::Forward);
    assert!(motion.enter.y > 0.0);
    assert!(motion.exit.y < 0.0);
    assert_eq!(motion.enter.opacity, 0.0);
    assert_eq!(motion.center.y, 0.0);
    assert_eq!(motion.center.opacity, 1.0);
    assert_eq!(motion.exit.opacity, 0.0);
}

#[test]
fn backward_motion_mirrors_forward() {
    let forward = motion_for(Direction::Forward);
    let backward = motion_for(Direction::Backward);
    assert_eq!(backward.enter.y, -forward.enter.y);
    assert_eq!(backward.exit.y, -forward.exit.y);
}

#[test]
fn entrance_dominates_and_exit_is_near_instant() {
    let motion = motion_for(Direction::Forward);
    assert!(motion.center.duration_s >= 1.0);
    assert!(motion.exit.duration_s <= 0.05);
    assert!(motion.center.duration_s > motion.exit.duration_s * 10.0);
}
