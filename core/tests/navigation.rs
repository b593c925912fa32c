use std::cell::RefCell;
use std::rc::Rc;

use kurukuru_core::{
    id_from_path, path_for, Direction, LocationPort, NavController, NavOutcome, Section,
    SectionList,
};

#[derive(Clone, Default)]
struct FakeLocation {
    inner: Rc<RefCell<FakeLocationInner>>,
}

#[derive(Default)]
struct FakeLocationInner {
    path: String,
    pushes: Vec<String>,
    replaces: Vec<String>,
}

impl FakeLocation {
    fn at(path: &str) -> Self {
        let port = Self::default();
        port.inner.borrow_mut().path = path.to_string();
        port
    }

    fn path(&self) -> String {
        self.inner.borrow().path.clone()
    }

    fn pushes(&self) -> Vec<String> {
        self.inner.borrow().pushes.clone()
    }

    fn replaces(&self) -> Vec<String> {
        self.inner.borrow().replaces.clone()
    }

    fn jump(&self, path: &str) {
        // Browser-side move (back/forward): the path changes without the
        // controller writing anything.
        self.inner.borrow_mut().path = path.to_string();
    }
}

impl LocationPort for FakeLocation {
    fn read(&self) -> String {
        self.inner.borrow().path.clone()
    }

    fn write(&self, path: &str, replace: bool) {
        let mut inner = self.inner.borrow_mut();
        inner.path = path.to_string();
        if replace {
            inner.replaces.push(path.to_string());
        } else {
            inner.pushes.push(path.to_string());
        }
    }
}

fn section(id: &str) -> Section {
    Section {
        id: id.to_string(),
        title: id.to_uppercase(),
        description: None,
        body: None,
    }
}

fn abc() -> SectionList {
    SectionList::new(vec![section("a"), section("b"), section("c")]).unwrap()
}

fn controller_at(path: &str) -> (NavController<FakeLocation>, FakeLocation) {
    let port = FakeLocation::at(path);
    (NavController::new(abc(), port.clone()), port)
}

#[test]
fn navigate_forward_updates_state_and_path() {
    let (mut nav, port) = controller_at("/");
    nav.initialize(None);
    assert_eq!(nav.active_id(), Some("a"));

    let outcome = nav.navigate_to("c");
    assert_eq!(outcome, NavOutcome::Moved(Direction::Forward));
    assert_eq!(nav.active_id(), Some("c"));
    assert_eq!(nav.direction(), Direction::Forward);
    assert_eq!(port.path(), "/c");
    assert_eq!(port.pushes(), vec!["/c".to_string()]);
}

#[test]
fn navigate_backward_maps_first_section_to_root() {
    let (mut nav, port) = controller_at("/c");
    nav.initialize(None);
    assert_eq!(nav.active_id(), Some("c"));

    let outcome = nav.navigate_to("a");
    assert_eq!(outcome, NavOutcome::Moved(Direction::Backward));
    assert_eq!(port.path(), "/");
}

#[test]
fn same_section_closes_menu_without_history_entry() {
    let (mut nav, port) = controller_at("/");
    nav.initialize(None);
    nav.set_menu_open(true);

    let outcome = nav.navigate_to("a");
    assert_eq!(outcome, NavOutcome::SameSection);
    assert!(!nav.menu_open());
    assert_eq!(nav.direction(), Direction::Forward);
    assert!(port.pushes().is_empty());
}

#[test]
fn unknown_target_leaves_state_untouched() {
    let (mut nav, port) = controller_at("/");
    nav.initialize(None);
    nav.navigate_to("b");
    let direction = nav.direction();
    let pushes = port.pushes().len();

    let outcome = nav.navigate_to("ghost");
    assert_eq!(outcome, NavOutcome::UnknownId);
    assert_eq!(nav.active_id(), Some("b"));
    assert_eq!(nav.direction(), direction);
    assert_eq!(port.pushes().len(), pushes);
}

#[test]
fn initialize_prefers_explicit_id_over_path() {
    let (mut nav, _port) = controller_at("/b");
    nav.initialize(Some("c"));
    assert_eq!(nav.active_id(), Some("c"));
}

#[test]
fn initialize_falls_back_to_path_then_first() {
    let (mut nav, _) = controller_at("/b");
    nav.initialize(None);
    assert_eq!(nav.active_id(), Some("b"));

    let (mut nav, _) = controller_at("/nope");
    nav.initialize(None);
    assert_eq!(nav.active_id(), Some("a"));

    // An unknown explicit id is discarded before the chain runs.
    let (mut nav, _) = controller_at("/b");
    nav.initialize(Some("ghost"));
    assert_eq!(nav.active_id(), Some("b"));
}

#[test]
fn initialize_normalizes_address_with_replace() {
    let (mut nav, port) = controller_at("");
    nav.initialize(None);
    assert_eq!(port.path(), "/");
    assert_eq!(port.replaces(), vec!["/".to_string()]);
    assert!(port.pushes().is_empty());

    // Already at the right path: nothing written at all.
    let (mut nav, port) = controller_at("/");
    nav.initialize(None);
    assert!(port.replaces().is_empty());
    assert!(port.pushes().is_empty());
    assert_eq!(nav.active_id(), Some("a"));
}

#[test]
fn empty_sequence_stays_uninitialized() {
    let port = FakeLocation::at("/");
    let mut nav = NavController::new(SectionList::empty(), port.clone());
    assert!(nav.initialize(None).is_none());
    assert_eq!(nav.active_id(), None);
    assert_eq!(nav.navigate_to("a"), NavOutcome::UnknownId);
    assert!(port.pushes().is_empty());
    assert!(port.replaces().is_empty());
}

#[test]
fn external_back_never_writes_the_port() {
    let (mut nav, port) = controller_at("/c");
    nav.initialize(None);

    port.jump("/a");
    let outcome = nav.handle_external();
    assert_eq!(outcome, NavOutcome::Moved(Direction::Backward));
    assert_eq!(nav.active_id(), Some("a"));
    assert!(port.pushes().is_empty());
    assert!(port.replaces().is_empty());
}

#[test]
fn external_unknown_path_falls_back_to_initial_then_first() {
    let (mut nav, port) = controller_at("/");
    nav.initialize(Some("b"));
    nav.navigate_to("c");

    port.jump("/zzz");
    let outcome = nav.handle_external();
    assert_eq!(outcome, NavOutcome::Moved(Direction::Backward));
    assert_eq!(nav.active_id(), Some("b"));

    let (mut nav, port) = controller_at("/c");
    nav.initialize(None);
    port.jump("/zzz");
    nav.handle_external();
    assert_eq!(nav.active_id(), Some("a"));
}

#[test]
fn external_same_section_is_a_noop() {
    let (mut nav, port) = controller_at("/b");
    nav.initialize(None);
    let direction = nav.direction();

    port.jump("/b");
    assert_eq!(nav.handle_external(), NavOutcome::SameSection);
    assert_eq!(nav.direction(), direction);
}

#[test]
fn navigate_before_initialize_keeps_default_direction() {
    let (mut nav, _) = controller_at("/");
    let outcome = nav.navigate_to("b");
    assert_eq!(outcome, NavOutcome::Moved(Direction::Forward));
    assert_eq!(nav.active_id(), Some("b"));
}

#[test]
fn push_is_skipped_when_path_already_matches() {
    let (mut nav, port) = controller_at("/");
    nav.initialize(None);
    port.jump("/c");

    let outcome = nav.navigate_to("c");
    assert_eq!(outcome, NavOutcome::Moved(Direction::Forward));
    assert!(port.pushes().is_empty());
}

#[test]
fn menu_closes_on_every_successful_navigation() {
    let (mut nav, _) = controller_at("/");
    nav.initialize(None);
    nav.set_menu_open(true);
    nav.navigate_to("b");
    assert!(!nav.menu_open());

    nav.toggle_menu();
    assert!(nav.menu_open());
    nav.toggle_menu();
    assert!(!nav.menu_open());
}

#[test]
fn path_round_trips_through_id_resolution() {
    let sections = abc();
    for id in ["b", "c"] {
        let path = path_for(&sections, id);
        assert_eq!(path, format!("/{id}"));
        assert_eq!(id_from_path(&path), Some(id));
    }
    // Section zero maps to the root path, which carries no id segment; the
    // resolution chain falls through to the first section instead.
    assert_eq!(path_for(&sections, "a"), "/");
    assert_eq!(id_from_path("/"), None);
}

#[test]
fn id_from_path_takes_last_segment_and_strips_suffixes() {
    assert_eq!(id_from_path("/foo/bar"), Some("bar"));
    assert_eq!(id_from_path("/bar/"), Some("bar"));
    assert_eq!(id_from_path("/bar?x=1"), Some("bar"));
    assert_eq!(id_from_path("/bar#frag"), Some("bar"));
    assert_eq!(id_from_path(""), None);
}

#[test]
fn next_section_follows_sequence_order() {
    let (mut nav, _) = controller_at("/");
    nav.initialize(None);
    assert_eq!(nav.next_section().map(|s| s.id.as_str()), Some("b"));
    nav.navigate_to("c");
    assert!(nav.next_section().is_none());
}
