use crate::section::{Section, SectionList};

/// Where the browser address bar lives, as far as the controller is
/// concerned. The real implementation wraps the History API; tests hand in
/// an in-memory fake.
pub trait LocationPort {
    /// Current path, e.g. `/campaigns`.
    fn read(&self) -> String;
    /// Non-reloading address update. `replace` swaps the current history
    /// entry instead of pushing a new one.
    fn write(&self, path: &str, replace: bool);
}

/// Which side new content animates in from. Derived from index order only;
/// never settable on its own.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavOutcome {
    /// Active section changed; the view should run the directional
    /// transition and reset its scroll position.
    Moved(Direction),
    /// Target was already active. The mobile menu still closes.
    SameSection,
    /// Target id is not in the sequence; state is untouched.
    UnknownId,
}

/// Path for a section id: the first section owns the root path, everything
/// else maps to `/<id>`.
pub fn path_for(sections: &SectionList, id: &str) -> String {
    match sections.first() {
        Some(first) if first.id == id => "/".to_string(),
        _ => format!("/{id}"),
    }
}

/// Candidate id from a path: the last non-empty segment, with any query or
/// fragment suffix stripped.
pub fn id_from_path(path: &str) -> Option<&str> {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    path.rsplit('/').find(|segment| !segment.is_empty())
}

/// Single source of truth for which section is visible. Keeps the address
/// bar and in-page state consistent in both directions and computes the
/// direction that drives the enter/exit animation.
pub struct NavController<P: LocationPort> {
    sections: SectionList,
    port: P,
    fallback_id: Option<String>,
    active_id: Option<String>,
    direction: Direction,
    menu_open: bool,
}

impl<P: LocationPort> NavController<P> {
    pub fn new(sections: SectionList, port: P) -> Self {
        Self {
            sections,
            port,
            fallback_id: None,
            active_id: None,
            direction: Direction::default(),
            menu_open: false,
        }
    }

    /// Resolve the starting section: a known externally supplied id wins,
    /// then a known id in the current path, then the first section. Sets the
    /// active id without touching the direction (there is nothing to diff
    /// against yet) and normalizes the address with a replacing write so
    /// boot never grows the back stack. An empty sequence stays
    /// uninitialized.
    pub fn initialize(&mut self, initial_id: Option<&str>) -> Option<&Section> {
        self.fallback_id = initial_id
            .filter(|id| self.sections.index_of(id).is_some())
            .map(str::to_string);
        let resolved = self
            .fallback_id
            .clone()
            .or_else(|| self.id_from_port())
            .or_else(|| self.sections.first().map(|section| section.id.clone()))?;
        self.active_id = Some(resolved.clone());
        let path = path_for(&self.sections, &resolved);
        if self.port.read() != path {
            self.port.write(&path, true);
        }
        self.active_section()
    }

    /// Core entry point for menu selection and the "next" affordance.
    pub fn navigate_to(&mut self, id: &str) -> NavOutcome {
        if self.sections.index_of(id).is_none() {
            return NavOutcome::UnknownId;
        }
        if self.active_id.as_deref() == Some(id) {
            self.menu_open = false;
            return NavOutcome::SameSection;
        }
        let direction = self.apply_move(id);
        let path = path_for(&self.sections, id);
        if self.port.read() != path {
            self.port.write(&path, false);
        }
        NavOutcome::Moved(direction)
    }

    /// Browser back/forward. Resolves the target from the port with the same
    /// fallback chain as `initialize` and applies the same direction logic,
    /// but never writes the port (the browser already moved).
    pub fn handle_external(&mut self) -> NavOutcome {
        let path = self.port.read();
        let target = id_from_path(&path)
            .filter(|id| self.sections.index_of(id).is_some())
            .map(str::to_string)
            .or_else(|| self.fallback_id.clone())
            .or_else(|| self.sections.first().map(|section| section.id.clone()));
        let Some(target) = target else {
            return NavOutcome::UnknownId;
        };
        if self.active_id.as_deref() == Some(target.as_str()) {
            self.menu_open = false;
            return NavOutcome::SameSection;
        }
        NavOutcome::Moved(self.apply_move(&target))
    }

    fn apply_move(&mut self, id: &str) -> Direction {
        let current = self
            .active_id
            .as_deref()
            .and_then(|active| self.sections.index_of(active));
        let target = self.sections.index_of(id);
        if let (Some(current), Some(target)) = (current, target) {
            self.direction = if target > current {
                Direction::Forward
            } else {
                Direction::Backward
            };
        }
        // Either index missing: keep the last known direction.
        self.active_id = Some(id.to_string());
        self.menu_open = false;
        self.direction
    }

    fn id_from_port(&self) -> Option<String> {
        let path = self.port.read();
        id_from_path(&path)
            .filter(|id| self.sections.index_of(id).is_some())
            .map(str::to_string)
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    pub fn active_section(&self) -> Option<&Section> {
        self.sections.by_id(self.active_id.as_deref()?)
    }

    pub fn next_section(&self) -> Option<&Section> {
        self.sections.next_after(self.active_id.as_deref()?)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn set_menu_open(&mut self, open: bool) {
        self.menu_open = open;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn sections(&self) -> &SectionList {
        &self.sections
    }
}
