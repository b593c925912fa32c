use std::fmt;

use serde::{Deserialize, Serialize};

/// One navigable content unit. `body` is pre-rendered markup owned by the
/// authoring side and injected as-is; the navigation layer never inspects it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}

/// Ordered section sequence with unique, non-empty ids. The order fixes both
/// the menu order and the "next section" linearization.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SectionList {
    sections: Vec<Section>,
}

impl SectionList {
    pub fn new(sections: Vec<Section>) -> Result<Self, SectionListError> {
        for (index, section) in sections.iter().enumerate() {
            if section.id.trim().is_empty() {
                return Err(SectionListError::EmptyId { index });
            }
            if sections[..index].iter().any(|other| other.id == section.id) {
                return Err(SectionListError::DuplicateId {
                    id: section.id.clone(),
                });
            }
        }
        Ok(Self { sections })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    pub fn first(&self) -> Option<&Section> {
        self.sections.first()
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|section| section.id == id)
    }

    pub fn by_id(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.id == id)
    }

    pub fn next_after(&self, id: &str) -> Option<&Section> {
        let index = self.index_of(id)?;
        self.sections.get(index + 1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionListError {
    EmptyId { index: usize },
    DuplicateId { id: String },
}

impl fmt::Display for SectionListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionListError::EmptyId { index } => {
                write!(f, "section at position {index} has an empty id")
            }
            SectionListError::DuplicateId { id } => {
                write!(f, "duplicate section id '{id}'")
            }
        }
    }
}

impl std::error::Error for SectionListError {}
