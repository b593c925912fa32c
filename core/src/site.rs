use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
}

/// Who the portfolio belongs to. Display-only; nothing here affects
/// navigation behavior.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub links: Vec<SocialLink>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SiteText {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_empty_state")]
    pub empty_state: String,
}

fn default_empty_state() -> String {
    "Select a project to begin.".to_string()
}

impl Default for SiteText {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            empty_state: default_empty_state(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub user: UserIdentity,
    pub text: SiteText,
}
