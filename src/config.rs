use kurukuru_core::{SiteConfig, SiteText, SocialLink, UserIdentity};

const USER_NAME: &str = "Jordin Hipps";
const USER_TITLE: &str = "Social Media Marketer";
const USER_EMAIL: &str = "hello@jordinhipps.com";
const LINKEDIN_URL: &str = "https://www.linkedin.com/in/jordinhipps";
const SITE_TITLE: &str = "Jordin Hipps — Portfolio";
const SITE_DESCRIPTION: &str = "Campaigns, content and analytics work by Jordin Hipps.";
const EMPTY_STATE: &str = "Select a project to begin.";

fn env_or(value: Option<&'static str>, fallback: &str) -> String {
    match value {
        Some(raw) if !raw.trim().is_empty() => raw.trim().to_string(),
        _ => fallback.to_string(),
    }
}

/// Site identity and display text, overridable at build time so the same
/// tree can ship under a different name.
pub(crate) fn site_config() -> SiteConfig {
    let email = env_or(
        option_env!("KURUKURU_USER_EMAIL").or(option_env!("TRUNK_PUBLIC_USER_EMAIL")),
        USER_EMAIL,
    );
    SiteConfig {
        user: UserIdentity {
            name: env_or(
                option_env!("KURUKURU_USER_NAME").or(option_env!("TRUNK_PUBLIC_USER_NAME")),
                USER_NAME,
            ),
            title: env_or(
                option_env!("KURUKURU_USER_TITLE").or(option_env!("TRUNK_PUBLIC_USER_TITLE")),
                USER_TITLE,
            ),
            links: vec![
                SocialLink {
                    label: "LinkedIn".to_string(),
                    href: env_or(option_env!("KURUKURU_LINKEDIN_URL"), LINKEDIN_URL),
                },
                SocialLink {
                    label: "Email".to_string(),
                    href: format!("mailto:{email}"),
                },
            ],
            email,
        },
        text: SiteText {
            title: env_or(option_env!("KURUKURU_SITE_TITLE"), SITE_TITLE),
            description: env_or(option_env!("KURUKURU_SITE_DESCRIPTION"), SITE_DESCRIPTION),
            empty_state: env_or(option_env!("KURUKURU_EMPTY_STATE"), EMPTY_STATE),
        },
    }
}
