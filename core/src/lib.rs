pub mod catalog;
pub mod magnetic;
pub mod nav;
pub mod section;
pub mod site;
pub mod transition;

pub use magnetic::{displacement, MagneticParams, Spring};
pub use nav::{id_from_path, path_for, Direction, LocationPort, NavController, NavOutcome};
pub use section::{Section, SectionList, SectionListError};
pub use site::{SiteConfig, SiteText, SocialLink, UserIdentity};
pub use transition::{motion_for, MotionPhase, MotionSet};
