//! Folio Content Core
//!
//! The static, read-only record that describes everything the site renders:
//! personal info, navigation, skills, projects, experience, achievements,
//! social links and SEO metadata. Interaction crates consume it; nothing
//! mutates it after load.

pub mod error;
pub mod icons;
pub mod record;
pub mod seo;
pub mod view;

pub use error::ContentError;
pub use icons::{AchievementIcon, ExperienceKind, FactIcon, SkillIcon, SocialIcon};
pub use record::{
    About, Achievement, ContentRecord, ExperienceItem, Fact, NavEntry, Personal, Project,
    Skill, SkillCategory, Skills, Social, TimelineSide, PLACEHOLDER_IMAGE,
};
pub use seo::{MetaTag, Seo};
pub use view::{
    AchievementView, FactView, LandingView, SkillCategoryView, SocialView, TimelineEntry,
};
