//! Landing-page view model: the record's sections with every icon resolved
//! to its glyph name and every list item tagged with its display index.

use serde::Serialize;

use crate::record::{
    Achievement, ContentRecord, ExperienceItem, Fact, Project, Skill, Social, TimelineSide,
};

#[derive(Clone, Debug, Serialize)]
pub struct LandingView<'a> {
    pub facts: Vec<FactView<'a>>,
    pub skills: Vec<SkillCategoryView<'a>>,
    pub featured: Vec<&'a Project>,
    pub timeline: Vec<TimelineEntry<'a>>,
    pub achievements: Vec<AchievementView<'a>>,
    pub socials: Vec<SocialView<'a>>,
}

#[derive(Clone, Debug, Serialize)]
pub struct FactView<'a> {
    pub icon: &'static str,
    pub fact: &'a Fact,
}

#[derive(Clone, Debug, Serialize)]
pub struct SkillCategoryView<'a> {
    pub name: &'a str,
    pub icon: &'static str,
    pub items: &'a [Skill],
}

#[derive(Clone, Debug, Serialize)]
pub struct TimelineEntry<'a> {
    pub index: usize,
    pub side: TimelineSide,
    pub icon: &'static str,
    pub item: &'a ExperienceItem,
}

#[derive(Clone, Debug, Serialize)]
pub struct AchievementView<'a> {
    pub index: usize,
    pub icon: &'static str,
    pub achievement: &'a Achievement,
}

#[derive(Clone, Debug, Serialize)]
pub struct SocialView<'a> {
    pub icon: &'static str,
    pub platform: &'a str,
    pub url: &'a str,
}

impl ContentRecord {
    pub fn landing_view(&self) -> LandingView<'_> {
        LandingView {
            facts: self
                .about
                .facts
                .iter()
                .map(|fact| FactView {
                    icon: fact.icon().icon_name(),
                    fact,
                })
                .collect(),
            skills: self
                .skills
                .categories
                .iter()
                .map(|c| SkillCategoryView {
                    name: &c.name,
                    icon: c.icon.icon_name(),
                    items: &c.items,
                })
                .collect(),
            featured: self.featured_projects().collect(),
            timeline: self
                .timeline()
                .enumerate()
                .map(|(index, (side, item))| TimelineEntry {
                    index,
                    side,
                    icon: item.kind.icon_name(),
                    item,
                })
                .collect(),
            achievements: self
                .achievements_with_icons()
                .enumerate()
                .map(|(index, (icon, achievement))| AchievementView {
                    index,
                    icon: icon.icon_name(),
                    achievement,
                })
                .collect(),
            socials: self
                .socials
                .iter()
                .map(|s: &Social| SocialView {
                    icon: s.icon.icon_name(),
                    platform: &s.platform,
                    url: &s.url,
                })
                .collect(),
        }
    }
}
