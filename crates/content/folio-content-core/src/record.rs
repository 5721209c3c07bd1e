//! Content record data model.
//!
//! JSON field names follow the site's data file (camelCase). Sequence order is
//! display order and is preserved as loaded.

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use crate::error::ContentError;
use crate::icons::{AchievementIcon, ExperienceKind, FactIcon, SkillIcon, SocialIcon};
use crate::seo::Seo;

/// Image shown when a project has no gallery of its own.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
    pub personal: Personal,
    #[serde(default)]
    pub nav: Vec<NavEntry>,
    pub about: About,
    #[serde(default)]
    pub skills: Skills,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub experience: Vec<ExperienceItem>,
    #[serde(default)]
    pub achievements: Vec<Achievement>,
    #[serde(default)]
    pub socials: Vec<Social>,
    pub seo: Seo,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Personal {
    pub name: String,
    pub title: String,
    pub subtitle: String,
    pub tagline: String,
    pub email: String,
    pub location: String,
    #[serde(default)]
    pub resume_url: String,
    #[serde(default)]
    pub portrait: String,
    #[serde(default)]
    pub badges: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    pub label: String,
    pub href: String,
}

impl NavEntry {
    /// Anchor id without the leading `#`, or `None` when `href` is not an in-page anchor.
    pub fn anchor(&self) -> Option<&str> {
        self.href.strip_prefix('#').filter(|a| !a.is_empty())
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct About {
    pub bio: String,
    #[serde(default)]
    pub facts: Vec<Fact>,
    #[serde(default)]
    pub strengths: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Fact {
    pub label: String,
    pub value: String,
}

impl Fact {
    pub fn icon(&self) -> FactIcon {
        FactIcon::for_label(&self.label)
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Skills {
    #[serde(default)]
    pub categories: Vec<SkillCategory>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    #[serde(default)]
    pub icon: SkillIcon,
    #[serde(default)]
    pub items: Vec<Skill>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency percentage, 0..=100.
    pub level: u8,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image: String,
    pub slug: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub demo: String,
    #[serde(default)]
    pub featured: bool,
}

impl Project {
    /// Slides for the detail carousel; never empty.
    pub fn gallery(&self) -> Vec<String> {
        if self.images.is_empty() {
            vec![PLACEHOLDER_IMAGE.to_string()]
        } else {
            self.images.clone()
        }
    }

    pub fn code_link(&self) -> Option<&str> {
        non_empty(&self.github)
    }

    pub fn demo_link(&self) -> Option<&str> {
        non_empty(&self.demo)
    }
}

fn non_empty(s: &str) -> Option<&str> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExperienceItem {
    #[serde(rename = "type")]
    pub kind: ExperienceKind,
    pub title: String,
    pub organization: String,
    #[serde(default)]
    pub location: String,
    pub period: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
}

/// Which side of the timeline an experience entry sits on.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimelineSide {
    Left,
    Right,
}

impl TimelineSide {
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            Self::Left
        } else {
            Self::Right
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Achievement {
    pub title: String,
    pub description: String,
    pub year: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Social {
    pub platform: String,
    pub url: String,
    #[serde(default)]
    pub icon: SocialIcon,
}

impl ContentRecord {
    /// Parse and validate a record from JSON.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let record: ContentRecord = serde_json::from_str(json)?;
        record.validate()?;
        Ok(record)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        if !self.personal.email.contains('@') {
            return Err(ContentError::Email(self.personal.email.clone()));
        }
        for entry in &self.nav {
            if entry.anchor().is_none() {
                return Err(ContentError::NavAnchor {
                    label: entry.label.clone(),
                    href: entry.href.clone(),
                });
            }
        }
        for skill in self.skills.categories.iter().flat_map(|c| c.items.iter()) {
            if skill.level > 100 {
                return Err(ContentError::SkillLevel {
                    skill: skill.name.clone(),
                    level: skill.level,
                });
            }
        }
        let mut seen: HashSet<&str> = HashSet::with_capacity(self.projects.len());
        for project in &self.projects {
            if project.slug.is_empty() {
                return Err(ContentError::EmptySlug {
                    title: project.title.clone(),
                });
            }
            if !seen.insert(project.slug.as_str()) {
                return Err(ContentError::DuplicateSlug(project.slug.clone()));
            }
        }
        Ok(())
    }

    /// Exact slug lookup. The empty slug never matches.
    pub fn project_by_slug(&self, slug: &str) -> Option<&Project> {
        if slug.is_empty() {
            return None;
        }
        self.projects.iter().find(|p| p.slug == slug)
    }

    pub fn featured_projects(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(|p| p.featured)
    }

    /// Achievement entries paired with their cycling glyph.
    pub fn achievements_with_icons(&self) -> impl Iterator<Item = (AchievementIcon, &Achievement)> {
        self.achievements
            .iter()
            .enumerate()
            .map(|(i, a)| (AchievementIcon::for_index(i), a))
    }

    /// Experience entries paired with their timeline side.
    pub fn timeline(&self) -> impl Iterator<Item = (TimelineSide, &ExperienceItem)> {
        self.experience
            .iter()
            .enumerate()
            .map(|(i, e)| (TimelineSide::for_index(i), e))
    }
}
