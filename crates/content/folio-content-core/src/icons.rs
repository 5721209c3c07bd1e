//! Closed icon sets.
//!
//! Content names icons with short string tags. Each set is an enum so the
//! renderer matches exhaustively; unknown tags fall back to the set's default
//! instead of failing deserialization.

use serde::{Deserialize, Serialize};

/// Social platform glyphs. Unknown tags render as [`SocialIcon::Mail`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SocialIcon {
    Github,
    Linkedin,
    Twitter,
    Instagram,
    #[default]
    Mail,
}

impl SocialIcon {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "github" => Self::Github,
            "linkedin" => Self::Linkedin,
            "twitter" => Self::Twitter,
            "instagram" => Self::Instagram,
            _ => Self::Mail,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Self::Github => "github",
            Self::Linkedin => "linkedin",
            Self::Twitter => "twitter",
            Self::Instagram => "instagram",
            Self::Mail => "mail",
        }
    }

    /// Glyph key understood by the host's icon set.
    pub fn icon_name(self) -> &'static str {
        match self {
            Self::Github => "Github",
            Self::Linkedin => "Linkedin",
            Self::Twitter => "Twitter",
            Self::Instagram => "Instagram",
            Self::Mail => "Mail",
        }
    }
}

impl From<String> for SocialIcon {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl From<SocialIcon> for String {
    fn from(icon: SocialIcon) -> Self {
        icon.tag().to_string()
    }
}

/// Skill category glyphs. Unknown tags render as [`SkillIcon::Code`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SkillIcon {
    #[default]
    Code,
    Layers,
    Tool,
    Brain,
}

impl SkillIcon {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "layers" => Self::Layers,
            "tool" => Self::Tool,
            "brain" => Self::Brain,
            _ => Self::Code,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::Layers => "layers",
            Self::Tool => "tool",
            Self::Brain => "brain",
        }
    }

    pub fn icon_name(self) -> &'static str {
        match self {
            Self::Code => "Code",
            Self::Layers => "Layers",
            Self::Tool => "Wrench",
            Self::Brain => "Brain",
        }
    }
}

impl From<String> for SkillIcon {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl From<SkillIcon> for String {
    fn from(icon: SkillIcon) -> Self {
        icon.tag().to_string()
    }
}

/// About-section fact glyphs, keyed by the fact's label.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum FactIcon {
    MapPin,
    GraduationCap,
    Target,
    Heart,
}

impl FactIcon {
    pub fn for_label(label: &str) -> Self {
        match label {
            "Education" => Self::GraduationCap,
            "Focus" => Self::Target,
            "Interests" => Self::Heart,
            _ => Self::MapPin,
        }
    }

    pub fn icon_name(self) -> &'static str {
        match self {
            Self::MapPin => "MapPin",
            Self::GraduationCap => "GraduationCap",
            Self::Target => "Target",
            Self::Heart => "Heart",
        }
    }
}

/// Achievement glyphs cycle through a fixed sequence by display index.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum AchievementIcon {
    Trophy,
    Award,
    Medal,
    Star,
}

impl AchievementIcon {
    const CYCLE: [AchievementIcon; 4] = [Self::Trophy, Self::Award, Self::Medal, Self::Star];

    pub fn for_index(index: usize) -> Self {
        Self::CYCLE[index % Self::CYCLE.len()]
    }

    pub fn icon_name(self) -> &'static str {
        match self {
            Self::Trophy => "Trophy",
            Self::Award => "Award",
            Self::Medal => "Medal",
            Self::Star => "Star",
        }
    }
}

/// Timeline entry kind; decides between the briefcase and the cap glyph.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceKind {
    Work,
    Education,
}

impl ExperienceKind {
    pub fn icon_name(self) -> &'static str {
        match self {
            Self::Work => "Briefcase",
            Self::Education => "GraduationCap",
        }
    }
}
