use thiserror::Error;

/// Errors produced while loading or validating a content record.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content json parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate project slug '{0}'")]
    DuplicateSlug(String),
    #[error("project '{title}' has an empty slug")]
    EmptySlug { title: String },
    #[error("skill '{skill}' has level {level}, expected 0..=100")]
    SkillLevel { skill: String, level: u8 },
    #[error("nav entry '{label}' points at '{href}', expected an in-page anchor")]
    NavAnchor { label: String, href: String },
    #[error("personal email '{0}' is not an address")]
    Email(String),
}
