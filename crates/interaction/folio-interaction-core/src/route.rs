//! Path routing and the project-detail view model.

use serde::{Deserialize, Serialize};

use folio_content_core::{ContentRecord, Project};

use crate::carousel::{CarouselOptions, CarouselTracker};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "route", rename_all = "snake_case")]
pub enum Route {
    Home,
    Project { slug: String },
    NotFound { path: String },
}

impl Route {
    pub fn parse(path: &str) -> Route {
        let trimmed = path.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Route::Home;
        }
        let rest = trimmed
            .strip_prefix("/project/")
            .or_else(|| trimmed.strip_prefix("/projects/"));
        match rest {
            Some(slug) if !slug.contains('/') => Route::Project {
                slug: slug.to_string(),
            },
            _ => Route::NotFound {
                path: path.to_string(),
            },
        }
    }
}

/// A navigation action rendered as a button or link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigateAction {
    pub label: String,
    pub path: String,
}

/// What renders when the slug matches nothing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackView {
    pub title: String,
    pub body: String,
    pub actions: Vec<NavigateAction>,
}

impl Default for FallbackView {
    fn default() -> Self {
        Self {
            title: "Project not found".into(),
            body: "The project you are looking for does not exist.".into(),
            actions: vec![NavigateAction {
                label: "Back to Home".into(),
                path: "/".into(),
            }],
        }
    }
}

#[derive(Clone, Debug)]
pub struct ProjectPage<'a> {
    pub project: &'a Project,
    pub gallery: Vec<String>,
    pub carousel: CarouselTracker,
    pub options: CarouselOptions,
}

impl ProjectPage<'_> {
    /// Alt text for the slide at `index`.
    pub fn slide_alt(&self, index: usize) -> String {
        format!("{} screen {}", self.project.title, index + 1)
    }
}

#[derive(Clone, Debug)]
pub enum ProjectView<'a> {
    Detail(ProjectPage<'a>),
    NotFound(FallbackView),
}

impl ProjectView<'_> {
    pub fn is_detail(&self) -> bool {
        matches!(self, ProjectView::Detail(_))
    }
}

/// Resolve the detail view for `slug`. Anything that is not an exact slug
/// match, including the empty string, yields the fallback.
pub fn resolve_project<'a>(content: &'a ContentRecord, slug: &str) -> ProjectView<'a> {
    match content.project_by_slug(slug) {
        Some(project) => {
            let gallery = project.gallery();
            let options = CarouselOptions::default();
            ProjectView::Detail(ProjectPage {
                project,
                carousel: CarouselTracker::new(gallery.len(), options.looping),
                gallery,
                options,
            })
        }
        None => ProjectView::NotFound(FallbackView::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_paths() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(
            Route::parse("/project/raqam"),
            Route::Project { slug: "raqam".into() }
        );
        assert_eq!(
            Route::parse("/projects/raqam/"),
            Route::Project { slug: "raqam".into() }
        );
        assert!(matches!(Route::parse("/blog/x"), Route::NotFound { .. }));
        assert!(matches!(Route::parse("/project/a/b"), Route::NotFound { .. }));
    }
}
