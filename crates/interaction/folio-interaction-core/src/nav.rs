//! Navigation bar state and in-page smooth-scroll resolution.

use hashbrown::HashSet;
use log::debug;
use serde::{Deserialize, Serialize};

use folio_content_core::ContentRecord;

pub const DEFAULT_SCROLLED_THRESHOLD: f32 = 50.0;

/// Section ids rendered on the landing page.
pub const SECTION_ANCHORS: [&str; 7] = [
    "home",
    "about",
    "skills",
    "projects",
    "experience",
    "achievements",
    "contact",
];

/// Smooth-scroll request for the host.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "to", rename_all = "snake_case")]
pub enum ScrollCommand {
    Anchor { id: String },
    Top,
}

/// Anchors that exist on the current page.
#[derive(Clone, Debug, Default)]
pub struct AnchorIndex {
    ids: HashSet<String>,
}

impl AnchorIndex {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Landing-page anchors: every section plus whatever the nav points at.
    pub fn for_landing(content: &ContentRecord) -> Self {
        let mut index = Self::new(SECTION_ANCHORS);
        for entry in &content.nav {
            if let Some(anchor) = entry.anchor() {
                index.ids.insert(anchor.to_string());
            }
        }
        index
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn insert(&mut self, id: impl Into<String>) {
        self.ids.insert(id.into());
    }

    /// Resolve `#id` (or a bare `id`) to a scroll command.
    pub fn resolve(&self, href: &str) -> Option<ScrollCommand> {
        let id = href.strip_prefix('#').unwrap_or(href);
        if id.is_empty() || !self.contains(id) {
            return None;
        }
        Some(ScrollCommand::Anchor { id: id.to_string() })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavState {
    scrolled: bool,
    mobile_menu_open: bool,
    threshold_px: f32,
}

impl Default for NavState {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLLED_THRESHOLD)
    }
}

impl NavState {
    pub fn new(threshold_px: f32) -> Self {
        Self {
            scrolled: false,
            mobile_menu_open: false,
            threshold_px,
        }
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    /// Update from the window's vertical scroll offset. Returns true when the
    /// bar switches between its transparent and frosted looks.
    pub fn on_scroll(&mut self, scroll_y: f32) -> bool {
        let scrolled = scroll_y > self.threshold_px;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.mobile_menu_open = !self.mobile_menu_open;
        self.mobile_menu_open
    }

    pub fn menu_label(&self) -> &'static str {
        if self.mobile_menu_open {
            "Close menu"
        } else {
            "Open menu"
        }
    }

    /// Follow a nav link. Always closes the mobile menu; a link whose anchor
    /// is not on the page does nothing else.
    pub fn navigate(&mut self, href: &str, anchors: &AnchorIndex) -> Option<ScrollCommand> {
        self.mobile_menu_open = false;
        let cmd = anchors.resolve(href);
        if cmd.is_none() {
            debug!("nav: no anchor for '{href}', ignoring");
        }
        cmd
    }

    pub fn scroll_to_top(&self) -> ScrollCommand {
        ScrollCommand::Top
    }
}
