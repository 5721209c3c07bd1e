//! Stage: hosts one page's controllers behind a fixed-tick contract.
//!
//! Methods:
//! - add_reveal / add_tilt / add_carousel (mount), remove_* (unmount)
//! - update (apply inputs -> step springs -> report changes/events)
//! - contact, copy and navigation actions; their events surface on the next update
//!
//! Controllers never see each other; the stage only routes inputs by id.

use log::warn;

use folio_content_core::ContentRecord;

use crate::carousel::CarouselTracker;
use crate::clipboard::{CopyFeedback, CopyIndicator};
use crate::config::Config;
use crate::contact::{ContactField, ContactForm, EmailRelay, RelayRequest};
use crate::error::{ContactError, RelayError, StageError};
use crate::hero::HeroFrame;
use crate::ids::{CarouselId, IdAllocator, RevealId, TiltId};
use crate::inputs::{CarouselInput, Inputs, IntersectionInput, PointerEvent, PointerInput};
use crate::nav::{AnchorIndex, NavState, ScrollCommand, SECTION_ANCHORS};
use crate::outputs::{Change, Outputs, StageEvent};
use crate::reveal::{
    GridStagger, IntersectionEntry, OnceReveal, RevealKeyframe, RevealMargin, RevealObserver,
    StaggerPreset,
};
use crate::tilt::{PointerTilt, TiltPreset, TiltTracker};

#[derive(Debug)]
pub struct Stage {
    cfg: Config,
    ids: IdAllocator,
    clock_ms: f64,

    reveals: Vec<(RevealId, OnceReveal)>,
    tilts: Vec<(TiltId, PointerTilt)>,
    carousels: Vec<(CarouselId, CarouselTracker)>,

    nav: NavState,
    anchors: AnchorIndex,
    contact: ContactForm,
    copy: CopyFeedback,
    copy_indicator: CopyIndicator,

    // Events raised by direct actions, flushed on the next update.
    pending: Vec<StageEvent>,
    outputs: Outputs,
}

impl Default for Stage {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Stage {
    pub fn new(cfg: Config) -> Self {
        Self {
            ids: IdAllocator::new(),
            clock_ms: 0.0,
            reveals: Vec::new(),
            tilts: Vec::new(),
            carousels: Vec::new(),
            nav: NavState::new(cfg.nav_scrolled_threshold),
            anchors: AnchorIndex::new(SECTION_ANCHORS),
            contact: ContactForm::new(),
            copy: CopyFeedback::new(cfg.copy_feedback_ms),
            copy_indicator: CopyIndicator::Copy,
            pending: Vec::new(),
            outputs: Outputs::default(),
            cfg,
        }
    }

    /// Stage for the landing page; nav anchors come from `content`.
    pub fn for_landing(cfg: Config, content: &ContentRecord) -> Self {
        let mut stage = Self::new(cfg);
        stage.anchors = AnchorIndex::for_landing(content);
        stage
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Milliseconds of stage time elapsed through `update`.
    pub fn clock_ms(&self) -> f64 {
        self.clock_ms
    }

    // ---- mount / unmount ----

    pub fn add_reveal(&mut self, margin: Option<RevealMargin>) -> RevealId {
        let id = self.ids.alloc_reveal();
        let margin = margin.unwrap_or(self.cfg.reveal_margin);
        self.reveals.push((id, OnceReveal::new(margin)));
        id
    }

    pub fn add_tilt(&mut self, preset: TiltPreset) -> TiltId {
        let id = self.ids.alloc_tilt();
        let tilt = match preset {
            TiltPreset::Portrait => {
                PointerTilt::new(self.cfg.portrait_tilt, self.cfg.spring, Some(self.cfg.glow))
            }
            TiltPreset::ProjectCard => PointerTilt::new(self.cfg.card_tilt, self.cfg.spring, None),
        };
        self.tilts.push((id, tilt));
        id
    }

    pub fn add_carousel(&mut self, slide_count: usize, looping: bool) -> CarouselId {
        let id = self.ids.alloc_carousel();
        let tracker = CarouselTracker::new(slide_count, looping).with_emphasis(self.cfg.emphasis);
        self.carousels.push((id, tracker));
        id
    }

    pub fn remove_reveal(&mut self, id: RevealId) -> Result<(), StageError> {
        let pos = self
            .reveals
            .iter()
            .position(|(r, _)| *r == id)
            .ok_or(StageError::UnknownReveal(id))?;
        self.reveals.remove(pos);
        Ok(())
    }

    pub fn remove_tilt(&mut self, id: TiltId) -> Result<(), StageError> {
        let pos = self
            .tilts
            .iter()
            .position(|(t, _)| *t == id)
            .ok_or(StageError::UnknownTilt(id))?;
        self.tilts.remove(pos);
        Ok(())
    }

    /// Detach from settle events, then drop the tracker.
    pub fn remove_carousel(&mut self, id: CarouselId) -> Result<(), StageError> {
        let pos = self
            .carousels
            .iter()
            .position(|(c, _)| *c == id)
            .ok_or(StageError::UnknownCarousel(id))?;
        let (_, mut tracker) = self.carousels.remove(pos);
        tracker.detach();
        Ok(())
    }

    // ---- lookups ----

    pub fn reveal(&self, id: RevealId) -> Option<&OnceReveal> {
        self.reveals.iter().find(|(r, _)| *r == id).map(|(_, r)| r)
    }

    pub fn tilt(&self, id: TiltId) -> Option<&PointerTilt> {
        self.tilts.iter().find(|(t, _)| *t == id).map(|(_, t)| t)
    }

    pub fn carousel(&self, id: CarouselId) -> Option<&CarouselTracker> {
        self.carousels.iter().find(|(c, _)| *c == id).map(|(_, c)| c)
    }

    pub fn nav(&self) -> &NavState {
        &self.nav
    }

    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    pub fn copy_indicator(&self) -> CopyIndicator {
        self.copy.indicator(self.clock_ms)
    }

    pub fn hero_frame(&self, progress: f32) -> HeroFrame {
        self.cfg.hero.sample(progress)
    }

    /// Keyframe for the `index`-th child of a staggered section.
    pub fn reveal_keyframe(
        &self,
        id: RevealId,
        index: usize,
        preset: StaggerPreset,
    ) -> Result<RevealKeyframe, StageError> {
        let reveal = self.reveal(id).ok_or(StageError::UnknownReveal(id))?;
        Ok(reveal.keyframe_for(index, &preset.stagger()))
    }

    /// Keyframe for skill `skill` of category `category` in the skills grid.
    pub fn skill_keyframe(
        &self,
        id: RevealId,
        category: usize,
        skill: usize,
    ) -> Result<RevealKeyframe, StageError> {
        let reveal = self.reveal(id).ok_or(StageError::UnknownReveal(id))?;
        Ok(reveal.grid_keyframe_for(category, skill, &GridStagger::SKILLS))
    }

    /// Skill bar width in percent for the grid behind reveal `id`.
    pub fn skill_bar_width(&self, id: RevealId, level: u8) -> Result<f32, StageError> {
        let reveal = self.reveal(id).ok_or(StageError::UnknownReveal(id))?;
        Ok(reveal.bar_width(level))
    }

    // ---- direct actions ----

    pub fn edit_contact(&mut self, field: ContactField, value: impl Into<String>) {
        self.contact.edit(field, value);
    }

    /// Start a submission using the configured relay identifiers.
    pub fn begin_submit(&mut self) -> Result<RelayRequest, ContactError> {
        let relay = self
            .cfg
            .relay
            .as_ref()
            .ok_or(ContactError::RelayNotConfigured)?;
        self.contact.begin_submit(relay)
    }

    /// Record the relay's verdict; the resulting notification is emitted on
    /// the next update.
    pub fn finish_submit(&mut self, outcome: Result<(), RelayError>) -> Result<(), ContactError> {
        let note = self.contact.finish_submit(outcome)?;
        self.pending.push(StageEvent::Notification(note));
        Ok(())
    }

    pub fn submit_with<R: EmailRelay + ?Sized>(&mut self, relay: &mut R) -> Result<(), ContactError> {
        let request = self.begin_submit()?;
        let outcome = relay.send(&request);
        self.finish_submit(outcome)
    }

    /// Copy `email` to the clipboard and start the check-mark timer.
    pub fn copy_email(&mut self, email: &str) {
        let effects = self.copy.copy(self.clock_ms, email);
        self.pending.push(StageEvent::ClipboardWrite {
            text: effects.clipboard_text,
        });
        self.pending
            .push(StageEvent::Notification(effects.notification));
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.nav.toggle_menu()
    }

    /// Follow a nav link; unknown anchors are ignored.
    pub fn navigate(&mut self, href: &str) -> Option<ScrollCommand> {
        let cmd = self.nav.navigate(href, &self.anchors)?;
        self.pending.push(StageEvent::ScrollTo {
            target: cmd.clone(),
        });
        Some(cmd)
    }

    pub fn scroll_to_top(&mut self) {
        let target = self.nav.scroll_to_top();
        self.pending.push(StageEvent::ScrollTo { target });
    }

    // ---- tick ----

    /// Apply `inputs`, advance the clock by `dt` seconds, and report what
    /// changed. Springs advance by at most `Config::max_frame_dt` per tick.
    pub fn update(&mut self, dt: f32, inputs: Inputs) -> &Outputs {
        self.outputs.clear();
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.clock_ms += f64::from(dt) * 1000.0;
        let spring_dt = dt.min(self.cfg.max_frame_dt);

        for input in &inputs.intersections {
            self.apply_intersection(input);
        }
        for input in &inputs.pointer {
            self.apply_pointer(input);
        }
        for input in &inputs.carousel {
            self.apply_carousel(input);
        }
        if let Some(y) = inputs.scroll_y {
            if self.nav.on_scroll(y) {
                self.outputs.changes.push(Change::NavScrolled {
                    scrolled: self.nav.is_scrolled(),
                });
            }
        }

        for (id, tilt) in self.tilts.iter_mut() {
            let before = tilt.pose();
            let pose = tilt.step(spring_dt);
            if pose != before {
                self.outputs.changes.push(Change::Tilt { id: *id, pose });
            }
        }

        let indicator = self.copy.indicator(self.clock_ms);
        if indicator != self.copy_indicator {
            self.copy_indicator = indicator;
            self.outputs.changes.push(Change::CopyIndicator { indicator });
        }

        self.outputs.events.append(&mut self.pending);
        &self.outputs
    }

    fn warn_unknown(&mut self, err: StageError) {
        warn!("stage: {err}");
        self.outputs.warnings.push(err.to_string());
    }

    fn apply_intersection(&mut self, input: &IntersectionInput) {
        let entry = IntersectionEntry {
            target: input.target,
            viewport: input.viewport,
        };
        let Some(pos) = self.reveals.iter().position(|(r, _)| *r == input.reveal) else {
            self.warn_unknown(StageError::UnknownReveal(input.reveal));
            return;
        };
        let reveal = &mut self.reveals[pos].1;
        if reveal.observe(&entry) {
            let phase = reveal.phase();
            self.outputs.changes.push(Change::Reveal {
                id: input.reveal,
                phase,
            });
            self.outputs
                .events
                .push(StageEvent::Revealed { id: input.reveal });
        }
    }

    fn apply_pointer(&mut self, input: &PointerInput) {
        let Some(pos) = self.tilts.iter().position(|(t, _)| *t == input.tilt) else {
            self.warn_unknown(StageError::UnknownTilt(input.tilt));
            return;
        };
        let tilt = &mut self.tilts[pos].1;
        match input.event {
            PointerEvent::Enter => tilt.pointer_enter(),
            PointerEvent::Move { pointer, bounds } => tilt.pointer_move(pointer, bounds),
            PointerEvent::Leave => tilt.pointer_leave(),
        }
    }

    fn apply_carousel(&mut self, input: &CarouselInput) {
        let id = match input {
            CarouselInput::Settled { carousel, .. }
            | CarouselInput::Next { carousel }
            | CarouselInput::Previous { carousel } => *carousel,
        };
        let Some(pos) = self.carousels.iter().position(|(c, _)| *c == id) else {
            self.warn_unknown(StageError::UnknownCarousel(id));
            return;
        };
        let tracker = &mut self.carousels[pos].1;
        let before = tracker.selected_index();
        match input {
            CarouselInput::Settled { index, .. } => {
                tracker.on_settle(*index);
                self.outputs.events.push(StageEvent::CarouselSettled {
                    id,
                    index: tracker.selected_index(),
                });
            }
            CarouselInput::Next { .. } => {
                tracker.next();
            }
            CarouselInput::Previous { .. } => {
                tracker.previous();
            }
        }
        let selected = tracker.selected_index();
        if selected != before {
            self.outputs
                .changes
                .push(Change::Carousel { id, selected });
        }
    }
}
