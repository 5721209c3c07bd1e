//! Folio Interaction Core (engine-agnostic)
//!
//! The behavioural layer of the folio site: one-shot viewport reveal,
//! spring-filtered pointer tilt, loop-carousel selection, the contact form's
//! submit cycle, copy-to-clipboard feedback, navigation and routing. Every
//! controller owns only its own state. [`Stage`] hosts a page's worth of them
//! behind a fixed-tick `update(dt, Inputs) -> Outputs` contract for adapters.

pub mod carousel;
pub mod clipboard;
pub mod config;
pub mod contact;
pub mod error;
pub mod geometry;
pub mod hero;
pub mod ids;
pub mod inputs;
pub mod interp;
pub mod nav;
pub mod outputs;
pub mod reveal;
pub mod route;
pub mod spring;
pub mod stage;
pub mod tilt;

// Re-exports for consumers (adapters)
pub use carousel::{CarouselOptions, CarouselTracker, EmphasisConfig, SlideEmphasis};
pub use clipboard::{CopyEffects, CopyFeedback, CopyIndicator};
pub use config::Config;
pub use contact::{
    ContactField, ContactFields, ContactForm, EmailRelay, RelayConfig, RelayRequest, SubmitState,
};
pub use error::{ContactError, RelayError, StageError};
pub use geometry::{Point, Rect};
pub use hero::{HeroFrame, HeroParallax};
pub use ids::{CarouselId, RevealId, TiltId};
pub use inputs::{CarouselInput, Inputs, IntersectionInput, PointerEvent, PointerInput};
pub use interp::map_range;
pub use nav::{AnchorIndex, NavState, ScrollCommand};
pub use outputs::{Change, Notification, NotificationKind, Outputs, StageEvent};
pub use reveal::{
    GridStagger, IntersectionEntry, OnceReveal, RevealKeyframe, RevealMargin, RevealObserver,
    RevealPhase, RevealState, Stagger, StaggerPreset,
};
pub use route::{resolve_project, FallbackView, ProjectPage, ProjectView, Route};
pub use spring::{Spring, SpringConfig};
pub use stage::Stage;
pub use tilt::{GlowLevels, PointerPose, PointerTilt, TiltPose, TiltPreset, TiltRange, TiltTracker};
