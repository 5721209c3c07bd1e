use folio_content_core::ContentRecord;
use folio_interaction_core::{
    clipboard::CopyIndicator,
    config::Config,
    contact::{ContactField, EmailRelay, RelayConfig, RelayRequest},
    error::{ContactError, RelayError, StageError},
    geometry::{Point, Rect},
    inputs::{CarouselInput, Inputs, IntersectionInput, PointerEvent, PointerInput},
    nav::ScrollCommand,
    outputs::{Change, NotificationKind, StageEvent},
    ids::TiltId,
    reveal::{RevealPhase, StaggerPreset},
    stage::Stage,
    tilt::{TiltPreset, TiltTracker},
};
use folio_test_fixtures::content;

const FRAME: f32 = 1.0 / 60.0;

fn configured() -> Config {
    Config {
        relay: Some(RelayConfig {
            service_id: "svc".into(),
            template_id: "tpl".into(),
            public_key: "key".into(),
        }),
        ..Config::default()
    }
}

fn viewport() -> Rect {
    Rect::new(0.0, 0.0, 1280.0, 720.0)
}

struct Relay(Result<(), RelayError>);

impl EmailRelay for Relay {
    fn send(&mut self, _request: &RelayRequest) -> Result<(), RelayError> {
        self.0.clone()
    }
}

#[test]
fn reveal_change_is_reported_once() {
    let mut stage = Stage::new(Config::default());
    let about = stage.add_reveal(None);
    let skills = stage.add_reveal(None);

    let seen = |top: f32| Inputs {
        intersections: vec![IntersectionInput {
            reveal: about,
            target: Rect::new(0.0, top, 1280.0, 400.0),
            viewport: viewport(),
        }],
        ..Inputs::default()
    };

    let out = stage.update(FRAME, seen(200.0));
    assert_eq!(
        out.changes,
        vec![Change::Reveal {
            id: about,
            phase: RevealPhase::Visible
        }]
    );
    assert!(out.events.contains(&StageEvent::Revealed { id: about }));

    let out = stage.update(FRAME, seen(-3000.0));
    assert!(out.changes.is_empty());
    let out = stage.update(FRAME, seen(200.0));
    assert!(out.changes.is_empty());

    assert!(stage.reveal(about).unwrap().state().has_revealed);
    assert!(!stage.reveal(skills).unwrap().state().has_revealed);
}

#[test]
fn tilt_pose_streams_until_settled() {
    let mut stage = Stage::new(Config::default());
    let portrait = stage.add_tilt(TiltPreset::Portrait);
    let bounds = Rect::new(0.0, 0.0, 320.0, 320.0);

    let out = stage.update(
        FRAME,
        Inputs {
            pointer: vec![
                PointerInput {
                    tilt: portrait,
                    event: PointerEvent::Enter,
                },
                PointerInput {
                    tilt: portrait,
                    event: PointerEvent::Move {
                        pointer: Point::new(320.0, 160.0),
                        bounds,
                    },
                },
            ],
            ..Inputs::default()
        },
    );
    match out.changes.as_slice() {
        [Change::Tilt { id, pose }] => {
            assert_eq!(*id, portrait);
            assert!(pose.rotate_y > 0.0 && pose.rotate_y < 8.0);
            assert!(pose.glow.unwrap() > 0.5);
        }
        other => panic!("expected one tilt change, got {other:?}"),
    }

    for _ in 0..600 {
        stage.update(FRAME, Inputs::default());
    }
    let out = stage.update(FRAME, Inputs::default());
    let still_moving = out
        .changes
        .iter()
        .any(|c| matches!(c, Change::Tilt { pose, .. } if (pose.rotate_y - 8.0).abs() > 1.0e-3));
    assert!(!still_moving);

    stage.update(
        FRAME,
        Inputs {
            pointer: vec![PointerInput {
                tilt: portrait,
                event: PointerEvent::Leave,
            }],
            ..Inputs::default()
        },
    );
    let targets = stage.tilt(portrait).unwrap().targets();
    assert_eq!(targets.rotate_x, 0.0);
    assert_eq!(targets.rotate_y, 0.0);
}

#[test]
fn carousel_settle_and_wrap() {
    let mut stage = Stage::new(Config::default());
    let gallery = stage.add_carousel(3, true);

    let out = stage.update(
        FRAME,
        Inputs {
            carousel: vec![CarouselInput::Previous { carousel: gallery }],
            ..Inputs::default()
        },
    );
    assert_eq!(
        out.changes,
        vec![Change::Carousel {
            id: gallery,
            selected: 2
        }]
    );

    let out = stage.update(
        FRAME,
        Inputs {
            carousel: vec![CarouselInput::Settled {
                carousel: gallery,
                index: 1,
            }],
            ..Inputs::default()
        },
    );
    assert!(out.events.contains(&StageEvent::CarouselSettled {
        id: gallery,
        index: 1
    }));
    assert_eq!(stage.carousel(gallery).unwrap().selected_index(), 1);
}

#[test]
fn unmounted_carousel_reports_warning() {
    let mut stage = Stage::new(Config::default());
    let gallery = stage.add_carousel(3, true);
    stage.remove_carousel(gallery).unwrap();
    assert!(stage.remove_carousel(gallery).is_err());

    let out = stage.update(
        FRAME,
        Inputs {
            carousel: vec![CarouselInput::Settled {
                carousel: gallery,
                index: 2,
            }],
            ..Inputs::default()
        },
    );
    assert!(out.changes.is_empty());
    assert_eq!(out.warnings.len(), 1);
}

#[test]
fn contact_notifications_surface_on_next_tick() {
    let mut stage = Stage::new(configured());
    stage.edit_contact(ContactField::Name, "Ada");
    stage.edit_contact(ContactField::Email, "ada@example.com");
    stage.edit_contact(ContactField::Message, "Hello");

    let request = stage.begin_submit().unwrap();
    assert_eq!(request.template_id, "tpl");
    assert!(!stage.contact().submit_enabled());
    stage.finish_submit(Ok(())).unwrap();

    let out = stage.update(FRAME, Inputs::default());
    let notes: Vec<_> = out.notifications().collect();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].kind, NotificationKind::Success);
    assert!(stage.contact().fields().name.is_empty());

    let out = stage.update(FRAME, Inputs::default());
    assert_eq!(out.notifications().count(), 0);
}

#[test]
fn failed_relay_keeps_input() {
    let mut stage = Stage::new(configured());
    stage.edit_contact(ContactField::Name, "Ada");
    stage.edit_contact(ContactField::Email, "ada@example.com");
    stage.edit_contact(ContactField::Message, "Hello");
    stage
        .submit_with(&mut Relay(Err(RelayError::Rejected("quota".into()))))
        .unwrap();

    let out = stage.update(FRAME, Inputs::default());
    let notes: Vec<_> = out.notifications().collect();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].kind, NotificationKind::Error);
    assert_eq!(stage.contact().fields().message, "Hello");
    assert!(stage.contact().submit_enabled());
}

#[test]
fn submit_without_relay_config_fails_fast() {
    let mut stage = Stage::new(Config::default());
    assert_eq!(stage.begin_submit(), Err(ContactError::RelayNotConfigured));
}

#[test]
fn copy_indicator_follows_stage_clock() {
    let mut stage = Stage::new(Config::default());
    stage.copy_email("me@example.com");
    let out = stage.update(0.0, Inputs::default());
    assert!(out.events.contains(&StageEvent::ClipboardWrite {
        text: "me@example.com".into()
    }));
    assert!(out.changes.contains(&Change::CopyIndicator {
        indicator: CopyIndicator::Check
    }));

    stage.update(1.0, Inputs::default());
    stage.copy_email("me@example.com");
    stage.update(1.5, Inputs::default());
    assert_eq!(stage.copy_indicator(), CopyIndicator::Check);
    let out = stage.update(0.5, Inputs::default());
    assert!(out.changes.contains(&Change::CopyIndicator {
        indicator: CopyIndicator::Copy
    }));
}

#[test]
fn navigation_uses_content_anchors() {
    let json = content::json("portfolio").unwrap();
    let record = ContentRecord::from_json(&json).unwrap();
    let mut stage = Stage::for_landing(Config::default(), &record);

    stage.toggle_menu();
    assert_eq!(
        stage.navigate("#projects"),
        Some(ScrollCommand::Anchor {
            id: "projects".into()
        })
    );
    assert!(!stage.nav().is_menu_open());
    assert_eq!(stage.navigate("#missing"), None);
    stage.scroll_to_top();

    let out = stage.update(
        FRAME,
        Inputs {
            scroll_y: Some(120.0),
            ..Inputs::default()
        },
    );
    let scrolls: Vec<_> = out
        .events
        .iter()
        .filter(|e| matches!(e, StageEvent::ScrollTo { .. }))
        .collect();
    assert_eq!(scrolls.len(), 2);
    assert!(out
        .changes
        .contains(&Change::NavScrolled { scrolled: true }));
}

#[test]
fn inverted_bounds_from_host_keep_axis_neutral() {
    let mut stage = Stage::new(Config::default());
    let card = stage.add_tilt(TiltPreset::ProjectCard);
    let inputs: Inputs = serde_json::from_value(serde_json::json!({
        "pointer": [
            { "tilt": card.0, "event": { "type": "enter" } },
            { "tilt": card.0, "event": {
                "type": "move",
                "pointer": { "x": 8.0, "y": 40.0 },
                "bounds": { "left": 10.0, "top": 0.0, "width": -4.0, "height": 40.0 }
            } }
        ]
    }))
    .unwrap();

    let out = stage.update(FRAME, inputs);
    assert!(out.warnings.is_empty());
    let targets = stage.tilt(card).unwrap().targets();
    assert_eq!(targets.rotate_y, 0.0);
    assert_eq!(targets.rotate_x, -5.0);
}

fn pointer_at_corner(tilt: TiltId) -> Inputs {
    Inputs {
        pointer: vec![
            PointerInput {
                tilt,
                event: PointerEvent::Enter,
            },
            PointerInput {
                tilt,
                event: PointerEvent::Move {
                    pointer: Point::new(0.0, 0.0),
                    bounds: Rect::new(0.0, 0.0, 200.0, 200.0),
                },
            },
        ],
        ..Inputs::default()
    }
}

#[test]
fn long_pause_caps_spring_step_but_not_clock() {
    let mut resumed = Stage::new(Config::default());
    let a = resumed.add_tilt(TiltPreset::Portrait);
    resumed.copy_email("me@example.com");
    resumed.update(600.0, pointer_at_corner(a));

    let mut steady = Stage::new(Config::default());
    let b = steady.add_tilt(TiltPreset::Portrait);
    steady.update(0.1, pointer_at_corner(b));

    assert_eq!(resumed.clock_ms(), 600_000.0);
    assert_eq!(resumed.copy_indicator(), CopyIndicator::Copy);
    assert_eq!(resumed.tilt(a).unwrap().pose(), steady.tilt(b).unwrap().pose());
}

#[test]
fn section_keyframes_follow_reveal() {
    let mut stage = Stage::new(Config::default());
    let section = stage.add_reveal(None);

    let hidden = stage
        .reveal_keyframe(section, 2, StaggerPreset::ExperienceDot)
        .unwrap();
    assert_eq!(hidden.phase, RevealPhase::Hidden);
    assert_eq!(stage.skill_bar_width(section, 85), Ok(0.0));

    stage.update(
        FRAME,
        Inputs {
            intersections: vec![IntersectionInput {
                reveal: section,
                target: Rect::new(0.0, 200.0, 1280.0, 400.0),
                viewport: viewport(),
            }],
            ..Inputs::default()
        },
    );

    let dot = stage
        .reveal_keyframe(section, 2, StaggerPreset::ExperienceDot)
        .unwrap();
    assert_eq!(dot.phase, RevealPhase::Visible);
    assert!((dot.delay - 0.6).abs() < 1.0e-6);
    let bar = stage.skill_keyframe(section, 1, 3).unwrap();
    assert!((bar.delay - 0.25).abs() < 1.0e-6);
    assert_eq!(stage.skill_bar_width(section, 85), Ok(85.0));

    stage.remove_reveal(section).unwrap();
    assert_eq!(
        stage.skill_bar_width(section, 85),
        Err(StageError::UnknownReveal(section))
    );
}
