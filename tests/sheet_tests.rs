//! Library-level tests over the generated sheets
//!
//! These exercise whole sheets through the public API: frame geometry, the
//! pixel contract, transforms and cross-build determinism.

use pixelbrawl::animation::Action;
use pixelbrawl::catalog::SheetId;
use pixelbrawl::characters::{build_sheet, Archetype, Brawler, Duelist};
use pixelbrawl::color::{Color, PixelColor};
use pixelbrawl::draw::{apply_glow, compute_outline};
use pixelbrawl::effects::{Effect, CHAKRA_SPHERE};
use pixelbrawl::export::{frames_json, ExportOptions};
use pixelbrawl::frame::{Frame, FrameClass};
use pixelbrawl::transforms::{frame_from_palette, mirror_horizontal, scale, SymbolPalette};
use sha2::{Digest, Sha256};

fn all_frames() -> Vec<(SheetId, &'static Frame)> {
    SheetId::ALL
        .into_iter()
        .flat_map(|sheet| {
            sheet
                .animations()
                .into_iter()
                .flat_map(move |entry| entry.animation.frames().iter().map(move |f| (sheet, f)))
        })
        .collect()
}

fn digest(sheet: SheetId) -> Vec<u8> {
    let options = ExportOptions {
        pretty: false,
        ..Default::default()
    };
    let json = frames_json(sheet, &options).unwrap();
    Sha256::digest(json.as_bytes()).to_vec()
}

#[test]
fn test_scenario_idle_animation() {
    for archetype in Archetype::ALL {
        let idle = archetype.sheet().get(Action::Idle);
        assert_eq!(idle.len(), 2, "{}", archetype);
        assert_eq!(idle.frame_duration_ms(), 250);
        for frame in idle.frames() {
            assert_eq!(frame.dimensions(), (24, 24));
        }
    }
}

#[test]
fn test_scenario_orb_effect() {
    let orb = &CHAKRA_SPHERE.animation;
    assert_eq!(orb.len(), 6);
    assert_eq!(orb.frame_duration_ms(), 60);
    for frame in orb.frames() {
        assert_eq!(frame.dimensions(), (32, 32));
        assert!(frame.is_filled(16, 16));
    }
}

#[test]
fn test_scenario_symbol_grid() {
    let white: Color = "#fff".parse().unwrap();
    let palette = SymbolPalette::from([('A', Some(white)), ('B', None)]);
    let frame = frame_from_palette(&["AB", "BA"], &palette).unwrap();

    let json = serde_json::to_value(&frame).unwrap();
    assert_eq!(json, serde_json::json!([["#ffffff", null], [null, "#ffffff"]]));
}

#[test]
fn test_frames_match_sheet_class() {
    for (sheet, frame) in all_frames() {
        assert_eq!(frame.dimensions(), sheet.frame_class().dimensions(), "{}", sheet);
    }
}

#[test]
fn test_every_cell_is_a_valid_color() {
    for (sheet, frame) in all_frames() {
        for color in frame.colors() {
            let text = color.to_string();
            let reparsed: Color = text
                .parse()
                .unwrap_or_else(|e| panic!("{} emitted '{}': {}", sheet, text, e));
            assert_eq!(reparsed, color);
        }
    }
}

#[test]
fn test_character_sheets_have_every_action() {
    for archetype in Archetype::ALL {
        let sheet = archetype.sheet();
        let actions: Vec<Action> = sheet.iter().map(|(action, _)| action).collect();
        assert_eq!(actions, Action::ALL.to_vec());
        for (action, animation) in sheet.iter() {
            assert!(!animation.is_empty(), "{} {}", archetype, action);
            assert!(animation.frame_duration_ms() > 0);
        }
    }
}

#[test]
fn test_mirror_round_trip_on_real_frames() {
    for (_, frame) in all_frames() {
        assert_eq!(&mirror_horizontal(&mirror_horizontal(frame)), frame);
    }
}

#[test]
fn test_scale_law_on_real_frames() {
    let frame = Archetype::Duelist.sheet().get(Action::Special).frame_at(0);
    assert_eq!(&scale(frame, 1), frame);

    for k in [2usize, 3] {
        let scaled = scale(frame, k as u32);
        assert_eq!(scaled.dimensions(), (24 * k, 24 * k));
        for y in 0..24 * k {
            for x in 0..24 * k {
                assert_eq!(
                    scaled.get(x as i32, y as i32),
                    frame.get((x / k) as i32, (y / k) as i32)
                );
            }
        }
    }
}

#[test]
fn test_outline_never_touches_filled_or_isolated_pixels() {
    let outline = Color::rgb(0, 0, 0);
    for (_, frame) in all_frames().into_iter().take(20) {
        let outlined = compute_outline(frame, outline);
        for y in 0..frame.height() as i32 {
            for x in 0..frame.width() as i32 {
                if frame.is_filled(x, y) {
                    assert_eq!(outlined.get(x, y), frame.get(x, y));
                    continue;
                }
                let touches = (-1..=1)
                    .flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
                    .any(|(dx, dy)| (dx, dy) != (0, 0) && frame.is_filled(x + dx, y + dy));
                let expected: PixelColor = touches.then_some(outline);
                assert_eq!(outlined.get(x, y), expected, "({}, {})", x, y);
            }
        }
    }
}

#[test]
fn test_zero_intensity_glow_is_noop() {
    let mut frame = Archetype::Brawler.sheet().idle.frame_at(0).clone();
    let before = frame.clone();
    apply_glow(&mut frame, 12, 12, 8, [255, 255, 255], 0.0);
    assert_eq!(frame, before);
}

#[test]
fn test_glow_fades_to_boundary() {
    let mut frame = Frame::blank(FrameClass::Effect);
    apply_glow(&mut frame, 16, 16, 10, [255, 255, 255], 1.0);

    let alphas: Vec<u8> = (0..=10)
        .map(|d| {
            frame
                .get(16 + d, 16)
                .and_then(|c| c.opacity)
                .map(|o| o.hundredths())
                .unwrap_or_default()
        })
        .collect();
    assert!(alphas.windows(2).all(|w| w[0] > w[1]), "{:?}", alphas);
    assert_eq!(alphas[0], 100);
    assert_eq!(alphas[10], 0);
}

/// SHA-256 of each sheet's compact frame export. Any change to primitive
/// order or pixel math shows up here.
const GOLDEN_DIGESTS: [(&str, &str); 5] = [
    ("brawler", "9a6a636bb463f4cf239c27a586f587b26e035f54a3576fd1e28cb1b899cefa3c"),
    ("duelist", "af41aa7d1f42c34bcf823366ce4ebaa3a69eeeb46afa0aa2123a8ef469628239"),
    ("chakra_sphere", "807aaf5ef5f5a68f4f789872c7fbe7d5873d7dd37f2e0f4aa884e89ad07f3662"),
    ("lightning_blade", "d6c98dd0ab30897619a2ec5eb0bf003e2d139a526dbe6a4f277c43b2eb1e97ad"),
    ("impact", "60c341fc839ec08d185ff5fb71eda12ebeb619c5ca4b513bf2ede09a35eb64e6"),
];

#[test]
fn test_sheets_match_golden_digests() {
    for (name, expected) in GOLDEN_DIGESTS {
        let sheet: SheetId = name.parse().unwrap();
        let actual: String = digest(sheet).iter().map(|b| format!("{:02x}", b)).collect();
        assert_eq!(actual, expected, "{} frames changed", name);
    }
}

#[test]
fn test_fresh_builds_equal_shared_sheets() {
    assert_eq!(&build_sheet(&Brawler), Archetype::Brawler.sheet());
    assert_eq!(&build_sheet(&Duelist), Archetype::Duelist.sheet());
    for effect in Effect::ALL {
        assert_eq!(&effect.build_sheet(), effect.sheet());
    }
}

#[test]
fn test_sheets_differ_between_fighters() {
    let brawler = SheetId::Character(Archetype::Brawler);
    let duelist = SheetId::Character(Archetype::Duelist);
    assert_ne!(digest(brawler), digest(duelist));
}
