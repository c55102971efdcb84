//! Criterion benchmarks for Pixelbrawl critical paths
//!
//! Benchmarks the operations sheet generation is built from:
//! - Draw: glow and outline passes
//! - Characters: single poses and full sheets
//! - Effects: full effect sequences
//! - Renderer: frame and strip rasterization
//! - Color: parsing the emitted color strings

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pixelbrawl::characters::{build_sheet, Archetype, Brawler, Duelist};
use pixelbrawl::color::{parse_color, Color};
use pixelbrawl::draw::{apply_glow, compute_outline, fill_disc};
use pixelbrawl::effects::Effect;
use pixelbrawl::frame::{Frame, FrameClass};
use pixelbrawl::pose::{ArmPosition, LegPosition, PoseConfig, TorsoLean, Weapon};
use pixelbrawl::renderer::{frame_to_image, render_animation_strip};
use pixelbrawl::transforms::{mirror_horizontal, scale};

// =============================================================================
// Test Data Generators
// =============================================================================

/// A frame with a filled disc in the middle, ready to be outlined
fn make_disc_frame(size: usize) -> Frame {
    let mut frame = Frame::new(size, size);
    let center = (size / 2) as i32;
    fill_disc(&mut frame, center, center, center / 2, Color::rgb(240, 120, 32));
    frame
}

/// The busiest pose: burst, aura, weapon and lean all on
fn busy_pose() -> PoseConfig {
    PoseConfig::new(
        ArmPosition::Forward,
        ArmPosition::Up,
        LegPosition::Forward,
        LegPosition::Air,
    )
    .lean(TorsoLean::Forward)
    .burst()
    .aura()
    .weapon(Weapon::LightningBlade)
}

// =============================================================================
// Draw Benchmarks
// =============================================================================

fn bench_draw(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw");

    for radius in [4, 8, 12].iter() {
        group.bench_with_input(BenchmarkId::new("apply_glow", radius), radius, |b, &radius| {
            b.iter(|| {
                let mut frame = Frame::blank(FrameClass::Effect);
                apply_glow(&mut frame, 16, 16, black_box(radius), [159, 225, 255], 0.6);
                frame
            })
        });
    }

    for size in [24, 32, 64].iter() {
        let frame = make_disc_frame(*size);
        group.throughput(Throughput::Elements((*size * *size) as u64));
        group.bench_with_input(
            BenchmarkId::new("compute_outline", format!("{}x{}", size, size)),
            &frame,
            |b, frame| b.iter(|| compute_outline(black_box(frame), Color::rgb(20, 18, 20))),
        );
    }

    group.finish();
}

// =============================================================================
// Generation Benchmarks
// =============================================================================

fn bench_characters(c: &mut Criterion) {
    let mut group = c.benchmark_group("characters");
    let pose = busy_pose();

    for archetype in Archetype::ALL {
        group.bench_function(BenchmarkId::new("draw_pose", archetype.name()), |b| {
            b.iter(|| archetype.draw_pose(black_box(&pose)))
        });
    }

    group.bench_function("build_sheet/brawler", |b| b.iter(|| build_sheet(&Brawler)));
    group.bench_function("build_sheet/duelist", |b| b.iter(|| build_sheet(&Duelist)));

    group.finish();
}

fn bench_effects(c: &mut Criterion) {
    let mut group = c.benchmark_group("effects");

    for effect in Effect::ALL {
        group.bench_function(effect.name(), |b| b.iter(|| black_box(effect).frames()));
    }

    group.finish();
}

// =============================================================================
// Renderer / Transform Benchmarks
// =============================================================================

fn bench_renderer(c: &mut Criterion) {
    let mut group = c.benchmark_group("renderer");
    let sheet = Archetype::Duelist.sheet();
    let frame = sheet.special.frame_at(0);

    group.bench_function("frame_to_image", |b| b.iter(|| frame_to_image(black_box(frame))));
    group.bench_function("run_strip", |b| {
        b.iter(|| render_animation_strip(black_box(&sheet.run), None))
    });

    for factor in [2u32, 4, 8].iter() {
        group.bench_with_input(BenchmarkId::new("scale", factor), factor, |b, &factor| {
            b.iter(|| scale(black_box(frame), factor))
        });
    }
    group.bench_function("mirror_horizontal", |b| {
        b.iter(|| mirror_horizontal(black_box(frame)))
    });

    group.finish();
}

// =============================================================================
// Color Parsing Benchmarks
// =============================================================================

fn bench_color(c: &mut Criterion) {
    let mut group = c.benchmark_group("color");

    // Hex colors (fast path)
    group.bench_function("parse_hex_6", |b| b.iter(|| parse_color(black_box("#f47920"))));

    // Translucent pixels (uses lightningcss)
    group.bench_function("parse_rgba", |b| {
        b.iter(|| parse_color(black_box("rgba(102,224,255,0.45)")))
    });

    group.bench_function("display_rgba", |b| {
        let color = Color::rgba(102, 224, 255, 45);
        b.iter(|| black_box(color).to_string())
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_draw,
    bench_characters,
    bench_effects,
    bench_renderer,
    bench_color
);

criterion_main!(benches);
