//! End-to-end pipeline scenarios and a raster simulation of the draw list.
//!
//! The simulation paints every command into a grid of pixels, sampling each
//! pixel at its center. Image pixels remember which source pixel they came
//! from, so a wrong placement, a missing clip, or a band painted in the
//! wrong place shows up as a mismatched pixel.

use framelayout::*;

// ---- Pixel simulation ----

/// What ended up on one canvas pixel.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Pixel {
    Color(Rgb),
    /// Source pixel at (x, y) of the image.
    Image(u32, u32),
}

struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl Canvas {
    fn get(&self, x: u32, y: u32) -> Pixel {
        assert!(
            x < self.width && y < self.height,
            "({x},{y}) out of bounds {}x{}",
            self.width,
            self.height
        );
        self.pixels[(y * self.width + x) as usize]
    }

    fn iter(&self) -> impl Iterator<Item = (u32, u32, Pixel)> + '_ {
        self.pixels.iter().enumerate().map(|(i, &p)| {
            let i = i as u32;
            (i % self.width, i / self.width, p)
        })
    }
}

/// Pixel centers covered by `rect` grown by `grow` on every side.
fn covers(rect: &Rect, grow: f64, cx: f64, cy: f64) -> bool {
    cx >= rect.x - grow
        && cx < rect.right() + grow
        && cy >= rect.y - grow
        && cy < rect.bottom() + grow
}

/// Set every pixel inside `clip` for which `test` yields a value.
fn paint(canvas: &mut Canvas, clip: Option<Rect>, test: &dyn Fn(f64, f64) -> Option<Pixel>) {
    for y in 0..canvas.height {
        for x in 0..canvas.width {
            let (cx, cy) = (x as f64 + 0.5, y as f64 + 0.5);
            if clip.is_some_and(|c| !covers(&c, 0.0, cx, cy)) {
                continue;
            }
            if let Some(p) = test(cx, cy) {
                canvas.pixels[(y * canvas.width + x) as usize] = p;
            }
        }
    }
}

/// Paint a scene the way a 2D canvas would, one command at a time.
fn rasterize(scene: &Scene, image: Option<ImageAsset>) -> Canvas {
    let (width, height) = scene.canvas_pixels();
    let mut canvas = Canvas {
        width,
        height,
        pixels: vec![Pixel::Color(scene.background); (width * height) as usize],
    };
    let mut clips: Vec<Rect> = Vec::new();

    for cmd in &scene.commands {
        let clip = clips.last().copied();
        match *cmd {
            DrawCommand::FillRect { rect, color } => {
                paint(&mut canvas, clip, &|cx, cy| {
                    covers(&rect, 0.0, cx, cy).then_some(Pixel::Color(color))
                });
            }
            DrawCommand::StrokeRect {
                rect,
                color,
                line_width,
            } => {
                let half = line_width / 2.0;
                paint(&mut canvas, clip, &|cx, cy| {
                    let on_band = covers(&rect, half, cx, cy)
                        && !(rect.width > line_width
                            && rect.height > line_width
                            && covers(&rect, -half, cx, cy));
                    on_band.then_some(Pixel::Color(color))
                });
            }
            DrawCommand::Clip(rect) => clips.push(rect),
            DrawCommand::Unclip => {
                clips.pop();
            }
            DrawCommand::Image(rect) => {
                let img = image.expect("scene draws an image but none was given");
                paint(&mut canvas, clip, &|cx, cy| {
                    if !covers(&rect, 0.0, cx, cy) {
                        return None;
                    }
                    let sx = ((cx - rect.x) / rect.width * img.width as f64) as u32;
                    let sy = ((cy - rect.y) / rect.height * img.height as f64) as u32;
                    Some(Pixel::Image(sx.min(img.width - 1), sy.min(img.height - 1)))
                });
            }
        }
    }
    assert!(clips.is_empty(), "unbalanced clip");
    canvas
}

fn plan_and_paint(settings: Settings, image: Option<ImageAsset>) -> (Plan, Canvas) {
    let mut pipeline = Pipeline::new(settings);
    if let Some(img) = image {
        pipeline = pipeline.image(img);
    }
    let plan = pipeline.plan();
    let canvas = rasterize(&plan.scene, image);
    (plan, canvas)
}

const WOOD: Rgb = Rgb::new(139, 69, 19);
const CREAM: Rgb = Rgb::new(240, 235, 220);
const GREY: Rgb = Rgb::new(128, 128, 128);
const WALL: Rgb = Rgb::new(230, 225, 210);

/// 8×10 frame, 0.75in band, 6×8 mat, at the base scale of 38px/in:
/// outer (40,40) 361×437, inner (68.5,68.5) 304×380,
/// opening (106.5,106.5) 228×304.
fn colored_settings() -> Settings {
    Settings {
        frame_color: WOOD,
        mat_color: CREAM,
        background: GREY,
        wall: WALL,
        orientation: OrientationMode::Portrait,
        ..Settings::default()
    }
}

// ── scenarios ───────────────────────────────────────────────────────────

#[test]
fn sixteen_by_twenty_with_two_inch_border() {
    let settings = Settings {
        frame_size: Size::new(16.0, 20.0),
        frame_thickness: 0.75,
        border_preset: Some(2.0),
        ..Settings::default()
    };
    let plan = Pipeline::new(settings).plan();
    assert_eq!(plan.settings.mat_size, Size::new(12.0, 16.0));
    let px = plan.scale.pixels_per_inch;
    assert!(px < scale::BASE_SCALE);
    assert!(21.5 * px <= scale::MAX_HEIGHT_PX + 1e-9);
}

#[test]
fn five_by_seven_border_is_halved() {
    let mat = fit_mat(Size::new(5.0, 7.0), MatSizing::Border(2.0));
    assert_eq!(mat, Size::new(3.0, 5.0));
}

#[test]
fn zero_border_keeps_full_opening() {
    let mat = fit_mat(Size::new(16.0, 20.0), MatSizing::Border(0.0));
    assert_eq!(mat, Size::new(16.0, 20.0));
}

#[test]
fn pathological_borders_stay_inside_frame() {
    for (w, h) in [(5.0, 7.0), (8.0, 10.0), (16.0, 20.0), (0.5, 0.5), (40.0, 3.0)] {
        let frame = Size::new(w, h);
        for border in [0.0, 0.1, 2.0, w, h, w * 10.0, f64::INFINITY, f64::NAN, -3.0] {
            let mat = fit_mat(frame, MatSizing::Border(border));
            assert!(mat.width >= 0.0 && mat.width <= w, "{w}x{h} border={border}");
            assert!(mat.height >= 0.0 && mat.height <= h, "{w}x{h} border={border}");
        }
    }
}

#[test]
fn scale_properties() {
    for w in [1.0, 5.0, 9.0] {
        for h in [1.0, 7.0, 12.0] {
            assert_eq!(compute_scale(w, h, 0.75), scale::BASE_SCALE);
        }
    }
    for (w, h) in [(11.0, 14.0), (16.0, 20.0), (24.0, 36.0), (60.0, 10.0)] {
        let s = compute_scale(w, h, 1.5);
        assert!(s <= scale::BASE_SCALE);
        assert!((w + 3.0) * s <= 1600.0 + 1e-9);
        assert!((h + 3.0) * s <= 800.0 + 1e-9);
    }
}

#[test]
fn orientation_is_idempotent() {
    let frames = [Size::new(16.0, 20.0), Size::new(20.0, 16.0), Size::new(12.0, 12.0)];
    let modes = [
        OrientationMode::Auto,
        OrientationMode::Portrait,
        OrientationMode::Landscape,
    ];
    for frame in frames {
        for mode in modes {
            for aspect in [None, Some(0.75), Some(1.0), Some(1.5)] {
                let once = resolve_orientation(frame, mode, aspect);
                let twice = resolve_orientation(once.frame, mode, aspect);
                assert!(!twice.changed, "{frame:?} {mode:?} {aspect:?}");
                assert_eq!(twice.frame, once.frame);
            }
        }
    }
}

#[test]
fn fit_and_fill_in_portrait_opening() {
    let opening = Rect::new(0.0, 0.0, 300.0, 400.0);

    let fit = place_image(opening, 4000, 3000, ImagePlacement::Fit).unwrap();
    assert_eq!(fit, Rect::new(0.0, 87.5, 300.0, 225.0));

    let fill = place_image(opening, 4000, 3000, ImagePlacement::Fill).unwrap();
    assert_eq!(fill.height, 400.0);
    assert!((fill.width - 533.333).abs() < 1e-3);
    assert!((fill.x + 116.667).abs() < 1e-3);
    assert_eq!(fill.y, 0.0);
}

#[test]
fn status_line_for_resolved_frame() {
    let plan = Pipeline::new(Settings::default()).plan();
    assert_eq!(
        plan.scale.to_string(),
        "Scale: 1 inch = 38.0 pixels (40% of actual size)"
    );
}

// ── raster: bands and colors ────────────────────────────────────────────

#[test]
fn bands_paint_expected_colors() {
    let (plan, canvas) = plan_and_paint(colored_settings(), None);
    assert_eq!(plan.scene.canvas_pixels(), (441, 517));

    // wall
    assert_eq!(canvas.get(5, 5), Pixel::Color(WALL));
    assert_eq!(canvas.get(440, 516), Pixel::Color(WALL));
    // frame band, away from both bevels
    assert_eq!(canvas.get(54, 250), Pixel::Color(WOOD));
    assert_eq!(canvas.get(250, 54), Pixel::Color(WOOD));
    // outer bevel: 2px dark stroke on the outer edge
    assert_eq!(canvas.get(40, 250), Pixel::Color(Rgb::new(115, 45, 0)));
    // mat board between the band and the opening
    assert_eq!(canvas.get(80, 250), Pixel::Color(CREAM));
    // mat edge stroke on the opening boundary
    assert_eq!(canvas.get(106, 250), Pixel::Color(Rgb::new(220, 215, 200)));
    // opening shows the background
    assert_eq!(canvas.get(220, 250), Pixel::Color(GREY));
}

#[test]
fn hidden_mat_paints_no_mat_color() {
    let settings = Settings {
        show_mat: false,
        ..colored_settings()
    };
    let (plan, canvas) = plan_and_paint(settings, None);
    assert_eq!(plan.scene.geometry.opening, plan.scene.geometry.inner);
    assert!(canvas.iter().all(|(_, _, p)| p != Pixel::Color(CREAM)));
    assert_eq!(canvas.get(80, 250), Pixel::Color(GREY));
}

// ── raster: image placement and clipping ────────────────────────────────

#[test]
fn fill_image_is_clipped_to_opening() {
    let image = ImageAsset::new(4000, 3000);
    let settings = Settings {
        placement: ImagePlacement::Fill,
        ..colored_settings()
    };
    let (plan, canvas) = plan_and_paint(settings, Some(image));
    let opening = plan.scene.geometry.opening;
    assert_eq!(opening, Rect::new(106.5, 106.5, 228.0, 304.0));

    let drawn = plan.scene.geometry.image.unwrap();
    assert!(drawn.width > opening.width);

    let interior = opening.inset(1.0);
    for (x, y, p) in canvas.iter() {
        let (cx, cy) = (x as f64 + 0.5, y as f64 + 0.5);
        if matches!(p, Pixel::Image(..)) {
            assert!(covers(&opening, 0.0, cx, cy), "image leaked at ({x},{y})");
        }
        if covers(&interior, 0.0, cx, cy) {
            assert!(matches!(p, Pixel::Image(..)), "gap at ({x},{y}): {p:?}");
        }
    }

    // Centered crop: the middle of the opening samples the middle column.
    match canvas.get(220, 258) {
        Pixel::Image(sx, sy) => {
            assert!(sx.abs_diff(2000) <= 2, "sx={sx}");
            assert!(sy.abs_diff(1500) <= 10, "sy={sy}");
        }
        other => panic!("expected image, got {other:?}"),
    }
}

#[test]
fn fit_image_is_letterboxed() {
    let image = ImageAsset::new(4000, 3000);
    let (plan, canvas) = plan_and_paint(colored_settings(), Some(image));
    assert_eq!(plan.settings.frame_size, Size::new(8.0, 10.0));

    // 228 × 171 drawn at y = 106.5 + 66.5
    let drawn = plan.scene.geometry.image.unwrap();
    assert_eq!(drawn, Rect::new(106.5, 173.0, 228.0, 171.0));

    assert_eq!(canvas.get(220, 120), Pixel::Color(GREY));
    assert_eq!(canvas.get(220, 390), Pixel::Color(GREY));
    assert!(matches!(canvas.get(220, 250), Pixel::Image(..)));

    // Whole source width is visible.
    let columns: Vec<u32> = canvas
        .iter()
        .filter_map(|(_, _, p)| match p {
            Pixel::Image(sx, _) => Some(sx),
            _ => None,
        })
        .collect();
    assert!(columns.iter().min().is_some_and(|&m| m < 40));
    assert!(columns.iter().max().is_some_and(|&m| m > 3960));
}

#[test]
fn no_image_no_image_pixels() {
    let (_, canvas) = plan_and_paint(colored_settings(), None);
    assert!(canvas.iter().all(|(_, _, p)| matches!(p, Pixel::Color(_))));
}

// ── degenerate input ────────────────────────────────────────────────────

#[test]
fn degenerate_settings_still_render() {
    let settings = Settings {
        frame_size: Size::new(0.0, f64::NAN),
        frame_thickness: -1.0,
        mat_size: Size::new(f64::INFINITY, -4.0),
        ..colored_settings()
    };
    let (plan, canvas) = plan_and_paint(settings, Some(ImageAsset::new(640, 480)));
    assert_eq!(plan.scene.canvas_pixels(), (200, 200));
    assert_eq!(plan.scene.geometry.image, None);
    assert!(canvas.iter().all(|(_, _, p)| matches!(p, Pixel::Color(_))));
}

#[test]
fn upload_then_replan_is_stable() {
    let image = ImageAsset::new(4000, 3000);
    let settings = Settings {
        size_preset: SizePreset::parse("16x20"),
        border_preset: Some(2.0),
        ..Settings::default()
    };
    let first = Pipeline::new(settings).image_uploaded(image).plan();
    assert!(first.rotated);
    assert_eq!(first.settings.frame_size, Size::new(20.0, 16.0));
    assert_eq!(first.settings.mat_size, Size::new(16.0, 12.0));

    let second = Pipeline::new(first.settings).image(image).plan();
    assert!(!second.rotated);
    assert_eq!(second.scene, first.scene);
}
