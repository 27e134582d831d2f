use std::path::PathBuf;

use dmg_backdrop::{BackgroundComposer, Canvas, FontStack, ResolvedFonts, encode, theme};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn out_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("compose_png").join(name);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn compose_default() -> dmg_backdrop::FrameRgb8 {
    let fonts = FontStack::default_macos().resolve();
    let composer = BackgroundComposer::new(Canvas::dmg_default(), fonts).unwrap();
    composer.compose().unwrap()
}

#[test]
fn written_png_has_canvas_dimensions() {
    init_tracing();
    let path = out_dir("dims").join("background.png");
    encode::write_png(&compose_default(), &path).unwrap();

    let decoded = image::open(&path).unwrap().to_rgb8();
    assert_eq!(decoded.dimensions(), (540, 300));
}

#[test]
fn gradient_column_matches_formula_and_is_monotonic() {
    init_tracing();
    // Column x=2 is touched by no text or shape layer, so the decoded pixels
    // there are the raw gradient.
    let path = out_dir("gradient").join("background.png");
    encode::write_png(&compose_default(), &path).unwrap();
    let decoded = image::open(&path).unwrap().to_rgb8();

    let mut prev_blue = 0u8;
    for y in 0..300 {
        let px = decoded.get_pixel(2, y);
        let expected = theme::gradient_row(y, 300);
        assert_eq!((px[0], px[1], px[2]), (expected.r, expected.g, expected.b));
        assert!(px[2] >= prev_blue);
        prev_blue = px[2];
    }
    assert_ne!(decoded.get_pixel(2, 0), decoded.get_pixel(2, 299));
}

#[test]
fn arrow_and_silhouette_land_on_their_layout_positions() {
    init_tracing();
    let frame = compose_default();

    // Mid-shaft of the arrow and the interior of the cat body are fully
    // covered, so they carry the exact pass colors.
    assert_eq!(frame.pixel(345, 140).unwrap(), theme::ARROW_GRAY);
    assert_eq!(frame.pixel(70, 212).unwrap(), theme::SILHOUETTE_GRAY);
}

/// Horizontal extent of pixels differing from the gradient within a row band.
fn ink_extent(frame: &dmg_backdrop::FrameRgb8, y0: u32, y1: u32) -> Option<(u32, u32)> {
    let mut extent: Option<(u32, u32)> = None;
    for y in y0..y1 {
        let bg = theme::gradient_row(y, frame.height);
        for x in 0..frame.width {
            if frame.pixel(x, y).unwrap() != bg {
                extent = Some(match extent {
                    Some((lo, hi)) => (lo.min(x), hi.max(x)),
                    None => (x, x),
                });
            }
        }
    }
    extent
}

#[test]
fn text_layers_render_and_are_positioned() {
    init_tracing();
    let frame = compose_default();

    // Title band: ink exists, its span is centered to within a few pixels
    // (glyph side bearings and anti-aliasing shift the ink from the advance
    // box by well under that), and it carries the steel-blue accent. The
    // gradient keeps green == blue, so blue above green only occurs in
    // title ink.
    let (lo, hi) = ink_extent(&frame, 30, 58).expect("title band has no ink");
    let center = f64::from(lo + hi) / 2.0;
    assert!((center - 270.0).abs() <= 3.0, "title ink center off: {center}");
    let accent = (30..58)
        .flat_map(|y| (lo..=hi).map(move |x| (x, y)))
        .any(|(x, y)| {
            let p = frame.pixel(x, y).unwrap();
            p.b > p.g
        });
    assert!(accent, "no accent-tinted pixel in the title band");

    // Instruction band: centered as well.
    let (lo, hi) = ink_extent(&frame, 65, 82).expect("instruction band has no ink");
    let center = f64::from(lo + hi) / 2.0;
    assert!((center - 270.0).abs() <= 3.0, "instruction ink center off: {center}");

    // Version band: right-aligned against the 20 px inset.
    let (lo, hi) = ink_extent(&frame, 275, 292).expect("version band has no ink");
    assert!((505..=521).contains(&hi), "version right edge off: {hi}");
    assert!(lo > 400, "version ink reaches too far left: {lo}");
}

#[test]
fn repeated_runs_are_byte_identical() {
    init_tracing();
    let dir = out_dir("idempotent");
    let a = dir.join("a.png");
    let b = dir.join("b.png");

    encode::write_png(&compose_default(), &a).unwrap();
    encode::write_png(&compose_default(), &b).unwrap();

    assert_eq!(std::fs::read(&a).unwrap(), std::fs::read(&b).unwrap());
}

#[test]
fn composing_without_any_font_still_produces_full_size_output() {
    init_tracing();
    // An exhausted font stack skips the text layers but must not change the
    // output contract.
    let composer =
        BackgroundComposer::new(Canvas::dmg_default(), ResolvedFonts::default()).unwrap();
    let frame = composer.compose().unwrap();

    let path = out_dir("fontless").join("background.png");
    encode::write_png(&frame, &path).unwrap();
    let decoded = image::open(&path).unwrap().to_rgb8();
    assert_eq!(decoded.dimensions(), (540, 300));
}
