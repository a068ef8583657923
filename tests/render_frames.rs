use crossbox::config::BACK_COLOR;
use crossbox::{Canvas, Chain, CpuRenderer, CrossBoxView, FrameRgba};

fn non_background_pixels(frame: &FrameRgba) -> usize {
    let back = BACK_COLOR.premultiplied();
    frame
        .data
        .chunks_exact(4)
        .filter(|px| px[..] != back)
        .count()
}

#[test]
fn idle_frame_shows_squares_on_background() {
    let _ = tracing_subscriber::fmt::try_init();

    let mut renderer = CpuRenderer::new(Canvas {
        width: 64,
        height: 96,
    })
    .unwrap();
    let frame = renderer.render(&Chain::new()).unwrap();

    assert_eq!(frame.data.len(), 64 * 96 * 4);

    // Corners are plain background.
    let back = BACK_COLOR.premultiplied();
    assert_eq!(frame.data[0..4], back);
    let last = frame.data.len() - 4;
    assert_eq!(frame.data[last..], back);

    // The center squares are visible even at rest.
    assert!(non_background_pixels(&frame) > 0);
}

#[test]
fn revealing_a_glyph_adds_foreground_coverage() {
    let mut view = CrossBoxView::new(Canvas {
        width: 64,
        height: 96,
    })
    .unwrap();

    let at_rest = view.paint().unwrap().frame;

    view.tap();
    let mut last = None;
    while view.is_animating() {
        last = Some(view.paint().unwrap().frame);
    }
    let revealed = view.paint().unwrap().frame;

    assert!(last.is_some());
    assert!(non_background_pixels(&revealed) > non_background_pixels(&at_rest));
}

#[test]
fn rendering_is_deterministic() {
    let canvas = Canvas {
        width: 64,
        height: 96,
    };
    let chain = Chain::new();
    let a = CpuRenderer::new(canvas).unwrap().render(&chain).unwrap();
    let b = CpuRenderer::new(canvas).unwrap().render(&chain).unwrap();
    assert_eq!(a, b);
}
