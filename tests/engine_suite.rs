use escape_explorer::{
    Complex, EngineError, FractalEngine, IterationResult, PixelRect, Point, RenderStrategy,
    Viewport, ZoomError, julia_escape_time, mandelbrot_escape_time,
};

const EPSILON: f64 = 1e-9;

fn interior_at_centre(engine: &FractalEngine) -> bool {
    let centre = Point {
        x: engine.width() / 2,
        y: engine.height() / 2,
    };

    engine.pixel_buffer().pixel(centre) == Some([0, 0, 0, 255])
}

#[test]
fn test_mandelbrot_centre_pixel_is_interior() {
    let mut engine = FractalEngine::new_mandelbrot(256, 256, 100).expect("valid engine");

    engine.render().expect("render should succeed");

    assert_eq!(engine.image_buffer().len(), 256 * 256 * 4);
    assert!(interior_at_centre(&engine));
}

#[test]
fn test_viewport_round_trip_within_bounds() {
    let viewport = Viewport::new(
        Complex::new(-0.743, 0.131),
        0.01,
        PixelRect::new(320, 240).expect("valid rect"),
    )
    .expect("valid viewport");

    for y in (0..240).step_by(17) {
        for x in (0..320).step_by(23) {
            let c = viewport.pixel_to_complex(f64::from(x), f64::from(y));
            let (px, py) = viewport.complex_to_pixel(c);
            let back = viewport.pixel_to_complex(px, py);

            assert!((back.real - c.real).abs() < EPSILON);
            assert!((back.imag - c.imag).abs() < EPSILON);
        }
    }
}

#[test]
fn test_known_interior_and_exterior_points() {
    for max_iterations in [1, 10, 1000] {
        assert!(!mandelbrot_escape_time(Complex::ZERO, max_iterations, true).escaped);
        assert_eq!(
            mandelbrot_escape_time(Complex::new(2.0, 2.0), max_iterations, true),
            IterationResult::escaped_at(1)
        );
    }

    assert!(julia_escape_time(Complex::new(2.0, 2.0), Complex::ZERO, 5).escaped);
}

#[test]
fn test_zoom_recentres_on_pre_zoom_point() {
    let mut engine = FractalEngine::new_mandelbrot(300, 200, 64).expect("valid engine");
    let target = engine.viewport().pixel_to_complex(210.0, 45.0);
    let old_scale = engine.scale();

    engine.zoom(210.0, 45.0, 2.0).expect("zoom should succeed");

    assert_eq!(engine.mid_r(), target.real);
    assert_eq!(engine.mid_i(), target.imag);
    assert_eq!(engine.scale(), old_scale / 2.0);
}

#[test]
fn test_degenerate_zoom_is_rejected_without_side_effects() {
    let mut engine = FractalEngine::new_mandelbrot(100, 100, 32).expect("valid engine");
    let before = engine.viewport();

    assert_eq!(
        engine.zoom(50.0, 50.0, -3.0),
        Err(EngineError::Zoom(ZoomError::InvalidFactor(-3.0)))
    );
    assert_eq!(engine.viewport(), before);
}

#[test]
fn test_buffer_length_never_changes() {
    let mut engine = FractalEngine::new_julia(-0.4, 0.6, 1.5, 120, 80).expect("valid engine");
    let expected = 120 * 80 * 4;
    engine.set_attract(30.0, 70.0);

    for step in 0..5 {
        engine.tick();
        engine.render().expect("render should succeed");
        if step == 2 {
            engine.zoom(60.0, 40.0, 1.5).expect("zoom should succeed");
        }

        assert_eq!(engine.image_buffer().len(), expected);
        assert_eq!(engine.background_buffer().map(<[u8]>::len), Some(expected));
    }
}

#[test]
fn test_ticks_converge_on_attractor() {
    let mut engine = FractalEngine::new_julia(1.0, 0.0, 2.0, 64, 64).expect("valid engine");
    engine.set_attract(8.0, 56.0);
    let attractor = engine.attractor().expect("julia engine");
    let mut distance = engine
        .julia_parameter()
        .expect("julia engine")
        .distance_to(attractor);
    let mut ticks = 0;

    while distance > 0.0 {
        engine.tick();
        let next = engine
            .julia_parameter()
            .expect("julia engine")
            .distance_to(attractor);

        assert!(next < distance);
        distance = next;
        ticks += 1;
        assert!(ticks < 10_000, "no convergence after {ticks} ticks");
    }

    assert_eq!(engine.julia_parameter(), Some(attractor));
}

#[test]
fn test_identical_state_renders_identical_bytes() {
    let mut first = FractalEngine::new_julia(-0.8, 0.156, 1.5, 96, 64).expect("valid engine");
    let mut second = FractalEngine::new_julia(-0.8, 0.156, 1.5, 96, 64)
        .expect("valid engine")
        .with_render_strategy(RenderStrategy::Sequential);

    for engine in [&mut first, &mut second] {
        engine.set_attract(10.0, 10.0);
        engine.tick();
        engine.zoom(40.0, 30.0, 2.0).expect("zoom should succeed");
        engine.render().expect("render should succeed");
    }

    assert_eq!(first.image_buffer(), second.image_buffer());

    let snapshot = first.image_buffer().to_vec();
    first.render().expect("render should succeed");
    assert_eq!(first.image_buffer(), snapshot.as_slice());
}

#[test]
fn test_mandelbrot_has_no_background() {
    let engine = FractalEngine::new_mandelbrot(16, 16, 16).expect("valid engine");

    assert!(engine.background_buffer().is_none());
}
