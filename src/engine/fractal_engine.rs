use std::time::Instant;

use tracing::{debug, trace, warn};

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::generate_fractal::render_strategy::RenderStrategy;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
use crate::core::actions::zoom::{ZoomLimits, zoom_viewport};
use crate::core::colour_mapping::factory::colour_map_factory;
use crate::core::colour_mapping::kinds::ColourMapKind;
use crate::core::colour_mapping::palette::Palette;
use crate::core::data::colour::Colour;
use crate::core::data::complex::Complex;
use crate::core::data::iteration_result::IterationResult;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::core::fractals::julia::algorithm::JuliaAlgorithm;
use crate::core::fractals::julia::attractor::{AttractorState, step_attractor};
use crate::core::fractals::julia::errors::julia::JuliaError;
use crate::core::fractals::julia::julia_config::JuliaConfig;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::engine::errors::EngineError;

#[derive(Debug)]
enum Mode {
    Mandelbrot { periodicity_check: bool },
    Julia(JuliaState),
}

#[derive(Debug)]
struct JuliaState {
    attractor: AttractorState,
    attraction_speed: f64,
    mark_locus: bool,
    overview: Overview,
}

/// Mandelbrot rendering of the Julia viewport, i.e. the plane `c` travels through.
#[derive(Debug)]
struct Overview {
    max_iterations: u32,
    palette: Palette,
    pixel_buffer: PixelBuffer,
}

/// Escape-time renderer for one fixed-size RGBA buffer.
///
/// All navigation goes through methods so the viewport is only ever replaced whole. The
/// iteration grid and pixel buffers are allocated once at construction; [`render`] overwrites
/// them in place.
///
/// Pixel-space arguments are `(x, y)`: column then row, origin at the top-left.
///
/// [`render`]: FractalEngine::render
#[derive(Debug)]
pub struct FractalEngine {
    viewport: Viewport,
    home: Viewport,
    max_iterations: u32,
    colour_map_kind: ColourMapKind,
    palette: Palette,
    cells: Vec<IterationResult>,
    pixel_buffer: PixelBuffer,
    mode: Mode,
    zoom_limits: ZoomLimits,
    render_strategy: RenderStrategy,
}

impl FractalEngine {
    /// Mandelbrot engine framing the whole set, rendered once before returning.
    pub fn new_mandelbrot(
        width: u32,
        height: u32,
        max_iterations: u32,
    ) -> Result<Self, EngineError> {
        Self::from_mandelbrot_config(
            width,
            height,
            &MandelbrotConfig::with_max_iterations(max_iterations),
        )
    }

    /// Julia engine for parameter `c_re + c_im i`, viewing `2 * scale` plane units across the
    /// shorter side. The overview and the first frame are rendered before returning.
    pub fn new_julia(
        c_re: f64,
        c_im: f64,
        scale: f64,
        width: u32,
        height: u32,
    ) -> Result<Self, EngineError> {
        Self::from_julia_config(
            width,
            height,
            &JuliaConfig::with_parameter(Complex::new(c_re, c_im), scale),
        )
    }

    pub fn from_mandelbrot_config(
        width: u32,
        height: u32,
        config: &MandelbrotConfig,
    ) -> Result<Self, EngineError> {
        let pixel_rect = PixelRect::new(width, height)?;
        let viewport = Viewport::new(config.center, config.scale, pixel_rect)?;

        if config.max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError.into());
        }

        let mode = Mode::Mandelbrot {
            periodicity_check: config.periodicity_check,
        };
        let mut engine = Self::assemble(
            viewport,
            config.max_iterations,
            config.colour_map_kind,
            mode,
        );

        debug!(
            kind = %engine.kind(),
            width,
            height,
            max_iterations = config.max_iterations,
            palette = %config.colour_map_kind,
            "constructed engine"
        );

        engine.render()?;
        Ok(engine)
    }

    pub fn from_julia_config(
        width: u32,
        height: u32,
        config: &JuliaConfig,
    ) -> Result<Self, EngineError> {
        let pixel_rect = PixelRect::new(width, height)?;
        let viewport = Viewport::new(Complex::ZERO, config.scale, pixel_rect)?;
        config.validate()?;

        let overview_map =
            colour_map_factory(config.colour_map_kind, config.overview_max_iterations);
        let overview = Overview {
            max_iterations: config.overview_max_iterations,
            palette: Palette::build(&overview_map, config.overview_max_iterations),
            pixel_buffer: PixelBuffer::new(pixel_rect),
        };
        let mode = Mode::Julia(JuliaState {
            attractor: AttractorState::at_rest(config.c),
            attraction_speed: config.attraction_speed,
            mark_locus: config.mark_locus,
            overview,
        });
        let mut engine = Self::assemble(
            viewport,
            config.max_iterations,
            config.colour_map_kind,
            mode,
        );

        debug!(
            kind = %engine.kind(),
            width,
            height,
            max_iterations = config.max_iterations,
            c.real = config.c.real,
            c.imag = config.c.imag,
            scale = config.scale,
            "constructed engine"
        );

        engine.render_overview()?;
        engine.render()?;
        Ok(engine)
    }

    fn assemble(
        viewport: Viewport,
        max_iterations: u32,
        colour_map_kind: ColourMapKind,
        mode: Mode,
    ) -> Self {
        let pixel_rect = viewport.pixel_rect();
        let colour_map = colour_map_factory(colour_map_kind, max_iterations);
        let palette = Palette::build(&colour_map, max_iterations);

        trace!(
            palette = colour_map.display_name(),
            entries = palette.len(),
            "built palette"
        );

        Self {
            viewport,
            home: viewport,
            max_iterations,
            colour_map_kind,
            palette,
            cells: vec![IterationResult::default(); pixel_rect.size()],
            pixel_buffer: PixelBuffer::new(pixel_rect),
            mode,
            zoom_limits: ZoomLimits::default(),
            render_strategy: RenderStrategy::default(),
        }
    }

    #[must_use]
    pub fn with_zoom_limits(mut self, zoom_limits: ZoomLimits) -> Self {
        self.zoom_limits = zoom_limits;
        self
    }

    #[must_use]
    pub fn with_render_strategy(mut self, render_strategy: RenderStrategy) -> Self {
        self.render_strategy = render_strategy;
        self
    }

    /// Recomputes every pixel from the current viewport and parameter.
    pub fn render(&mut self) -> Result<(), EngineError> {
        let start = Instant::now();

        match &self.mode {
            Mode::Mandelbrot { periodicity_check } => {
                let algorithm = MandelbrotAlgorithm::new(
                    self.viewport,
                    self.max_iterations,
                    *periodicity_check,
                )?;
                render_grid(
                    self.render_strategy,
                    &algorithm,
                    &mut self.cells,
                    &self.palette,
                    &mut self.pixel_buffer,
                )?;
            }
            Mode::Julia(julia) => {
                let c = julia.attractor.c;
                let algorithm = JuliaAlgorithm::new(self.viewport, c, self.max_iterations)?;
                render_grid(
                    self.render_strategy,
                    &algorithm,
                    &mut self.cells,
                    &self.palette,
                    &mut self.pixel_buffer,
                )?;

                if julia.mark_locus {
                    if let Some(pixel) = locus_pixel(&self.viewport, c) {
                        self.pixel_buffer.set_pixel(pixel, Colour::BLACK)?;
                    }
                }
            }
        }

        trace!(
            kind = %self.kind(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "rendered frame"
        );

        Ok(())
    }

    fn render_overview(&mut self) -> Result<(), EngineError> {
        let Mode::Julia(julia) = &mut self.mode else {
            return Ok(());
        };

        let algorithm =
            MandelbrotAlgorithm::new(self.viewport, julia.overview.max_iterations, true)?;
        render_grid(
            self.render_strategy,
            &algorithm,
            &mut self.cells,
            &julia.overview.palette,
            &mut julia.overview.pixel_buffer,
        )?;

        trace!("rendered overview");
        Ok(())
    }

    /// Advances the Julia parameter one step towards the attractor. No-op in Mandelbrot mode.
    ///
    /// Call [`render`](Self::render) afterwards to see the change.
    pub fn tick(&mut self) {
        let Mode::Julia(julia) = &mut self.mode else {
            return;
        };

        let report = step_attractor(&mut julia.attractor, julia.attraction_speed);

        if report.snapped {
            debug!(
                c.real = julia.attractor.c.real,
                c.imag = julia.attractor.c.imag,
                "parameter reached attractor"
            );
        } else if report.moved {
            trace!(distance = julia.attractor.distance(), "parameter moved");
        }
    }

    /// Sets the attractor to the plane point under the pixel position `(x, y)`.
    ///
    /// Positions outside `[0, width] x [0, height]` are clamped onto the buffer edge. No-op in
    /// Mandelbrot mode.
    pub fn set_attract(&mut self, x: f64, y: f64) {
        if !matches!(self.mode, Mode::Julia(_)) {
            debug!("set_attract ignored in mandelbrot mode");
            return;
        }

        let (x, y) = self.clamp_pointer(x, y, "set_attract");
        let target = self.viewport.pixel_to_complex(x, y);
        self.store_attractor(target);
    }

    /// Sets the attractor directly in plane coordinates, projected onto the visible region.
    pub fn set_attract_point(&mut self, point: Complex) -> Result<(), EngineError> {
        if !point.is_finite() {
            return Err(JuliaError::NonFiniteParameter {
                real: point.real,
                imag: point.imag,
            }
            .into());
        }

        if !matches!(self.mode, Mode::Julia(_)) {
            debug!("set_attract_point ignored in mandelbrot mode");
            return Ok(());
        }

        let target = self.viewport.clamp_to_plane(point);
        if target != point {
            warn!(
                real = point.real,
                imag = point.imag,
                "attractor outside the visible plane, projected onto its edge"
            );
        }

        self.store_attractor(target);
        Ok(())
    }

    fn store_attractor(&mut self, target: Complex) {
        if let Mode::Julia(julia) = &mut self.mode {
            julia.attractor.attractor = target;
            debug!(real = target.real, imag = target.imag, "attractor set");
        }
    }

    /// Recentres on the pixel position `(x, y)` and divides the scale by `factor`.
    ///
    /// A factor that is not finite and positive, or a scale outside the zoom limits, is
    /// rejected and the viewport is left untouched. In Julia mode the overview is refreshed.
    pub fn zoom(&mut self, x: f64, y: f64, factor: f64) -> Result<(), EngineError> {
        let (x, y) = self.clamp_pointer(x, y, "zoom");

        let viewport = match zoom_viewport(&self.viewport, x, y, factor, &self.zoom_limits) {
            Ok(viewport) => viewport,
            Err(err) => {
                warn!(x, y, factor, error = %err, "zoom rejected");
                return Err(err.into());
            }
        };

        self.viewport = viewport;
        debug!(
            mid_r = viewport.center().real,
            mid_i = viewport.center().imag,
            scale = viewport.scale(),
            "zoomed"
        );

        self.render_overview()
    }

    /// Restores the viewport the engine was constructed with.
    pub fn reset_view(&mut self) -> Result<(), EngineError> {
        self.viewport = self.home;
        debug!(scale = self.viewport.scale(), "view reset");

        self.render_overview()
    }

    fn clamp_pointer(&self, x: f64, y: f64, operation: &'static str) -> (f64, f64) {
        let pixel_rect = self.viewport.pixel_rect();

        if pixel_rect.contains_position(x, y) {
            return (x, y);
        }

        let (clamped_x, clamped_y) = pixel_rect.clamp_position(x, y);
        warn!(
            operation,
            x, y, clamped_x, clamped_y, "pointer outside buffer, clamped"
        );

        (clamped_x, clamped_y)
    }

    /// Current RGBA bytes, row-major, `width * height * 4` long.
    #[must_use]
    pub fn image_buffer(&self) -> &[u8] {
        self.pixel_buffer.buffer()
    }

    #[must_use]
    pub fn pixel_buffer(&self) -> &PixelBuffer {
        &self.pixel_buffer
    }

    /// Mandelbrot overview behind a Julia view. `None` in Mandelbrot mode.
    #[must_use]
    pub fn background_buffer(&self) -> Option<&[u8]> {
        self.background_pixel_buffer().map(PixelBuffer::buffer)
    }

    #[must_use]
    pub fn background_pixel_buffer(&self) -> Option<&PixelBuffer> {
        match &self.mode {
            Mode::Julia(julia) => Some(&julia.overview.pixel_buffer),
            Mode::Mandelbrot { .. } => None,
        }
    }

    #[must_use]
    pub fn mid_r(&self) -> f64 {
        self.viewport.center().real
    }

    #[must_use]
    pub fn mid_i(&self) -> f64 {
        self.viewport.center().imag
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.viewport.scale()
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.viewport.pixel_rect().width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.viewport.pixel_rect().height()
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn colour_map_kind(&self) -> ColourMapKind {
        self.colour_map_kind
    }

    #[must_use]
    pub fn zoom_limits(&self) -> ZoomLimits {
        self.zoom_limits
    }

    #[must_use]
    pub fn kind(&self) -> FractalKind {
        match self.mode {
            Mode::Mandelbrot { .. } => FractalKind::Mandelbrot,
            Mode::Julia(_) => FractalKind::Julia,
        }
    }

    /// Current Julia parameter `c`.
    #[must_use]
    pub fn julia_parameter(&self) -> Option<Complex> {
        match &self.mode {
            Mode::Julia(julia) => Some(julia.attractor.c),
            Mode::Mandelbrot { .. } => None,
        }
    }

    #[must_use]
    pub fn attractor(&self) -> Option<Complex> {
        match &self.mode {
            Mode::Julia(julia) => Some(julia.attractor.attractor),
            Mode::Mandelbrot { .. } => None,
        }
    }
}

fn render_grid<Alg: FractalAlgorithm + Sync>(
    render_strategy: RenderStrategy,
    algorithm: &Alg,
    cells: &mut [IterationResult],
    palette: &Palette,
    pixel_buffer: &mut PixelBuffer,
) -> Result<(), EngineError> {
    render_strategy.generate(algorithm, cells)?;
    generate_pixel_buffer(cells, palette, pixel_buffer)?;

    trace!(
        strategy = ?render_strategy,
        max_iterations = algorithm.max_iterations(),
        "coloured grid"
    );

    Ok(())
}

/// Pixel whose sample point is nearest to `c`, if it lies in the buffer.
fn locus_pixel(viewport: &Viewport, c: Complex) -> Option<Point> {
    let (x, y) = viewport.complex_to_pixel(c);
    let (x, y) = (x.round(), y.round());
    let pixel_rect = viewport.pixel_rect();

    if x < 0.0
        || y < 0.0
        || x >= f64::from(pixel_rect.width())
        || y >= f64::from(pixel_rect.height())
    {
        return None;
    }

    Some(Point {
        x: x as u32,
        y: y as u32,
    })
}
