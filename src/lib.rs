mod controllers;
mod core;
mod engine;
mod presenters;

pub use controllers::cli::cli_controller::{CliController, CliError, RenderSummary};
pub use controllers::cli::job::{
    FractalSettings, ParseStepError, PointerPosition, RenderJob, ZoomStep,
};
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use crate::core::actions::generate_fractal::render_strategy::RenderStrategy;
pub use crate::core::actions::zoom::{ZoomError, ZoomLimits};
pub use crate::core::colour_mapping::kinds::{ColourMapKind, UnknownColourMapKind};
pub use crate::core::data::complex::Complex;
pub use crate::core::data::iteration_result::IterationResult;
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
pub use crate::core::data::point::Point;
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::fractals::escape_kernel::{julia_escape_time, mandelbrot_escape_time};
pub use crate::core::fractals::fractal_kinds::FractalKind;
pub use crate::core::fractals::julia::errors::julia::JuliaError;
pub use crate::core::fractals::julia::julia_config::JuliaConfig;
pub use crate::core::fractals::mandelbrot::errors::MandelbrotError;
pub use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
pub use engine::errors::EngineError;
pub use engine::fractal_engine::FractalEngine;
pub use presenters::file::ppm::{PpmFilePresenter, write_ppm};
