use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::{info, warn};

use crate::controllers::cli::job::{FractalSettings, RenderJob};
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::complex::Complex;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::engine::errors::EngineError;
use crate::engine::fractal_engine::FractalEngine;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Where the view ended up after a job.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSummary {
    pub mid_r: f64,
    pub mid_i: f64,
    pub scale: f64,
    pub c: Option<Complex>,
    pub elapsed: Duration,
}

pub struct CliController<P: FilePresenterPort> {
    presenter: P,
}

impl<P: FilePresenterPort> CliController<P> {
    pub fn new(presenter: P) -> Self {
        Self { presenter }
    }

    pub fn run(&self, job: &RenderJob) -> Result<RenderSummary, CliError> {
        let start = Instant::now();
        let mut engine = match &job.fractal {
            FractalSettings::Mandelbrot(config) => {
                FractalEngine::from_mandelbrot_config(job.width, job.height, config)?
            }
            FractalSettings::Julia(config) => {
                FractalEngine::from_julia_config(job.width, job.height, config)?
            }
        };

        info!(
            kind = %engine.kind(),
            width = job.width,
            height = job.height,
            max_iterations = engine.max_iterations(),
            "rendering"
        );

        for step in &job.zooms {
            engine.zoom(step.x, step.y, step.factor)?;
        }

        if let Some(target) = job.attract {
            engine.set_attract(target.x, target.y);
        }

        for _ in 0..job.ticks {
            engine.tick();
        }

        engine.render()?;
        self.write(engine.pixel_buffer(), &job.output)?;

        if let Some(path) = &job.background {
            match engine.background_pixel_buffer() {
                Some(background) => self.write(background, path)?,
                None => warn!(path = %path.display(), "no overview in mandelbrot mode, skipping"),
            }
        }

        let summary = RenderSummary {
            mid_r: engine.mid_r(),
            mid_i: engine.mid_i(),
            scale: engine.scale(),
            c: engine.julia_parameter(),
            elapsed: start.elapsed(),
        };

        info!(
            mid_r = summary.mid_r,
            mid_i = summary.mid_i,
            scale = summary.scale,
            elapsed_ms = summary.elapsed.as_millis() as u64,
            "done"
        );

        Ok(summary)
    }

    fn write(&self, buffer: &PixelBuffer, path: &Path) -> Result<(), CliError> {
        self.presenter
            .present(buffer, path)
            .map_err(|source| CliError::Write {
                path: path.to_path_buf(),
                source,
            })?;

        info!(path = %path.display(), "saved");
        Ok(())
    }
}
