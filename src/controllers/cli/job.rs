use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

use crate::core::fractals::julia::julia_config::JuliaConfig;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected {expected} comma-separated numbers, got '{input}'")]
pub struct ParseStepError {
    pub input: String,
    pub expected: usize,
}

fn parse_numbers<const N: usize>(input: &str) -> Result<[f64; N], ParseStepError> {
    let error = || ParseStepError {
        input: input.to_string(),
        expected: N,
    };
    let mut values = [0.0; N];
    let mut parts = input.split(',');

    for value in &mut values {
        *value = parts
            .next()
            .and_then(|part| part.trim().parse::<f64>().ok())
            .ok_or_else(error)?;
    }

    if parts.next().is_some() {
        return Err(error());
    }

    Ok(values)
}

/// Pixel position on the output buffer, `x` then `y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl FromStr for PointerPosition {
    type Err = ParseStepError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let [x, y] = parse_numbers::<2>(input)?;
        Ok(Self { x, y })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomStep {
    pub x: f64,
    pub y: f64,
    pub factor: f64,
}

impl FromStr for ZoomStep {
    type Err = ParseStepError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let [x, y, factor] = parse_numbers::<3>(input)?;
        Ok(Self { x, y, factor })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FractalSettings {
    Mandelbrot(MandelbrotConfig),
    Julia(JuliaConfig),
}

/// One headless session: build an engine, navigate, animate, then write the frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderJob {
    pub width: u32,
    pub height: u32,
    pub fractal: FractalSettings,
    pub zooms: Vec<ZoomStep>,
    pub attract: Option<PointerPosition>,
    pub ticks: u32,
    pub output: PathBuf,
    pub background: Option<PathBuf>,
}
