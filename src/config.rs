use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use escape_explorer::{
    ColourMapKind, Complex, FractalSettings, JuliaConfig, MandelbrotConfig, PointerPosition,
    RenderJob, ZoomStep,
};

#[derive(Parser, Debug, Clone)]
#[command(name = "escape-explorer", version, about = "Render Mandelbrot and Julia sets to PPM")]
pub struct Config {
    #[command(subcommand)]
    pub fractal: FractalCommand,

    /// Log at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum FractalCommand {
    /// Render the Mandelbrot set
    Mandelbrot {
        #[command(flatten)]
        frame: FrameArgs,

        #[arg(long, default_value_t = 256)]
        max_iterations: u32,

        /// Disable the periodic-orbit shortcut
        #[arg(long, default_value_t = false)]
        no_periodicity_check: bool,
    },
    /// Render a Julia set, optionally drifting its parameter towards a pointer position
    Julia {
        #[command(flatten)]
        frame: FrameArgs,

        #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
        c_re: f64,

        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        c_im: f64,

        #[arg(long, default_value_t = 2.0)]
        scale: f64,

        #[arg(long, default_value_t = 128)]
        max_iterations: u32,

        /// Attractor as pixel position `x,y`
        #[arg(long)]
        attract: Option<PointerPosition>,

        /// Animation steps towards the attractor before the frame is rendered
        #[arg(long, default_value_t = 0)]
        ticks: u32,

        /// Also write the Mandelbrot overview to this path
        #[arg(long)]
        background: Option<PathBuf>,
    },
}

#[derive(Args, Debug, Clone)]
pub struct FrameArgs {
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// cosine, fire, blue-white or grayscale
    #[arg(long, default_value_t = ColourMapKind::CosineRamp.slug().to_string())]
    pub palette: String,

    /// Zoom as `x,y,factor`; repeat to chain
    #[arg(long = "zoom", allow_hyphen_values = true)]
    pub zooms: Vec<ZoomStep>,

    #[arg(short, long, default_value = "output/fractal.ppm")]
    pub output: PathBuf,
}

impl Config {
    pub fn into_job(self) -> anyhow::Result<RenderJob> {
        match self.fractal {
            FractalCommand::Mandelbrot {
                frame,
                max_iterations,
                no_periodicity_check,
            } => {
                let config = MandelbrotConfig {
                    max_iterations,
                    colour_map_kind: frame.palette.parse()?,
                    periodicity_check: !no_periodicity_check,
                    ..MandelbrotConfig::default()
                };

                Ok(RenderJob {
                    width: frame.width,
                    height: frame.height,
                    fractal: FractalSettings::Mandelbrot(config),
                    zooms: frame.zooms,
                    attract: None,
                    ticks: 0,
                    output: frame.output,
                    background: None,
                })
            }
            FractalCommand::Julia {
                frame,
                c_re,
                c_im,
                scale,
                max_iterations,
                attract,
                ticks,
                background,
            } => {
                let config = JuliaConfig {
                    max_iterations,
                    colour_map_kind: frame.palette.parse()?,
                    ..JuliaConfig::with_parameter(Complex::new(c_re, c_im), scale)
                };

                Ok(RenderJob {
                    width: frame.width,
                    height: frame.height,
                    fractal: FractalSettings::Julia(config),
                    zooms: frame.zooms,
                    attract,
                    ticks,
                    output: frame.output,
                    background,
                })
            }
        }
    }
}

