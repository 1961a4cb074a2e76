use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum JuliaError {
    #[error("Maximum iterations must be greater than zero")]
    ZeroMaxIterationsError,
    #[error("Julia parameter must be finite: {real}+{imag}i")]
    NonFiniteParameter { real: f64, imag: f64 },
    #[error("attraction speed must be within (0, 1]: {0}")]
    InvalidAttractionSpeed(f64),
}
