pub mod escape_kernel;
pub mod fractal_kinds;
pub mod julia;
pub mod mandelbrot;
