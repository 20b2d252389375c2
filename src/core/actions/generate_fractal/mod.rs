pub mod generate_fractal;
#[cfg(feature = "parallel")]
pub mod generate_fractal_rayon;
pub mod ports;
