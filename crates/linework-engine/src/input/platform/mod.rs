//! Platform event translation.

mod winit;

pub use winit::WinitTranslator;
