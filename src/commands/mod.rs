//! Command handlers. Each command owns a plain config struct built from
//! the parsed CLI and a handler that runs the pipeline for it.

pub mod assess;
pub mod convert;
pub mod generate;

pub use assess::{handle_assess, AssessConfig};
pub use convert::{handle_convert, ConvertConfig};
pub use generate::{handle_generate, GenerateConfig};
