//! Configuration types
//!
//! The operating configuration is owned by the application and handed to the
//! radio backend by value; band limits describe what the hardware can serve.

pub mod band;
pub mod radio;

pub use band::*;
pub use radio::*;
