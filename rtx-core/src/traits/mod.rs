//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic and the
//! radio hardware implementations.

pub mod audio;
pub mod chip;
pub mod radio;

pub use audio::AudioLines;
pub use chip::{ChipBandwidth, ChipOpMode, FuncMode, RfChip};
pub use radio::RadioBackend;
