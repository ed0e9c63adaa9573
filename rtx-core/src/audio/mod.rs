//! Analog audio path routing
//!
//! An audio path connects one source (microphone, RF stage, MCU) to one
//! sink (speaker, RF stage, MCU). Whether two paths may be open at the same
//! time is a property of the board wiring captured in a fixed compatibility
//! matrix. The router applies the electrical side effect of a single path;
//! the caller owns the set of open paths and checks compatibility against
//! it before opening another one.

pub mod matrix;
pub mod open;
pub mod path;
pub mod router;

pub use matrix::{check_compatibility, compatible_with_all, COMPATIBILITY_MATRIX};
pub use open::{OpenPaths, PathError};
pub use path::{AudioPath, AudioSink, AudioSource};
pub use router::{connect, disconnect, init, terminate};
