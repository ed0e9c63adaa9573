//! Radio backends
//!
//! Two realizations of [`RadioBackend`](rtx_core::traits::RadioBackend):
//!
//! - [`DiscreteSynthesizerBackend`]: superheterodyne front end tuned by an
//!   MC145158 synthesizer, with PTT and audio gating lines on GPIO
//! - [`ModuleBackend`]: self-contained SA868 RF module reached over a UART
//!   command link, with its RF chip driven through [`RfChip`](rtx_core::traits::RfChip)

pub mod discrete;
pub mod link;
pub mod module;

pub use discrete::{DiscreteConfig, DiscreteLines, DiscreteSynthesizerBackend};
pub use link::{CommandLink, LinkError};
pub use module::{ModuleBackend, ModuleConfig, ModuleError};
