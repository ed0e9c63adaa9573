//! rtx Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits the radio drivers are
//! written against. Chip-specific HALs implement them so the same backend
//! code runs on every board.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  rtx-drivers (synthesizer, backends)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  rtx-hal (this crate - traits)          │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │  rtx-hal-     │
//!             │   stm32f4     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`], [`gpio::FlexPin`] - Digital I/O
//! - [`spi::SpiBus`] - Synthesizer SPI
//! - [`uart::UartTx`], [`uart::SetBaudRate`] - Module command link

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod spi;
pub mod uart;

pub use gpio::{FlexPin, InputPin, OutputPin};
pub use spi::SpiBus;
pub use uart::{SetBaudRate, UartTx};
