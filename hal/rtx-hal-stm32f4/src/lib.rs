//! STM32F4-specific HAL for the rtx firmware
//!
//! Wraps the blocking `embassy-stm32` GPIO drivers so the control lines of
//! the transceiver board implement the `rtx-hal` traits. Supported chips:
//!
//! - STM32F401CC (generic F401 board)
//! - STM32F411CE
//!
//! # Features
//!
//! - `stm32f401cc`, `stm32f411ce` - chip selection, pick one in the firmware
//! - `defmt` - Enable debug formatting support

#![no_std]

pub mod gpio;

pub use gpio::{FlexLine, InputLine, OutputLine};
