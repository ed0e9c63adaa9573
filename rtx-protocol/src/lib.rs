//! RF module command-link protocol
//!
//! This crate defines the line-oriented UART protocol spoken by the
//! self-contained RF module. Requests are AT-style ASCII commands, responses
//! are single text lines:
//!
//! ```text
//! MCU  → module   AT+MODEL\r\n
//! module → MCU    SA868S-VHF\r\n
//! MCU  → module   AT+VERSION\r\n
//! module → MCU    sa8x8-fw/v1.1.0.r20\r\n
//! MCU  → module   AT+TURBO\r\n
//! module → MCU    OK\r\n
//! ```
//!
//! Inbound bytes are assembled into lines by the receive path (UART
//! interrupt) and handed to the foreground through a single-producer,
//! single-consumer queue.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod command;
pub mod line;
pub mod response;

pub use command::Command;
pub use line::{Line, LineAssembler, RxConsumer, RxProducer, RxQueue, MAX_LINE_LEN, RX_QUEUE_DEPTH};
pub use response::{FirmwareVersion, ModuleModel, ResponseError};
