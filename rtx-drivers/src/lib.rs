//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined in
//! rtx-core:
//!
//! - Frequency synthesizer (MC145158) over a bit-banged or shift-register bus
//! - Line-oriented command link to a self-contained RF module
//! - Radio backends: discrete synthesizer and RF module

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod radio;
pub mod synth;
