//! Line assembly and the receive queue
//!
//! The receive path runs in interrupt context: it appends bytes to a line
//! buffer and, on `\n`, moves the finished line into a bounded SPSC queue.
//! The foreground command code is the only consumer.
//!
//! Overflow policy:
//! - bytes beyond [`MAX_LINE_LEN`] in one line are discarded (the line is
//!   truncated, not split)
//! - a finished line that finds the queue full is discarded; lines already
//!   queued are kept and the producer never blocks

use heapless::spsc::{Consumer, Producer, Queue};
use heapless::Vec;

/// Maximum stored length of one received line, in bytes
pub const MAX_LINE_LEN: usize = 32;

/// Number of lines the receive queue holds
pub const RX_QUEUE_DEPTH: usize = 10;

/// The SPSC queue keeps one slot free to tell full from empty
const RX_QUEUE_SLOTS: usize = RX_QUEUE_DEPTH + 1;

/// Queue between the receive path and the command link
pub type RxQueue = Queue<Line, RX_QUEUE_SLOTS>;

/// Interrupt-side handle of the receive queue
pub type RxProducer<'q> = Producer<'q, Line, RX_QUEUE_SLOTS>;

/// Foreground handle of the receive queue
pub type RxConsumer<'q> = Consumer<'q, Line, RX_QUEUE_SLOTS>;

/// One received line, without its `\n` terminator
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Line(Vec<u8, MAX_LINE_LEN>);

impl Line {
    /// Build a line from raw bytes, truncating to [`MAX_LINE_LEN`]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let len = bytes.len().min(MAX_LINE_LEN);
        let mut buf = Vec::new();
        // Cannot fail: length is clamped to capacity
        let _ = buf.extend_from_slice(&bytes[..len]);
        Self(buf)
    }

    /// Raw bytes as received (a trailing `\r` is kept)
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Line contents as text, or `None` if not valid UTF-8
    pub fn as_str(&self) -> Option<&str> {
        core::str::from_utf8(&self.0).ok()
    }

    /// Line contents with the trailing `\r` and whitespace removed
    pub fn text(&self) -> Option<&str> {
        self.as_str().map(|s| s.trim_end_matches(|c: char| c == '\r' || c == ' '))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Receive-path line assembler
///
/// Owns the producer half of the receive queue. Call [`push_byte`] from the
/// UART receive interrupt for every byte read out of the FIFO.
///
/// [`push_byte`]: LineAssembler::push_byte
pub struct LineAssembler<'q> {
    buf: Vec<u8, MAX_LINE_LEN>,
    producer: RxProducer<'q>,
    dropped: u32,
}

impl<'q> LineAssembler<'q> {
    /// Create an assembler feeding `producer`
    pub fn new(producer: RxProducer<'q>) -> Self {
        Self {
            buf: Vec::new(),
            producer,
            dropped: 0,
        }
    }

    /// Feed one received byte
    pub fn push_byte(&mut self, byte: u8) {
        if byte == b'\n' {
            // Empty lines carry nothing for the handshake
            if self.buf.is_empty() {
                return;
            }
            let line = Line(core::mem::take(&mut self.buf));
            if self.producer.enqueue(line).is_err() {
                self.dropped = self.dropped.wrapping_add(1);
            }
        } else {
            // Full buffer: truncate
            let _ = self.buf.push(byte);
        }
    }

    /// Feed a run of received bytes
    pub fn push_bytes(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.push_byte(byte);
        }
    }

    /// Discard a partially assembled line
    pub fn reset(&mut self) {
        self.buf.clear();
    }

    /// Lines discarded because the queue was full
    pub fn dropped_lines(&self) -> u32 {
        self.dropped
    }

    /// Check whether the queue currently has room for another line
    pub fn ready(&self) -> bool {
        self.producer.ready()
    }
}
