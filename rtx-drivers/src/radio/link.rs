//! Line-oriented command link to the RF module
//!
//! Requests go out through a blocking UART write. Responses arrive through
//! the receive queue, filled by the UART interrupt via a
//! [`LineAssembler`](rtx_protocol::LineAssembler). Each read waits a bounded
//! time for the next line.

use embedded_hal::delay::DelayNs;
use rtx_hal::UartTx;
use rtx_protocol::{Command, Line, RxConsumer};

/// Queue poll interval while waiting for a response
const POLL_INTERVAL_MS: u32 = 1;

/// Command link errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkError<E> {
    /// UART transmit failed
    Uart(E),
    /// No line arrived within the timeout
    Timeout,
}

/// Request/response channel over a UART and the receive queue
pub struct CommandLink<'q, U> {
    uart: U,
    rx: RxConsumer<'q>,
}

impl<'q, U: UartTx> CommandLink<'q, U> {
    pub fn new(uart: U, rx: RxConsumer<'q>) -> Self {
        Self { uart, rx }
    }

    /// Write a request
    pub fn send(&mut self, command: Command) -> Result<(), LinkError<U::Error>> {
        self.uart
            .write_blocking(command.as_bytes())
            .map_err(LinkError::Uart)?;
        self.uart.flush().map_err(LinkError::Uart)
    }

    /// Wait up to `timeout_ms` for the next line
    pub fn receive<D: DelayNs>(
        &mut self,
        delay: &mut D,
        timeout_ms: u32,
    ) -> Result<Line, LinkError<U::Error>> {
        let mut waited = 0;
        loop {
            if let Some(line) = self.rx.dequeue() {
                return Ok(line);
            }
            if waited >= timeout_ms {
                return Err(LinkError::Timeout);
            }
            delay.delay_ms(POLL_INTERVAL_MS);
            waited += POLL_INTERVAL_MS;
        }
    }

    /// Discard every queued line, returning how many were dropped
    pub fn drain(&mut self) -> usize {
        let mut count = 0;
        while self.rx.dequeue().is_some() {
            count += 1;
        }
        count
    }

    /// Send `command` and wait for its response line
    ///
    /// Lines left over from earlier exchanges are discarded first so a late
    /// answer cannot be taken for this one.
    pub fn request<D: DelayNs>(
        &mut self,
        command: Command,
        delay: &mut D,
        timeout_ms: u32,
    ) -> Result<Line, LinkError<U::Error>> {
        let stale = self.drain();
        if stale > 0 {
            debug!("Link: dropped {} stale lines", stale);
        }
        self.send(command)?;
        self.receive(delay, timeout_ms)
    }

    pub fn uart(&self) -> &U {
        &self.uart
    }

    /// Access the UART, e.g. to change its baud rate
    pub fn uart_mut(&mut self) -> &mut U {
        &mut self.uart
    }

    /// Tear the link down, returning its parts
    pub fn release(self) -> (U, RxConsumer<'q>) {
        (self.uart, self.rx)
    }
}
