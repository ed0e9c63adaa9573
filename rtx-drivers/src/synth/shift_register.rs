//! Hardware SPI synthesizer bus
//!
//! Bytes go out through the SPI peripheral while a select line frames each
//! burst. The latch line is still pulsed from GPIO.

use embedded_hal::delay::DelayNs;
use rtx_hal::{OutputPin, SpiBus};

use super::SerialBus;

/// Latch pulse width in microseconds
const LATCH_PULSE_US: u32 = 2;

/// SPI transport with separate select and latch lines
pub struct ShiftRegisterBus<S, P, D> {
    spi: S,
    cs: P,
    le: P,
    delay: D,
}

impl<S: SpiBus, P: OutputPin, D: DelayNs> ShiftRegisterBus<S, P, D> {
    pub fn new(spi: S, cs: P, le: P, delay: D) -> Self {
        Self { spi, cs, le, delay }
    }
}

impl<S: SpiBus, P: OutputPin, D: DelayNs> SerialBus for ShiftRegisterBus<S, P, D> {
    type Error = S::Error;

    fn init(&mut self) {
        self.cs.set_high();
        self.le.set_low();
    }

    fn release(&mut self) {
        self.cs.set_high();
        self.le.set_low();
    }

    fn write_burst(&mut self, bytes: &[u8]) -> Result<(), S::Error> {
        self.cs.set_low();
        let result = self.spi.write(bytes).and_then(|()| self.spi.flush());
        self.cs.set_high();
        result
    }

    fn latch(&mut self) -> Result<(), S::Error> {
        self.le.set_high();
        self.delay.delay_us(LATCH_PULSE_US);
        self.le.set_low();
        Ok(())
    }

    fn finish(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::RefCell;
    use heapless::Vec;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Event {
        Cs(bool),
        Le(bool),
        Spi(u8),
        Flush,
    }

    type Log = RefCell<Vec<Event, 64>>;

    struct MockSpi<'a> {
        log: &'a Log,
        fail: bool,
    }

    impl SpiBus for MockSpi<'_> {
        type Error = &'static str;

        fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
            if self.fail {
                return Err("bus fault");
            }
            for &b in data {
                self.log.borrow_mut().push(Event::Spi(b)).unwrap();
            }
            Ok(())
        }

        fn flush(&mut self) -> Result<(), Self::Error> {
            self.log.borrow_mut().push(Event::Flush).unwrap();
            Ok(())
        }
    }

    struct MockPin<'a> {
        is_cs: bool,
        level: bool,
        log: &'a Log,
    }

    impl OutputPin for MockPin<'_> {
        fn set_high(&mut self) {
            self.level = true;
            let event = if self.is_cs { Event::Cs(true) } else { Event::Le(true) };
            self.log.borrow_mut().push(event).unwrap();
        }

        fn set_low(&mut self) {
            self.level = false;
            let event = if self.is_cs { Event::Cs(false) } else { Event::Le(false) };
            self.log.borrow_mut().push(event).unwrap();
        }

        fn is_set_high(&self) -> bool {
            self.level
        }
    }

    struct NoDelay;

    impl DelayNs for NoDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    fn bus(log: &Log, fail: bool) -> ShiftRegisterBus<MockSpi<'_>, MockPin<'_>, NoDelay> {
        ShiftRegisterBus::new(
            MockSpi { log, fail },
            MockPin {
                is_cs: true,
                level: false,
                log,
            },
            MockPin {
                is_cs: false,
                level: false,
                log,
            },
            NoDelay,
        )
    }

    #[test]
    fn test_burst_is_framed_by_select() {
        let log = Log::default();
        let mut bus = bus(&log, false);
        bus.write_burst(&[0x03, 0x21]).unwrap();
        bus.latch().unwrap();

        assert_eq!(
            log.borrow().as_slice(),
            &[
                Event::Cs(false),
                Event::Spi(0x03),
                Event::Spi(0x21),
                Event::Flush,
                Event::Cs(true),
                Event::Le(true),
                Event::Le(false),
            ]
        );
    }

    #[test]
    fn test_error_still_deselects() {
        let log = Log::default();
        let mut bus = bus(&log, true);
        assert_eq!(bus.write_burst(&[0xFF]), Err("bus fault"));
        assert_eq!(log.borrow().as_slice(), &[Event::Cs(false), Event::Cs(true)]);
    }
}
