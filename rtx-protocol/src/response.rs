//! Responses received from the RF module

use core::fmt::{self, Write};

use heapless::String;

use crate::line::MAX_LINE_LEN;

/// Errors from interpreting a response line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResponseError {
    /// Nothing usable in the line (empty or not text)
    Empty,
    /// Model string not in the known model table
    UnknownModel,
    /// Version string does not follow `<name>/v<maj>.<min>.<patch>.r<rel>`
    MalformedVersion,
}

/// Known RF module models
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ModuleModel {
    /// SA868S, 134-174 MHz variant
    Sa868sVhf,
    /// SA868S, 400-480 MHz variant
    Sa868sUhf,
}

impl ModuleModel {
    /// Match a model response (trailing `\r` tolerated)
    pub fn parse(text: &str) -> Result<Self, ResponseError> {
        match text.trim_end() {
            "" => Err(ResponseError::Empty),
            "SA868S-VHF" => Ok(Self::Sa868sVhf),
            "SA868S-UHF" => Ok(Self::Sa868sUhf),
            _ => Err(ResponseError::UnknownModel),
        }
    }

    /// Model string as reported by the module
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Sa868sVhf => "SA868S-VHF",
            Self::Sa868sUhf => "SA868S-UHF",
        }
    }
}

/// Module firmware version
///
/// Ordering is lexicographic over (major, minor, patch, release), which is
/// the precedence used by the version gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FirmwareVersion {
    pub major: u8,
    pub minor: u8,
    pub patch: u8,
    pub release: u8,
}

impl FirmwareVersion {
    pub const fn new(major: u8, minor: u8, patch: u8, release: u8) -> Self {
        Self {
            major,
            minor,
            patch,
            release,
        }
    }

    /// Parse `<name>/v<major>.<minor>.<patch>.r<release>`
    ///
    /// Every field must be a decimal number in `0..=255`.
    pub fn parse(text: &str) -> Result<Self, ResponseError> {
        let text = text.trim_end();
        if text.is_empty() {
            return Err(ResponseError::Empty);
        }

        let (name, rest) = text
            .split_once('/')
            .ok_or(ResponseError::MalformedVersion)?;
        if name.is_empty() {
            return Err(ResponseError::MalformedVersion);
        }
        let rest = rest
            .strip_prefix('v')
            .ok_or(ResponseError::MalformedVersion)?;

        let mut fields = rest.split('.');
        let major = parse_field(fields.next())?;
        let minor = parse_field(fields.next())?;
        let patch = parse_field(fields.next())?;
        let release = parse_field(fields.next().and_then(|f| f.strip_prefix('r')))?;
        if fields.next().is_some() {
            return Err(ResponseError::MalformedVersion);
        }

        Ok(Self::new(major, minor, patch, release))
    }

    /// Check this version against a required minimum
    pub fn is_at_least(&self, minimum: &Self) -> bool {
        self >= minimum
    }

    /// Short form without the product name, e.g. `v1.1.0.r20`
    pub fn short(&self) -> String<MAX_LINE_LEN> {
        let mut s = String::new();
        // Longest form "v255.255.255.r255" is 17 bytes
        let _ = write!(s, "{}", self);
        s
    }
}

impl fmt::Display for FirmwareVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "v{}.{}.{}.r{}",
            self.major, self.minor, self.patch, self.release
        )
    }
}

fn parse_field(field: Option<&str>) -> Result<u8, ResponseError> {
    let field = field.ok_or(ResponseError::MalformedVersion)?;
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ResponseError::MalformedVersion);
    }
    field.parse().map_err(|_| ResponseError::MalformedVersion)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_models() {
        assert_eq!(ModuleModel::parse("SA868S-VHF"), Ok(ModuleModel::Sa868sVhf));
        assert_eq!(ModuleModel::parse("SA868S-UHF\r"), Ok(ModuleModel::Sa868sUhf));
        assert_eq!(ModuleModel::parse("SA818-VHF"), Err(ResponseError::UnknownModel));
        assert_eq!(ModuleModel::parse(""), Err(ResponseError::Empty));
        assert_eq!(ModuleModel::Sa868sVhf.name(), "SA868S-VHF");
    }

    #[test]
    fn test_parse_version() {
        let v = FirmwareVersion::parse("sa8x8-fw/v1.1.0.r20").unwrap();
        assert_eq!(v, FirmwareVersion::new(1, 1, 0, 20));

        let v = FirmwareVersion::parse("ProductX/v2.10.3.r255\r").unwrap();
        assert_eq!(v, FirmwareVersion::new(2, 10, 3, 255));
    }

    #[test]
    fn test_parse_version_rejects_malformed() {
        let bad = [
            "sa8x8-fw",
            "/v1.1.0.r20",
            "sa8x8-fw/1.1.0.r20",
            "sa8x8-fw/v1.1.0",
            "sa8x8-fw/v1.1.0.20",
            "sa8x8-fw/v1.1.0.r20.1",
            "sa8x8-fw/v1.x.0.r20",
            "sa8x8-fw/v1.1.0.r256",
            "sa8x8-fw/v1..0.r20",
            "sa8x8-fw/v+1.1.0.r20",
        ];
        for text in bad {
            assert_eq!(
                FirmwareVersion::parse(text),
                Err(ResponseError::MalformedVersion),
                "{}",
                text
            );
        }
        assert_eq!(FirmwareVersion::parse("\r"), Err(ResponseError::Empty));
    }

    #[test]
    fn test_version_precedence() {
        let min = FirmwareVersion::new(1, 1, 0, 20);

        assert!(FirmwareVersion::new(1, 1, 0, 20).is_at_least(&min));
        assert!(FirmwareVersion::new(1, 1, 0, 21).is_at_least(&min));
        assert!(FirmwareVersion::new(1, 1, 1, 0).is_at_least(&min));
        assert!(FirmwareVersion::new(1, 2, 0, 0).is_at_least(&min));
        assert!(FirmwareVersion::new(2, 0, 0, 0).is_at_least(&min));

        assert!(!FirmwareVersion::new(1, 1, 0, 19).is_at_least(&min));
        assert!(!FirmwareVersion::new(1, 0, 9, 99).is_at_least(&min));
        assert!(!FirmwareVersion::new(0, 9, 9, 99).is_at_least(&min));
    }

    #[test]
    fn test_short_form() {
        let v = FirmwareVersion::new(1, 1, 0, 20);
        assert_eq!(v.short().as_str(), "v1.1.0.r20");

        let v = FirmwareVersion::new(255, 255, 255, 255);
        assert_eq!(v.short().as_str(), "v255.255.255.r255");
    }
}
