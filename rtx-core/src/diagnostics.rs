//! Read-only diagnostic values for the UI
//!
//! Backends register short labelled strings (hardware model, firmware
//! version) once they know them; the UI lists them on its info screen.

use heapless::{String, Vec};

/// Maximum number of registered entries
pub const MAX_ENTRIES: usize = 4;

/// Maximum length of an entry value
pub const MAX_VALUE_LEN: usize = 32;

/// One labelled value
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DiagEntry {
    pub label: &'static str,
    pub value: String<MAX_VALUE_LEN>,
}

/// Registry of diagnostic entries
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    entries: Vec<DiagEntry, MAX_ENTRIES>,
}

impl Diagnostics {
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register or replace the value for `label`
    ///
    /// Values longer than [`MAX_VALUE_LEN`] are truncated. Returns `false`
    /// if the registry is full and `label` is new.
    pub fn register(&mut self, label: &'static str, value: &str) -> bool {
        let value = truncated(value);
        if let Some(entry) = self.entries.iter_mut().find(|e| e.label == label) {
            entry.value = value;
            return true;
        }
        self.entries.push(DiagEntry { label, value }).is_ok()
    }

    /// Look up a value by label
    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.label == label)
            .map(|e| e.value.as_str())
    }

    /// All entries, in registration order
    pub fn entries(&self) -> impl Iterator<Item = &DiagEntry> {
        self.entries.iter()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

fn truncated(value: &str) -> String<MAX_VALUE_LEN> {
    let mut s = String::new();
    for c in value.chars() {
        if s.push(c).is_err() {
            break;
        }
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_get() {
        let mut diag = Diagnostics::new();
        assert!(diag.register("Radio", "SA868S-VHF"));
        assert!(diag.register("Radio FW", "v1.1.0.r20"));

        assert_eq!(diag.get("Radio"), Some("SA868S-VHF"));
        assert_eq!(diag.get("Radio FW"), Some("v1.1.0.r20"));
        assert_eq!(diag.get("GPS"), None);

        let labels: [&str; 2] = {
            let mut it = diag.entries().map(|e| e.label);
            [it.next().unwrap(), it.next().unwrap()]
        };
        assert_eq!(labels, ["Radio", "Radio FW"]);
    }

    #[test]
    fn test_register_replaces() {
        let mut diag = Diagnostics::new();
        diag.register("Radio", "SA868S-VHF");
        diag.register("Radio", "SA868S-UHF");
        assert_eq!(diag.get("Radio"), Some("SA868S-UHF"));
        assert_eq!(diag.entries().count(), 1);
    }

    #[test]
    fn test_full_registry() {
        let mut diag = Diagnostics::new();
        let labels = ["a", "b", "c", "d"];
        for label in labels {
            assert!(diag.register(label, "x"));
        }
        assert!(!diag.register("e", "x"));
        // Replacing still works when full
        assert!(diag.register("a", "y"));
        assert_eq!(diag.get("a"), Some("y"));
    }

    #[test]
    fn test_long_value_truncated() {
        let mut diag = Diagnostics::new();
        let long = "0123456789012345678901234567890123456789";
        diag.register("Radio", long);
        assert_eq!(diag.get("Radio"), Some(&long[..MAX_VALUE_LEN]));
    }
}
