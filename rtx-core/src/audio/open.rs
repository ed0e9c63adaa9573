//! Caller-side bookkeeping of open paths

use heapless::Vec;

use super::matrix::compatible_with_all;
use super::path::{AudioPath, PATH_COUNT};
use super::router;
use crate::traits::AudioLines;

/// Why a path was not opened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PathError {
    /// Already open
    AlreadyOpen,
    /// Not allowed alongside a path that is already open
    Conflict,
}

/// Set of currently open audio paths
///
/// The router itself keeps no state; whoever owns the audio lines keeps one
/// of these next to them.
#[derive(Debug, Clone, Default)]
pub struct OpenPaths {
    paths: Vec<AudioPath, PATH_COUNT>,
}

impl OpenPaths {
    pub const fn new() -> Self {
        Self { paths: Vec::new() }
    }

    pub fn contains(&self, path: AudioPath) -> bool {
        self.paths.contains(&path)
    }

    pub fn as_slice(&self) -> &[AudioPath] {
        &self.paths
    }

    /// Open `path` if the matrix allows it next to every open path
    pub fn connect<L: AudioLines>(&mut self, lines: &mut L, path: AudioPath) -> Result<(), PathError> {
        if self.contains(path) {
            return Err(PathError::AlreadyOpen);
        }
        if !compatible_with_all(path, &self.paths) {
            return Err(PathError::Conflict);
        }
        // Capacity is the number of distinct paths
        self.paths.push(path).map_err(|_| PathError::Conflict)?;
        router::connect(lines, path.source, path.sink);
        Ok(())
    }

    /// Close `path`; returns false if it was not open
    pub fn disconnect<L: AudioLines>(&mut self, lines: &mut L, path: AudioPath) -> bool {
        match self.paths.iter().position(|p| *p == path) {
            Some(i) => {
                self.paths.swap_remove(i);
                router::disconnect(lines, path.source, path.sink);
                true
            }
            None => false,
        }
    }
}
