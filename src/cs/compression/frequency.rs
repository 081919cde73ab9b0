//! Byte frequency counting.
//!
//! The alphabet is the 256 possible byte values; multi-byte characters are
//! counted byte by byte.

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use log::debug;

use crate::cs::compression::Result;
use crate::error::Error;

/// Number of distinct symbols in the alphabet.
pub const NUM_SYMBOLS: usize = 256;

const READ_CHUNK: usize = 8 * 1024;

/// Occurrence count for every byte value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [usize; NUM_SYMBOLS],
}

impl Default for FrequencyTable {
    fn default() -> Self {
        FrequencyTable {
            counts: [0; NUM_SYMBOLS],
        }
    }
}

impl FrequencyTable {
    /// Create a table with every count at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every byte produced by `reader`.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut table = FrequencyTable::new();
        let mut buf = [0u8; READ_CHUNK];
        loop {
            let n = match reader.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(Error::Io(e)),
            };
            table.add(&buf[..n]);
        }
        debug!(
            "counted {} bytes, {} distinct values",
            table.total(),
            table.distinct()
        );
        Ok(table)
    }

    /// Open `path` and count its bytes.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file)
    }

    /// Add the bytes of `data` to the running counts.
    pub fn add(&mut self, data: &[u8]) {
        for &byte in data {
            self.counts[byte as usize] += 1;
        }
    }

    /// Occurrences of `byte`.
    pub fn count(&self, byte: u8) -> usize {
        self.counts[byte as usize]
    }

    /// Total number of bytes counted.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Number of byte values that occur at least once.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Present symbols and their counts, in ascending byte order.
    pub fn symbols(&self) -> impl Iterator<Item = (u8, usize)> + '_ {
        (0..=u8::MAX)
            .map(move |byte| (byte, self.counts[byte as usize]))
            .filter(|&(_, count)| count > 0)
    }
}

/// Build a frequency table for an in-memory buffer.
pub fn build_frequency_table(data: &[u8]) -> FrequencyTable {
    let mut table = FrequencyTable::new();
    table.add(data);
    table
}
