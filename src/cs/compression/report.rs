//! Per-byte code report.
//!
//! Each reported byte gets one line:
//!
//! ```text
//! 'a' :                   101 ( 3 *       12)
//! ```
//!
//! followed by a final `<total> bytes` line, where the total is the sum of
//! `occurrences * code length` over every reported byte.
//!
//! The NUL byte is never reported, although it takes part in the tree.

use std::io::Write;

use log::debug;

use crate::cs::compression::frequency::FrequencyTable;
use crate::cs::compression::tree::HuffmanTree;
use crate::cs::compression::Result;

/// One reported byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub byte: u8,
    pub code: String,
    pub occurrences: usize,
}

impl ReportEntry {
    pub fn code_length(&self) -> usize {
        self.code.len()
    }

    /// Bits this byte contributes to the encoded output.
    pub fn encoded_bytes(&self) -> usize {
        self.occurrences * self.code_length()
    }

    fn write_to<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        // `\n` is two columns wide on screen, so its code field is one narrower.
        if self.byte == b'\n' {
            write!(out, "'\\n' : {:>20}", self.code)?;
        } else {
            out.write_all(b"'")?;
            out.write_all(&[self.byte])?;
            write!(out, "' : {:>21}", self.code)?;
        }
        writeln!(
            out,
            " ({:>2} * {:>8})",
            self.code_length(),
            self.occurrences
        )
    }
}

/// The complete code report for one input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    entries: Vec<ReportEntry>,
    total_bytes: usize,
}

impl Report {
    /// Build the tree for `table` and derive the code of every byte in it.
    ///
    /// An empty table yields an empty report with a total of zero.
    pub fn generate(table: &FrequencyTable) -> Result<Self> {
        if table.is_empty() {
            debug!("no input bytes, reporting an empty table");
            return Ok(Report::default());
        }
        let tree = HuffmanTree::build(table)?;
        Ok(Report::from_tree(&tree))
    }

    /// Report every non-NUL byte present in `tree`, in ascending byte order.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut report = Report::default();
        for byte in 1..=u8::MAX {
            let (Some(code), Some(occurrences)) = (tree.code_for(byte), tree.occurrences(byte))
            else {
                continue;
            };
            let entry = ReportEntry {
                byte,
                code,
                occurrences,
            };
            report.total_bytes += entry.encoded_bytes();
            report.entries.push(entry);
        }
        debug!(
            "report has {} entries, {} bytes total",
            report.entries.len(),
            report.total_bytes
        );
        report
    }

    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    /// Sum of `occurrences * code length` over every entry.
    pub fn total_bytes(&self) -> usize {
        self.total_bytes
    }

    /// Write the report in its console format. Bytes are written raw.
    pub fn write_to<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        for entry in &self.entries {
            entry.write_to(out)?;
        }
        writeln!(out, "{} bytes", self.total_bytes)
    }

    /// Render the report into a byte buffer.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.write_to(&mut buf);
        buf
    }
}
