//! Huffman code construction and reporting.
//!
//! The pipeline runs in four stages, each consuming the previous one:
//! - [`frequency`]: count every byte value of the input
//! - [`queue`]: weight-ordered queue that drives the merges
//! - [`tree`]: greedy merge of the two lightest entries into one tree
//! - [`report`]: per-byte codes and the projected encoded size
//!
//! # Examples
//!
//! ```rust
//! use huffreport::cs::compression::{build_frequency_table, Report};
//!
//! let table = build_frequency_table(b"aaab");
//! let report = Report::generate(&table).unwrap();
//! assert_eq!(report.total_bytes(), 4);
//! ```

use crate::error::Error;

/// Result type for compression operations
pub type Result<T> = std::result::Result<T, Error>;

pub mod frequency;
pub mod queue;
pub mod report;
pub mod tree;

pub use frequency::{build_frequency_table, FrequencyTable, NUM_SYMBOLS};
pub use queue::{MergeQueue, QueueEntry};
pub use report::{Report, ReportEntry};
pub use tree::{build_huffman_tree, HuffmanNode, HuffmanTree};
