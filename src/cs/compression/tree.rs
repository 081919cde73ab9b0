use std::collections::HashMap;

use log::{debug, trace};

use crate::cs::compression::frequency::FrequencyTable;
use crate::cs::compression::queue::MergeQueue;
use crate::cs::compression::Result;
use crate::error::Error;

/// Represents a node in the Huffman tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffmanNode {
    /// A leaf node contains a byte value and its frequency.
    Leaf { symbol: u8, freq: usize },
    /// An internal node with left and right children and combined frequency.
    Internal {
        freq: usize,
        left: Box<HuffmanNode>,
        right: Box<HuffmanNode>,
    },
}

impl HuffmanNode {
    /// Returns the frequency of the node.
    pub fn freq(&self) -> usize {
        match self {
            HuffmanNode::Leaf { freq, .. } => *freq,
            HuffmanNode::Internal { freq, .. } => *freq,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffmanNode::Leaf { .. })
    }
}

/// A finished Huffman tree.
///
/// Each node owns its children; dropping the tree releases every node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: HuffmanNode,
}

impl HuffmanTree {
    /// Seed a queue with one leaf per present byte (ascending byte order)
    /// and merge the two lightest entries until a single root remains.
    ///
    /// The first entry removed becomes the left child, the second the right.
    pub fn build(table: &FrequencyTable) -> Result<Self> {
        let mut queue = MergeQueue::with_capacity(table.distinct())?;
        for (symbol, freq) in table.symbols() {
            queue.insert(HuffmanNode::Leaf { symbol, freq }, freq);
        }
        debug!("seeded merge queue with {} leaves", queue.size());

        while queue.size() >= 2 {
            let (first, second) = queue.remove_two_lowest()?;
            let freq = first.weight + second.weight;
            trace!("merging {} + {} -> {}", first.weight, second.weight, freq);
            let internal = HuffmanNode::Internal {
                freq,
                left: Box::new(first.node),
                right: Box::new(second.node),
            };
            queue.insert(internal, freq);
        }

        let root = queue.pop().ok_or(Error::EmptyInput)?.node;
        Ok(HuffmanTree { root })
    }

    pub fn root(&self) -> &HuffmanNode {
        &self.root
    }

    /// Combined weight of the whole tree, i.e. the number of bytes counted.
    pub fn weight(&self) -> usize {
        self.root.freq()
    }

    /// Whether `symbol` appears as a leaf.
    pub fn contains(&self, symbol: u8) -> bool {
        self.occurrences(symbol).is_some()
    }

    /// Occurrence count stored in the leaf for `symbol`.
    pub fn occurrences(&self, symbol: u8) -> Option<usize> {
        fn search(node: &HuffmanNode, symbol: u8) -> Option<usize> {
            match node {
                HuffmanNode::Leaf { symbol: s, freq } => (*s == symbol).then_some(*freq),
                HuffmanNode::Internal { left, right, .. } => {
                    search(left, symbol).or_else(|| search(right, symbol))
                }
            }
        }
        search(&self.root, symbol)
    }

    /// Derive the code of `symbol` by a left-first depth-first search.
    ///
    /// A lone leaf at the root gets the one-bit code "0".
    pub fn code_for(&self, symbol: u8) -> Option<String> {
        if let HuffmanNode::Leaf { symbol: s, .. } = &self.root {
            return (*s == symbol).then(|| "0".to_string());
        }
        let mut path = String::new();
        find_path(&self.root, symbol, &mut path).then_some(path)
    }

    /// Build the code table mapping every leaf symbol to its code in one walk.
    ///
    /// If the tree consists of a single leaf, the code "0" is assigned.
    pub fn code_table(&self) -> HashMap<u8, String> {
        let mut table = HashMap::new();
        build_code_table_helper(&self.root, String::new(), &mut table);
        table
    }

    /// Number of leaves (distinct symbols).
    pub fn leaf_count(&self) -> usize {
        fn count(node: &HuffmanNode) -> usize {
            match node {
                HuffmanNode::Leaf { .. } => 1,
                HuffmanNode::Internal { left, right, .. } => count(left) + count(right),
            }
        }
        count(&self.root)
    }

    /// Length of the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        fn depth(node: &HuffmanNode) -> usize {
            match node {
                HuffmanNode::Leaf { .. } => 0,
                HuffmanNode::Internal { left, right, .. } => 1 + depth(left).max(depth(right)),
            }
        }
        depth(&self.root)
    }
}

fn find_path(node: &HuffmanNode, symbol: u8, path: &mut String) -> bool {
    match node {
        HuffmanNode::Leaf { symbol: s, .. } => *s == symbol,
        HuffmanNode::Internal { left, right, .. } => {
            path.push('0');
            if find_path(left, symbol, path) {
                return true;
            }
            path.pop();
            path.push('1');
            if find_path(right, symbol, path) {
                return true;
            }
            path.pop();
            false
        }
    }
}

fn build_code_table_helper(node: &HuffmanNode, prefix: String, table: &mut HashMap<u8, String>) {
    match node {
        HuffmanNode::Leaf { symbol, .. } => {
            let code = if prefix.is_empty() {
                "0".to_string()
            } else {
                prefix
            };
            table.insert(*symbol, code);
        }
        HuffmanNode::Internal { left, right, .. } => {
            let mut left_prefix = prefix.clone();
            left_prefix.push('0');
            build_code_table_helper(left, left_prefix, table);
            let mut right_prefix = prefix;
            right_prefix.push('1');
            build_code_table_helper(right, right_prefix, table);
        }
    }
}

/// Build the Huffman tree given a frequency table.
pub fn build_huffman_tree(table: &FrequencyTable) -> Result<HuffmanTree> {
    HuffmanTree::build(table)
}
