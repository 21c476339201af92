use std::collections::HashMap;

use crate::ParameterBlock;
use crate::protocols::iforce::NO_PARAMETER;

/// Parameter blocks written so far in a decoding run, keyed by address.
///
/// Last write wins; blocks are never removed.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ParameterStore {
    blocks: HashMap<u16, ParameterBlock>,
}

impl ParameterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a block, returning the one it replaced.
    pub fn insert(&mut self, address: u16, block: ParameterBlock) -> Option<ParameterBlock> {
        self.blocks.insert(address, block)
    }

    /// Look up a block. The reserved address is never resolved.
    pub fn get(&self, address: u16) -> Option<&ParameterBlock> {
        if address == NO_PARAMETER {
            return None;
        }
        self.blocks.get(&address)
    }

    /// Resolve an optional effect reference; missing references are absent, not errors.
    pub fn resolve(&self, address: Option<u16>) -> Option<&ParameterBlock> {
        address.and_then(|address| self.get(address))
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
