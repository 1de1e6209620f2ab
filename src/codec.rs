use tracing::{debug, instrument};

use crate::bitvec::BitView;
use crate::codes::CodeTable;
use crate::container::{self, Container};
use crate::error::{PayloadFault, Result};
use crate::frequency::FrequencyTable;
use crate::symbol::Symbol;
use crate::tree::{HuffmanTree, Node, NodeId};


/// Compresses `data` into a self-describing container.
#[instrument(level = "debug", skip_all, fields(symbols = data.len()))]
pub fn compress<T: Symbol>(data: &[T]) -> Result<Vec<u8>> {

    let frequencies = FrequencyTable::from_symbols(data.iter().copied());
    debug!(distinct = frequencies.len(), "counted symbols");

    let Some(tree) = HuffmanTree::build(&frequencies) else {
        return Ok(container::encode_header::<T>(None, 0));
    };

    let codes = CodeTable::from_tree(&tree);
    let (payload, padding) = codes.pack(data)?;

    let mut output = container::encode_header(Some(&tree), padding);
    output.extend_from_slice(&payload);

    debug!(container_len = output.len(), payload_len = payload.len(), "wrote container");

    Ok(output)
}


/// Restores the symbols stored in a container written by [`compress`].
#[instrument(level = "debug", skip_all, fields(container_len = bytes.len()))]
pub fn decompress<T: Symbol>(bytes: &[u8]) -> Result<Box<[T]>> {

    let Container { padding, tree, payload } = container::parse_header::<T>(bytes)?;

    let Some(tree) = tree else {
        if !payload.is_empty() {
            return Err(PayloadFault::MissingTree { len: payload.len() }.into());
        }
        if padding != 0 {
            return Err(PayloadFault::PaddingWithoutPayload { padding }.into());
        }
        return Ok(Vec::new().into_boxed_slice());
    };

    // Only non-empty input gets a tree, and that always packs to at least one byte
    let Some(&last_byte) = payload.last() else {
        return Err(match padding {
            0 => PayloadFault::MissingPayload,
            padding => PayloadFault::PaddingWithoutPayload { padding },
        }.into());
    };

    if last_byte & ((1_u8 << padding) - 1) != 0 {
        return Err(PayloadFault::NonZeroPadding { padding }.into());
    }

    let bits = BitView::from_padded_bytes(payload, padding);
    debug!(nodes = tree.len(), payload_bits = bits.len_bits(), "parsed container");

    let mut walker = TreeWalker::new(&tree);
    let mut decoded = Vec::new();

    for bit in bits.iter_bits() {
        if let Some(symbol) = walker.step(bit)? {
            decoded.push(symbol);
        }
    }

    walker.finish()?;

    Ok(decoded.into_boxed_slice())
}


/// Decoding automaton over a prefix tree.
///
/// Starts at the root and moves one edge per bit, 0 to the left and 1 to the right.
/// Landing on a leaf yields its symbol and sends the walker back to the root. When
/// the root itself is a leaf, its implicit code is the single bit 0.
#[derive(Debug)]
pub struct TreeWalker<'a, T> {

    tree: &'a HuffmanTree<T>,
    position: NodeId,
    consumed: usize

}

impl<'a, T> TreeWalker<'a, T>
where
    T: Symbol
{

    pub fn new(tree: &'a HuffmanTree<T>) -> Self {
        Self {
            tree,
            position: tree.root(),
            consumed: 0
        }
    }


    pub fn step(&mut self, bit: bool) -> std::result::Result<Option<T>, PayloadFault> {

        let bit_index = self.consumed;
        self.consumed += 1;

        let next = match self.tree.node(self.position) {
            Node::Leaf { .. } if !bit => self.position,
            _ => self.tree.child(self.position, bit)
                .ok_or(PayloadFault::NilChild { bit_index })?,
        };

        match self.tree.node(next) {

            Node::Leaf { value, .. } => {
                self.position = self.tree.root();
                Ok(Some(*value))
            },

            Node::Parent { .. } => {
                self.position = next;
                Ok(None)
            },
        }
    }


    /// True when the walker is between two codes.
    pub fn at_root(&self) -> bool {
        self.position == self.tree.root()
    }


    /// Checks that the bits ended on a code boundary.
    pub fn finish(self) -> std::result::Result<(), PayloadFault> {
        if self.at_root() {
            Ok(())
        } else {
            Err(PayloadFault::UnexpectedEnd)
        }
    }

}
