use std::collections::HashMap;

use tracing::debug;

use crate::bitvec::BitVec;
use crate::error::{Error, Result};
use crate::symbol::Symbol;
use crate::tree::{HuffmanTree, Node};


/// Prefix code of every symbol of a tree: 0 for each left step, 1 for each right
/// step from the root down to the symbol's leaf.
#[derive(Debug, Clone)]
pub struct CodeTable<T> {

    codes: HashMap<T, BitVec>

}

impl<T> CodeTable<T>
where
    T: Symbol
{

    pub fn from_tree(tree: &HuffmanTree<T>) -> Self {

        let mut codes = HashMap::with_capacity(tree.leaf_count());
        let mut stack = vec![(tree.root(), BitVec::new())];

        while let Some((id, path)) = stack.pop() {
            match tree.node(id) {

                Node::Parent { left, right, .. } => {

                    let mut right_path = path.clone();
                    right_path.append_bit(true);
                    stack.push((*right, right_path));

                    let mut left_path = path;
                    left_path.append_bit(false);
                    stack.push((*left, left_path));
                },

                Node::Leaf { value, .. } => {

                    // A lone root leaf has an empty path, which could not be decoded
                    let code = if path.is_empty() {
                        BitVec::from_bool_slice(&[false])
                    } else {
                        path
                    };

                    codes.insert(*value, code);
                },
            }
        }

        Self { codes }
    }


    pub fn get(&self, symbol: &T) -> Option<&BitVec> {
        self.codes.get(symbol)
    }


    pub fn len(&self) -> usize {
        self.codes.len()
    }


    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }


    pub fn iter(&self) -> impl Iterator<Item = (&T, &BitVec)> {
        self.codes.iter()
    }


    /// Concatenates the codes of `data`, then zero-pads to a whole byte.
    ///
    /// Returns the packed bytes and the number of padding bits (0..=7).
    pub fn pack(&self, data: &[T]) -> Result<(Vec<u8>, u8)> {

        let mut packed = BitVec::with_capacity(data.len());

        for symbol in data {
            let code = self.get(symbol)
                .ok_or_else(|| Error::UnknownSymbol(format!("{symbol:?}")))?;

            packed.extend_from_bits(&code.as_bit_view());
        }

        let payload_bits = packed.len_bits();
        let padding = packed.pad_to_byte();

        debug!(payload_bits, padding, "packed symbols");

        Ok((packed.into_bytes()?, padding))
    }

}

impl<T: Symbol> PartialEq for CodeTable<T> {
    fn eq(&self, other: &Self) -> bool {
        self.codes == other.codes
    }
}

impl<T: Symbol> Eq for CodeTable<T> {}
