//! Flat byte representation of a [`HuffmanTree`].
//!
//! The tree is written in pre-order as a stream of tagged tokens:
//!
//! | tag    | token    | followed by                                        |
//! |--------|----------|----------------------------------------------------|
//! | `0x00` | absent   | nothing                                            |
//! | `0x01` | internal | the left subtree, then the right subtree           |
//! | `0x02` | leaf     | a length byte, the symbol bytes, two absent tokens |
//!
//! Symbol bytes are length-prefixed, so any symbol value can be stored, including
//! ones equal to a tag.

use crate::error::TreeFault;
use crate::symbol::Symbol;
use crate::tree::{HuffmanTree, Node, NodeId};


const TAG_ABSENT: u8 = 0x00;
const TAG_INTERNAL: u8 = 0x01;
const TAG_LEAF: u8 = 0x02;


pub fn serialize<T: Symbol>(tree: &HuffmanTree<T>) -> Vec<u8> {

    let mut buf = Vec::with_capacity(tree.len() * 4);
    let mut symbol = Vec::new();
    let mut stack = vec![tree.root()];

    while let Some(id) = stack.pop() {
        match tree.node(id) {

            Node::Parent { left, right, .. } => {
                buf.push(TAG_INTERNAL);
                stack.push(*right);
                stack.push(*left);
            },

            Node::Leaf { value, .. } => {
                symbol.clear();
                value.write_bytes(&mut symbol);
                debug_assert!(!symbol.is_empty() && symbol.len() <= u8::MAX as usize);

                buf.push(TAG_LEAF);
                buf.push(symbol.len() as u8);
                buf.extend_from_slice(&symbol);
                buf.extend_from_slice(&[TAG_ABSENT, TAG_ABSENT]);
            },
        }
    }

    buf
}


/// Rebuilds a tree from the bytes written by [`serialize`].
///
/// All of `bytes` must be consumed by exactly one tree. Node weights are not stored,
/// so every node of the result has a count of 0.
pub fn deserialize<T: Symbol>(bytes: &[u8]) -> Result<HuffmanTree<T>, TreeFault> {

    let mut reader = Reader { bytes, offset: 0 };
    let mut nodes = Vec::new();

    // Internal nodes still waiting for children, with their tag offset and left child
    let mut pending: Vec<(usize, Option<NodeId>)> = Vec::new();

    let root = 'tokens: loop {

        let offset = reader.offset;

        let mut complete = match reader.byte()? {

            TAG_INTERNAL => {
                pending.push((offset, None));
                continue;
            },

            TAG_LEAF => {
                let value = read_leaf(&mut reader, offset)?;
                nodes.push(Node::Leaf { count: 0, value });
                nodes.len() - 1
            },

            TAG_ABSENT => return Err(match pending.last() {
                Some(&(parent, _)) => TreeFault::MissingChild { offset: parent },
                None => TreeFault::AbsentRoot,
            }),

            tag => return Err(TreeFault::UnknownTag { tag, offset }),
        };

        // Hand the finished subtree to its parent, closing every parent it completes
        while let Some((_, left)) = pending.last_mut() {
            match *left {

                None => {
                    *left = Some(complete);
                    continue 'tokens;
                },

                Some(left) => {
                    pending.pop();
                    nodes.push(Node::Parent { count: 0, left, right: complete });
                    complete = nodes.len() - 1;
                },
            }
        }

        break complete;
    };

    let remaining = bytes.len() - reader.offset;
    if remaining != 0 {
        return Err(TreeFault::TrailingBytes { remaining });
    }

    Ok(HuffmanTree::from_parts(nodes, root))
}


fn read_leaf<T: Symbol>(reader: &mut Reader, offset: usize) -> Result<T, TreeFault> {

    let len = reader.byte()? as usize;
    if len == 0 {
        return Err(TreeFault::EmptySymbol { offset });
    }

    let value = T::from_bytes(reader.take(len)?)
        .ok_or(TreeFault::InvalidSymbol { offset })?;

    for _ in 0..2 {
        if reader.byte()? != TAG_ABSENT {
            return Err(TreeFault::LeafWithChild { offset });
        }
    }

    Ok(value)
}


struct Reader<'a> {

    bytes: &'a [u8],
    offset: usize

}

impl<'a> Reader<'a> {

    fn byte(&mut self) -> Result<u8, TreeFault> {
        let byte = *self.bytes.get(self.offset)
            .ok_or(TreeFault::UnexpectedEnd { offset: self.offset })?;

        self.offset += 1;
        Ok(byte)
    }


    fn take(&mut self, len: usize) -> Result<&'a [u8], TreeFault> {
        let end = self.offset + len;
        let slice = self.bytes.get(self.offset..end)
            .ok_or(TreeFault::UnexpectedEnd { offset: self.bytes.len() })?;

        self.offset = end;
        Ok(slice)
    }

}
