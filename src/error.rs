//! Errors produced while encoding or decoding a container.

use thiserror::Error;


pub type Result<T> = std::result::Result<T, Error>;


/// Every failure the codec can report, one variant per stage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {

    /// Byte conversion was requested on a bit sequence that is not byte aligned.
    #[error("bit sequence of {len} bits is not a multiple of 8")]
    MalformedBitString { len: usize },

    /// The container is shorter than the fixed header.
    #[error("container is {len} bytes long, the header alone needs {}", crate::container::HEADER_LEN)]
    TruncatedHeader { len: usize },

    /// The header declares more tree bytes than the container holds.
    #[error("header declares a {declared} byte tree but only {available} bytes follow it")]
    TruncatedTree { declared: u64, available: usize },

    /// The header declares a padding count that cannot fit in one byte.
    #[error("padding of {0} bits is out of range (0..=7)")]
    InvalidPadding(u32),

    /// A symbol to pack has no code in the table.
    #[error("symbol {0} has no prefix code")]
    UnknownSymbol(String),

    #[error("malformed tree: {0}")]
    MalformedTree(#[from] TreeFault),

    #[error("corrupt payload: {0}")]
    CorruptPayload(#[from] PayloadFault),

}


/// What exactly is wrong with a serialized tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeFault {

    #[error("token stream ended at byte {offset}")]
    UnexpectedEnd { offset: usize },

    #[error("unknown token tag {tag:#04x} at byte {offset}")]
    UnknownTag { tag: u8, offset: usize },

    #[error("leaf at byte {offset} has a zero length symbol")]
    EmptySymbol { offset: usize },

    #[error("leaf at byte {offset} does not hold exactly one symbol")]
    InvalidSymbol { offset: usize },

    #[error("internal node at byte {offset} is missing a child")]
    MissingChild { offset: usize },

    #[error("leaf at byte {offset} has a child")]
    LeafWithChild { offset: usize },

    #[error("tree has no root")]
    AbsentRoot,

    #[error("{remaining} bytes left over after the tree")]
    TrailingBytes { remaining: usize },

}


/// What exactly went wrong while walking the tree over the payload bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PayloadFault {

    #[error("bit {bit_index} leads to a missing child")]
    NilChild { bit_index: usize },

    #[error("payload ends in the middle of a code")]
    UnexpectedEnd,

    #[error("payload of {len} bytes has no tree to decode it with")]
    MissingTree { len: usize },

    #[error("{padding} padding bits declared for an empty payload")]
    PaddingWithoutPayload { padding: u8 },

    #[error("tree present but the payload is empty")]
    MissingPayload,

    #[error("the {padding} padding bits of the last byte are not all zero")]
    NonZeroPadding { padding: u8 },

}
