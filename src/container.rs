//! Container framing.
//!
//! | offset          | size        | field                               |
//! |-----------------|-------------|-------------------------------------|
//! | 0               | 8           | serialized tree length, LE unsigned |
//! | 8               | 4           | padding bit count, LE unsigned      |
//! | 12              | tree length | serialized tree                     |
//! | 12 + tree length| remainder   | packed payload                      |
//!
//! A tree length of 0 means the container holds no tree, which is how empty input
//! is stored.

use crate::error::{Error, Result};
use crate::serialize;
use crate::symbol::Symbol;
use crate::tree::HuffmanTree;


pub const HEADER_LEN: usize = 12;

const TREE_LEN_SIZE: usize = 8;


/// A parsed container.
#[derive(Debug)]
pub struct Container<'a, T> {

    /// Number of zero bits appended to the payload (0..=7)
    pub padding: u8,
    pub tree: Option<HuffmanTree<T>>,
    pub payload: &'a [u8]

}


/// Writes the fixed header followed by the serialized tree. The caller appends the
/// packed payload.
pub fn encode_header<T: Symbol>(tree: Option<&HuffmanTree<T>>, padding: u8) -> Vec<u8> {

    let serialized = tree.map(serialize::serialize)
        .unwrap_or_default();

    let mut header = Vec::with_capacity(HEADER_LEN + serialized.len());

    header.extend_from_slice(&(serialized.len() as u64).to_le_bytes());
    header.extend_from_slice(&(padding as u32).to_le_bytes());
    header.extend_from_slice(&serialized);

    header
}


/// Splits a container into its header fields, the rebuilt tree and the payload.
pub fn parse_header<T: Symbol>(bytes: &[u8]) -> Result<Container<'_, T>> {

    if bytes.len() < HEADER_LEN {
        return Err(Error::TruncatedHeader { len: bytes.len() });
    }

    let (tree_len, rest) = bytes.split_at(TREE_LEN_SIZE);
    let (padding, rest) = rest.split_at(HEADER_LEN - TREE_LEN_SIZE);

    let declared = u64::from_le_bytes(le_array(tree_len));
    let padding = u32::from_le_bytes(le_array(padding));

    let padding = u8::try_from(padding)
        .ok()
        .filter(|&padding| padding < 8)
        .ok_or(Error::InvalidPadding(padding))?;

    let tree_len = usize::try_from(declared)
        .ok()
        .filter(|&len| len <= rest.len())
        .ok_or(Error::TruncatedTree { declared, available: rest.len() })?;

    let (tree_bytes, payload) = rest.split_at(tree_len);

    let tree = if tree_bytes.is_empty() {
        None
    } else {
        Some(serialize::deserialize(tree_bytes)?)
    };

    Ok(Container { padding, tree, payload })
}


fn le_array<const N: usize>(bytes: &[u8]) -> [u8; N] {
    let mut array = [0; N];
    array.copy_from_slice(&bytes[..N]);
    array
}


#[cfg(test)]
mod tests {

    use super::*;
    use crate::codes::CodeTable;
    use crate::error::TreeFault;
    use crate::frequency::FrequencyTable;


    fn tree_for(text: &str) -> HuffmanTree<char> {
        HuffmanTree::build(&FrequencyTable::from_symbols(text.chars())).unwrap()
    }


    #[test]
    fn header_layout() {

        let tree = tree_for("aaabbc");
        let header = encode_header(Some(&tree), 7);
        let serialized = serialize::serialize(&tree);

        assert_eq!(header[..8], (serialized.len() as u64).to_le_bytes());
        assert_eq!(header[8..12], [7, 0, 0, 0]);
        assert_eq!(header[12..], serialized);
    }


    #[test]
    fn parse_splits_payload() {

        let tree = tree_for("aaabbc");
        let mut bytes = encode_header(Some(&tree), 3);
        bytes.extend_from_slice(&[0xab, 0xcd]);

        let container = parse_header::<char>(&bytes).unwrap();

        assert_eq!(container.padding, 3);
        assert_eq!(container.payload, [0xab, 0xcd]);
        assert_eq!(
            CodeTable::from_tree(&container.tree.unwrap()),
            CodeTable::from_tree(&tree)
        );
    }


    #[test]
    fn empty_container() {

        let bytes = encode_header::<char>(None, 0);

        assert_eq!(bytes, [0; HEADER_LEN]);

        let container = parse_header::<char>(&bytes).unwrap();

        assert!(container.tree.is_none());
        assert!(container.payload.is_empty());
    }


    #[test]
    fn truncated_header() {

        let mut bytes = encode_header(Some(&tree_for("hello")), 0);
        bytes.truncate(10);

        assert_eq!(parse_header::<char>(&bytes).unwrap_err(), Error::TruncatedHeader { len: 10 });
        assert_eq!(parse_header::<char>(&[]).unwrap_err(), Error::TruncatedHeader { len: 0 });
    }


    #[test]
    fn truncated_tree() {

        let mut bytes = encode_header(Some(&tree_for("hello")), 0);
        let tree_len = bytes.len() - HEADER_LEN;
        bytes.pop();

        assert_eq!(
            parse_header::<char>(&bytes).unwrap_err(),
            Error::TruncatedTree { declared: tree_len as u64, available: tree_len - 1 }
        );

        let mut huge = u64::MAX.to_le_bytes().to_vec();
        huge.extend_from_slice(&[0; 4]);

        assert_eq!(
            parse_header::<char>(&huge).unwrap_err(),
            Error::TruncatedTree { declared: u64::MAX, available: 0 }
        );
    }


    #[test]
    fn padding_out_of_range() {

        let mut bytes = encode_header(Some(&tree_for("hello")), 0);
        bytes[8..12].copy_from_slice(&8_u32.to_le_bytes());

        assert_eq!(parse_header::<char>(&bytes).unwrap_err(), Error::InvalidPadding(8));

        bytes[8..12].copy_from_slice(&u32::MAX.to_le_bytes());

        assert_eq!(parse_header::<char>(&bytes).unwrap_err(), Error::InvalidPadding(u32::MAX));
    }


    #[test]
    fn corrupt_tree_bytes() {

        let mut bytes = encode_header(Some(&tree_for("hello")), 0);
        bytes[HEADER_LEN] = 0x09;

        assert_eq!(
            parse_header::<char>(&bytes).unwrap_err(),
            Error::MalformedTree(TreeFault::UnknownTag { tag: 0x09, offset: 0 })
        );
    }

}
