//! Lossless Huffman compression into a self-describing container.
//!
//! ```
//! let text = "Hello World. I hope it works. 😱";
//!
//! let container = huffman_tree_compression::encode(text).unwrap();
//! let decoded = huffman_tree_compression::decode(&container).unwrap();
//!
//! assert_eq!(text, decoded);
//! ```

pub mod bitvec;
pub mod codec;
pub mod codes;
pub mod container;
pub mod error;
pub mod frequency;
pub mod logging;
pub mod queue;
pub mod serialize;
pub mod symbol;
pub mod tree;

pub use codec::{compress, decompress};
pub use error::{Error, PayloadFault, Result, TreeFault};
pub use symbol::Symbol;


/// Compresses text, one symbol per `char`.
pub fn encode(content: &str) -> Result<Vec<u8>> {
    compress(&content.chars().collect::<Vec<char>>())
}


/// Restores the text stored by [`encode`].
pub fn decode(container: &[u8]) -> Result<String> {
    Ok(
        decompress::<char>(container)?
            .iter()
            .collect()
    )
}
