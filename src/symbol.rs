use std::fmt::Debug;
use std::hash::Hash;


/// One unit of the compressed alphabet.
///
/// A symbol must be able to write itself as raw bytes so that it can be stored
/// inside the serialized tree, and read itself back from exactly those bytes.
pub trait Symbol: Copy + Eq + Hash + Debug {

    fn write_bytes(&self, buf: &mut Vec<u8>);

    /// Returns `None` unless `bytes` encodes exactly one symbol.
    fn from_bytes(bytes: &[u8]) -> Option<Self>;

}


impl Symbol for char {

    fn write_bytes(&self, buf: &mut Vec<u8>) {
        let mut utf8 = [0; 4];
        buf.extend_from_slice(self.encode_utf8(&mut utf8).as_bytes());
    }


    fn from_bytes(bytes: &[u8]) -> Option<Self> {
        let mut chars = std::str::from_utf8(bytes).ok()?.chars();

        match (chars.next(), chars.next()) {
            (Some(ch), None) => Some(ch),
            _ => None
        }
    }

}


impl Symbol for u8 {

    fn write_bytes(&self, buf: &mut Vec<u8>) {
        buf.push(*self);
    }


    fn from_bytes(bytes: &[u8]) -> Option<Self> {
        match bytes {
            [byte] => Some(*byte),
            _ => None
        }
    }

}


#[cfg(test)]
mod tests {

    use super::*;


    fn raw<T: Symbol>(symbol: T) -> Vec<u8> {
        let mut buf = Vec::new();
        symbol.write_bytes(&mut buf);
        buf
    }


    #[test]
    fn char_uses_utf8() {

        assert_eq!(raw('a'), b"a");
        assert_eq!(raw('😱').len(), 4);

        for ch in ['a', 'é', '€', '😱', '\u{1e}', '\u{1f}', '\0'] {
            assert_eq!(char::from_bytes(&raw(ch)), Some(ch));
        }
    }


    #[test]
    fn char_rejects_bad_bytes() {

        assert_eq!(char::from_bytes(b""), None);
        assert_eq!(char::from_bytes(b"ab"), None);
        assert_eq!(char::from_bytes(&[0xff]), None);
        assert_eq!(char::from_bytes(&[0xe2, 0x82]), None);
    }


    #[test]
    fn byte_is_itself() {

        assert_eq!(raw(0x1e_u8), [0x1e]);
        assert_eq!(u8::from_bytes(&[7]), Some(7));
        assert_eq!(u8::from_bytes(&[]), None);
        assert_eq!(u8::from_bytes(&[1, 2]), None);
    }

}
