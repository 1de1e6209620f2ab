use crate::error::{Error, Result};


/// A growable bit sequence stored most-significant-bit first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitVec {

    /// The actual raw bits
    raw_data: Vec<u8>,
    /// How many bits of padding the last byte contains.
    /// Padding bits are always 0 and have no meaning
    last_byte_padding: u8

}

impl BitVec {

    pub fn new() -> Self {
        Self {
            raw_data: Vec::new(),
            last_byte_padding: 0
        }
    }


    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            raw_data: Vec::with_capacity(least_bytes_repr_for_bits(capacity)),
            last_byte_padding: 0
        }
    }


    pub fn len_bits(&self) -> usize {
        self.raw_data.len() * 8 - self.last_byte_padding as usize
    }


    pub fn is_empty(&self) -> bool {
        self.raw_data.is_empty()
    }


    pub fn least_len_bytes(&self) -> usize {
        self.raw_data.len()
    }


    pub fn append_bit(&mut self, bit: bool) {

        match self.raw_data.last_mut() {

            Some(last_byte) if self.last_byte_padding != 0 => {

                *last_byte |= (bit as u8) << (self.last_byte_padding - 1);

                self.last_byte_padding -= 1;
            },

            _ => {

                self.raw_data.push((bit as u8) << 7);
                self.last_byte_padding = 7;
            },
        }
    }


    pub fn extend_from_bits(&mut self, bit_view: &BitView) {

        if self.last_byte_padding == 0 {

            // The bits are aligned, so this is valid

            self.raw_data.extend_from_slice(bit_view.raw_data);
            self.last_byte_padding = bit_view.last_byte_padding;

        } else {

            for bit in bit_view.iter_bits() {
                self.append_bit(bit)
            }

        }
    }


    /// Fills the last byte with zero bits and returns how many were added (0..=7).
    pub fn pad_to_byte(&mut self) -> u8 {
        // The padding bits are already zeroed, they only need to become meaningful
        std::mem::take(&mut self.last_byte_padding)
    }


    /// Byte representation of the sequence, which must be byte aligned.
    pub fn to_bytes(&self) -> Result<&[u8]> {

        if self.last_byte_padding != 0 {
            return Err(Error::MalformedBitString { len: self.len_bits() });
        }

        Ok(&self.raw_data)
    }


    pub fn into_bytes(self) -> Result<Vec<u8>> {
        self.to_bytes()?;
        Ok(self.raw_data)
    }


    pub fn as_bit_view(&self) -> BitView {
        BitView {
            raw_data: &self.raw_data,
            last_byte_padding: self.last_byte_padding
        }
    }


    pub fn iter_bits(&self) -> BitIterator {
        BitIterator {
            bits: self.as_bit_view(),
            i: 0,
        }
    }


    pub fn from_bool_slice(bools: &[bool]) -> Self {

        let mut res = Self::with_capacity(bools.len());

        for &b in bools {
            res.append_bit(b)
        }

        res
    }


    pub fn to_bool_slice(&self) -> Box<[bool]>{
        self.iter_bits()
            .collect()
    }

}


/// Converts a bit sequence whose length is a multiple of 8 into bytes.
pub fn bits_to_bytes(bits: &[bool]) -> Result<Vec<u8>> {
    BitVec::from_bool_slice(bits).into_bytes()
}


pub const fn least_bytes_repr_for_bits(bit_count: usize) -> usize {
    bit_count / 8 + (bit_count % 8 != 0) as usize
}


/// Borrowed bits. The trailing `last_byte_padding` bits of the last byte are
/// skipped when iterating.
#[derive(Debug, Clone)]
pub struct BitView<'a> {

    raw_data: &'a [u8],
    last_byte_padding: u8

}

impl<'a> BitView<'a> {

    pub fn iter_bits(&self) -> BitIterator<'a> {
        BitIterator {
            bits: self.clone(),
            i: 0
        }
    }


    pub const fn from_padded_bytes(bytes: &'a [u8], last_byte_padding: u8) -> BitView<'a> {
        Self {
            raw_data: bytes,
            last_byte_padding
        }
    }


    pub fn len_bits(&self) -> usize {
        (self.raw_data.len() * 8).saturating_sub(self.last_byte_padding as usize)
    }


    pub fn to_bool_slice(&self) -> Box<[bool]>{
        self.iter_bits()
            .collect()
    }

}


pub struct BitIterator<'a> {

    bits: BitView<'a>,
    i: usize

}

impl<'a> Iterator for BitIterator<'a> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {

        if self.i >= self.bits.len_bits() {
            return None;
        }

        let byte = self.bits.raw_data[self.i / 8];
        let bit_in_byte_i = self.i % 8;

        self.i += 1;

        Some(
            (byte & (1_u8 << (7 - bit_in_byte_i))) != 0
        )
    }
}


#[cfg(test)]
mod tests {

    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::*;


    #[test]
    fn check_view_clone() {

        let expected = [true, true, false, true, false, true, false, true, true, true];

        let v = BitVec::from_bool_slice(&expected);
        let view = v.as_bit_view();

        let clone = view.clone();

        assert_eq!(clone.to_bool_slice(), view.to_bool_slice());
        assert_eq!(*clone.to_bool_slice(), expected)
    }


    #[test]
    fn check_coherency() {

        let bools = [false, true, false, true, false, true];

        let v = BitVec::from_bool_slice(&bools);

        assert_eq!(bools.len(), v.len_bits());
        assert_eq!(v.least_len_bytes(), 1);

        assert_eq!(*v.to_bool_slice(), bools);
    }


    #[test]
    fn check_extend() {

        let a = [true, false, false, true, false];
        let b = [true, false, false, false, false, true];
        let c = [true, false, false, true, false, true, false, false, false, false, true];

        let mut va = BitVec::from_bool_slice(&a);
        let vb = BitVec::from_bool_slice(&b);

        va.extend_from_bits(&vb.as_bit_view());

        assert_eq!(*va.to_bool_slice(), c);

        let mut empty = BitVec::new();
        empty.extend_from_bits(&vb.as_bit_view());

        assert_eq!(empty, vb);
    }


    #[test]
    fn msb_first() {

        let bytes = bits_to_bytes(&[
            false, false, false, false, false, false, true, true,
            false, false, false, false, false, false, false, true,
            false, false, false, false, false, false, false, false,
        ]).unwrap();

        assert_eq!(bytes, [0b0000_0011, 0b0000_0001, 0]);
    }


    #[test]
    fn rejects_unaligned_bits() {

        let mut rng = StdRng::seed_from_u64(0);

        for len in 0..64 {

            let bits: Vec<bool> = (0..len).map(|_| rng.gen_bool(0.5)).collect();

            match bits_to_bytes(&bits) {
                Ok(bytes) => {
                    assert_eq!(len % 8, 0);
                    assert_eq!(bytes.len(), len / 8);
                },
                Err(err) => {
                    assert_ne!(len % 8, 0);
                    assert_eq!(err, Error::MalformedBitString { len });
                },
            }
        }
    }


    #[test]
    fn padding_is_zeroed_and_counted() {

        let mut v = BitVec::from_bool_slice(&[true, true, true]);

        assert!(v.to_bytes().is_err());
        assert_eq!(v.pad_to_byte(), 5);
        assert_eq!(v.pad_to_byte(), 0);
        assert_eq!(v.to_bytes().unwrap(), [0b1110_0000]);
    }


    #[test]
    fn view_strips_padding() {

        let bytes = [0b1011_0110, 0b1100_0000];
        let view = BitView::from_padded_bytes(&bytes, 6);

        assert_eq!(view.len_bits(), 10);
        assert_eq!(
            *view.to_bool_slice(),
            [true, false, true, true, false, true, true, false, true, true]
        );

        assert_eq!(BitView::from_padded_bytes(&[], 0).iter_bits().count(), 0);
    }


    #[test]
    fn unpack_reverses_pack() {

        let mut rng = StdRng::seed_from_u64(0);

        for _ in 0..100 {

            let len = rng.gen_range(0..200);
            let bits: Vec<bool> = (0..len).map(|_| rng.gen_bool(0.5)).collect();

            let mut packed = BitVec::from_bool_slice(&bits);
            let padding = packed.pad_to_byte();
            let bytes = packed.into_bytes().unwrap();

            let view = BitView::from_padded_bytes(&bytes, padding);

            assert_eq!(*view.to_bool_slice(), *bits);
        }
    }

}
