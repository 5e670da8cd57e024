//! Fixed-width bit-field packing into 32-bit words.
//!
//! Field `i` of width `w` occupies bits `[(i*w) % 32, (i*w) % 32 + w)` of
//! word `i*w / 32`, so fields fill each word from the least significant end
//! and never straddle a word boundary.

#![allow(clippy::cast_possible_truncation)]

/// Field widths that divide a 32-bit word evenly.
///
/// Invalid widths are unrepresentable, which keeps the packing routines
/// total: there is no runtime width check to get wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[repr(u8)]
pub enum BitWidth {
    /// One bit per field, 32 fields per word.
    W1 = 1,
    /// Two bits per field, 16 fields per word.
    W2 = 2,
    /// Four bits per field, 8 fields per word.
    W4 = 4,
    /// Eight bits per field, 4 fields per word.
    W8 = 8,
    /// Sixteen bits per field, 2 fields per word.
    W16 = 16,
    /// One field per word.
    W32 = 32,
}

impl BitWidth {
    /// Width of one field in bits.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self as u32
    }

    /// How many fields fit in one 32-bit word.
    #[must_use]
    pub const fn fields_per_word(self) -> usize {
        (32 / self.bits()) as usize
    }

    /// Mask covering one field.
    #[must_use]
    pub const fn mask(self) -> u32 {
        match self {
            Self::W32 => u32::MAX,
            _ => (1 << self.bits()) - 1,
        }
    }

    /// Resolves a bit count to a width, if it divides 32.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            1 => Some(Self::W1),
            2 => Some(Self::W2),
            4 => Some(Self::W4),
            8 => Some(Self::W8),
            16 => Some(Self::W16),
            32 => Some(Self::W32),
            _ => None,
        }
    }
}

/// Packs `fields` into 32-bit words, lowest index at the least significant
/// bits of the first word. Fields wider than `width` are masked down.
#[must_use]
pub fn pack_fields(fields: &[u32], width: BitWidth) -> Vec<u32> {
    fields
        .chunks(width.fields_per_word())
        .map(|chunk| {
            chunk.iter().enumerate().fold(0, |word, (slot, field)| {
                word | ((*field & width.mask()) << (slot as u32 * width.bits()))
            })
        })
        .collect()
}

/// Recovers the first `count` fields from packed words.
#[must_use]
pub fn unpack_fields(words: &[u32], width: BitWidth, count: usize) -> Vec<u32> {
    words
        .iter()
        .flat_map(|word| {
            (0..width.fields_per_word())
                .map(move |slot| (*word >> (slot as u32 * width.bits())) & width.mask())
        })
        .take(count)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{pack_fields, unpack_fields, BitWidth};

    #[test]
    fn nibbles_fill_words_from_the_low_end() {
        assert_eq!(pack_fields(&[1, 2, 3], BitWidth::W4), vec![0x321]);
        assert_eq!(
            pack_fields(&[1, 2, 3, 4, 5, 6, 7, 8, 9], BitWidth::W4),
            vec![0x8765_4321, 0x9]
        );
    }

    #[test]
    fn single_bits_pack_thirty_two_per_word() {
        let mut bits = vec![0u32; 33];
        bits[0] = 1;
        bits[31] = 1;
        bits[32] = 1;
        assert_eq!(pack_fields(&bits, BitWidth::W1), vec![0x8000_0001, 0x1]);
    }

    #[test]
    fn full_width_fields_pass_through() {
        let fields = [0xDEAD_BEEF, 0, u32::MAX];
        assert_eq!(pack_fields(&fields, BitWidth::W32), fields.to_vec());
    }

    #[test]
    fn oversized_fields_are_masked_to_width() {
        assert_eq!(pack_fields(&[0xFF, 0xFF], BitWidth::W4), vec![0xFF]);
    }

    #[test]
    fn empty_input_packs_to_no_words() {
        assert!(pack_fields(&[], BitWidth::W4).is_empty());
    }

    #[test]
    fn unpack_recovers_the_requested_count() {
        let words = pack_fields(&[5, 10, 15, 2, 7], BitWidth::W4);
        assert_eq!(
            unpack_fields(&words, BitWidth::W4, 5),
            vec![5, 10, 15, 2, 7]
        );
        assert_eq!(unpack_fields(&words, BitWidth::W4, 2), vec![5, 10]);
    }

    #[test]
    fn widths_resolve_from_bit_counts() {
        for width in [
            BitWidth::W1,
            BitWidth::W2,
            BitWidth::W4,
            BitWidth::W8,
            BitWidth::W16,
            BitWidth::W32,
        ] {
            assert_eq!(BitWidth::from_bits(width.bits()), Some(width));
            assert_eq!(width.bits() * width.fields_per_word() as u32, 32);
        }
        assert_eq!(BitWidth::from_bits(3), None);
        assert_eq!(BitWidth::from_bits(64), None);
    }
}
