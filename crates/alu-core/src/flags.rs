//! Status flag tuple and its 4-bit PSW nibble encoding.

/// Negative flag bit within a PSW nibble.
pub const PSW_N: u8 = 1 << 3;
/// Zero flag bit within a PSW nibble.
pub const PSW_Z: u8 = 1 << 2;
/// Overflow flag bit within a PSW nibble.
pub const PSW_V: u8 = 1 << 1;
/// Carry flag bit within a PSW nibble.
pub const PSW_C: u8 = 1 << 0;

/// The four status flags produced by every ALU evaluation.
///
/// `carry` is operation-specific: unsigned carry/borrow for add and sub,
/// the shifted-out bit for shifts, a result bit for rotates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Flags {
    /// Result was negative as a signed 32-bit value.
    pub negative: bool,
    /// Result was zero.
    pub zero: bool,
    /// Signed overflow occurred.
    pub overflow: bool,
    /// Unsigned carry, borrow, or shifted-out bit.
    pub carry: bool,
}

impl Flags {
    /// Every PSW state, indexed by its nibble value `0..=15`.
    pub const ALL: [Self; 16] = [
        Self::from_bits(0),
        Self::from_bits(1),
        Self::from_bits(2),
        Self::from_bits(3),
        Self::from_bits(4),
        Self::from_bits(5),
        Self::from_bits(6),
        Self::from_bits(7),
        Self::from_bits(8),
        Self::from_bits(9),
        Self::from_bits(10),
        Self::from_bits(11),
        Self::from_bits(12),
        Self::from_bits(13),
        Self::from_bits(14),
        Self::from_bits(15),
    ];

    /// Derives `negative` and `zero` from a result value.
    #[must_use]
    pub const fn from_result(result: i32, carry: bool, overflow: bool) -> Self {
        Self {
            negative: result < 0,
            zero: result == 0,
            overflow,
            carry,
        }
    }

    /// Packs the flags into a PSW nibble with `N=8, Z=4, V=2, C=1`.
    #[must_use]
    pub const fn to_nibble(self) -> u8 {
        let mut psw = 0;
        if self.negative {
            psw |= PSW_N;
        }
        if self.zero {
            psw |= PSW_Z;
        }
        if self.overflow {
            psw |= PSW_V;
        }
        if self.carry {
            psw |= PSW_C;
        }
        psw
    }

    /// Decodes a PSW nibble. Values above 15 are not PSW states.
    #[must_use]
    pub const fn from_nibble(psw: u8) -> Option<Self> {
        if psw > 0xF {
            return None;
        }
        Some(Self::from_bits(psw))
    }

    const fn from_bits(psw: u8) -> Self {
        Self {
            negative: psw & PSW_N != 0,
            zero: psw & PSW_Z != 0,
            overflow: psw & PSW_V != 0,
            carry: psw & PSW_C != 0,
        }
    }
}
