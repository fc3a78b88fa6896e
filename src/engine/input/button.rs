// Controller button bitmask

bitflags::bitflags! {
    /// Set of pad buttons, one bit per button
    ///
    /// Bit layout follows the three-button pad: the d-pad in the low nibble,
    /// then B, C, A and Start.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Buttons: u16 {
        const UP    = 0x0001;
        const DOWN  = 0x0002;
        const LEFT  = 0x0004;
        const RIGHT = 0x0008;
        const B     = 0x0010;
        const C     = 0x0020;
        const A     = 0x0040;
        const START = 0x0080;

        /// The four d-pad bits
        const DPAD  = 0x000F;
    }
}

impl Buttons {
    /// D-pad state as a 0..16 table index
    pub fn dpad_index(self) -> usize {
        (self & Self::DPAD).bits() as usize
    }
}
