use fb_core::Color;

/// Start and end frames are 32 zero bits.
pub(crate) const BOUNDARY: [u8; 4] = [0x00; 4];

/// Encode one LED's data frame: flag byte, then blue, green and red.
///
/// The flag byte starts with two set bits, followed by the inverted top two
/// bits of blue, green and red, which the P9813 uses as a checksum.
#[inline]
pub(crate) const fn encode(color: Color) -> [u8; 4] {
    let Color { red, green, blue } = color;

    let flag = 0b1100_0000
        | ((!blue & 0xC0) >> 2)
        | ((!green & 0xC0) >> 4)
        | ((!red & 0xC0) >> 6);

    [flag, blue, green, red]
}
