//! Tiny 5-row bitmap font used to stamp messages into the grid.

/// Rows of a glyph, `'1'` marks a lit pixel
pub type Glyph = &'static [&'static str];

/// Glyph height in font pixels
pub const GLYPH_HEIGHT: usize = 5;

const A: Glyph = &["0110", "1001", "1111", "1001", "1001"];
const D: Glyph = &["1110", "1001", "1001", "1001", "1110"];
const E: Glyph = &["1111", "1000", "1110", "1000", "1111"];
const F: Glyph = &["1111", "1000", "1110", "1000", "1000"];
const G: Glyph = &["0111", "1000", "1011", "1001", "0111"];
const I: Glyph = &["111", "010", "010", "010", "111"];
const L: Glyph = &["1000", "1000", "1000", "1000", "1111"];
const N: Glyph = &["1001", "1101", "1011", "1001", "1001"];
const O: Glyph = &["0110", "1001", "1001", "1001", "0110"];
const R: Glyph = &["1110", "1001", "1110", "1010", "1001"];
const S: Glyph = &["0111", "1000", "0110", "0001", "1110"];
const U: Glyph = &["1001", "1001", "1001", "1001", "0110"];
const V: Glyph = &["1001", "1001", "1001", "0110", "0100"];
const W: Glyph = &["10001", "10001", "10101", "11011", "10001"];
const Y: Glyph = &["1001", "0110", "0100", "0100", "0100"];
const SPACE: Glyph = &["000", "000", "000", "000", "000"];

/// Look up a glyph (case-insensitive). Unknown characters render as a space.
pub fn glyph(c: char) -> Glyph {
    match c.to_ascii_uppercase() {
        'A' => A,
        'D' => D,
        'E' => E,
        'F' => F,
        'G' => G,
        'I' => I,
        'L' => L,
        'N' => N,
        'O' => O,
        'R' => R,
        'S' => S,
        'U' => U,
        'V' => V,
        'W' => W,
        'Y' => Y,
        _ => SPACE,
    }
}

/// Width of a glyph in font pixels
pub fn glyph_width(glyph: Glyph) -> usize {
    glyph.first().map_or(0, |row| row.len())
}

/// Lit pixel offsets of a glyph, row by row
pub fn lit_pixels(glyph: Glyph) -> impl Iterator<Item = (usize, usize)> {
    glyph.iter().enumerate().flat_map(|(gy, row)| {
        row.bytes()
            .enumerate()
            .filter(|&(_, b)| b == b'1')
            .map(move |(gx, _)| (gx, gy))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(glyph('a'), glyph('A'));
        assert_eq!(glyph('w'), W);
    }

    #[test]
    fn test_unknown_chars_are_blank() {
        assert_eq!(glyph('?'), SPACE);
        assert_eq!(glyph('Z'), SPACE);
        assert_eq!(lit_pixels(glyph('7')).count(), 0);
    }

    #[test]
    fn test_every_glyph_is_rectangular() {
        for c in "ADEFGILNORSUVWY ".chars() {
            let g = glyph(c);
            assert_eq!(g.len(), GLYPH_HEIGHT, "glyph {c:?}");
            assert!(g.iter().all(|row| row.len() == glyph_width(g)), "glyph {c:?}");
        }
    }

    #[test]
    fn test_lit_pixels_of_i() {
        let pixels: Vec<_> = lit_pixels(glyph('I')).collect();
        assert_eq!(pixels.len(), 9);
        assert!(pixels.contains(&(1, 2)));
        assert!(!pixels.contains(&(0, 2)));
    }
}
