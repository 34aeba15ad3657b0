//! Shades and mark colours for the demonstration board.

use std::fmt;

use rand::Rng;

/// Number of shades; shade `i` costs `i` to enter.
pub const SHADES: usize = 5;

/// 8-bit RGBA colour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

/// Five shades darkening from `first` to black, plus path/destination colours.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    shades: [Rgba; SHADES],
    path: Rgba,
    destination: Rgba,
}

impl Palette {
    /// Shade 0 is `first`; each following shade subtracts `decrement` per
    /// channel (wrapping, alpha kept); the last shade is opaque black.
    pub fn new(first: Rgba, decrement: [u8; 3], path: Rgba, destination: Rgba) -> Self {
        let mut shades = [first; SHADES];
        for i in 1..SHADES - 1 {
            let prev = shades[i - 1];
            shades[i] = Rgba::new(
                prev.r.wrapping_sub(decrement[0]),
                prev.g.wrapping_sub(decrement[1]),
                prev.b.wrapping_sub(decrement[2]),
                prev.a,
            );
        }
        shades[SHADES - 1] = Rgba::BLACK;
        Self {
            shades,
            path,
            destination,
        }
    }

    #[inline]
    pub fn shades(&self) -> &[Rgba; SHADES] {
        &self.shades
    }

    #[inline]
    pub fn path(&self) -> Rgba {
        self.path
    }

    #[inline]
    pub fn destination(&self) -> Rgba {
        self.destination
    }

    /// A uniformly random shade.
    pub fn choose<R: Rng>(&self, rng: &mut R) -> Rgba {
        self.shades[rng.gen_range(0..SHADES)]
    }

    /// Shade index of `colour`, `None` if it is not one of the shades.
    pub fn index(&self, colour: Rgba) -> Option<usize> {
        self.shades.iter().position(|&s| s == colour)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(
            Rgba::new(102, 152, 229, 255),
            [13, 20, 13],
            Rgba::new(255, 0, 0, 96),
            Rgba::new(255, 0, 0, 255),
        )
    }
}
