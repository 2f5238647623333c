use std::fmt;

use rand::Rng;
use serde::{Serialize, Serializer};

/// Alpha channel of all bar colors.
pub const BAR_ALPHA: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Draws a random translucent color.
    pub fn random<R>(rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        Self::new(rng.gen(), rng.gen(), rng.gen(), BAR_ALPHA)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { r, g, b, a } = self;
        write!(f, "rgba({r}, {g}, {b}, {a})")
    }
}

impl Serialize for Rgba {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// One random color per entry.
pub fn colorize<T, R>(entries: &[T], rng: &mut R) -> Vec<Rgba>
where
    R: Rng + ?Sized,
{
    entries.iter().map(|_| Rgba::random(rng)).collect()
}
