//! Debug border colors.
//!
//! Nodes with `debug_border` set draw a 2px border in a color picked from
//! a fixed palette. The picker is injected so renders are reproducible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Colors available to diagnostic borders.
pub const DEBUG_PALETTE: [&str; 7] = ["red", "orange", "yellow", "green", "blue", "indigo", "violet"];

/// Source of debug border colors.
pub trait PaletteSource {
    /// Pick the color for the next bordered box.
    fn next_color(&mut self) -> &'static str;
}

/// Walks the palette in order, wrapping around.
#[derive(Debug, Clone, Default)]
pub struct CyclingPalette {
    index: usize,
}

impl CyclingPalette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start at `offset` into the palette.
    pub fn starting_at(offset: usize) -> Self {
        Self { index: offset % DEBUG_PALETTE.len() }
    }
}

impl PaletteSource for CyclingPalette {
    fn next_color(&mut self) -> &'static str {
        let color = DEBUG_PALETTE[self.index];
        self.index = (self.index + 1) % DEBUG_PALETTE.len();
        color
    }
}

/// Random picks from a seeded generator: same seed, same sequence.
#[derive(Debug, Clone)]
pub struct SeededPalette {
    rng: StdRng,
}

impl SeededPalette {
    pub fn new(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl PaletteSource for SeededPalette {
    fn next_color(&mut self) -> &'static str {
        DEBUG_PALETTE[self.rng.gen_range(0..DEBUG_PALETTE.len())]
    }
}

impl<F> PaletteSource for F
where
    F: FnMut() -> &'static str,
{
    fn next_color(&mut self) -> &'static str {
        self()
    }
}
