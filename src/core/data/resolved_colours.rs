use crate::core::data::colour::Colour;

/// The four concrete colours one frame is painted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedColours {
    pub background: Colour,
    pub mortar: Colour,
    pub brick_a: Colour,
    pub brick_b: Colour,
}

impl ResolvedColours {
    /// Colour of the `index`-th tile in a row, counting from the first
    /// (off-screen) tile.
    #[must_use]
    pub fn brick(&self, index: usize) -> Colour {
        if index % 2 == 0 { self.brick_a } else { self.brick_b }
    }
}
