//! Frame math for the speed dial.
//!
//! There is no layout engine here: the main button takes whatever bounds the
//! host gives it, and items are stacked vertically above it.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }

    /// Side of the largest square that fits
    pub fn min_side(&self) -> f32 {
        self.width.min(self.height)
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::zero()
    }
}

/// Vertical distance above the main button for each item in a stack.
///
/// Takes `(size, hidden)` pairs in stacking order. Hidden entries yield
/// `None` and do not contribute to the running offset. Every visible entry
/// advances the offset by its own size plus `spacing`, so the first visible
/// item sits at `size + spacing`.
pub fn stack_offsets<I>(items: I, spacing: f32) -> Vec<Option<f32>>
where
    I: IntoIterator<Item = (f32, bool)>,
{
    let mut offset = 0.0;
    items
        .into_iter()
        .map(|(size, hidden)| {
            if hidden {
                return None;
            }
            offset += size + spacing;
            Some(offset)
        })
        .collect()
}
