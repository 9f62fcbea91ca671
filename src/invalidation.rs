use bitflags::bitflags;

bitflags! {
    /// Flags indicating what aspects of rendering need to be updated
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct ChangeFlags: u8 {
        /// Frames changed (size/position may change)
        const NEEDS_LAYOUT = 0b01;
        /// Visual appearance changed
        const NEEDS_PAINT  = 0b10;
    }
}

/// Implement dirty flag accessors for a widget with a `dirty_flags` field.
macro_rules! impl_dirty_flags {
    () => {
        pub fn mark_dirty(&mut self, flags: $crate::invalidation::ChangeFlags) {
            self.dirty_flags |= flags;
        }
        pub fn needs_layout(&self) -> bool {
            self.dirty_flags
                .contains($crate::invalidation::ChangeFlags::NEEDS_LAYOUT)
        }
        pub fn needs_paint(&self) -> bool {
            self.dirty_flags
                .contains($crate::invalidation::ChangeFlags::NEEDS_PAINT)
        }
        /// Return the accumulated flags and reset them
        pub fn take_dirty(&mut self) -> $crate::invalidation::ChangeFlags {
            std::mem::replace(
                &mut self.dirty_flags,
                $crate::invalidation::ChangeFlags::empty(),
            )
        }
    };
}
pub(crate) use impl_dirty_flags;
