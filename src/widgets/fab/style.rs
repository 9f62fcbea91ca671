//! Appearance configuration for a speed dial.
//!
//! The main-button fields (`button_color`, `plus_color`, `overlay_color`,
//! `shadow`) repaint immediately when changed. The `item_*` fields are
//! defaults stamped onto items at creation time; changing them never restyles
//! items that already exist.
//!
//! # Example
//! ```
//! use speed_dial::prelude::*;
//!
//! let style = FabStyle::default()
//!     .button_color(Color::from_hex(0xE91E63))
//!     .plus_color(Color::WHITE)
//!     .item_space(10.0);
//! let fab = FloatingActionButton::with_style(style);
//! assert_eq!(fab.style().item_space, 10.0);
//! ```

use crate::renderer::Shadow;
use crate::widgets::item::Item;
use crate::widgets::Color;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FabStyle {
    /// Fill of the main circle
    pub button_color: Color,
    /// Stroke of the plus icon
    pub plus_color: Color,
    /// Fill of the dimming overlay shown while open
    pub overlay_color: Color,
    /// Vertical gap between stacked items
    pub item_space: f32,
    /// Default item diameter
    pub item_size: f32,
    /// Default item circle fill
    pub item_button_color: Color,
    /// Default item circle and title shadow color
    pub item_shadow_color: Color,
    /// Drop shadow under the main circle
    pub shadow: Shadow,
}

impl Default for FabStyle {
    fn default() -> Self {
        Self {
            button_color: Color::rgb(73.0 / 255.0, 151.0 / 255.0, 241.0 / 255.0),
            plus_color: Color::white(0.2, 1.0),
            overlay_color: Color::BLACK.with_alpha(0.3),
            item_space: 14.0,
            item_size: 42.0,
            item_button_color: Color::WHITE,
            item_shadow_color: Color::BLACK,
            shadow: Shadow::button(Color::BLACK),
        }
    }
}

impl FabStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn button_color(mut self, color: Color) -> Self {
        self.button_color = color;
        self
    }

    pub fn plus_color(mut self, color: Color) -> Self {
        self.plus_color = color;
        self
    }

    pub fn overlay_color(mut self, color: Color) -> Self {
        self.overlay_color = color;
        self
    }

    pub fn item_space(mut self, space: f32) -> Self {
        self.item_space = space;
        self
    }

    pub fn item_size(mut self, size: f32) -> Self {
        self.item_size = size;
        self
    }

    pub fn item_button_color(mut self, color: Color) -> Self {
        self.item_button_color = color;
        self
    }

    pub fn item_shadow_color(mut self, color: Color) -> Self {
        self.item_shadow_color = color;
        self
    }

    pub fn shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = shadow;
        self
    }

    /// Stamp the current item defaults onto a freshly created item
    pub(crate) fn apply_item_defaults(&self, item: &mut Item) {
        item.set_button_color(self.item_button_color);
        item.set_circle_shadow_color(self.item_shadow_color);
        item.set_title_shadow_color(self.item_shadow_color);
        item.set_size(self.item_size);
    }
}
