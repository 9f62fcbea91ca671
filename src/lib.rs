//! A floating action button ("speed dial") widget.
//!
//! The widget is renderer-agnostic: the host feeds it touch [`Event`]s and
//! frame times, and paints the [`PaintLayer`] display list it produces.
//!
//! [`Event`]: widgets::Event
//! [`PaintLayer`]: renderer::PaintLayer

pub mod animation;
pub mod error;
pub mod invalidation;
pub mod layout;
pub mod renderer;
pub mod transform;
pub mod widgets;

pub use error::FabError;

pub mod prelude {
    pub use crate::animation::{SpringConfig, TimingFunction, Transition};
    pub use crate::error::FabError;
    pub use crate::invalidation::ChangeFlags;
    pub use crate::layout::Size;
    pub use crate::renderer::{DrawCommand, PaintContext, PaintLayer, Shadow};
    pub use crate::transform::Transform;
    pub use crate::widgets::{
        Color, Event, EventResponse, FabStyle, FloatingActionButton, HitTarget, ImageSource, Item,
        ItemId, ItemOptions, Point, Rect, TapHandler, Touch,
    };
}
