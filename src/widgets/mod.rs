pub mod fab;
pub mod image;
pub mod item;
pub mod widget;

pub use fab::{FabStyle, FloatingActionButton, HitTarget, ItemOptions};
pub use image::ImageSource;
pub use item::{Item, ItemId, TapHandler};
pub use widget::{Color, Event, EventResponse, Point, Rect, Touch};
