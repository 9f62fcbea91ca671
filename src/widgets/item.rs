//! A labelled sub-action of a speed dial.
//!
//! Items are passive: the owning [`FloatingActionButton`] positions and
//! animates them, and routes taps to [`Item::event`].
//!
//! [`FloatingActionButton`]: super::fab::FloatingActionButton

use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use crate::animation::AnimationState;
use crate::layout::Size;
use crate::renderer::{DrawCommand, PaintContext, PaintLayer, Shadow};
use crate::transform::Transform;

use super::image::ImageSource;
use super::widget::{Color, Event, EventResponse, Point, Rect};

/// Callback invoked with the tapped item
pub type TapHandler = Rc<dyn Fn(&Item)>;

/// Side of the icon drawn inside the item circle
pub const ICON_SIZE: f32 = 25.0;
/// Horizontal gap between the title's right edge and the circle
pub const TITLE_GAP: f32 = 20.0;

/// Unique identifier for an item
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ItemId(u64);

static NEXT_ITEM_ID: AtomicU64 = AtomicU64::new(1);

impl ItemId {
    /// Generate a new unique item ID
    pub fn next() -> Self {
        ItemId(NEXT_ITEM_ID.fetch_add(1, Ordering::Relaxed))
    }
}

pub struct Item {
    id: ItemId,
    title: Option<String>,
    icon: Option<ImageSource>,
    size: f32,
    button_color: Color,
    title_color: Color,
    circle_shadow_color: Color,
    title_shadow_color: Color,
    hidden: bool,
    handler: Option<TapHandler>,
    /// Frame in the owning button's coordinates
    pub(crate) frame: Rect,
    pub(crate) scale: AnimationState<f32>,
    pub(crate) alpha: AnimationState<f32>,
}

impl Item {
    pub fn new() -> Self {
        let size = 42.0;
        Self {
            id: ItemId::next(),
            title: None,
            icon: None,
            size,
            button_color: Color::WHITE,
            title_color: Color::WHITE,
            circle_shadow_color: Color::BLACK,
            title_shadow_color: Color::BLACK,
            hidden: false,
            handler: None,
            frame: Rect::new(0.0, 0.0, size, size),
            scale: AnimationState::new(1.0),
            alpha: AnimationState::new(1.0),
        }
    }

    // Builder methods

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.set_title(title);
        self
    }

    pub fn with_icon(mut self, icon: impl Into<ImageSource>) -> Self {
        self.set_icon(icon);
        self
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.set_size(size);
        self
    }

    pub fn with_button_color(mut self, color: Color) -> Self {
        self.button_color = color;
        self
    }

    pub fn with_title_color(mut self, color: Color) -> Self {
        self.title_color = color;
        self
    }

    /// Set both the circle and the title shadow color
    pub fn with_shadow_color(mut self, color: Color) -> Self {
        self.circle_shadow_color = color;
        self.title_shadow_color = color;
        self
    }

    pub fn on_tap<F: Fn(&Item) + 'static>(mut self, handler: F) -> Self {
        self.handler = Some(Rc::new(handler));
        self
    }

    // In-place setters, for items already owned by a speed dial

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    pub fn set_icon(&mut self, icon: impl Into<ImageSource>) {
        self.icon = Some(icon.into());
    }

    pub fn set_size(&mut self, size: f32) {
        self.size = size;
        self.frame.width = size;
        self.frame.height = size;
    }

    pub fn set_button_color(&mut self, color: Color) {
        self.button_color = color;
    }

    pub fn set_title_color(&mut self, color: Color) {
        self.title_color = color;
    }

    pub fn set_circle_shadow_color(&mut self, color: Color) {
        self.circle_shadow_color = color;
    }

    pub fn set_title_shadow_color(&mut self, color: Color) {
        self.title_shadow_color = color;
    }

    /// Hidden items are skipped by layout, animation, hit-testing and paint
    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    pub fn set_handler(&mut self, handler: Option<TapHandler>) {
        self.handler = handler;
    }

    // Accessors

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn icon(&self) -> Option<&ImageSource> {
        self.icon.as_ref()
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn button_color(&self) -> Color {
        self.button_color
    }

    pub fn title_color(&self) -> Color {
        self.title_color
    }

    pub fn circle_shadow_color(&self) -> Color {
        self.circle_shadow_color
    }

    pub fn title_shadow_color(&self) -> Color {
        self.title_shadow_color
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn has_handler(&self) -> bool {
        self.handler.is_some()
    }

    /// Frame in the owning button's coordinates
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Current animated scale
    pub fn current_scale(&self) -> f32 {
        *self.scale.current()
    }

    /// Current animated opacity, clamped to `0.0..=1.0` while the spring
    /// overshoots
    pub fn current_alpha(&self) -> f32 {
        self.alpha.current().clamp(0.0, 1.0)
    }

    /// Visible and positioned by the last open: not hidden, and fading in or
    /// shown rather than collapsed
    pub fn is_revealed(&self) -> bool {
        !self.hidden && *self.alpha.target() > 0.0
    }

    // Geometry, in item-local coordinates

    pub fn circle_frame(&self) -> Rect {
        Rect::new(0.0, 0.0, self.size, self.size)
    }

    pub fn icon_frame(&self) -> Rect {
        let side = ICON_SIZE.min(self.size);
        let inset = (self.size - side) / 2.0;
        Rect::new(inset, inset, side, side)
    }

    /// Frame for a title label of the given measured size: right-aligned to
    /// the left of the circle and vertically centred on it.
    pub fn title_frame(&self, label: Size) -> Rect {
        Rect::new(
            -label.width - TITLE_GAP,
            self.size / 2.0 - label.height / 2.0,
            label.width,
            label.height,
        )
    }

    /// Whether the item claims a point given in its own coordinates
    pub fn hit_test(&self, point: Point) -> bool {
        !self.hidden && self.circle_frame().contains_point(point)
    }

    /// Invoke the tap handler, if any, with this item
    pub fn tap(&self) {
        match &self.handler {
            Some(handler) => {
                log::debug!("Item {:?} tapped", self.id);
                handler(self);
            }
            None => log::trace!("Item {:?} tapped without a handler", self.id),
        }
    }

    /// Handle a touch event given in item-local coordinates
    pub fn event(&mut self, event: &Event) -> EventResponse {
        let inside = event.location().is_some_and(|p| self.hit_test(p));
        match event {
            Event::TouchDown { .. } | Event::TouchMove { .. } if inside => EventResponse::Handled,
            Event::TouchUp { .. } if inside => {
                self.tap();
                EventResponse::Handled
            }
            _ => EventResponse::Ignored,
        }
    }

    /// Advance scale and opacity; returns true while either is animating
    pub(crate) fn advance_animations(&mut self, now: Duration) -> bool {
        let scale_changed = self.scale.advance(now).is_changed();
        let alpha_changed = self.alpha.advance(now).is_changed();
        if scale_changed || alpha_changed {
            log::trace!(
                "Item {:?} scale {:.3} alpha {:.3}",
                self.id,
                self.scale.current(),
                self.alpha.current()
            );
        }
        self.is_animating()
    }

    pub fn is_animating(&self) -> bool {
        self.scale.is_animating() || self.alpha.is_animating()
    }

    pub fn paint(&self, ctx: &mut PaintContext) {
        if self.hidden {
            return;
        }

        let radius = self.size / 2.0;
        let mut layer = PaintLayer::new("item", self.frame)
            .transform(Transform::scale_uniform(*self.scale.current()))
            .opacity(self.current_alpha())
            .command(DrawCommand::rounded_rect_with_shadow(
                self.circle_frame(),
                self.button_color,
                radius,
                Shadow::button(self.circle_shadow_color),
            ));

        if let Some(ref icon) = self.icon {
            layer = layer.command(DrawCommand::Image {
                source: icon.clone(),
                rect: self.icon_frame(),
            });
        }

        if let Some(ref title) = self.title {
            layer = layer.command(DrawCommand::Text {
                text: title.clone(),
                anchor: Point::new(-TITLE_GAP, radius),
                color: self.title_color,
                shadow: Some(Shadow::button(self.title_shadow_color)),
            });
        }

        ctx.push(layer);
    }
}

impl Default for Item {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Item")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("icon", &self.icon)
            .field("size", &self.size)
            .field("hidden", &self.hidden)
            .field("has_handler", &self.handler.is_some())
            .field("frame", &self.frame)
            .finish()
    }
}
