//! Floating action button that expands into a stack of sub-actions.
//!
//! The button has two states, closed (the initial state) and open. Opening
//! rotates the plus icon into a cross, fades in a full-screen dimming overlay
//! and springs each visible item into place above the button, one after
//! another. Closing reverses this.
//!
//! The `closed` flag flips synchronously and is the source of truth; the
//! animations only catch up. The host drives them by calling
//! [`FloatingActionButton::advance_animations`] with its frame clock and
//! painting [`FloatingActionButton::display_list`].
//!
//! # Example
//! ```
//! use std::time::Duration;
//! use speed_dial::prelude::*;
//!
//! let mut fab = FloatingActionButton::new();
//! fab.set_bounds(Rect::new(0.0, 0.0, 56.0, 56.0));
//! fab.add_item(ItemOptions::new().title("Share").on_tap(|item| {
//!     println!("tapped {:?}", item.title());
//! }));
//!
//! // Tap the main button
//! fab.dispatch(&Event::tap_down(28.0, 28.0));
//! fab.dispatch(&Event::tap_up(28.0, 28.0));
//! assert!(fab.is_open());
//!
//! let mut now = Duration::ZERO;
//! while fab.advance_animations(now) {
//!     now += Duration::from_millis(16);
//! }
//! ```

mod layers;
mod style;

pub use layers::{plus_path, ButtonGeometry, TintState, PLUS_LINE_WIDTH, TINT_COLOR};
pub use style::FabStyle;

use std::time::Duration;

use crate::animation::{AnimationState, SpringConfig, Transition};
use crate::error::{FabError, Result};
use crate::invalidation::{impl_dirty_flags, ChangeFlags};
use crate::layout::{stack_offsets, Size};
use crate::renderer::{DrawCommand, PaintContext, PaintLayer};
use crate::transform::Transform;

use super::image::ImageSource;
use super::item::{Item, ItemId, TapHandler};
use super::widget::{Event, EventResponse, Point, Rect};

/// Scale of an item while collapsed into the button
pub const COLLAPSED_SCALE: f32 = 0.4;
/// Plus icon rotation while open
pub const OPEN_ROTATION_DEGREES: f32 = -45.0;

const SPRING_DURATION_SECS: f32 = 0.3;
const SPRING_DAMPING_RATIO: f32 = 0.55;
const SPRING_INITIAL_VELOCITY: f32 = 0.3;
const CLOSE_ITEM_DURATION_MS: f32 = 150.0;
const STAGGER_MS: f32 = 100.0;

fn spring_transition() -> Transition {
    Transition::spring(SpringConfig::damped(
        SPRING_DURATION_SECS,
        SPRING_DAMPING_RATIO,
        SPRING_INITIAL_VELOCITY,
    ))
    .duration(SPRING_DURATION_SECS * 1000.0)
}

/// What a point on screen resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// A visible item of an open speed dial
    Item(ItemId),
    /// The main button
    Button,
    /// Nothing here; the host should offer the touch to the views beneath
    PassThrough,
}

/// Fields for creating an item through [`FloatingActionButton::add_item`].
///
/// Any combination of title, icon and handler is allowed.
#[derive(Clone, Default)]
pub struct ItemOptions {
    title: Option<String>,
    icon: Option<ImageSource>,
    handler: Option<TapHandler>,
}

impl ItemOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<ImageSource>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn on_tap<F: Fn(&Item) + 'static>(mut self, handler: F) -> Self {
        self.handler = Some(std::rc::Rc::new(handler));
        self
    }

    pub fn handler(mut self, handler: TapHandler) -> Self {
        self.handler = Some(handler);
        self
    }
}

#[derive(Debug)]
pub struct FloatingActionButton {
    style: FabStyle,
    closed: bool,
    bounds: Rect,
    geometry: ButtonGeometry,
    tint: TintState,
    overlay_frame: Rect,
    /// Plus icon rotation in radians
    rotation: AnimationState<f32>,
    overlay_opacity: AnimationState<f32>,
    items: Vec<Item>,
    /// Where the current touch sequence went down
    pressed: Option<HitTarget>,
    dirty_flags: ChangeFlags,
}

impl FloatingActionButton {
    pub fn new() -> Self {
        Self::with_style(FabStyle::default())
    }

    pub fn with_style(style: FabStyle) -> Self {
        Self {
            style,
            closed: true,
            bounds: Rect::default(),
            geometry: ButtonGeometry::for_bounds(Rect::default()),
            tint: TintState::new(),
            overlay_frame: Rect::default(),
            rotation: AnimationState::new(0.0),
            overlay_opacity: AnimationState::new(0.0),
            items: Vec::new(),
            pressed: None,
            dirty_flags: ChangeFlags::NEEDS_LAYOUT | ChangeFlags::NEEDS_PAINT,
        }
    }

    impl_dirty_flags!();

    // Style

    pub fn style(&self) -> &FabStyle {
        &self.style
    }

    /// Replace the style. Main-button colors repaint immediately; item
    /// defaults only affect items added afterwards.
    pub fn set_style(&mut self, style: FabStyle) {
        self.style = style;
        self.mark_dirty(ChangeFlags::NEEDS_PAINT);
    }

    /// Edit the style in place
    pub fn update_style(&mut self, f: impl FnOnce(&mut FabStyle)) {
        f(&mut self.style);
        self.mark_dirty(ChangeFlags::NEEDS_PAINT);
    }

    // State

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn is_open(&self) -> bool {
        !self.closed
    }

    pub fn is_tinted(&self) -> bool {
        self.tint.is_visible()
    }

    /// Current plus icon rotation in radians
    pub fn rotation(&self) -> f32 {
        *self.rotation.current()
    }

    /// Current overlay opacity, clamped to `0.0..=1.0` while the spring
    /// overshoots
    pub fn overlay_opacity(&self) -> f32 {
        self.overlay_opacity.current().clamp(0.0, 1.0)
    }

    // Layout

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn geometry(&self) -> &ButtonGeometry {
        &self.geometry
    }

    pub fn overlay_frame(&self) -> Rect {
        self.overlay_frame
    }

    /// Resize the button. Rebuilds the circle, tint and plus icon geometry.
    pub fn set_bounds(&mut self, bounds: Rect) {
        if bounds == self.bounds {
            return;
        }
        self.bounds = bounds;
        self.geometry = ButtonGeometry::for_bounds(bounds);
        log::debug!(
            "Speed dial bounds {}x{}, circle radius {}",
            bounds.width,
            bounds.height,
            self.geometry.corner_radius
        );
        self.mark_dirty(ChangeFlags::NEEDS_LAYOUT | ChangeFlags::NEEDS_PAINT);
    }

    /// Layout pass: stretch the overlay over the whole screen.
    ///
    /// `origin_in_window` is where this button's origin sits on screen; the
    /// overlay is placed so that it starts at the screen's top-left corner.
    pub fn layout(&mut self, origin_in_window: Point, screen: Size) {
        self.overlay_frame = Rect::new(
            -origin_in_window.x,
            -origin_in_window.y,
            screen.width,
            screen.height,
        );
        self.dirty_flags.remove(ChangeFlags::NEEDS_LAYOUT);
    }

    // Items

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn item_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    /// Offset above the button of each item when open; `None` for hidden items
    pub fn item_offsets(&self) -> Vec<Option<f32>> {
        stack_offsets(
            self.items.iter().map(|item| (item.size(), item.is_hidden())),
            self.style.item_space,
        )
    }

    /// Create an item styled with the current item defaults, append it and
    /// return it for further customization.
    pub fn add_item(&mut self, options: ItemOptions) -> &mut Item {
        let mut item = Item::new();
        self.style.apply_item_defaults(&mut item);
        if let Some(title) = options.title {
            item.set_title(title);
        }
        if let Some(icon) = options.icon {
            item.set_icon(icon);
        }
        item.set_handler(options.handler);
        self.push_item(item)
    }

    /// Append a pre-built item as is. It stays invisible until the next open.
    pub fn push_item(&mut self, mut item: Item) -> &mut Item {
        item.scale.set_immediate(COLLAPSED_SCALE);
        item.alpha.set_immediate(0.0);
        log::debug!("Adding item {:?} at index {}", item.id(), self.items.len());

        let index = self.items.len();
        self.items.push(item);
        self.mark_dirty(ChangeFlags::NEEDS_LAYOUT | ChangeFlags::NEEDS_PAINT);
        &mut self.items[index]
    }

    /// Detach and drop an item. Returns false if it is not in this speed dial.
    pub fn remove_item(&mut self, id: ItemId) -> bool {
        match self.items.iter().position(|item| item.id() == id) {
            Some(index) => {
                self.detach(index);
                true
            }
            None => {
                log::trace!("Item {:?} not found, nothing to remove", id);
                false
            }
        }
    }

    /// Detach and drop the item at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn remove_item_at(&mut self, index: usize) {
        if let Err(err) = self.try_remove_item_at(index) {
            panic!("{err}");
        }
    }

    /// Detach and drop the item at `index`, or report an out-of-bounds index
    pub fn try_remove_item_at(&mut self, index: usize) -> Result<()> {
        if index >= self.items.len() {
            return Err(FabError::IndexOutOfBounds {
                index,
                len: self.items.len(),
            });
        }
        self.detach(index);
        Ok(())
    }

    fn detach(&mut self, index: usize) {
        let item = self.items.remove(index);
        if self.pressed == Some(HitTarget::Item(item.id())) {
            self.pressed = None;
        }
        log::debug!("Removed item {:?} from index {}", item.id(), index);
        self.mark_dirty(ChangeFlags::NEEDS_LAYOUT | ChangeFlags::NEEDS_PAINT);
    }

    // Open / close

    pub fn open(&mut self) {
        let spring = spring_transition();

        self.rotation
            .animate_to(OPEN_ROTATION_DEGREES.to_radians(), spring.clone());
        self.overlay_opacity.animate_to(1.0, spring.clone());

        let anchor_x = self.bounds.height / 2.0;
        let offsets = self.item_offsets();
        let mut delay = 0.0;
        for (item, offset) in self.items.iter_mut().zip(offsets) {
            let Some(offset) = offset else {
                continue;
            };
            let size = item.size();
            item.frame = Rect::new(anchor_x - size / 2.0, -offset, size, size);

            item.scale.set_immediate(COLLAPSED_SCALE);
            item.scale.animate_to(1.0, spring.clone().delay(delay));
            item.alpha.animate_to(1.0, spring.clone().delay(delay));
            delay += STAGGER_MS;
        }

        self.closed = false;
        log::debug!("Speed dial opened with {} items", self.items.len());
        self.mark_dirty(ChangeFlags::NEEDS_LAYOUT | ChangeFlags::NEEDS_PAINT);
    }

    pub fn close(&mut self) {
        let spring = spring_transition();

        self.rotation.animate_to(0.0, spring.clone());
        self.overlay_opacity.animate_to(0.0, spring);

        let mut delay = 0.0;
        for item in self.items.iter_mut().rev().filter(|item| !item.is_hidden()) {
            let fade = Transition::linear(CLOSE_ITEM_DURATION_MS).delay(delay);
            item.scale.animate_to(COLLAPSED_SCALE, fade.clone());
            item.alpha.animate_to(0.0, fade);
            delay += STAGGER_MS;
        }

        self.closed = true;
        log::debug!("Speed dial closed");
        self.mark_dirty(ChangeFlags::NEEDS_PAINT);
    }

    pub fn toggle(&mut self) {
        if self.closed {
            self.open();
        } else {
            self.close();
        }
    }

    // Input

    /// Resolve a point in this button's coordinates.
    ///
    /// While open, revealed items get the first chance to claim the point.
    /// Items added or unhidden since the last open are still invisible and
    /// are skipped. A point that no item claims and that lies outside the
    /// bounds closes the speed dial before falling through.
    pub fn hit_test(&mut self, point: Point) -> HitTarget {
        if !self.closed {
            let claimed = self
                .items
                .iter()
                .filter(|item| item.is_revealed())
                .find(|item| item.hit_test(point.relative_to(item.frame.origin())));
            if let Some(item) = claimed {
                return HitTarget::Item(item.id());
            }

            if !self.bounds.contains_point(point) {
                log::debug!("Touch outside speed dial at {:?}, closing", point);
                self.close();
            }
        }

        if self.bounds.contains_point(point) {
            HitTarget::Button
        } else {
            HitTarget::PassThrough
        }
    }

    /// Handle a touch delivered to the main button.
    ///
    /// A single-finger single tap shows the tint while down and toggles on
    /// release.
    pub fn event(&mut self, event: &Event) -> EventResponse {
        match event {
            Event::TouchDown { .. } | Event::TouchMove { .. } => {
                if !event.is_single_tap() {
                    return EventResponse::Ignored;
                }
                if self.tint.show() {
                    self.mark_dirty(ChangeFlags::NEEDS_PAINT);
                }
                EventResponse::Handled
            }
            Event::TouchUp { .. } => {
                if self.tint.hide() {
                    self.mark_dirty(ChangeFlags::NEEDS_PAINT);
                }
                if !event.is_single_tap() {
                    return EventResponse::Ignored;
                }
                self.toggle();
                EventResponse::Handled
            }
            Event::TouchCancel => {
                if self.tint.hide() {
                    self.mark_dirty(ChangeFlags::NEEDS_PAINT);
                }
                EventResponse::Ignored
            }
        }
    }

    /// Route a touch from the host.
    ///
    /// The target is chosen by [`hit_test`](Self::hit_test) on touch down and
    /// kept for the rest of the sequence.
    pub fn dispatch(&mut self, event: &Event) -> EventResponse {
        let target = match event {
            Event::TouchDown { .. } => {
                let Some(point) = event.location() else {
                    return EventResponse::Ignored;
                };
                let target = self.hit_test(point);
                self.pressed = Some(target);
                target
            }
            Event::TouchMove { .. } => match self.pressed {
                Some(target) => target,
                None => return EventResponse::Ignored,
            },
            Event::TouchUp { .. } | Event::TouchCancel => match self.pressed.take() {
                Some(target) => target,
                None => return EventResponse::Ignored,
            },
        };

        match target {
            HitTarget::Button => self.event(event),
            HitTarget::Item(id) => match self.item_mut(id) {
                Some(item) => {
                    let local = event.relative_to(item.frame.origin());
                    item.event(&local)
                }
                None => EventResponse::Ignored,
            },
            HitTarget::PassThrough => EventResponse::Ignored,
        }
    }

    // Frame

    /// Advance every animation to `now` (a monotonic frame clock).
    /// Returns true if another frame is needed.
    ///
    /// Animations started by `open` or `close` count their time from the
    /// first call after them, so the host may stop calling this while it
    /// returns false.
    pub fn advance_animations(&mut self, now: Duration) -> bool {
        let mut any_animating = false;

        for anim in [&mut self.rotation, &mut self.overlay_opacity] {
            let was_animating = anim.is_animating();
            anim.advance(now);
            if was_animating {
                self.dirty_flags |= ChangeFlags::NEEDS_PAINT;
            }
            any_animating |= anim.is_animating();
        }

        for item in &mut self.items {
            let was_animating = item.is_animating();
            any_animating |= item.advance_animations(now);
            if was_animating {
                self.dirty_flags |= ChangeFlags::NEEDS_PAINT;
            }
        }

        any_animating
    }

    /// Paint back to front: overlay, circle, plus icon, tint, then items.
    pub fn paint(&self, ctx: &mut PaintContext) {
        ctx.push(
            PaintLayer::new("overlay", self.overlay_frame)
                .opacity(self.overlay_opacity())
                .command(DrawCommand::rounded_rect(
                    Rect::from_size(self.overlay_frame.size()),
                    self.style.overlay_color,
                    0.0,
                )),
        );

        let frame = self.geometry.frame;
        let circle = Rect::from_size(frame.size());
        let radius = self.geometry.corner_radius;

        ctx.push(
            PaintLayer::new("circle", frame).command(DrawCommand::rounded_rect_with_shadow(
                circle,
                self.style.button_color,
                radius,
                self.style.shadow,
            )),
        );

        ctx.push(
            PaintLayer::new("plus", frame)
                .transform(Transform::rotate(*self.rotation.current()))
                .command(DrawCommand::Stroke {
                    segments: self.geometry.plus.to_vec(),
                    color: self.style.plus_color,
                    width: PLUS_LINE_WIDTH,
                }),
        );

        if self.tint.is_visible() {
            ctx.push(
                PaintLayer::new("tint", frame)
                    .command(DrawCommand::rounded_rect(circle, TINT_COLOR, radius)),
            );
        }

        for item in &self.items {
            item.paint(ctx);
        }
    }

    /// Paint into a fresh context and clear the paint flag
    pub fn display_list(&mut self) -> Vec<PaintLayer> {
        let mut ctx = PaintContext::new();
        self.paint(&mut ctx);
        self.dirty_flags.remove(ChangeFlags::NEEDS_PAINT);
        ctx.into_layers()
    }
}

impl Default for FloatingActionButton {
    fn default() -> Self {
        Self::new()
    }
}
