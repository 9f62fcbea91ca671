//! Renderer-agnostic display list.
//!
//! Widgets paint into a [`PaintContext`] as a flat list of [`PaintLayer`]s.
//! Each layer carries a frame in the widget's coordinate space, a paint-time
//! transform about the frame's centre, an opacity, and the draw commands in
//! layer-local coordinates. Layers are listed back to front.

pub mod commands;

pub use commands::{DrawCommand, Segment, Shadow};

use crate::transform::Transform;
use crate::widgets::Rect;

/// One composited layer of the display list.
#[derive(Debug, Clone, PartialEq)]
pub struct PaintLayer {
    /// Short name for debugging and tests ("overlay", "circle", "item", ...)
    pub name: &'static str,
    /// Layer frame in the widget's coordinate space
    pub frame: Rect,
    pub transform: Transform,
    /// Layer opacity in [0, 1]
    pub opacity: f32,
    pub commands: Vec<DrawCommand>,
}

impl PaintLayer {
    pub fn new(name: &'static str, frame: Rect) -> Self {
        Self {
            name,
            frame,
            transform: Transform::IDENTITY,
            opacity: 1.0,
            commands: Vec::new(),
        }
    }

    pub fn transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    pub fn command(mut self, command: DrawCommand) -> Self {
        self.commands.push(command);
        self
    }
}

/// Collects layers during a paint pass.
#[derive(Debug, Default)]
pub struct PaintContext {
    layers: Vec<PaintLayer>,
}

impl PaintContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a layer on top of everything painted so far.
    /// Fully transparent layers are skipped.
    pub fn push(&mut self, layer: PaintLayer) {
        if layer.opacity <= 0.0 {
            log::trace!("Skipping transparent layer '{}'", layer.name);
            return;
        }
        self.layers.push(layer);
    }

    pub fn layers(&self) -> &[PaintLayer] {
        &self.layers
    }

    pub fn into_layers(self) -> Vec<PaintLayer> {
        self.layers
    }
}
