//! Headless walk-through of a speed dial: open it, tap an item, dismiss it by
//! tapping outside, and log the display list along the way.
//!
//! Run with `RUST_LOG=debug` to see the widget's own logging.

use std::time::Duration;

use speed_dial::prelude::*;

const FRAME: Duration = Duration::from_millis(16);

/// Tick the frame clock until every animation has settled
fn run_frames(fab: &mut FloatingActionButton, now: &mut Duration) {
    let mut frames = 0;
    while fab.advance_animations(*now) {
        *now += FRAME;
        frames += 1;
    }
    log::info!("Settled after {} frames", frames);
}

fn dump(fab: &mut FloatingActionButton) {
    for layer in fab.display_list() {
        log::info!(
            "  {:<8} frame=({:.0}, {:.0}, {:.0}x{:.0}) opacity={:.2} commands={}",
            layer.name,
            layer.frame.x,
            layer.frame.y,
            layer.frame.width,
            layer.frame.height,
            layer.opacity,
            layer.commands.len()
        );
    }
}

fn tap(fab: &mut FloatingActionButton, x: f32, y: f32) {
    fab.dispatch(&Event::tap_down(x, y));
    fab.dispatch(&Event::tap_up(x, y));
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut fab = FloatingActionButton::with_style(
        FabStyle::default()
            .button_color(Color::from_hex(0xE91E63))
            .plus_color(Color::WHITE),
    );
    fab.set_bounds(Rect::new(0.0, 0.0, 56.0, 56.0));
    fab.layout(Point::new(303.0, 740.0), Size::new(375.0, 812.0));

    fab.add_item(
        ItemOptions::new()
            .title("Compose")
            .icon("icons/compose.svg")
            .on_tap(|item| log::info!("Compose tapped (item {:?})", item.id())),
    );
    fab.add_item(ItemOptions::new().title("Archive")).set_hidden(true);
    fab.add_item(
        ItemOptions::new()
            .icon("icons/camera.png")
            .on_tap(|_| log::info!("Camera tapped")),
    );

    let mut now = Duration::ZERO;

    log::info!("Closed:");
    dump(&mut fab);

    tap(&mut fab, 28.0, 28.0);
    run_frames(&mut fab, &mut now);
    log::info!("Open (offsets {:?}):", fab.item_offsets());
    dump(&mut fab);

    // Camera is the second visible item: 112pt above the button
    tap(&mut fab, 28.0, -91.0);

    tap(&mut fab, -150.0, -400.0);
    run_frames(&mut fab, &mut now);
    log::info!("Dismissed, closed = {}:", fab.is_closed());
    dump(&mut fab);
}
