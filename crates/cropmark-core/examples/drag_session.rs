//! Drives a marker through a scripted drag session and prints the state a
//! host renderer would read back after each step. Run with
//! `RUST_LOG=debug` to see the arbiter's grab/release transitions.

use cropmark_core::{CropMarker, HandleId, MarkerConfig, PointerPhase};

fn report(marker: &CropMarker, label: &str) {
    println!(
        "{:<24} rect = {:?}, crop = {:?}",
        label,
        marker.rect(),
        marker.crop_bounds()
    );
}

fn drag(marker: &mut CropMarker, from: (f64, f64), to: (f64, f64)) {
    marker.handle_pointer(1, PointerPhase::Down, from.0, from.1);
    marker.handle_pointer(1, PointerPhase::Move, to.0, to.1);
    marker.handle_pointer(1, PointerPhase::Up, to.0, to.1);
}

fn main() {
    env_logger::init();

    let mut marker = CropMarker::new(MarkerConfig {
        enabled: true,
        right: 200,
        bottom: 150,
        view_width: 640,
        view_height: 480,
        ..MarkerConfig::default()
    });
    marker.set_change_listener(|| log::debug!("marker changed"));
    report(&marker, "initial");

    // Drag the bottom-right corner outward.
    drag(&mut marker, (200.0, 150.0), (400.0, 300.0));
    report(&marker, "after corner drag");

    // Grab the interior and translate the whole rectangle.
    drag(&mut marker, (200.0, 150.0), (300.0, 200.0));
    report(&marker, "after area drag");

    // Shrink the container; the bottom-right corner is pulled back in.
    marker.set_view_size(320, 240);
    report(&marker, "after view shrink");

    // Lock a square ratio (this re-asserts the marker over the full view),
    // then drag the bottom-right corner: the anchor follows the diagonal
    // through the opposite corner, so the marker stays square.
    marker.set_aspect_ratio(1.0);
    report(&marker, "after ratio lock");

    let (x, y) = marker.anchor(HandleId::BottomRight);
    drag(&mut marker, (x as f64, y as f64), (350.0, 120.0));
    report(&marker, "after ratio-locked drag");
}
