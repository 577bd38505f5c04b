//! Pointer phases and the drag arbiter.

use serde::{Deserialize, Serialize};

use crate::handle::TouchHandle;

/// Host-assigned pointer identifier.
pub type PointerId = u64;

/// Phase of a pointer event, as delivered by the host.
///
/// Events for one pointer are expected in down, zero-or-more move, up or
/// cancel order; cancel is handled exactly like up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    Cancel,
}

/// Routes pointer events to at most one active (pointer, handle) binding.
///
/// This binding is the only admission control between simultaneous pointers:
/// while one pointer drags, every other pointer's events are ignored, so
/// coordinate cells are only ever mutated by the active handle.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragArbiter {
    active: Option<(PointerId, usize)>,
}

impl DragArbiter {
    /// A new arbiter in the idle state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a drag is currently active.
    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// Index of the handle bound to the active drag, if any.
    pub fn active_handle(&self) -> Option<usize> {
        self.active.map(|(_, handle)| handle)
    }

    /// Route one pointer-phase event over `handles`, whose slice order is
    /// the hit-test priority (on equal distances the earlier handle wins).
    /// Coordinates are rounded to integer device units on entry. Returns
    /// true when marker geometry may have changed, which is exactly a
    /// routed move; everything that does not match the active binding is a
    /// no-op.
    pub fn dispatch(
        &mut self,
        handles: &mut [TouchHandle],
        pointer: PointerId,
        phase: PointerPhase,
        x: f64,
        y: f64,
    ) -> bool {
        let x = x.round() as i32;
        let y = y.round() as i32;

        match phase {
            PointerPhase::Down => {
                if self.active.is_none() {
                    let mut best: Option<(usize, f64)> = None;
                    for (index, handle) in handles.iter().enumerate() {
                        if let Some(distance) = handle.grab_match(x, y) {
                            if best.is_none_or(|(_, best_distance)| distance < best_distance) {
                                best = Some((index, distance));
                            }
                        }
                    }

                    if let Some((index, distance)) = best {
                        log::debug!(
                            "pointer {} grabbed handle {} at ({}, {}), distance {:.1}",
                            pointer,
                            index,
                            x,
                            y,
                            distance
                        );
                        self.active = Some((pointer, index));
                        handles[index].grab(x, y);
                    }
                }
                false
            }
            PointerPhase::Move => match self.active {
                Some((active_pointer, index)) if active_pointer == pointer => {
                    handles[index].move_to(x, y);
                    true
                }
                _ => false,
            },
            PointerPhase::Up | PointerPhase::Cancel => {
                if let Some((active_pointer, index)) = self.active {
                    if active_pointer == pointer {
                        log::debug!("pointer {} released handle {}", pointer, index);
                        handles[index].release();
                        self.active = None;
                    }
                }
                false
            }
        }
    }
}
