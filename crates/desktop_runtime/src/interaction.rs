//! Pointer-driven drag/resize sessions and the geometry they produce.
//!
//! The desktop has a single pointer stream, so at most one [`PointerGrab`] exists at a time. A
//! grab is created on pointer-down over a title bar or resize handle and dropped on pointer-up or
//! pointer-leave; pointer-moves without a grab change nothing.

use serde::{Deserialize, Serialize};

use crate::model::{PointerPosition, Position, Size, WindowId};

/// Part of a window frame that received a pointer-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitTarget {
    TitleBar,
    ResizeHandle,
    Body,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerGrab {
    /// `offset` is the pointer position minus the window position at press time.
    Drag {
        window_id: WindowId,
        offset: PointerPosition,
    },
    Resize { window_id: WindowId },
}

impl PointerGrab {
    pub fn window_id(self) -> WindowId {
        match self {
            Self::Drag { window_id, .. } | Self::Resize { window_id } => window_id,
        }
    }

    pub fn begin_drag(window_id: WindowId, pointer: PointerPosition, position: Position) -> Self {
        Self::Drag {
            window_id,
            offset: PointerPosition {
                x: pointer.x.saturating_sub(position.x),
                y: pointer.y.saturating_sub(position.y),
            },
        }
    }
}

/// Window position for a drag: follows the pointer, never above the top edge.
pub fn drag_position(pointer: PointerPosition, offset: PointerPosition) -> Position {
    Position {
        x: pointer.x.saturating_sub(offset.x),
        y: pointer.y.saturating_sub(offset.y).max(0),
    }
}

/// Window size for a resize from the bottom-right handle, floored at `min`.
pub fn resize_size(pointer: PointerPosition, position: Position, min: Size) -> Size {
    Size {
        width: pointer.x.saturating_sub(position.x),
        height: pointer.y.saturating_sub(position.y),
    }
    .clamped_min(min)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;

    const MIN: Size = Size {
        width: 300,
        height: 200,
    };

    #[test]
    fn drag_keeps_press_offset() {
        let grab = PointerGrab::begin_drag(
            WindowId(1),
            PointerPosition { x: 120, y: 45 },
            Position { x: 100, y: 30 },
        );
        let PointerGrab::Drag { offset, .. } = grab else {
            panic!("expected drag grab");
        };
        assert_eq!(offset, PointerPosition { x: 20, y: 15 });
        assert_eq!(
            drag_position(PointerPosition { x: 220, y: 145 }, offset),
            Position { x: 200, y: 130 }
        );
    }

    #[test]
    fn drag_allows_negative_x() {
        let pos = drag_position(PointerPosition { x: 5, y: 50 }, PointerPosition { x: 40, y: 10 });
        assert_eq!(pos, Position { x: -35, y: 40 });
    }

    #[test]
    fn resize_below_floor_snaps_to_exact_minimum() {
        let size = resize_size(
            PointerPosition { x: 110, y: 90 },
            Position { x: 100, y: 80 },
            MIN,
        );
        assert_eq!(size, MIN);
    }

    proptest! {
        #[test]
        fn drag_never_yields_negative_y(
            px in -5_000i32..5_000,
            py in -5_000i32..5_000,
            ox in -500i32..500,
            oy in -500i32..500,
        ) {
            let pos = drag_position(PointerPosition { x: px, y: py }, PointerPosition { x: ox, y: oy });
            prop_assert!(pos.y >= 0);
            prop_assert_eq!(pos.x, px - ox);
        }

        #[test]
        fn resize_never_goes_below_floor(
            px in -5_000i32..5_000,
            py in -5_000i32..5_000,
            x in -1_000i32..1_000,
            y in 0i32..1_000,
        ) {
            let size = resize_size(PointerPosition { x: px, y: py }, Position { x, y }, MIN);
            prop_assert!(size.width >= MIN.width);
            prop_assert!(size.height >= MIN.height);
            if px - x < MIN.width {
                prop_assert_eq!(size.width, MIN.width);
            }
            if py - y < MIN.height {
                prop_assert_eq!(size.height, MIN.height);
            }
        }
    }
}
