use crate::nav::Direction;

pub const ENTER_OFFSET_PX: f32 = 40.0;
pub const EXIT_OFFSET_PX: f32 = 40.0;
pub const CENTER_DURATION_S: f32 = 1.5;
pub const EXIT_DURATION_S: f32 = 0.01;
pub const CENTER_EASE: &str = "cubic-bezier(0.22, 1, 0.36, 1)";
pub const EXIT_EASE: &str = "ease-in";

/// One motion pose: a vertical visual offset, an opacity, and how long the
/// move into this pose takes. `ease` is a CSS timing-function string so the
/// renderer can hand it straight to a transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionPhase {
    pub y: f32,
    pub opacity: f32,
    pub duration_s: f32,
    pub ease: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionSet {
    pub enter: MotionPhase,
    pub center: MotionPhase,
    pub exit: MotionPhase,
}

/// Motion poses for a transition direction. Forward content rises from
/// below the viewport, backward content drops from above; the outgoing pane
/// leaves a short step toward the opposite side.
///
/// The asymmetry is deliberate: the entrance is the slow, dominant motion
/// while the exit is near-instant, so only one directional movement reads
/// on screen at a time.
pub fn motion_for(direction: Direction) -> MotionSet {
    let (enter_y, exit_y) = match direction {
        Direction::Forward => (ENTER_OFFSET_PX, -EXIT_OFFSET_PX),
        Direction::Backward => (-ENTER_OFFSET_PX, EXIT_OFFSET_PX),
    };
    MotionSet {
        enter: MotionPhase {
            y: enter_y,
            opacity: 0.0,
            duration_s: 0.0,
            ease: CENTER_EASE,
        },
        center: MotionPhase {
            y: 0.0,
            opacity: 1.0,
            duration_s: CENTER_DURATION_S,
            ease: CENTER_EASE,
        },
        exit: MotionPhase {
            y: exit_y,
            opacity: 0.0,
            duration_s: EXIT_DURATION_S,
            ease: EXIT_EASE,
        },
    }
}
