//! Per-frame input snapshot
//!
//! Button names follow the badge: A/C on the left and right of the front
//! face, B in the middle, UP/DOWN on the side.

use bitflags::bitflags;

use crate::maze::Direction;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Buttons: u8 {
        const A = 0x01;
        const B = 0x02;
        const C = 0x04;
        const UP = 0x08;
        const DOWN = 0x10;
    }
}

impl Buttons {
    /// Direction buttons in the order they are polled for a move
    pub const MOVES: [(Buttons, Direction); 4] = [
        (Buttons::A, Direction::West),
        (Buttons::C, Direction::East),
        (Buttons::UP, Direction::North),
        (Buttons::DOWN, Direction::South),
    ];
}

/// What the input collaborator reports for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameInput {
    /// Monotonic milliseconds since start
    pub ticks: u64,
    /// Buttons currently down
    pub held: Buttons,
    /// Buttons that went down since the previous frame
    pub pressed: Buttons,
}

impl FrameInput {
    /// A frame where nothing is touched
    pub fn idle(ticks: u64) -> Self {
        Self {
            ticks,
            ..Self::default()
        }
    }

    /// Buttons held down continuously (not newly pressed)
    pub fn holding(ticks: u64, held: Buttons) -> Self {
        Self {
            ticks,
            held,
            pressed: Buttons::empty(),
        }
    }

    /// Buttons that went down this frame; they also count as held
    pub fn pressing(ticks: u64, pressed: Buttons) -> Self {
        Self {
            ticks,
            held: pressed,
            pressed,
        }
    }
}
