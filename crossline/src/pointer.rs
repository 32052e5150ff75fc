use crate::model::Point;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Button {
    Primary,
    Auxiliary,
    Secondary,
}

impl Button {
    /// Map a DOM `MouseEvent.button` code.
    pub fn from_code(code: i16) -> Option<Button> {
        match code {
            0 => Some(Button::Primary),
            1 => Some(Button::Auxiliary),
            2 => Some(Button::Secondary),
            _ => None,
        }
    }
}

/// Two-phase segment gesture. A first point is pending exactly while the
/// gesture is `AwaitingSecondPoint`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum Gesture {
    #[default]
    Idle,
    AwaitingSecondPoint { first: Point },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PointerState {
    pub primary_down: bool,
    // Primary state as sampled before the latest release; moves preview only when set.
    pub previous_primary_down: bool,
    pub gesture: Gesture,
}

impl PointerState {
    pub fn pending_first_point(&self) -> Option<Point> {
        match self.gesture {
            Gesture::Idle => None,
            Gesture::AwaitingSecondPoint { first } => Some(first),
        }
    }

    pub fn awaiting_first_point(&self) -> bool { matches!(self.gesture, Gesture::Idle) }

    pub(crate) fn press_primary(&mut self) {
        self.previous_primary_down = false;
        self.primary_down = true;
    }

    pub(crate) fn release_primary(&mut self) {
        self.previous_primary_down = self.primary_down;
        self.primary_down = false;
    }

    /// Whether a pointer move should render a live preview of the segment in progress.
    pub fn previewing(&self) -> bool {
        self.previous_primary_down && !self.awaiting_first_point()
    }

    pub(crate) fn reset(&mut self) { self.gesture = Gesture::Idle; }
}
