// src/animation/transition.rs
//
// The motion plan for one track over one transition window.
// A Straight track keeps its x and only travels down; a Swap track draws a
// diagonal from the slot its value came from to the slot it lands in.

#[derive(Debug, Clone, PartialEq)]
pub enum TransitionDescriptor {
    Straight {
        start_y: f32,
        travel: f32,
    },
    Swap {
        source_x: f32,
        destination_x: f32,
        /// The value that moved out of the source slot. Its color is used for the diagonal.
        vacated_value: f32,
        start_y: f32,
        travel: f32,
    },
}

impl TransitionDescriptor {
    pub fn start_y(&self) -> f32 {
        match self {
            Self::Straight { start_y, .. } | Self::Swap { start_y, .. } => *start_y,
        }
    }

    pub fn travel(&self) -> f32 {
        match self {
            Self::Straight { travel, .. } | Self::Swap { travel, .. } => *travel,
        }
    }

    /// y once the transition has run to completion.
    pub fn end_y(&self) -> f32 {
        self.start_y() + self.travel()
    }

    /// y reached at `progress` through the transition.
    pub fn y_at(&self, progress: f32) -> f32 {
        self.start_y() + self.travel() * progress
    }

    pub fn is_swap(&self) -> bool {
        matches!(self, Self::Swap { .. })
    }
}
