//! The editable event plan.
//!
//! An [`EventPlan`] holds the event settings and both frame collections.
//! Every edit returns a new plan and leaves the receiver untouched, so a
//! plan can be shared by any number of readers while the next version is
//! being built.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

use super::{CrewFrame, EventLocation, FrameKind, LabourFrame};

/// An event with its crew and labour attendance windows.
///
/// # Example
///
/// ```
/// use logistics_engine::models::{EventLocation, EventPlan};
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
/// let plan = EventPlan::new("Expo", EventLocation::Local, today);
/// let grown = plan.with_crew_frame_added(today);
///
/// assert_eq!(plan.crew_frames.len(), 1);
/// assert_eq!(grown.crew_frames.len(), 2);
/// assert_eq!(grown.crew_frames[1].name, "Crew Frame 2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventPlan {
    /// Display name of the event.
    #[serde(default)]
    pub event_name: String,
    /// Location class that applies to every frame.
    pub location: EventLocation,
    /// Crew frames in display order.
    #[serde(default)]
    pub crew_frames: Vec<CrewFrame>,
    /// Labour frames in display order.
    #[serde(default)]
    pub labour_frames: Vec<LabourFrame>,
}

/// One edit to an [`EventPlan`], as sent over the wire.
///
/// Serialized with an `op` tag, e.g.
/// `{"op": "remove_crew_frame", "id": "c1"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PlanEdit {
    /// Move the event to another location class.
    SetLocation {
        /// The new location class.
        location: EventLocation,
    },
    /// Rename the event.
    SetEventName {
        /// The new display name.
        event_name: String,
    },
    /// Append an empty crew frame.
    AddCrewFrame,
    /// Append an empty labour frame.
    AddLabourFrame,
    /// Replace the crew frame with the same id.
    ReplaceCrewFrame {
        /// The replacement frame.
        frame: CrewFrame,
    },
    /// Replace the labour frame with the same id.
    ReplaceLabourFrame {
        /// The replacement frame.
        frame: LabourFrame,
    },
    /// Remove a crew frame by id.
    RemoveCrewFrame {
        /// Id of the frame to remove.
        id: String,
    },
    /// Remove a labour frame by id.
    RemoveLabourFrame {
        /// Id of the frame to remove.
        id: String,
    },
}

impl EventPlan {
    /// Creates a plan seeded with one empty crew frame and one empty labour frame.
    pub fn new(event_name: impl Into<String>, location: EventLocation, today: NaiveDate) -> Self {
        Self {
            event_name: event_name.into(),
            location,
            crew_frames: vec![CrewFrame::with_defaults(new_frame_id(), 1, today)],
            labour_frames: vec![LabourFrame::with_defaults(new_frame_id(), 1, today)],
        }
    }

    /// Returns a copy of the plan at a different location.
    pub fn with_location(&self, location: EventLocation) -> Self {
        Self {
            location,
            ..self.clone()
        }
    }

    /// Returns a copy of the plan under a different name.
    pub fn with_event_name(&self, event_name: impl Into<String>) -> Self {
        Self {
            event_name: event_name.into(),
            ..self.clone()
        }
    }

    /// Returns a copy with an empty crew frame appended.
    pub fn with_crew_frame_added(&self, today: NaiveDate) -> Self {
        let mut plan = self.clone();
        let position = plan.crew_frames.len() + 1;
        plan.crew_frames
            .push(CrewFrame::with_defaults(new_frame_id(), position, today));
        plan
    }

    /// Returns a copy with an empty labour frame appended.
    pub fn with_labour_frame_added(&self, today: NaiveDate) -> Self {
        let mut plan = self.clone();
        let position = plan.labour_frames.len() + 1;
        plan.labour_frames
            .push(LabourFrame::with_defaults(new_frame_id(), position, today));
        plan
    }

    /// Returns a copy with the crew frame sharing `frame.id` replaced by `frame`.
    ///
    /// # Errors
    ///
    /// Returns `FrameNotFound` if no crew frame has that id.
    pub fn with_crew_frame_replaced(&self, frame: CrewFrame) -> EngineResult<Self> {
        let index = position_of(&self.crew_frames, |f| f.id == frame.id).ok_or_else(|| {
            EngineError::FrameNotFound {
                kind: FrameKind::Crew,
                id: frame.id.clone(),
            }
        })?;

        let mut plan = self.clone();
        plan.crew_frames[index] = frame;
        Ok(plan)
    }

    /// Returns a copy with the labour frame sharing `frame.id` replaced by `frame`.
    ///
    /// # Errors
    ///
    /// Returns `FrameNotFound` if no labour frame has that id.
    pub fn with_labour_frame_replaced(&self, frame: LabourFrame) -> EngineResult<Self> {
        let index = position_of(&self.labour_frames, |f| f.id == frame.id).ok_or_else(|| {
            EngineError::FrameNotFound {
                kind: FrameKind::Labour,
                id: frame.id.clone(),
            }
        })?;

        let mut plan = self.clone();
        plan.labour_frames[index] = frame;
        Ok(plan)
    }

    /// Returns a copy without the crew frame `id`.
    ///
    /// # Errors
    ///
    /// Returns `LastFrame` if it is the only crew frame, or `FrameNotFound`
    /// if no crew frame has that id.
    pub fn with_crew_frame_removed(&self, id: &str) -> EngineResult<Self> {
        let index = position_of(&self.crew_frames, |f| f.id == id).ok_or_else(|| {
            EngineError::FrameNotFound {
                kind: FrameKind::Crew,
                id: id.to_string(),
            }
        })?;
        if self.crew_frames.len() <= 1 {
            return Err(EngineError::LastFrame {
                kind: FrameKind::Crew,
            });
        }

        let mut plan = self.clone();
        plan.crew_frames.remove(index);
        Ok(plan)
    }

    /// Returns a copy without the labour frame `id`.
    ///
    /// # Errors
    ///
    /// Returns `LastFrame` if it is the only labour frame, or `FrameNotFound`
    /// if no labour frame has that id.
    pub fn with_labour_frame_removed(&self, id: &str) -> EngineResult<Self> {
        let index = position_of(&self.labour_frames, |f| f.id == id).ok_or_else(|| {
            EngineError::FrameNotFound {
                kind: FrameKind::Labour,
                id: id.to_string(),
            }
        })?;
        if self.labour_frames.len() <= 1 {
            return Err(EngineError::LastFrame {
                kind: FrameKind::Labour,
            });
        }

        let mut plan = self.clone();
        plan.labour_frames.remove(index);
        Ok(plan)
    }
}

impl EventPlan {
    /// Applies one edit and returns the resulting plan.
    ///
    /// New frames are dated `today`.
    ///
    /// # Errors
    ///
    /// Propagates `FrameNotFound` and `LastFrame` from the replace and
    /// remove edits.
    pub fn apply(&self, edit: PlanEdit, today: NaiveDate) -> EngineResult<Self> {
        match edit {
            PlanEdit::SetLocation { location } => Ok(self.with_location(location)),
            PlanEdit::SetEventName { event_name } => Ok(self.with_event_name(event_name)),
            PlanEdit::AddCrewFrame => Ok(self.with_crew_frame_added(today)),
            PlanEdit::AddLabourFrame => Ok(self.with_labour_frame_added(today)),
            PlanEdit::ReplaceCrewFrame { frame } => self.with_crew_frame_replaced(frame),
            PlanEdit::ReplaceLabourFrame { frame } => self.with_labour_frame_replaced(frame),
            PlanEdit::RemoveCrewFrame { id } => self.with_crew_frame_removed(&id),
            PlanEdit::RemoveLabourFrame { id } => self.with_labour_frame_removed(&id),
        }
    }
}

fn new_frame_id() -> String {
    Uuid::new_v4().to_string()
}

fn position_of<T>(frames: &[T], predicate: impl Fn(&T) -> bool) -> Option<usize> {
    frames.iter().position(predicate)
}
