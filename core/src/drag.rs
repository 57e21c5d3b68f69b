//! Drag-and-drop gesture state.
//!
//! A `DragSession` owns the transient state between picking a meal up and
//! dropping it. `move_meal` itself stays stateless; the session only turns
//! a completed gesture into a [`MoveIntent`]. Cancelling (ESC, drop outside
//! any target) clears the state and means "no move occurred".

/// Final parameters of a completed drag gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveIntent {
    pub meal_id: String,
    pub target_day: u8,
    /// Insert before this meal when it is on the target day; drop at the
    /// end of the day otherwise.
    pub before: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum DragState {
    Idle,
    Dragging { meal_id: String, from_day: u8 },
}

#[derive(Debug)]
pub struct DragSession {
    state: DragState,
}

impl DragSession {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: DragState::Idle,
        }
    }

    /// Pick a meal up. A drag already in flight is replaced.
    pub fn begin(&mut self, meal_id: &str, from_day: u8) {
        self.state = DragState::Dragging {
            meal_id: meal_id.to_string(),
            from_day,
        };
    }

    /// Complete the gesture. Returns `None` when nothing was being dragged.
    /// The session is back to idle afterwards either way.
    pub fn drop_on(&mut self, target_day: u8, before: Option<&str>) -> Option<MoveIntent> {
        match std::mem::replace(&mut self.state, DragState::Idle) {
            DragState::Idle => None,
            DragState::Dragging { meal_id, .. } => Some(MoveIntent {
                meal_id,
                target_day,
                before: before.map(ToString::to_string),
            }),
        }
    }

    /// Abort the gesture, unconditionally clearing any in-flight state.
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }

    /// The in-flight meal id and its originating day, if any.
    #[must_use]
    pub fn dragging(&self) -> Option<(&str, u8)> {
        match &self.state {
            DragState::Idle => None,
            DragState::Dragging { meal_id, from_day } => Some((meal_id.as_str(), *from_day)),
        }
    }
}

impl Default for DragSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_emits_intent_and_resets() {
        let mut session = DragSession::new();
        session.begin("meal-1", 2);
        assert_eq!(session.dragging(), Some(("meal-1", 2)));

        let intent = session.drop_on(4, Some("meal-9")).unwrap();
        assert_eq!(intent.meal_id, "meal-1");
        assert_eq!(intent.target_day, 4);
        assert_eq!(intent.before.as_deref(), Some("meal-9"));
        assert_eq!(session.dragging(), None);
    }

    #[test]
    fn test_drop_while_idle_means_no_move() {
        let mut session = DragSession::new();
        assert!(session.drop_on(0, None).is_none());
    }

    #[test]
    fn test_cancel_clears_in_flight_state() {
        let mut session = DragSession::new();
        session.begin("meal-1", 0);
        session.cancel();
        assert_eq!(session.dragging(), None);
        assert!(session.drop_on(3, None).is_none());
    }

    #[test]
    fn test_new_drag_replaces_stale_one() {
        let mut session = DragSession::new();
        session.begin("meal-1", 0);
        session.begin("meal-2", 5);
        let intent = session.drop_on(6, None).unwrap();
        assert_eq!(intent.meal_id, "meal-2");
    }
}
