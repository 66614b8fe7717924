use uuid::Uuid;

use super::{Coordinates, DndError, Rect, Transform, UniqueIdentifier};

/// Where a sortable item sits inside its sub-context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortablePosition {
    pub container: Uuid,
    pub index: usize,
}

/// A registered node as seen by drag handlers: its identifier, its payload and, for sortable
/// items, its position inside the enclosing sub-context.
#[derive(Debug, Clone, PartialEq)]
pub struct DragTarget<D> {
    pub id: UniqueIdentifier,
    pub data: D,
    pub sortable: Option<SortablePosition>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Droppable<D> {
    pub target: DragTarget<D>,
    pub rect: Rect,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DragEvent<D> {
    Start {
        active: DragTarget<D>,
    },
    Over {
        active: DragTarget<D>,
        over: Option<DragTarget<D>>,
    },
    End {
        active: DragTarget<D>,
        over: Option<DragTarget<D>>,
    },
    Cancel {
        active: DragTarget<D>,
    },
}

impl<D> DragEvent<D> {
    pub fn active(&self) -> &DragTarget<D> {
        match self {
            DragEvent::Start { active }
            | DragEvent::Over { active, .. }
            | DragEvent::End { active, .. }
            | DragEvent::Cancel { active } => active,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            DragEvent::Start { .. } => "start",
            DragEvent::Over { .. } => "over",
            DragEvent::End { .. } => "end",
            DragEvent::Cancel { .. } => "cancel",
        }
    }
}

#[derive(Debug, Clone)]
struct Operation<D> {
    active: DragTarget<D>,
    active_rect: Option<Rect>,
    origin: Coordinates,
    current: Coordinates,
    activated: bool,
    activation_distance: f64,
    droppables: Vec<Droppable<D>>,
    over: Option<DragTarget<D>>,
}

impl<D: Clone> Operation<D> {
    fn delta(&self) -> Coordinates {
        self.current - self.origin
    }

    // Closest centre wins; on a tie the first registered droppable is kept.
    fn detect_collision(&self) -> Option<DragTarget<D>> {
        let point = match self.active_rect {
            Some(rect) => rect.center() + self.delta(),
            None => self.current,
        };
        self.droppables
            .iter()
            .map(|droppable| (droppable.rect.center().distance_to(point), droppable))
            .fold(None::<(f64, &Droppable<D>)>, |best, candidate| match best {
                Some(best) if best.0 <= candidate.0 => Some(best),
                _ => Some(candidate),
            })
            .map(|(_, droppable)| droppable.target.clone())
    }

    /// Re-runs collision detection, returning an `Over` event when the target changed.
    ///
    /// A target that moved to another index of its sub-context counts as a new target: the slot
    /// under the pointer now belongs to a different position.
    fn resolve_over(&mut self) -> Option<DragEvent<D>> {
        let over = self.detect_collision();
        let slot = |target: &Option<DragTarget<D>>| target.as_ref().map(|o| (o.id.clone(), o.sortable));
        let changed = slot(&over) != slot(&self.over);
        self.over = over;
        changed.then(|| DragEvent::Over {
            active: self.active.clone(),
            over: self.over.clone(),
        })
    }

    fn activate(&mut self) -> Vec<DragEvent<D>> {
        self.activated = true;
        let mut events = vec![DragEvent::Start {
            active: self.active.clone(),
        }];
        events.extend(self.resolve_over());
        events
    }
}

/// State of a single drag operation, from the press on a handle to the drop.
///
/// Has no knowledge of the DOM: the reactive layer measures nodes and feeds measurements and pointer
/// coordinates in, and forwards the returned events to the board.
#[derive(Debug, Clone)]
pub struct DragSession<D> {
    operation: Option<Operation<D>>,
}

impl<D> Default for DragSession<D> {
    fn default() -> Self {
        Self { operation: None }
    }
}

impl<D: Clone> DragSession<D> {
    pub fn begin(
        &mut self,
        active: DragTarget<D>,
        active_rect: Option<Rect>,
        origin: Coordinates,
        droppables: Vec<Droppable<D>>,
        activation_distance: f64,
    ) -> Result<Vec<DragEvent<D>>, DndError> {
        if let Some(operation) = &self.operation {
            return Err(DndError::SessionInProgress {
                active: operation.active.id.clone(),
            });
        }

        let mut operation = Operation {
            active,
            active_rect,
            origin,
            current: origin,
            activated: false,
            activation_distance,
            droppables,
            over: None,
        };
        let events = if activation_distance <= 0.0 {
            operation.activate()
        } else {
            Vec::new()
        };
        self.operation = Some(operation);
        Ok(events)
    }

    /// Replaces the droppables with a fresh measurement. Called before each move, since the board
    /// may have reordered nodes in response to the previous `Over`.
    pub fn remeasure(&mut self, droppables: Vec<Droppable<D>>) {
        if let Some(operation) = self.operation.as_mut() {
            operation.droppables = droppables;
        }
    }

    pub fn move_to(&mut self, point: Coordinates) -> Vec<DragEvent<D>> {
        let Some(operation) = self.operation.as_mut() else {
            return Vec::new();
        };
        operation.current = point;

        if !operation.activated {
            if operation.origin.distance_to(point) < operation.activation_distance {
                return Vec::new();
            }
            return operation.activate();
        }
        operation.resolve_over().into_iter().collect()
    }

    /// Drops the active node. A press that never reached the activation distance ends silently.
    pub fn end(&mut self) -> Option<DragEvent<D>> {
        let operation = self.operation.take()?;
        operation.activated.then_some(DragEvent::End {
            active: operation.active,
            over: operation.over,
        })
    }

    pub fn cancel(&mut self) -> Option<DragEvent<D>> {
        let operation = self.operation.take()?;
        operation.activated.then_some(DragEvent::Cancel {
            active: operation.active,
        })
    }

    /// True from the press on a handle until the drop, including before activation.
    pub fn is_pending(&self) -> bool {
        self.operation.is_some()
    }

    pub fn is_dragging(&self) -> bool {
        self.operation.as_ref().is_some_and(|o| o.activated)
    }

    pub fn active(&self) -> Option<&DragTarget<D>> {
        self.operation
            .as_ref()
            .filter(|o| o.activated)
            .map(|o| &o.active)
    }

    pub fn is_active_id(&self, id: &str) -> bool {
        self.active().is_some_and(|active| active.id == id)
    }

    pub fn over(&self) -> Option<&DragTarget<D>> {
        self.operation.as_ref().and_then(|o| o.over.as_ref())
    }

    pub fn active_rect(&self) -> Option<Rect> {
        self.operation
            .as_ref()
            .filter(|o| o.activated)
            .and_then(|o| o.active_rect)
    }

    pub fn current(&self) -> Option<Coordinates> {
        self.operation.as_ref().map(|o| o.current)
    }

    pub fn delta(&self) -> Coordinates {
        self.operation
            .as_ref()
            .filter(|o| o.activated)
            .map(Operation::delta)
            .unwrap_or_default()
    }

    pub fn transform_of(&self, id: &str) -> Option<Transform> {
        self.is_active_id(id).then(|| Transform::from(self.delta()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[cfg(not(target_arch = "wasm32"))]
    use proptest::prelude::*;

    fn target(id: &str) -> DragTarget<&'static str> {
        DragTarget {
            id: id.to_string(),
            data: "payload",
            sortable: None,
        }
    }

    fn droppable(id: &str, left: f64) -> Droppable<&'static str> {
        Droppable {
            target: target(id),
            rect: Rect::new(left, 0.0, 100.0, 100.0),
        }
    }

    fn board() -> Vec<Droppable<&'static str>> {
        vec![droppable("a", 0.0), droppable("b", 200.0), droppable("c", 400.0)]
    }

    #[test]
    fn immediate_activation_emits_start_then_over() {
        let mut session = DragSession::default();
        let events = session
            .begin(target("a"), Some(Rect::new(0.0, 0.0, 100.0, 100.0)), Coordinates::new(50.0, 50.0), board(), 0.0)
            .unwrap();

        assert_eq!(events[0], DragEvent::Start { active: target("a") });
        assert_eq!(events[1], DragEvent::Over { active: target("a"), over: Some(target("a")) });
        assert!(session.is_dragging());
        assert!(session.is_active_id("a"));
    }

    #[test]
    fn activation_waits_for_distance() {
        let mut session = DragSession::default();
        let events = session
            .begin(target("a"), None, Coordinates::new(0.0, 0.0), Vec::new(), 8.0)
            .unwrap();
        assert!(events.is_empty());
        assert!(session.is_pending());
        assert!(!session.is_dragging());
        assert_eq!(session.transform_of("a"), None);

        assert!(session.move_to(Coordinates::new(3.0, 4.0)).is_empty());
        let events = session.move_to(Coordinates::new(6.0, 8.0));
        assert_eq!(events, vec![DragEvent::Start { active: target("a") }]);
        assert_eq!(session.transform_of("a"), Some(Transform::translate(6.0, 8.0)));
    }

    #[test]
    fn press_without_activation_ends_silently() {
        let mut session = DragSession::<&str>::default();
        session
            .begin(target("a"), None, Coordinates::default(), Vec::new(), 10.0)
            .unwrap();
        assert_eq!(session.end(), None);
        assert!(!session.is_pending());
    }

    #[test]
    fn second_begin_is_rejected() {
        let mut session = DragSession::default();
        session
            .begin(target("a"), None, Coordinates::default(), Vec::new(), 0.0)
            .unwrap();
        let err = session
            .begin(target("b"), None, Coordinates::default(), Vec::new(), 0.0)
            .unwrap_err();
        assert!(matches!(err, DndError::SessionInProgress { active } if active == "a"));
    }

    #[test]
    fn moving_changes_over_and_end_reports_it() {
        let mut session = DragSession::default();
        session
            .begin(target("a"), Some(Rect::new(0.0, 0.0, 100.0, 100.0)), Coordinates::new(50.0, 50.0), board(), 0.0)
            .unwrap();

        let events = session.move_to(Coordinates::new(260.0, 50.0));
        assert_eq!(events, vec![DragEvent::Over { active: target("a"), over: Some(target("b")) }]);
        // same target, no new event
        assert!(session.move_to(Coordinates::new(255.0, 60.0)).is_empty());

        assert_eq!(session.end(), Some(DragEvent::End { active: target("a"), over: Some(target("b")) }));
        assert!(session.active().is_none());
        assert_eq!(session.delta(), Coordinates::default());
    }

    #[test]
    fn cancel_reports_active_only() {
        let mut session = DragSession::default();
        session
            .begin(target("a"), None, Coordinates::default(), board(), 0.0)
            .unwrap();
        assert_eq!(session.cancel(), Some(DragEvent::Cancel { active: target("a") }));
        assert_eq!(session.cancel(), None);
    }

    #[test]
    fn without_rect_the_pointer_is_the_collision_point() {
        let mut session = DragSession::default();
        session
            .begin(target("x"), None, Coordinates::new(440.0, 10.0), board(), 0.0)
            .unwrap();
        assert_eq!(session.over().map(|o| o.id.as_str()), Some("c"));
    }

    #[test]
    fn only_the_active_id_is_transformed() {
        let mut session = DragSession::default();
        session
            .begin(target("a"), None, Coordinates::default(), Vec::new(), 0.0)
            .unwrap();
        session.move_to(Coordinates::new(10.0, -5.0));
        assert_eq!(session.transform_of("a"), Some(Transform::translate(10.0, -5.0)));
        assert_eq!(session.transform_of("b"), None);
    }

    fn slot(id: &str, index: usize) -> Droppable<&'static str> {
        Droppable {
            target: DragTarget {
                sortable: Some(SortablePosition { container: Uuid::nil(), index }),
                ..target(id)
            },
            rect: Rect::new(0.0, index as f64 * 60.0, 100.0, 50.0),
        }
    }

    #[test]
    fn remeasured_target_at_a_new_index_is_a_new_over() {
        let mut session = DragSession::default();
        session
            .begin(target("a"), Some(Rect::new(0.0, 0.0, 100.0, 50.0)), Coordinates::new(50.0, 25.0), vec![slot("a", 0), slot("b", 1)], 0.0)
            .unwrap();

        let events = session.move_to(Coordinates::new(50.0, 85.0));
        assert!(matches!(&events[..], [DragEvent::Over { over: Some(over), .. }] if over.id == "b"));

        // the board swapped the two; "b" now fills the top slot
        session.remeasure(vec![slot("b", 0), slot("a", 1)]);
        let events = session.move_to(Coordinates::new(50.0, 25.0));
        assert_eq!(
            events,
            vec![DragEvent::Over { active: target("a"), over: Some(slot("b", 0).target) }]
        );

        // same slot, same index: nothing new
        assert!(session.move_to(Coordinates::new(52.0, 26.0)).is_empty());
    }

    #[test]
    fn remeasure_without_a_session_is_ignored() {
        let mut session = DragSession::<&str>::default();
        session.remeasure(vec![slot("a", 0)]);
        assert!(!session.is_pending());
    }

    #[cfg(not(target_arch = "wasm32"))]
    proptest! {
        #[test]
        fn delta_tracks_pointer(x in -1000.0f64..1000.0, y in -1000.0f64..1000.0) {
            let mut session = DragSession::default();
            session.begin(target("a"), None, Coordinates::new(5.0, 5.0), Vec::new(), 0.0).unwrap();
            session.move_to(Coordinates::new(x, y));
            let delta = session.delta();
            prop_assert!((delta.x - (x - 5.0)).abs() < 1e-9);
            prop_assert!((delta.y - (y - 5.0)).abs() < 1e-9);
        }
    }
}
