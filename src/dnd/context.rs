use std::collections::HashSet;
use std::sync::Arc;

use leptos::callback::{Callable, Callback};
use leptos::ev;
use leptos::prelude::*;
use uuid::Uuid;

use super::sortable::SortableScope;
use super::utilities::css;
use super::{Coordinates, DragEvent, DragSession, DragTarget, Droppable, Rect, Transform, UniqueIdentifier};
use crate::core::config::DndConfig;

/// Measures the registered node, `None` while it is not mounted.
pub type Measure = Arc<dyn Fn() -> Option<Rect> + Send + Sync>;

pub const SCREEN_READER_INSTRUCTIONS_ID: &str = "dnd-instructions";

pub struct Registration<D> {
    pub id: UniqueIdentifier,
    pub data: D,
    pub scope: Option<SortableScope>,
    pub measure: Measure,
}

impl<D: Clone> Registration<D> {
    fn target(&self) -> DragTarget<D> {
        let sortable = self.scope.and_then(|scope| scope.position_of(&self.id));
        DragTarget {
            id: self.id.clone(),
            data: self.data.clone(),
            sortable,
        }
    }
}

struct Registry<D> {
    // Ordered by registration so collision ties resolve deterministically.
    entries: Vec<(Uuid, Registration<D>)>,
}

impl<D: Clone> Registry<D> {
    fn insert(&mut self, handle: Uuid, registration: Registration<D>) {
        self.entries.retain(|(h, _)| *h != handle);
        self.entries.push((handle, registration));
    }

    fn remove(&mut self, handle: Uuid) {
        self.entries.retain(|(h, _)| *h != handle);
    }

    fn snapshot(&self, handle: Uuid) -> Option<(DragTarget<D>, Option<Rect>, Vec<Droppable<D>>)> {
        let (_, active) = self.entries.iter().find(|(h, _)| *h == handle)?;
        Some((active.target(), (active.measure)(), self.droppables()))
    }

    /// Measures every mounted registration. An id rendered twice (home slot and drag overlay)
    /// counts once.
    fn droppables(&self) -> Vec<Droppable<D>> {
        let mut seen = HashSet::new();
        self.entries
            .iter()
            .filter_map(|(_, registration)| {
                let rect = (registration.measure)()?;
                seen.insert(registration.id.clone()).then(|| Droppable {
                    target: registration.target(),
                    rect,
                })
            })
            .collect()
    }
}

/// Board-wide drag-and-drop state shared through Leptos context.
pub struct DndContext<D: 'static> {
    session: RwSignal<DragSession<D>>,
    registry: StoredValue<Registry<D>>,
    config: StoredValue<DndConfig>,
    on_drag: Option<Callback<DragEvent<D>>>,
}

impl<D: 'static> Clone for DndContext<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: 'static> Copy for DndContext<D> {}

impl<D> DndContext<D>
where
    D: Clone + Send + Sync + 'static,
{
    pub fn new(config: DndConfig, on_drag: Option<Callback<DragEvent<D>>>) -> Self {
        Self {
            session: RwSignal::new(DragSession::default()),
            registry: StoredValue::new(Registry { entries: Vec::new() }),
            config: StoredValue::new(config),
            on_drag,
        }
    }

    pub fn register(&self, handle: Uuid, registration: Registration<D>) {
        tracing::trace!(id = %registration.id, %handle, "register sortable");
        self.registry.update_value(|registry| registry.insert(handle, registration));
    }

    pub fn unregister(&self, handle: Uuid) {
        self.registry.update_value(|registry| registry.remove(handle));
    }

    pub fn registered_ids(&self) -> Vec<UniqueIdentifier> {
        self.registry
            .with_value(|registry| registry.entries.iter().map(|(_, r)| r.id.clone()).collect())
    }

    pub fn pointer_down(&self, handle: Uuid, origin: Coordinates) {
        let distance = self.config.with_value(|config| config.activation_distance);
        self.start(handle, Some(origin), distance);
    }

    pub fn pointer_move(&self, point: Coordinates) {
        if !self.session.with_untracked(DragSession::is_pending) {
            return;
        }
        let droppables = self.registry.with_value(Registry::droppables);
        let overlay = self.config.with_value(|config| config.overlay);
        let mut events = Vec::new();
        self.session.update(|session| {
            let droppables = Self::without_own_transform(session, droppables, overlay);
            session.remeasure(droppables);
            events = session.move_to(point);
        });
        self.dispatch(events);
    }

    // Without an overlay the source node is translated by the drag delta; collide on its layout slot.
    fn without_own_transform(
        session: &DragSession<D>,
        droppables: Vec<Droppable<D>>,
        overlay: bool,
    ) -> Vec<Droppable<D>> {
        if overlay {
            return droppables;
        }
        let back = Coordinates::default() - session.delta();
        droppables
            .into_iter()
            .map(|mut droppable| {
                if session.is_active_id(&droppable.target.id) {
                    droppable.rect = droppable.rect.translated(back);
                }
                droppable
            })
            .collect()
    }

    pub fn pointer_up(&self) {
        if !self.session.with_untracked(DragSession::is_pending) {
            return;
        }
        let mut event = None;
        self.session.update(|session| event = session.end());
        self.dispatch(event.into_iter().collect());
    }

    pub fn cancel(&self) {
        if !self.session.with_untracked(DragSession::is_pending) {
            return;
        }
        let mut event = None;
        self.session.update(|session| event = session.cancel());
        self.dispatch(event.into_iter().collect());
    }

    /// Keyboard sensor. Returns whether the key was consumed.
    pub fn key_down(&self, handle: Uuid, key: &str) -> bool {
        let pending = self.session.with_untracked(DragSession::is_pending);
        let step = self.config.with_value(|config| config.keyboard_step);
        let offset = match key {
            "Enter" | " " => {
                if pending {
                    self.pointer_up();
                } else {
                    self.start(handle, None, 0.0);
                }
                return true;
            }
            "Escape" if pending => {
                self.cancel();
                return true;
            }
            "ArrowUp" => Coordinates::new(0.0, -step),
            "ArrowDown" => Coordinates::new(0.0, step),
            "ArrowLeft" => Coordinates::new(-step, 0.0),
            "ArrowRight" => Coordinates::new(step, 0.0),
            _ => return false,
        };
        if !pending {
            return false;
        }
        let current = self.session.with_untracked(DragSession::current).unwrap_or_default();
        self.pointer_move(current + offset);
        true
    }

    pub fn active(&self) -> Option<DragTarget<D>> {
        self.session.with(|session| session.active().cloned())
    }

    pub fn is_dragging_id(&self, id: &str) -> bool {
        self.session.with(|session| session.is_active_id(id))
    }

    pub fn transform_of(&self, id: &str) -> Option<Transform> {
        if self.config.with_value(|config| config.overlay) {
            return None;
        }
        self.session.with(|session| session.transform_of(id))
    }

    /// Only items that are not being dragged animate while a drag is running.
    pub fn transition_of(&self, id: &str) -> Option<String> {
        let animate = self
            .session
            .with(|session| session.is_dragging() && !session.is_active_id(id));
        animate.then(|| self.config.with_value(|config| config.transition.to_css()))
    }

    /// Inline style placing the drag overlay over the active node, shifted by the drag delta.
    pub fn overlay_style(&self) -> String {
        self.session.with(|session| {
            let fixed = "position: fixed; pointer-events: none; z-index: 50;";
            match (session.active_rect(), session.current()) {
                (Some(rect), _) => {
                    let translate = css::translate(Some(session.delta().into())).unwrap_or_default();
                    format!(
                        "{fixed} left: {}px; top: {}px; width: {}px; height: {}px; transform: {translate};",
                        rect.left, rect.top, rect.width, rect.height
                    )
                }
                (None, Some(pointer)) => format!("{fixed} left: {}px; top: {}px;", pointer.x, pointer.y),
                (None, None) => format!("{fixed} display: none;"),
            }
        })
    }

    fn start(&self, handle: Uuid, origin: Option<Coordinates>, activation_distance: f64) {
        let Some((active, rect, droppables)) = self.registry.with_value(|registry| registry.snapshot(handle)) else {
            tracing::warn!(%handle, "drag started on an unregistered node");
            return;
        };
        let origin = origin
            .or_else(|| rect.map(|rect| rect.center()))
            .unwrap_or_default();

        let mut result = Ok(Vec::new());
        self.session.update(|session| {
            result = session.begin(active, rect, origin, droppables, activation_distance);
        });
        match result {
            Ok(events) => self.dispatch(events),
            Err(err) => tracing::warn!(%err, "ignoring drag start"),
        }
    }

    fn dispatch(&self, events: Vec<DragEvent<D>>) {
        for event in events {
            tracing::debug!(event = event.kind(), id = %event.active().id, "drag event");
            if let Some(on_drag) = self.on_drag {
                on_drag.run(event);
            }
        }
    }
}

/// Creates the drag-and-drop context for a board, provides it to descendants, and wires the window
/// listeners that drive an active drag.
pub fn provide_dnd_context<D>(config: DndConfig, on_drag: Option<Callback<DragEvent<D>>>) -> DndContext<D>
where
    D: Clone + Send + Sync + 'static,
{
    if let Err(err) = config.validate() {
        tracing::warn!(%err, "using drag-and-drop config as given");
    }
    let ctx = DndContext::new(config, on_drag);
    provide_context(ctx);

    let move_handle = window_event_listener(ev::pointermove, move |ev| {
        ctx.pointer_move(Coordinates::new(f64::from(ev.client_x()), f64::from(ev.client_y())));
    });
    let up_handle = window_event_listener(ev::pointerup, move |_| ctx.pointer_up());
    let cancel_handle = window_event_listener(ev::pointercancel, move |_| ctx.cancel());
    on_cleanup(move || {
        move_handle.remove();
        up_handle.remove();
        cancel_handle.remove();
    });

    ctx
}

/// Hidden usage hint referenced by every sortable handle's `aria-describedby`.
#[component]
pub fn DndInstructions() -> impl IntoView {
    view! {
        <div id=SCREEN_READER_INSTRUCTIONS_ID class="sr-only">
            "To pick up a draggable item, press the space bar. "
            "While dragging, use the arrow keys to move the item. "
            "Press space again to drop the item in its new position, or press escape to cancel."
        </div>
    }
}
