use std::sync::Arc;

use leptos::callback::{Callable, Callback};
use leptos::context::Provider;
use leptos::html::Div;
use leptos::prelude::*;
use uuid::Uuid;

use super::context::{DndContext, Measure, Registration, SCREEN_READER_INSTRUCTIONS_ID};
use super::{Coordinates, Rect, SortablePosition, Transform, UniqueIdentifier};

/// Scope within which a set of sortable items can be reordered.
#[derive(Debug, Clone, Copy)]
pub struct SortableScope {
    pub id: Uuid,
    pub items: Signal<Vec<UniqueIdentifier>>,
}

impl SortableScope {
    pub fn position_of(&self, id: &str) -> Option<SortablePosition> {
        self.items
            .with_untracked(|items| items.iter().position(|item| item == id))
            .map(|index| SortablePosition {
                container: self.id,
                index,
            })
    }
}

/// Declares the ordered ids its descendants may be reordered among.
#[component]
pub fn SortableContext(#[prop(into)] items: Signal<Vec<UniqueIdentifier>>, children: Children) -> impl IntoView {
    let scope = SortableScope {
        id: Uuid::new_v4(),
        items,
    };
    view! { <Provider value=scope>{children()}</Provider> }
}

pub struct SortableArgs<D> {
    pub id: UniqueIdentifier,
    pub data: D,
    pub role_description: Option<String>,
    pub disabled: bool,
}

impl<D> SortableArgs<D> {
    pub fn new(id: impl Into<UniqueIdentifier>, data: D) -> Self {
        Self {
            id: id.into(),
            data,
            role_description: None,
            disabled: false,
        }
    }

    pub fn role_description(mut self, description: impl Into<String>) -> Self {
        self.role_description = Some(description.into());
        self
    }
}

/// Accessibility attributes to spread on the drag handle.
#[derive(Debug, Clone, PartialEq)]
pub struct SortableAttributes {
    pub role: &'static str,
    pub tab_index: i32,
    pub role_description: String,
    pub described_by: &'static str,
    pub disabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerInput {
    pub client: Coordinates,
    pub button: i16,
    pub is_primary: bool,
}

impl From<&web_sys::PointerEvent> for PointerInput {
    fn from(ev: &web_sys::PointerEvent) -> Self {
        Self {
            client: Coordinates::new(f64::from(ev.client_x()), f64::from(ev.client_y())),
            button: ev.button(),
            is_primary: ev.is_primary(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInput {
    pub key: String,
}

impl From<&web_sys::KeyboardEvent> for KeyInput {
    fn from(ev: &web_sys::KeyboardEvent) -> Self {
        Self { key: ev.key() }
    }
}

/// Activation listeners to attach to the drag handle, and only to it.
#[derive(Clone, Copy)]
pub struct SortableListeners {
    on_pointer: Callback<PointerInput>,
    on_key: Callback<KeyInput, bool>,
}

impl SortableListeners {
    pub fn pointer_down(&self, input: PointerInput) {
        self.on_pointer.run(input);
    }

    pub fn key_down(&self, input: KeyInput) -> bool {
        self.on_key.run(input)
    }

    pub fn on_pointer_down(&self, ev: &web_sys::PointerEvent) {
        self.pointer_down(PointerInput::from(ev));
    }

    pub fn on_key_down(&self, ev: &web_sys::KeyboardEvent) {
        if self.key_down(KeyInput::from(ev)) {
            ev.prevent_default();
        }
    }
}

pub struct UseSortable {
    pub node_ref: NodeRef<Div>,
    pub attributes: SortableAttributes,
    pub listeners: SortableListeners,
    pub transform: Signal<Option<Transform>>,
    pub transition: Signal<Option<String>>,
    pub is_dragging: Signal<bool>,
}

/// Registers a node as both draggable and droppable inside the nearest `SortableContext`.
///
/// The registration lives as long as the calling component.
pub fn use_sortable<D>(args: SortableArgs<D>) -> UseSortable
where
    D: Clone + Send + Sync + 'static,
{
    let ctx = expect_context::<DndContext<D>>();
    let scope = use_context::<SortableScope>();
    let SortableArgs {
        id,
        data,
        role_description,
        disabled,
    } = args;

    let node_ref = NodeRef::<Div>::new();
    let measure: Measure = Arc::new(move || {
        node_ref
            .get_untracked()
            .map(|el| Rect::from(&el.get_bounding_client_rect()))
    });

    let handle = Uuid::new_v4();
    ctx.register(
        handle,
        Registration {
            id: id.clone(),
            data,
            scope,
            measure,
        },
    );
    on_cleanup(move || ctx.unregister(handle));

    let on_pointer = Callback::new(move |input: PointerInput| {
        if disabled || input.button != 0 || !input.is_primary {
            return;
        }
        ctx.pointer_down(handle, input.client);
    });
    let on_key = Callback::new(move |input: KeyInput| !disabled && ctx.key_down(handle, &input.key));

    let attributes = SortableAttributes {
        role: "button",
        tab_index: 0,
        role_description: role_description.unwrap_or_else(|| "sortable".to_string()),
        described_by: SCREEN_READER_INSTRUCTIONS_ID,
        disabled,
    };

    let transform = {
        let id = id.clone();
        Signal::derive(move || ctx.transform_of(&id))
    };
    let transition = {
        let id = id.clone();
        Signal::derive(move || ctx.transition_of(&id))
    };
    let is_dragging = Signal::derive(move || ctx.is_dragging_id(&id));

    UseSortable {
        node_ref,
        attributes,
        listeners: SortableListeners { on_pointer, on_key },
        transform,
        transition,
        is_dragging,
    }
}
