use leptos::prelude::*;

use crate::components::ui::{cn, cva, Badge, BadgeVariant, Dragging, GripVertical};
use crate::core::models::Task;
use crate::dnd::{css, use_sortable, SortableArgs, UseSortable};
use crate::features::kanban::models::DragData;

const TASK_CARD_BASE: &str = "rounded-xl border bg-card text-card-foreground shadow cursor-grab";

pub fn task_sortable_args(task: &Task) -> SortableArgs<DragData> {
    SortableArgs::new(task.id.clone(), DragData::Task { task: task.clone() })
        .role_description(format!("Task: {}", task.title))
}

// Tasks have no neutral border, unlike columns.
fn task_variants(dragging: Dragging) -> String {
    match dragging {
        Dragging::Default => cn([TASK_CARD_BASE]),
        other => cva(TASK_CARD_BASE, &[other.class()]),
    }
}

// A single task inside a column. The whole card is the drag handle.
#[component]
pub fn TaskCard(task: Task, #[prop(optional)] is_overlay: bool) -> impl IntoView {
    let UseSortable {
        node_ref,
        attributes,
        listeners,
        transform,
        transition,
        is_dragging,
    } = use_sortable(task_sortable_args(&task));

    let style = move || css::style(css::translate(transform.get()), transition.get());
    let class = move || task_variants(Dragging::select(is_overlay, is_dragging.get()));
    let handle_label = format!("Move task: {}", task.title);

    view! {
        <div
            node_ref=node_ref
            class=class
            style=style
            data-task-id=task.id.clone()
            role=attributes.role
            tabindex=attributes.tab_index.to_string()
            aria-roledescription=attributes.role_description
            aria-describedby=attributes.described_by
            aria-disabled=attributes.disabled.to_string()
            aria-pressed=move || is_dragging.get().then_some("true")
            on:pointerdown=move |ev| listeners.on_pointer_down(&ev)
            on:keydown=move |ev| listeners.on_key_down(&ev)
        >
            <div class="px-3 py-3 flex justify-between items-center border-b-2 border-secondary relative">
                <span class="p-1 text-secondary-foreground/50 -ml-2">
                    <span class="sr-only">{handle_label}</span>
                    <GripVertical />
                </span>
                <Badge variant=BadgeVariant::Default class="ml-auto font-semibold">
                    "Task"
                </Badge>
            </div>
            <div class="px-3 pt-3 pb-6 text-left whitespace-pre-wrap">
                <p class="font-medium">{task.title}</p>
                <p class="text-sm text-muted-foreground">{task.description}</p>
            </div>
        </div>
    }
}
