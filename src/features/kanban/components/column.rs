use leptos::prelude::*;

use crate::components::ui::{
    cva, ghost_button_class, Badge, BadgeVariant, CardContent, CardHeader, Dragging, GlassCard, GripVertical,
};
use crate::core::models::{Column, Task};
use crate::dnd::{css, use_sortable, SortableArgs, SortableContext, UniqueIdentifier, UseSortable};
use crate::features::kanban::components::TaskCard;
use crate::features::kanban::models::DragData;

const COLUMN_BASE: &str = "min-h-[500px] max-h-max w-[350px] max-w-full flex flex-col flex-shrink-0 snap-center";
const HANDLE_CLASS: &str = "p-1 text-primary/50 -ml-2 h-auto cursor-grab relative";

pub fn task_ids(tasks: &[Task]) -> Vec<UniqueIdentifier> {
    tasks.iter().map(|task| task.id.clone()).collect()
}

/// Task ids cached against the tasks signal; subscribers only rerun when the ids change.
pub fn task_ids_memo(tasks: Signal<Vec<Task>>) -> Memo<Vec<UniqueIdentifier>> {
    Memo::new(move |_| tasks.with(|tasks| task_ids(tasks)))
}

pub fn column_sortable_args(column: &Column) -> SortableArgs<DragData> {
    SortableArgs::new(
        column.id.clone(),
        DragData::Column {
            column: column.clone(),
        },
    )
    .role_description(format!("Column: {}", column.title))
}

pub fn move_column_label(column: &Column) -> String {
    format!("Move column: {}", column.title)
}

pub fn column_variants(dragging: Dragging) -> String {
    cva(COLUMN_BASE, &[dragging.class()])
}

/// Key for a column rendered under `<For>`. The title is part of it so a renamed column is rendered
/// again with its new header and role description.
pub fn column_key(column: &Column) -> (UniqueIdentifier, String) {
    (column.id.clone(), column.title.clone())
}

#[component]
pub fn KanbanColumn(
    column: Column,
    #[prop(into)] tasks: Signal<Vec<Task>>,
    #[prop(optional)] is_overlay: bool,
) -> impl IntoView {
    let tasks_ids = task_ids_memo(tasks);

    let UseSortable {
        node_ref,
        attributes,
        listeners,
        transform,
        transition,
        is_dragging,
    } = use_sortable(column_sortable_args(&column));

    let style = Signal::derive(move || css::style(css::translate(transform.get()), transition.get()));
    let class = Signal::derive(move || column_variants(Dragging::select(is_overlay, is_dragging.get())));
    let handle_label = move_column_label(&column);

    view! {
        <GlassCard card_ref=node_ref style=style class=class>
            <CardHeader class="p-4 font-semibold border-b-2 text-left flex flex-row justify-between items-center">
                <button
                    type="button"
                    class=ghost_button_class(HANDLE_CLASS)
                    role=attributes.role
                    tabindex=attributes.tab_index.to_string()
                    aria-roledescription=attributes.role_description
                    aria-describedby=attributes.described_by
                    aria-disabled=attributes.disabled.to_string()
                    aria-pressed=move || is_dragging.get().then_some("true")
                    on:pointerdown=move |ev| listeners.on_pointer_down(&ev)
                    on:keydown=move |ev| listeners.on_key_down(&ev)
                >
                    <span class="sr-only">{handle_label}</span>
                    <GripVertical />
                </button>
                <span class="ml-auto">{column.title}</span>
                <Badge variant=BadgeVariant::Secondary class="ml-2">
                    {move || tasks.with(Vec::len)}
                </Badge>
            </CardHeader>
            <CardContent class="flex flex-grow flex-col gap-2 p-2">
                <SortableContext items=tasks_ids>
                    <For each=move || tasks.get() key=|task| task.id.clone() let:task>
                        <TaskCard task=task />
                    </For>
                </SortableContext>
            </CardContent>
        </GlassCard>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use leptos::callback::Callback;
    #[cfg(not(target_arch = "wasm32"))]
    use proptest::prelude::*;

    use crate::core::config::DndConfig;
    use crate::dnd::{Coordinates, DndContext, DragEvent, PointerInput};

    fn todo() -> Column {
        Column::new("todo", "To Do")
    }

    fn tasks(ids: &[&str]) -> Vec<Task> {
        ids.iter().map(|id| Task::with_id(*id, "todo", format!("Task {id}"))).collect()
    }

    #[test]
    fn payload_and_role_description() {
        let args = column_sortable_args(&todo());
        assert_eq!(args.id, "todo");
        assert_eq!(args.data, DragData::Column { column: todo() });
        assert_eq!(args.role_description.as_deref(), Some("Column: To Do"));
        assert_eq!(move_column_label(&todo()), "Move column: To Do");
    }

    #[test]
    fn variants_follow_drag_state() {
        assert!(column_variants(Dragging::select(false, false)).ends_with("border-2 border-transparent"));
        assert!(column_variants(Dragging::select(false, true)).ends_with("ring-2 opacity-30"));
        assert!(column_variants(Dragging::select(true, true)).ends_with("ring-2 ring-primary"));
        assert!(column_variants(Dragging::Default).starts_with("min-h-[500px]"));
        assert!(column_variants(Dragging::Default).contains("w-[350px]"));
        assert!(column_variants(Dragging::Default).contains("flex-shrink-0 snap-center"));
    }

    #[test]
    fn renaming_changes_the_render_key() {
        let renamed = Column::new("todo", "Backlog");
        assert_ne!(column_key(&todo()), column_key(&renamed));
        assert_eq!(column_key(&todo()), column_key(&todo()));
    }

    #[test]
    fn empty_column_has_no_ids() {
        assert!(task_ids(&[]).is_empty());
    }

    #[cfg(not(target_arch = "wasm32"))]
    proptest! {
        #[test]
        fn ids_match_tasks_in_order(ids in proptest::collection::vec("[a-z0-9]{1,8}", 0..20)) {
            let ids: Vec<&str> = ids.iter().map(String::as_str).collect();
            let derived = task_ids(&tasks(&ids));
            prop_assert_eq!(derived.len(), ids.len());
            prop_assert_eq!(derived, ids);
        }
    }

    #[test]
    fn id_memo_only_notifies_when_ids_change() {
        let owner = Owner::new();
        owner.with(|| {
            let source = RwSignal::new(tasks(&["t1", "t2"]));
            let ids = task_ids_memo(source.into());
            let runs = Arc::new(AtomicUsize::new(0));
            let downstream = {
                let runs = Arc::clone(&runs);
                Memo::new(move |_| {
                    runs.fetch_add(1, Ordering::SeqCst);
                    ids.with(Vec::len)
                })
            };

            assert_eq!(downstream.get(), 2);
            source.update(|tasks| tasks[0].title = "Renamed".to_string());
            assert_eq!(downstream.get(), 2);
            assert_eq!(ids.get(), vec!["t1".to_string(), "t2".to_string()]);
            assert_eq!(runs.load(Ordering::SeqCst), 1);

            source.update(|tasks| tasks.extend(self::tasks(&["t3"])));
            assert_eq!(downstream.get(), 3);
            assert_eq!(runs.load(Ordering::SeqCst), 2);
        });
    }

    #[test]
    fn handle_listener_starts_a_column_drag() {
        let owner = Owner::new();
        owner.with(|| {
            let events = Arc::new(Mutex::new(Vec::new()));
            let sink = Arc::clone(&events);
            let ctx = DndContext::new(
                DndConfig::default(),
                Some(Callback::new(move |event: DragEvent<DragData>| sink.lock().unwrap().push(event))),
            );
            provide_context(ctx);

            let sortable = use_sortable(column_sortable_args(&todo()));
            sortable.listeners.pointer_down(PointerInput {
                client: Coordinates::new(10.0, 10.0),
                button: 0,
                is_primary: true,
            });

            let events = events.lock().unwrap();
            match events.first() {
                Some(DragEvent::Start { active }) => {
                    assert_eq!(active.id, "todo");
                    assert_eq!(active.data, DragData::Column { column: todo() });
                }
                other => panic!("expected a drag start, got {other:?}"),
            }
            assert!(sortable.is_dragging.get());
            assert_eq!(
                column_variants(Dragging::select(false, sortable.is_dragging.get())),
                column_variants(Dragging::Over)
            );
        });
    }
}
