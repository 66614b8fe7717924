use leptos::prelude::*;

use crate::core::config::DndConfig;
use crate::core::models::{Column, Task};
use crate::dnd::{provide_dnd_context, DndInstructions, SortableContext};
use crate::features::kanban::{column_key, use_board, DragData, KanbanColumn, TaskCard};

const BOARD_CONFIG: &str = include_str!("../config/dnd.json");

fn board_config() -> DndConfig {
    DndConfig::from_json(BOARD_CONFIG).unwrap_or_else(|err| {
        tracing::warn!(%err, "falling back to the default drag-and-drop config");
        DndConfig {
            overlay: true,
            ..DndConfig::default()
        }
    })
}

fn seed_columns() -> Vec<Column> {
    vec![
        Column::new("todo", "To Do"),
        Column::new("in-progress", "In Progress"),
        Column::new("done", "Done"),
    ]
}

fn seed_tasks() -> Vec<Task> {
    vec![
        Task::new("todo", "Sketch the board layout", "Columns scroll horizontally and snap."),
        Task::new("todo", "Keyboard dragging", "Space picks up, arrows move, space drops."),
        Task::new("in-progress", "Drag overlay", "Render a floating copy under the pointer."),
        Task::new("done", "Column model", ""),
    ]
}

#[component]
pub fn App() -> impl IntoView {
    let board = use_board(seed_columns(), seed_tasks());
    let dnd = provide_dnd_context(board_config(), Some(board.on_drag));

    // Only the payload matters for the overlay; the pointer position is applied through its style.
    let active = Memo::new(move |_| dnd.active().map(|active| active.data));
    let columns = board.columns;

    view! {
        <main class="app">
            <DndInstructions />
            <div class="kanban-board flex flex-row gap-4 items-start overflow-x-auto snap-x snap-mandatory px-2 pb-4">
                <SortableContext items=board.column_ids()>
                    <For
                        each=move || columns.get()
                        key=column_key
                        children=move |column: Column| {
                            let tasks = board.tasks_for(column.id.clone());
                            view! { <KanbanColumn column=column tasks=tasks /> }
                        }
                    />
                </SortableContext>
            </div>
            {move || {
                active
                    .get()
                    .map(|data| {
                        let preview = match data {
                            DragData::Column { column } => {
                                let tasks = board.tasks_for(column.id.clone());
                                view! { <KanbanColumn column=column tasks=tasks is_overlay=true /> }.into_any()
                            }
                            DragData::Task { task } => view! { <TaskCard task=task is_overlay=true /> }.into_any(),
                        };
                        view! { <div class="drag-overlay" style=move || dnd.overlay_style()>{preview}</div> }
                    })
            }}
        </main>
    }
}
