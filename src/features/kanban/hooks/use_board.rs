use leptos::callback::Callback;
use leptos::prelude::*;

use crate::core::models::{Column, Task};
use crate::dnd::{DragEvent, DragTarget};
use crate::features::kanban::models::DragData;
use crate::features::kanban::services::{column_of_target, move_column, move_task_over, tasks_for_column};

/// Board state owned by the parent of the columns, plus the drop resolution wired to the DnD engine.
#[derive(Clone, Copy)]
pub struct BoardHook {
    pub columns: RwSignal<Vec<Column>>,
    pub tasks: RwSignal<Vec<Task>>,
    pub on_drag: Callback<DragEvent<DragData>>,
}

impl BoardHook {
    pub fn column_ids(&self) -> Signal<Vec<String>> {
        let columns = self.columns;
        Signal::derive(move || columns.with(|columns| columns.iter().map(|c| c.id.clone()).collect()))
    }

    pub fn tasks_for(&self, column_id: String) -> Signal<Vec<Task>> {
        let tasks = self.tasks;
        Signal::derive(move || tasks.with(|tasks| tasks_for_column(tasks, &column_id)))
    }
}

pub fn use_board(columns: Vec<Column>, tasks: Vec<Task>) -> BoardHook {
    let columns = RwSignal::new(columns);
    let tasks = RwSignal::new(tasks);
    let on_drag = Callback::new(move |event: DragEvent<DragData>| handle_drag_event(columns, tasks, event));

    BoardHook { columns, tasks, on_drag }
}

fn handle_drag_event(columns: RwSignal<Vec<Column>>, tasks: RwSignal<Vec<Task>>, event: DragEvent<DragData>) {
    match event {
        // Tasks move live while hovering, so the overlay always previews the final spot.
        DragEvent::Over {
            active: DragTarget { data: DragData::Task { task }, .. },
            over: Some(over),
        } => {
            tasks.maybe_update(|tasks| move_task_over(tasks, &task.id, &over.data));
        }
        DragEvent::End {
            active: DragTarget { data: DragData::Column { column }, .. },
            over: Some(over),
        } => {
            let destination = tasks.with_untracked(|tasks| column_of_target(tasks, &over.data).map(str::to_string));
            let Some(destination) = destination else {
                tracing::warn!(over = %over.id, "column dropped on an unknown target");
                return;
            };
            let mut moved = false;
            columns.maybe_update(|columns| {
                moved = move_column(columns, &column.id, &destination);
                moved
            });
            if moved {
                tracing::info!(column = %column.id, %destination, "column moved");
            }
        }
        DragEvent::End { active, over: None } | DragEvent::Cancel { active } => {
            tracing::debug!(id = %active.id, "drag finished without a drop target");
        }
        _ => {}
    }
}
