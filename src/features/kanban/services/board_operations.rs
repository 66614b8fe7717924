use crate::core::models::{Column, Task};
use crate::features::kanban::models::DragData;

fn array_move<T>(items: &mut Vec<T>, from: usize, to: usize) {
    let item = items.remove(from);
    items.insert(to.min(items.len()), item);
}

/// Tasks of one column, in board order.
pub fn tasks_for_column(tasks: &[Task], column_id: &str) -> Vec<Task> {
    tasks.iter().filter(|t| t.column_id == column_id).cloned().collect()
}

/// Column a drop target belongs to: the column itself, or the column holding the task.
pub fn column_of_target<'a>(tasks: &'a [Task], over: &'a DragData) -> Option<&'a str> {
    match over {
        DragData::Column { column } => Some(&column.id),
        DragData::Task { task } => tasks
            .iter()
            .find(|t| t.id == task.id)
            .map(|t| t.column_id.as_str()),
    }
}

/// Moves the column `active_id` to the slot of `over_id`. Returns whether anything moved.
pub fn move_column(columns: &mut Vec<Column>, active_id: &str, over_id: &str) -> bool {
    if active_id == over_id {
        return false;
    }
    let from = columns.iter().position(|c| c.id == active_id);
    let to = columns.iter().position(|c| c.id == over_id);
    match (from, to) {
        (Some(from), Some(to)) => {
            array_move(columns, from, to);
            true
        }
        _ => false,
    }
}

/// Moves a dragged task while it hovers `over`: onto another task it takes that task's column and
/// slot, onto a column it joins that column keeping its board position.
pub fn move_task_over(tasks: &mut Vec<Task>, active_id: &str, over: &DragData) -> bool {
    let Some(from) = tasks.iter().position(|t| t.id == active_id) else {
        return false;
    };

    match over {
        DragData::Task { task } if task.id == active_id => false,
        DragData::Task { task } => {
            let Some(to) = tasks.iter().position(|t| t.id == task.id) else {
                return false;
            };
            let column_id = tasks[to].column_id.clone();
            tasks[from].column_id = column_id;
            array_move(tasks, from, to);
            true
        }
        DragData::Column { column } => {
            if tasks[from].column_id == column.id {
                return false;
            }
            tasks[from].column_id = column.id.clone();
            true
        }
    }
}
