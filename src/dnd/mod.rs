//! Drag-and-drop engine: sortable slots, sortable sub-contexts and the pointer/keyboard session
//! that moves them around.

pub mod context;
pub mod error;
pub mod session;
pub mod sortable;
pub mod types;
pub mod utilities;

pub use context::{provide_dnd_context, DndContext, DndInstructions, Registration};
pub use error::DndError;
pub use session::{DragEvent, DragSession, DragTarget, Droppable, SortablePosition};
pub use sortable::{
    use_sortable, KeyInput, PointerInput, SortableArgs, SortableAttributes, SortableContext, SortableListeners,
    SortableScope, UseSortable,
};
pub use types::{Coordinates, Rect, Transform, UniqueIdentifier};
pub use utilities::css;
