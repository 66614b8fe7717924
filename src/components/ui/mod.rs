pub mod badge;
pub mod button;
pub mod card;
pub mod glass_card;
pub mod icons;
pub mod utils;
pub mod variants;

pub use badge::{Badge, BadgeVariant};
pub use button::ghost_button_class;
pub use card::{CardContent, CardHeader};
pub use glass_card::GlassCard;
pub use icons::GripVertical;
pub use utils::cn;
pub use variants::{cva, Dragging};
