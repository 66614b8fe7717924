use super::utils::cn;

/// Composes a base class list with the classes of the selected variants.
pub fn cva(base: &str, variants: &[&str]) -> String {
    cn(std::iter::once(base).chain(variants.iter().copied()))
}

/// Visual state of a draggable node. Precedence is overlay, then over, then default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Dragging {
    #[default]
    Default,
    Over,
    Overlay,
}

impl Dragging {
    pub fn select(is_overlay: bool, is_dragging: bool) -> Self {
        match (is_overlay, is_dragging) {
            (true, _) => Dragging::Overlay,
            (false, true) => Dragging::Over,
            (false, false) => Dragging::Default,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Dragging::Default => "border-2 border-transparent",
            Dragging::Over => "ring-2 opacity-30",
            Dragging::Overlay => "ring-2 ring-primary",
        }
    }
}
