use super::utils::cn;

const BUTTON_BASE: &str = "inline-flex items-center justify-center gap-2 whitespace-nowrap rounded-md text-sm \
     font-medium transition-colors focus-visible:outline-none focus-visible:ring-1 focus-visible:ring-ring \
     disabled:pointer-events-none disabled:opacity-50";

const GHOST: &str = "hover:bg-accent hover:text-accent-foreground h-9 px-4 py-2";

/// Class list for a ghost `<button>`; extra classes come last so they can override sizing.
pub fn ghost_button_class(extra: &str) -> String {
    cn([BUTTON_BASE, GHOST, extra])
}
