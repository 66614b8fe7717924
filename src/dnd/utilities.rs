pub mod css {
    use crate::dnd::Transform;

    fn px(value: f64) -> i64 {
        value.round() as i64
    }

    /// Serializes only the translation part, e.g. `translate3d(12px, -4px, 0)`.
    pub fn translate(transform: Option<Transform>) -> Option<String> {
        transform.map(|t| format!("translate3d({}px, {}px, 0)", px(t.x), px(t.y)))
    }

    /// Inline style carrying the engine-supplied transform and transition. Absent values are omitted.
    pub fn style(transform: Option<String>, transition: Option<String>) -> String {
        let mut declarations = Vec::with_capacity(2);
        if let Some(transition) = transition {
            declarations.push(format!("transition: {transition};"));
        }
        if let Some(transform) = transform {
            declarations.push(format!("transform: {transform};"));
        }
        declarations.join(" ")
    }

}
