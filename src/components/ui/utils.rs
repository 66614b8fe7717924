/// Joins class lists, collapsing whitespace and dropping empty and repeated tokens.
pub fn cn<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    let mut tokens: Vec<&str> = Vec::new();
    for token in parts.into_iter().flat_map(str::split_whitespace) {
        if !tokens.contains(&token) {
            tokens.push(token);
        }
    }
    tokens.join(" ")
}
