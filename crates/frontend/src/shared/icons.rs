use leptos::prelude::*;

/// Emoji glyph for an icon name; unknown names fall back to a bullet
pub fn glyph(name: &str) -> &'static str {
    match name {
        "search" => "🔍",
        "heart" => "❤️",
        "heartEmpty" => "🤍",
        "fire" => "🔥",
        "box" => "📦",
        "wallet" => "💰",
        "trend" => "📈",
        "chart" => "📊",
        "user" => "👤",
        "logout" => "🚪",
        "arrow" => "→",
        "arrowLeft" => "←",
        "check" => "✅",
        "x" => "✕",
        _ => "•",
    }
}

pub fn icon(name: &str) -> AnyView {
    let glyph = glyph(name);
    view! { <span class="icon" aria-hidden="true">{glyph}</span> }.into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_icon_is_a_bullet() {
        assert_eq!(glyph("wallet"), "💰");
        assert_eq!(glyph("nope"), "•");
    }
}
