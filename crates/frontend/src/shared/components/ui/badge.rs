use leptos::prelude::*;

/// CSS class for a badge color: "gray" (default), "blue", "green", "orange", "red", "gradient"
pub fn badge_class(color: &str) -> &'static str {
    match color {
        "blue" => "badge--blue",
        "green" => "badge--green",
        "orange" => "badge--orange",
        "red" => "badge--red",
        "gradient" => "badge--gradient",
        _ => "badge--gray",
    }
}

/// Badge component with different colors
#[component]
pub fn Badge(
    #[prop(optional, into)]
    color: MaybeProp<String>,
    /// Badge content
    children: Children,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let color_class = move || badge_class(color.get().as_deref().unwrap_or("gray"));
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", color_class(), additional_class())>
            {children()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_class() {
        assert_eq!(badge_class("gradient"), "badge--gradient");
        assert_eq!(badge_class(""), "badge--gray");
    }
}
