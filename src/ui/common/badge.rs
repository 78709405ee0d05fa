use leptos::prelude::*;

/// Badge variant types
#[derive(Clone, Copy, PartialEq)]
pub enum BadgeVariant {
    /// Solid brand color
    Primary,
    /// Muted background
    Secondary,
    /// Border only
    Outline,
}

impl BadgeVariant {
    fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Primary => "badge-primary",
            BadgeVariant::Secondary => "badge-secondary",
            BadgeVariant::Outline => "badge-outline",
        }
    }
}

/// Badge size options
#[derive(Clone, Copy, PartialEq)]
pub enum BadgeSize {
    Medium,
    Large,
}

impl BadgeSize {
    fn class(&self) -> &'static str {
        match self {
            BadgeSize::Medium => "badge-md",
            BadgeSize::Large => "badge-lg",
        }
    }
}

/// Badge for category labels, areas and lead numbers
#[component]
pub fn Badge(
    /// Badge content
    children: Children,
    /// Visual variant
    #[prop(default = BadgeVariant::Primary)]
    variant: BadgeVariant,
    /// Size of the badge
    #[prop(default = BadgeSize::Medium)]
    size: BadgeSize,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let classes = format!("badge {} {} {}", variant.class(), size.class(), class);

    view! {
        <span class=classes>{children()}</span>
    }
}
