use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Button variant types
#[derive(Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    /// Gradient call-to-action
    Primary,
    /// Bordered, transparent background
    Outline,
    /// No border, used on colored headers
    Ghost,
}

/// Button size options
#[derive(Clone, Copy, PartialEq)]
pub enum ButtonSize {
    Small,
    Medium,
    Large,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

impl ButtonSize {
    fn class(&self) -> &'static str {
        match self {
            ButtonSize::Small => "btn-sm",
            ButtonSize::Medium => "",
            ButtonSize::Large => "btn-lg",
        }
    }
}

/// Type-safe button component with variants and sizes
#[component]
pub fn Button(
    /// Button variant style
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Button size
    #[prop(default = ButtonSize::Medium)]
    size: ButtonSize,
    /// Click handler
    on_click: Callback<()>,
    /// Whether button is disabled
    #[prop(into, optional)]
    disabled: MaybeProp<bool>,
    /// Whether button is in loading state
    #[prop(into, optional)]
    loading: MaybeProp<bool>,
    /// Optional title/tooltip
    #[prop(optional)]
    title: Option<String>,
    /// Button content (text or elements)
    children: Children,
    /// Optional icon name to show before text
    #[prop(optional)]
    icon: Option<&'static str>,
    /// Additional CSS classes
    #[prop(default = String::new())]
    class: String,
) -> impl IntoView {
    let base_classes = format!("btn-base {} {}", variant.class(), size.class());
    let full_classes = if class.is_empty() {
        base_classes
    } else {
        format!("{} {}", base_classes, class)
    };

    let is_loading = move || loading.get().unwrap_or(false);
    let is_disabled = move || disabled.get().unwrap_or(false) || is_loading();

    view! {
        <button
            type="button"
            class=full_classes
            on:click=move |_| {
                if !is_disabled() {
                    on_click.run(())
                }
            }
            disabled=is_disabled
            title=title
        >
            {move || if is_loading() {
                view! {
                    <span class="btn-spinner">
                        <Icon name=icons::LOADER class="icon-spin"/>
                    </span>
                }.into_any()
            } else if let Some(icon_name) = icon {
                view! {
                    <Icon name=icon_name class="icon-btn"/>
                }.into_any()
            } else {
                ().into_any()
            }}
            {children()}
        </button>
    }
}
