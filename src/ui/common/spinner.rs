use leptos::prelude::*;

/// Spinner style variants
#[derive(Clone, Copy, PartialEq)]
pub enum SpinnerStyle {
    /// Classic circular spinner
    Circle,
    /// Dots animation, used as a typing indicator
    Dots,
}

impl SpinnerStyle {
    fn class(&self) -> &'static str {
        match self {
            SpinnerStyle::Circle => "spinner-circle",
            SpinnerStyle::Dots => "spinner-dots",
        }
    }
}

/// Spinner size options
#[derive(Clone, Copy, PartialEq)]
pub enum SpinnerSize {
    Small,
    Medium,
    Large,
}

impl SpinnerSize {
    fn class(&self) -> &'static str {
        match self {
            SpinnerSize::Small => "spinner-sm",
            SpinnerSize::Medium => "spinner-md",
            SpinnerSize::Large => "spinner-lg",
        }
    }
}

/// Loading spinner component
#[component]
pub fn Spinner(
    /// Spinner style
    #[prop(default = SpinnerStyle::Circle)]
    style: SpinnerStyle,
    /// Spinner size
    #[prop(default = SpinnerSize::Medium)]
    size: SpinnerSize,
    /// Whether to center the spinner
    #[prop(default = false)]
    centered: bool,
) -> impl IntoView {
    let classes = format!("spinner {} {}", style.class(), size.class());

    let container_class = if centered {
        "spinner-container spinner-centered"
    } else {
        "spinner-container"
    };

    view! {
        <div class=container_class>
            <div class=classes role="status" aria-live="polite">
                {match style {
                    SpinnerStyle::Circle => view! {
                        <div class="spinner-circle-inner"></div>
                    }.into_any(),
                    SpinnerStyle::Dots => view! {
                        <div class="spinner-dots-container">
                            <div class="spinner-dot"></div>
                            <div class="spinner-dot"></div>
                            <div class="spinner-dot"></div>
                        </div>
                    }.into_any(),
                }}
                <span class="sr-only">"Загрузка..."</span>
            </div>
        </div>
    }
}
