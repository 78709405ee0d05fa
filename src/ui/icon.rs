use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Имя иконки (без расширения .svg)
    name: &'static str,
    /// CSS классы для стилизации
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable=false
        />
    }
}

/// Иконки из `public/icons`
pub mod icons {
    pub const HAMMER: &str = "hammer";
    pub const PEN_TOOL: &str = "pen-tool";
    pub const HOME: &str = "home";
    pub const SHOPPING_BAG: &str = "shopping-bag";
    pub const MESSAGE_CIRCLE: &str = "message-circle";
    pub const SPARKLES: &str = "sparkles";
    pub const IMAGE: &str = "image";
    pub const PHONE: &str = "phone";
    pub const MAIL: &str = "mail";
    pub const MAP_PIN: &str = "map-pin";
    pub const CALENDAR: &str = "calendar";
    pub const RULER: &str = "ruler";
    pub const INBOX: &str = "inbox";
    pub const X: &str = "x";
    pub const LOADER: &str = "loader";
    pub const ALERT_CIRCLE: &str = "alert-circle";
}
