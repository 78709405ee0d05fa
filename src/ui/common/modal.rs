use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::wasm_bindgen::JsCast;

/// Base modal component with consistent structure
#[component]
pub fn BaseModal(
    /// Modal title
    title: &'static str,
    /// Optional subtitle/description
    #[prop(optional)]
    subtitle: Option<&'static str>,
    /// Optional icon shown before the title
    #[prop(optional)]
    icon: Option<&'static str>,
    /// Whether modal is open
    is_open: Signal<bool>,
    /// Callback to close modal
    on_close: Callback<()>,
    /// Modal content
    children: Children,
    /// Maximum width class (default: max-w-2xl)
    #[prop(default = "max-w-2xl")]
    max_width: &'static str,
) -> impl IntoView {
    // Close on Escape key
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::keydown;

        let handle_keydown = window_event_listener(keydown, move |ev| {
            if ev.key() == "Escape" && is_open.with_untracked(|v| *v) {
                on_close.run(());
            }
        });

        on_cleanup(move || drop(handle_keydown));
    }

    view! {
        <div
            class=move || {
                if is_open.get() {
                    "fixed inset-0 z-50 flex items-center justify-center p-4 modal-backdrop transition-all duration-300"
                } else {
                    "fixed inset-0 z-50 flex items-center justify-center p-4 modal-backdrop opacity-0 pointer-events-none transition-all duration-300"
                }
            }
            on:click=move |e| {
                #[cfg(not(feature = "ssr"))]
                {
                    if let Some(target) = e.target() {
                        if let Some(element) = target.dyn_ref::<web_sys::Element>() {
                            if element.class_list().contains("modal-backdrop") {
                                on_close.run(());
                            }
                        }
                    }
                }
                #[cfg(feature = "ssr")]
                {
                    let _ = e;
                }
            }
        >
            <div class=format!("w-full {} max-h-[80vh] card flex flex-col overflow-hidden", max_width)>
                <div class="modal-header">
                    <div class="flex items-center gap-3">
                        {icon.map(|name| view! {
                            <div class="w-10 h-10 bg-white/20 rounded-full flex items-center justify-center">
                                <Icon name=name class="w-5 h-5"/>
                            </div>
                        })}
                        <div>
                            <h3 class="font-semibold text-lg">{title}</h3>
                            {subtitle.map(|s| view! { <p class="text-sm opacity-80">{s}</p> })}
                        </div>
                    </div>
                    <button
                        class="btn-icon"
                        on:click=move |_| on_close.run(())
                        title="Закрыть"
                        aria-label="Закрыть"
                    >
                        <Icon name=icons::X class="w-5 h-5"/>
                    </button>
                </div>

                {children()}
            </div>
        </div>
    }
}
