//! Top bar with brand, desktop links, and the mobile sidebar toggle.

use leptos::prelude::*;

use crate::components::icons::{Icon, IconGlyph};
use crate::content::app_header::APP_HEADER_LINKS;
use crate::state::sidebar::SidebarState;

#[component]
pub fn AppHeader() -> impl IntoView {
    let sidebar = expect_context::<RwSignal<SidebarState>>();

    view! {
        <header class="fixed top-0 inset-x-0 z-50 h-16 bg-white border-b border-gray-200 flex items-center justify-between px-6">
            <a href="/" class="font-clash text-xl font-bold text-gray-900">"Campus"</a>
            <nav class="hidden lg:flex items-center gap-6">
                {APP_HEADER_LINKS
                    .into_iter()
                    .map(|link| {
                        view! {
                            <a href=link.path class="text-sm font-medium text-gray-600 hover:text-gray-900">
                                {link.name}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
            <button
                class="lg:hidden w-10 h-10 flex items-center justify-center rounded-lg text-gray-700 hover:bg-gray-100"
                aria-label="Toggle navigation"
                aria-expanded=move || sidebar.get().mobile_open.to_string()
                on:click=move |_| sidebar.update(SidebarState::toggle)
            >
                <IconGlyph icon=Icon::Menu class="w-6 h-6"/>
            </button>
        </header>
    }
}
