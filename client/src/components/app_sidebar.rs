//! Slide-in mobile navigation panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the auth snapshot and sidebar flag from context and the pathname from
//! the router. Menu contents and highlighting are resolved by `util::nav`.
//! Logout clears the shared session, removes stored credentials and forces a
//! full page load of the login route.

#[cfg(test)]
#[path = "app_sidebar_test.rs"]
mod app_sidebar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::icons::{Icon, IconGlyph};
use crate::content::app_header::{APP_HEADER_LINKS, header_link_icon};
use crate::state::auth::AuthState;
use crate::state::sidebar::SidebarState;
use crate::util::nav::{Role, is_active, role_nav_items};
use crate::util::session_storage;

pub const LOGIN_PATH: &str = "/login";

const HEADER_TABS: [&str; 4] = ["Home", "About", "Courses", "Contact"];

/// Mobile sidebar with site links, role features, and session controls.
#[component]
pub fn AppSidebar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let sidebar = expect_context::<RwSignal<SidebarState>>();

    let role = move || auth.with(|a| Role::parse(a.role()));
    let signed_in = move || auth.with(|a| a.user.is_some());

    let header_links = APP_HEADER_LINKS
        .into_iter()
        .map(|link| {
            view! {
                <SidebarLink
                    label=link.name
                    path=link.path
                    icon=header_link_icon(link.name)
                    icon_class="w-4 h-4"
                />
            }
        })
        .collect_view();

    let feature_links = move || {
        role_nav_items(&role())
            .into_iter()
            .map(|entry| {
                let item = *entry.item();
                view! {
                    <SidebarLink label=item.label path=item.path icon=Some(item.icon) icon_class="w-5 h-5"/>
                }
            })
            .collect_view()
    };

    view! {
        <aside class=move || panel_class(sidebar.get().mobile_open)>
            <div class="p-6 border-b border-gray-200">
                <div class="flex items-center justify-between mb-4">
                    <div class="flex space-x-1">
                        {HEADER_TABS
                            .into_iter()
                            .enumerate()
                            .map(|(i, tab)| view! { <button class=tab_class(i == 0)>{tab}</button> })
                            .collect_view()}
                    </div>
                    <button
                        class="w-8 h-8 rounded-full bg-gray-900 hover:bg-gray-800 flex items-center justify-center transition-all duration-200"
                        aria-label="Close navigation"
                        on:click=move |_| sidebar.update(SidebarState::toggle)
                    >
                        <div class="w-4 h-4 relative">
                            <div class="absolute inset-0 w-full h-0.5 bg-white transform rotate-45 origin-center"></div>
                            <div class="absolute inset-0 w-full h-0.5 bg-white transform -rotate-45 origin-center"></div>
                        </div>
                    </button>
                </div>
            </div>

            <div class="flex-1 overflow-y-auto py-4">
                <div class="px-6 space-y-2">
                    <div class="mb-6">
                        <h3 class="text-xs font-semibold text-gray-500 uppercase tracking-wider mb-3 px-3">
                            "Main Navigation"
                        </h3>
                        {header_links}
                    </div>
                    <div class="mb-6">
                        <h3 class="text-xs font-semibold text-gray-500 uppercase tracking-wider mb-3 px-3">
                            {move || features_heading(&role())}
                        </h3>
                        {feature_links}
                    </div>
                </div>
            </div>

            <div class="p-6 border-t border-gray-200">
                <Show when=signed_in>
                    <button
                        class="w-full flex items-center gap-3 px-3 py-3 mb-4 rounded-lg text-sm font-medium text-red-600 hover:bg-red-50 transition-colors"
                        on:click=move |_| logout(auth)
                    >
                        <IconGlyph icon=Icon::LogOut class="w-4 h-4"/>
                        <span>"Logout"</span>
                    </button>
                </Show>
                <div class="flex items-center justify-between text-sm">
                    <button class="flex items-center gap-2 text-gray-600 hover:text-gray-900 transition-colors">
                        <IconGlyph icon=Icon::Globe class="w-4 h-4"/>
                        <span>"English"</span>
                        <IconGlyph icon=Icon::ChevronDown class="w-3 h-3"/>
                    </button>
                    <button class="flex items-center gap-2 text-gray-600 hover:text-gray-900 transition-colors">
                        <span>"Motion"</span>
                        <IconGlyph icon=Icon::ChevronDown class="w-3 h-3"/>
                    </button>
                </div>
            </div>
        </aside>
    }
}

/// A navigation row that highlights on the active route and closes the
/// sidebar when followed.
#[component]
fn SidebarLink(
    label: &'static str,
    path: &'static str,
    icon: Option<Icon>,
    icon_class: &'static str,
) -> impl IntoView {
    let sidebar = expect_context::<RwSignal<SidebarState>>();
    let location = use_location();
    let active = move || location.pathname.with(|pathname| is_active(pathname, path));

    view! {
        <a
            href=path
            class=move || link_class(active())
            on:click=move |_| sidebar.update(SidebarState::close_after_navigation)
        >
            <span class="w-5 h-5 flex items-center justify-center text-gray-500">
                {icon.map(|icon| view! { <IconGlyph icon=icon class=icon_class/> })}
            </span>
            <span class="text-sm font-medium">{label}</span>
        </a>
    }
}

/// Clear the session, drop stored credentials, and reload on the login page.
///
/// The outcome is not checked; a failed storage removal still redirects.
fn logout(auth: RwSignal<AuthState>) {
    auth.update(AuthState::clear);
    session_storage::clear_credentials();
    #[cfg(feature = "hydrate")]
    {
        log::info!("session cleared; redirecting to {LOGIN_PATH}");
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(LOGIN_PATH);
        }
    }
}

fn panel_class(open: bool) -> String {
    let offset = if open { "translate-x-0" } else { "translate-x-full" };
    format!(
        "fixed mt-16 flex flex-col top-0 right-0 bg-white text-gray-900 h-screen transition-transform duration-300 ease-in-out z-50 border-l border-gray-200 w-[280px] shadow-xl {offset} lg:hidden"
    )
}

fn link_class(active: bool) -> &'static str {
    if active {
        "flex items-center gap-3 px-3 py-3 rounded-lg font-medium transition-all duration-200 bg-gray-100 text-gray-900 border-l-2 border-blue-500"
    } else {
        "flex items-center gap-3 px-3 py-3 rounded-lg font-medium transition-all duration-200 text-gray-700 hover:bg-gray-50 hover:text-gray-900"
    }
}

fn tab_class(selected: bool) -> &'static str {
    if selected {
        "px-4 py-2 bg-gray-900 text-white rounded-lg text-sm font-medium"
    } else {
        "px-4 py-2 text-gray-600 hover:text-gray-900 rounded-lg text-sm font-medium transition-colors"
    }
}

fn features_heading(role: &Role) -> String {
    format!("{} Features", role.label())
}
