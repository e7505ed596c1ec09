//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::app_header::AppHeader;
use crate::components::app_sidebar::AppSidebar;
use crate::pages::{landing::LandingPage, login::LoginPage};
use crate::state::auth::AuthState;
use crate::state::sidebar::SidebarState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth snapshot and sidebar state, and sets up client-side
/// routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let sidebar = RwSignal::new(SidebarState::default());

    provide_context(auth);
    provide_context(sidebar);

    // Stored credentials are browser-only; seed after mount so hydration
    // matches the server render.
    Effect::new(move || {
        auth.set(crate::util::session_storage::load_session());
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/campus.css"/>
        <Title text="Campus"/>

        <Router>
            <AppHeader/>
            <AppSidebar/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
            </Routes>
        </Router>
    }
}
