//! Login route: the logout redirect target.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let greeting = move || {
        auth.with(|a| {
            a.user
                .as_ref()
                .map_or_else(|| "You are signed out.".to_owned(), |user| format!("Signed in as {}.", user.name))
        })
    };

    view! {
        <main class="pt-24 flex justify-center">
            <div class="w-full max-w-sm rounded-2xl border border-gray-200 p-8 space-y-4">
                <h1 class="text-2xl font-clash font-bold">"Sign in"</h1>
                <p class="text-sm text-gray-600">{greeting}</p>
                <a href="/" class="inline-block text-sm font-medium text-blue-600 hover:underline">
                    "Back to home"
                </a>
            </div>
        </main>
    }
}
