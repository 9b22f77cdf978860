//! Root application component with routing and the session object.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{navbar::Navbar, sidebar::Sidebar};
use crate::pages::{
    home::HomePage, login::LoginPage, profile::ProfilePage, search::SearchPage, signup::SignupPage,
};
use crate::state::session::SessionHandle;

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
/// Owns the session and hands it to every routed page. The session is
/// restored from the token store once the app is live in the browser.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionHandle::new();
    // Bumped after a post is created so the feed refetches.
    let feed_refresh = RwSignal::new(0_u64);

    Effect::new(move || session.restore());

    view! {
        <Stylesheet id="leptos" href="/pkg/agora.css"/>
        <Title text="Agora"/>

        <Router>
            <Show when=move || session.is_authenticated()>
                <Navbar session=session/>
                <Sidebar session=session feed_refresh=feed_refresh/>
            </Show>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route
                        path=StaticSegment("")
                        view=move || view! { <HomePage session=session feed_refresh=feed_refresh/> }
                    />
                    <Route
                        path=(StaticSegment("profile"), ParamSegment("userId"))
                        view=move || view! { <ProfilePage session=session/> }
                    />
                    <Route path=StaticSegment("login") view=move || view! { <LoginPage session=session/> }/>
                    <Route path=StaticSegment("signup") view=move || view! { <SignupPage session=session/> }/>
                    <Route path=StaticSegment("search") view=move || view! { <SearchPage session=session/> }/>
                </Routes>
            </main>
        </Router>
    }
}
