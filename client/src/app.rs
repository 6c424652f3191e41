//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::protected_layout::ProtectedLayout;
use crate::config::ClientConfig;
use crate::pages::{
    home::HomePage,
    login::LoginPage,
    not_found::NotFoundPage,
    placeholders::{FriendsPage, MessagesPage, SettingsPage},
    profile::ProfilePage,
    register::RegisterPage,
};
use crate::state::ui::UiState;
use crate::util::session::provide_session;

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
/// Provides the config, session and UI contexts, then routes. Every route
/// under the `ProtectedLayout` parent passes through the access controller;
/// `/login`, `/register` and the not-found fallback do not.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    provide_context(config.clone());
    provide_session(&config);
    provide_context(RwSignal::new(UiState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/socialfeed.css"/>
        <Title text="socialfeed"/>

        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("signup") view=RegisterPage/>
                <ParentRoute path=StaticSegment("") view=ProtectedLayout>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=(StaticSegment("profile"), ParamSegment("user_id")) view=ProfilePage/>
                    <Route path=StaticSegment("friends") view=FriendsPage/>
                    <Route path=StaticSegment("messages") view=MessagesPage/>
                    <Route path=StaticSegment("settings") view=SettingsPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
