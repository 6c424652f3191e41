//! Access-controlled parent route for every protected view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted as the `ParentRoute` view in `app::App`. It reads the session
//! signal, renders through `access::decide`, and performs redirects through
//! `access::enforce` from an effect, so redirects only happen in the browser
//! and only after the session check has settled.

#[cfg(test)]
#[path = "protected_layout_test.rs"]
mod protected_layout_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Outlet;
use leptos_router::hooks::{use_location, use_navigate};

use crate::access::{AccessDecision, Navigator, RedirectOptions, decide, enforce};
use crate::components::chrome::MainLayout;
use crate::components::loading::LoadingIndicator;
use crate::state::session::Session;

/// What the layout mounts for a decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutView {
    Loading,
    /// Chrome around the routed child.
    Content,
    /// Nothing: the redirect is in flight.
    Empty,
}

pub fn layout_view(decision: AccessDecision) -> LayoutView {
    match decision {
        AccessDecision::Loading => LayoutView::Loading,
        AccessDecision::Render => LayoutView::Content,
        AccessDecision::Redirect { .. } => LayoutView::Empty,
    }
}

pub fn navigate_options(options: RedirectOptions) -> NavigateOptions {
    NavigateOptions { replace: options.replace, ..NavigateOptions::default() }
}

/// `Navigator` over the `leptos_router` navigate function and location.
struct RouterNavigator<F> {
    navigate: F,
    pathname: Memo<String>,
}

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn current_path(&self) -> String {
        self.pathname.get_untracked()
    }

    fn redirect(&self, path: &str, options: RedirectOptions) {
        (self.navigate)(path, navigate_options(options));
    }
}

#[component]
pub fn ProtectedLayout() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let navigator = RouterNavigator { navigate: use_navigate(), pathname: use_location().pathname };

    Effect::new(move || {
        session.with(|s| enforce(s, &navigator));
    });

    // Re-render only when the decision changes, not on every session write.
    let view_kind = Memo::new(move |_| session.with(|s| layout_view(decide(s))));

    move || match view_kind.get() {
        LayoutView::Loading => view! { <LoadingIndicator/> }.into_any(),
        LayoutView::Content => view! {
            <MainLayout>
                <Outlet/>
            </MainLayout>
        }
        .into_any(),
        LayoutView::Empty => ().into_any(),
    }
}
