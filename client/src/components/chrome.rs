//! Standard chrome wrapped around every protected view.

use leptos::prelude::*;

use crate::components::contacts_panel::ContactsPanel;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::sidebar::Sidebar;

/// Header on top, sidebar left, contacts right, routed view in the middle.
#[component]
pub fn MainLayout(children: Children) -> impl IntoView {
    view! {
        <div class="app-shell">
            <Header/>
            <div class="app-shell__body">
                <Sidebar/>
                <main class="app-shell__main">
                    {children()}
                    <Footer/>
                </main>
                <ContactsPanel/>
            </div>
        </div>
    }
}
