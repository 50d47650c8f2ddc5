//! Application root: HTML shell, context providers and the route table.
//!
//! SYSTEM CONTEXT
//! ==============
//! `shell` is rendered by the server for every document request; `App` is
//! hydrated in the browser. Both share the same route table, which the server
//! also uses to generate its SSR route list.
//!
//! DESIGN
//! ======
//! One [`Session`] and one notice list are created here and provided through
//! context, so every page and component observes the same instances.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{Redirect, Route, Router, Routes};

use crate::components::navbar::Navbar;
use crate::components::notice_tray::NoticeTray;
use crate::net::api::browser_api;
use crate::pages::admin::AdminPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::purchases::PurchasesPage;
use crate::pages::register::RegisterPage;
use crate::pages::sweets::SweetsPage;
use crate::state::auth::Session;
use crate::state::notice::NoticeState;
use crate::util::auth::HOME_PATH;

/// Server-rendered HTML document wrapping the app.
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

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = Session::new(browser_api());
    let notices = RwSignal::new(NoticeState::default());
    provide_context(session);
    provide_context(notices);

    Effect::new(move || session.bootstrap());

    view! {
        <Stylesheet id="leptos" href="/pkg/sweetshop.css"/>
        <Title text="Sweet Shop"/>
        <Router>
            <Navbar/>
            <NoticeTray/>
            <main class="page">
                <Routes fallback=|| view! { <Redirect path=HOME_PATH/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("sweets") view=SweetsPage/>
                    <Route path=StaticSegment("purchases") view=PurchasesPage/>
                    <Route path=StaticSegment("admin") view=AdminPage/>
                </Routes>
            </main>
        </Router>
    }
}
