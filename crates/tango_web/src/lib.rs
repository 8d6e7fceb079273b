pub mod components;
pub mod context;
pub mod error;
pub mod i18n;
pub mod pages;
pub mod utils;

use components::*;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, StaticSegment};
use pages::*;

/// Wraps the content in a basic layout and a final fallback error boundary which should never actually trigger
#[component]
pub fn App() -> impl IntoView {
    tracing::info!("Rendering app");

    context::initialise_context();
    leptos_meta::provide_meta_context();

    let fallback = move |errors: ArcRwSignal<Errors>| {
        errors
            .get_untracked()
            .into_iter()
            .map(|(_key, err)| {
                view! { <div>{format!("Unhandled error: {err}")}</div>}
            })
            .collect_view()
    };

    view! {
            <Stylesheet id="tango" href="/pkg/tango.css"/>
            <Link rel="shortcut icon" type_="image/ico" href="/favicon.ico"/>
            <Meta name="description" content="Tango is an application for studying Japanese vocabulary with generated flashcards and quizzes"/>
            <Title text="Tango"/>
            <div class="is-flex is-flex-direction-column" style="min-height: 100vh">
                <div class="section is-flex is-flex-grow-1">
                    <div class="container">
                        <ErrorBoundary fallback>
                            <Content/>
                        </ErrorBoundary>
                    </div>
                </div>
                <footer class="footer">
                    <div class="container">
                        <a href="https://github.com/tango-dev/tango">"Source code"</a>
                    </div>
                </footer>
            </div>
    }
}

/// Contains the navbar and router
#[component]
pub fn Content() -> impl IntoView {
    view! {
        <Router>
            <Navbar/>
            <main>
                <FlatRoutes fallback=|| "Page not found.">
                    <Route
                        path=StaticSegment("/")
                        view=Home
                    />
                    <Route
                        path=StaticSegment("history")
                        view=History
                    />
                </FlatRoutes>
            </main>
        </Router>
    }
}
