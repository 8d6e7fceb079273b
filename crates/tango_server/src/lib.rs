//! Web backend for tango.

pub mod domain;
pub mod error;
pub mod handlers;

use axum::{extract::FromRef, routing::post, Router};
use domain::generator::Generator;
use eyre::WrapErr;
use leptos::prelude::*;
use leptos_axum::LeptosRoutes;
use leptos_meta::*;
use std::{fmt::Debug, ops::Deref, sync::Arc};
use tango_web::App;

#[derive(Clone)]
pub struct TangoState(Arc<TangoStateCore>);

impl Deref for TangoState {
    type Target = TangoStateCore;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Debug for TangoState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tango")
    }
}

pub struct TangoStateCore {
    pub generator: Generator,
    pub leptos_options: LeptosOptions,
}

impl FromRef<TangoState> for LeptosOptions {
    fn from_ref(input: &TangoState) -> Self {
        input.leptos_options.clone()
    }
}

pub async fn router(state: TangoState) -> Router<()> {
    Router::new()
        .nest(
            "/api",
            Router::new().route("/generate", post(handlers::generate::generate)),
        )
        .leptos_routes(
            &state,
            leptos_axum::generate_route_list(|| {
                tracing::info!("Generating route list");
                view! { <App/> }
            }),
            {
                tracing::info!("Running app");
                let leptos_options = state.leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler::<TangoState, _>(shell))
        .with_state(state)
}

pub fn shell(options: LeptosOptions) -> impl IntoView {
    tracing::info!("Running shell");
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

pub async fn router_from_vars(gemini_api_key: String, gemini_model: String) -> eyre::Result<Router<()>> {
    let generator = Generator::new(gemini_api_key, gemini_model);
    let leptos_options = leptos::prelude::get_configuration(None)
        .wrap_err("Failed to read the leptos configuration")?
        .leptos_options;

    let state = TangoState(Arc::new(TangoStateCore {
        generator,
        leptos_options,
    }));
    Ok(router(state).await)
}
