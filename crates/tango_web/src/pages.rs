//! Top level pages.

use crate::{
    components::*,
    context::{get_client, get_language, get_session, storage::Storage},
    i18n, utils,
};
use leptos::prelude::*;
use send_wrapper::SendWrapper;
use std::sync::Arc;
use tango_core::{Flashcard, QuizHistoryEntry};

/// The single-page study flow: registration gate, keyword form,
/// loading state, then flashcard and quiz.
#[component]
pub fn Home() -> impl IntoView {
    tracing::info!("Rendering Home");

    let ui = move || i18n::ui(get_language().get());
    let session = get_session();

    let keyword = RwSignal::new(String::new());
    let generate_act = Action::new(move |&()| {
        let keyword = keyword.get_untracked().trim().to_string();
        let language = get_language().get_untracked();
        let client = get_client();
        async move {
            SendWrapper::new(client.generate(&keyword, language))
                .await
                .inspect_err(|err| tracing::warn!("Generation failed: {err}"))
        }
    });
    // one request in flight at most, and submission of an empty keyword
    // is prevented here rather than reported as an error
    let submit_disabled =
        move || keyword.get().trim().is_empty() || generate_act.pending().get();

    let restart: Arc<dyn Fn() + Send + Sync> = Arc::new(move || {
        generate_act.value().set(None);
        keyword.set(String::new());
    });

    // registration gate, a one-time local step preceding keyword entry
    let name = RwSignal::new(String::new());
    let register_view = move || {
        view! {
            <div class="box">
                <h2 class="subtitle">{move || ui().name_input_label}</h2>
                <form>
                    <input
                        class="input"
                        type="text"
                        placeholder=move || ui().name_placeholder
                        prop:value=name
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <button
                        class="button is-link mt-2"
                        type="submit"
                        disabled=move || name.get().trim().is_empty()
                        on:click=move |ev| {
                            ev.prevent_default();
                            if let Err(err) = session.identify(&name.get_untracked()) {
                                tracing::warn!("Failed to store user name: {err}");
                            }
                        }
                    >
                        {move || ui().start_btn}
                    </button>
                </form>
            </div>
        }
    };

    let keyword_form = move |failed: bool| {
        view! {
            <h2 class="title">{move || ui().title}</h2>
            <p class="subtitle">{move || ui().subtitle}</p>
            <form>
                <input
                    class="input"
                    type="text"
                    placeholder=move || ui().input_placeholder
                    prop:value=keyword
                    on:input=move |ev| keyword.set(event_target_value(&ev))
                />
                <button
                    class="button is-link mt-2"
                    type="submit"
                    disabled=submit_disabled
                    on:click=move |ev| {
                        ev.prevent_default();
                        generate_act.dispatch(());
                    }
                >
                    {move || ui().generate_btn}
                </button>
            </form>
            {failed.then(|| view! {
                <div class="notification is-danger mt-4">{move || ui().error_text}</div>
            })}
        }
    };

    let study_view = {
        let restart = restart.clone();
        move |card: Flashcard| {
            let restart = restart.clone();
            let on_restart = restart.clone();
            view! {
                <div class="block">
                    <button class="button is-small" on:click=move |_ev| restart()>
                        {move || ui().back_btn}
                    </button>
                </div>
                <section class="block">
                    <h2 class="subtitle">{move || ui().flashcard_title}</h2>
                    <FlashcardView card=card.clone()/>
                </section>
                <section class="block">
                    <h2 class="subtitle">{move || ui().quiz_title}</h2>
                    <QuizView
                        questions=card.quizzes.clone()
                        keyword=card.term.clone()
                        on_restart=on_restart
                    />
                </section>
            }
        }
    };

    move || {
        if !session.registered() {
            return register_view().into_any();
        }
        if generate_act.pending().get() {
            return utils::loading_fallback_with(move || ui().loading_text).into_any();
        }
        match generate_act.value().get() {
            Some(Ok(card)) => study_view(card).into_any(),
            Some(Err(_)) => keyword_form(true).into_any(),
            None => keyword_form(false).into_any(),
        }
    }
}

/// Past quiz results, most recent first.
#[component]
pub fn History() -> impl IntoView {
    tracing::info!("Rendering History");

    let ui = move || i18n::ui(get_language().get());

    // local storage only exists in the browser, so the log is read in an
    // effect after hydration
    let entries = RwSignal::new(None::<Vec<QuizHistoryEntry>>);
    Effect::new(move |_| {
        entries.set(Some(Storage::load_history()));
    });

    view! {
        <h2 class="subtitle">{move || ui().history_title}</h2>
        {move || match entries.get() {
            Some(entries) => view! { <HistoryTable entries/> }.into_any(),
            None => utils::loading_fallback("Loading history...").into_any(),
        }}
    }
}
