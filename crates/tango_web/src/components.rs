//! Custom components.

use crate::{
    context::{get_language, get_session, storage::Storage},
    i18n,
};
use leptos::prelude::*;
use leptos_router::components::*;
use std::sync::Arc;
use tango_core::{Flashcard, Language, OptionMark, QuizHistoryEntry, QuizQuestion, QuizSession};

#[component]
pub fn Navbar() -> impl IntoView {
    let ui = move || i18n::ui(get_language().get());

    view! {
        <nav class="navbar is-flex is-vcentered">
            <A exact=true href="/">{move || ui().home_link}</A>
            <A exact=true href="/history">{move || ui().history_link}</A>
            <span class="is-flex is-flex-grow-1"></span>
            <LanguageToggle/>
        </nav>
    }
}

/// Switches the display language for the UI chrome and future requests.
#[component]
pub fn LanguageToggle() -> impl IntoView {
    let language = get_language();

    let button_class = move |lang: Language| {
        if language.get() == lang {
            "button is-small is-link"
        } else {
            "button is-small"
        }
    };

    view! {
        <div class="buttons has-addons">
            <button class=move || button_class(Language::Ja) on:click=move |_ev| language.set(Language::Ja)>
                "日本語"
            </button>
            <button class=move || button_class(Language::En) on:click=move |_ev| language.set(Language::En)>
                "English"
            </button>
        </div>
    }
}

/// The two-sided study card, flipped by a click.
#[component]
pub fn FlashcardView(card: Flashcard) -> impl IntoView {
    let ui = move || i18n::ui(get_language().get());
    let flipped = RwSignal::new(false);

    let card_class = move || {
        if flipped.get() {
            "flashcard is-flipped"
        } else {
            "flashcard"
        }
    };

    view! {
        <div class=card_class on:click=move |_ev| flipped.update(|f| *f = !*f)>
            <div class="flashcard-front box has-text-centered">
                <div class="is-size-6 has-text-grey">{card.reading.clone()}</div>
                <div class="title is-1">{card.term.clone()}</div>
                <div class="is-size-7 has-text-grey-light">{move || ui().flip_prompt}</div>
            </div>
            <div class="flashcard-back box">
                <h3 class="subtitle">{card.meaning.clone()}</h3>
                <p class="block">{card.explanation.clone()}</p>
                <div class="notification">
                    <p>{card.example_sentence.clone()}</p>
                    <p class="is-italic has-text-grey">{card.example_meaning.clone()}</p>
                </div>
            </div>
        </div>
    }
}

/// The ten-step quiz wizard.
///
/// Owns the [`QuizSession`] for one study set. When the session reaches
/// its final score and the user is registered, one history entry is
/// appended to local storage.
#[component]
pub fn QuizView(
    questions: Vec<QuizQuestion>,
    keyword: String,
    on_restart: Arc<dyn Fn() + Send + Sync>,
) -> impl IntoView {
    let ui = move || i18n::ui(get_language().get());
    let session = RwSignal::new(QuizSession::new(questions));
    let total = session.with_untracked(QuizSession::total);

    let select = move |idx: usize| session.update(|s| s.select_answer(idx));
    let advance = move |_ev: leptos::ev::MouseEvent| {
        session.update(|s| s.advance());
        // the finish control goes away with the terminal state, so this
        // runs exactly once per session
        if session.with_untracked(QuizSession::is_finished) {
            let score = session.with_untracked(QuizSession::score);
            save_result(&keyword, score);
        }
    };

    let option_class = move |mark: OptionMark| match mark {
        OptionMark::Neutral => "button is-fullwidth quiz-option",
        OptionMark::Correct => "button is-fullwidth quiz-option is-success",
        OptionMark::Incorrect => "button is-fullwidth quiz-option is-danger",
        OptionMark::Dimmed => "button is-fullwidth quiz-option is-light",
    };

    let question_view = {
        let advance = advance.clone();
        move || {
            let advance = advance.clone();
            session.with(|s| {
                let current = s.current_index()?;
                let question = s.current_question()?;
                let revealed = s.revealed();

                let options = question
                    .options
                    .iter()
                    .enumerate()
                    .map(|(idx, option)| {
                        let label = char::from(b'A' + idx as u8);
                        let class = option_class(s.option_mark(idx));
                        view! {
                            <button
                                class=class
                                disabled=revealed
                                on:click=move |_ev| select(idx)
                            >
                                <span class="mr-2 has-text-weight-bold">{label.to_string()}</span>
                                {option.clone()}
                            </button>
                        }
                    })
                    .collect_view();

                let verdict = s.answered_correctly().map(|correct| {
                    let verdict_text = move || {
                        if correct {
                            ui().correct_text
                        } else {
                            ui().incorrect_text
                        }
                    };
                    let explanation = question.explanation.clone();
                    let last = s.on_last_question();
                    let advance_label = move || if last { ui().finish_btn } else { ui().next_btn };
                    view! {
                        <div class="block">
                            <div class=if correct { "notification is-success" } else { "notification is-danger" }>
                                <p class="has-text-weight-bold">{verdict_text}</p>
                                <p>{explanation}</p>
                            </div>
                            <button class="button is-dark is-fullwidth" on:click=advance.clone()>
                                {advance_label}
                            </button>
                        </div>
                    }
                });

                let view = view! {
                    <div class="block">
                        <span class="has-text-weight-bold">
                            {format!("{} / {total}", current + 1)}
                        </span>
                        <progress class="progress" value=(current + 1).to_string() max=total.to_string()></progress>
                    </div>
                    <h3 class="subtitle">{question.question.clone()}</h3>
                    <div class="block">
                        {options}
                    </div>
                    {verdict}
                };
                Some(view)
            })
        }
    };

    let finished_view = move || {
        let on_restart = on_restart.clone();
        let score = session.with(QuizSession::score);
        view! {
            <div class="box has-text-centered">
                <h3 class="subtitle">{move || ui().score_text}</h3>
                <div class="title is-1">{format!("{score} / {total}")}</div>
                <button class="button is-link is-fullwidth" on:click=move |_ev| on_restart()>
                    {move || ui().restart_btn}
                </button>
            </div>
        }
    };

    view! {
        {move || {
            if session.with(QuizSession::is_finished) {
                finished_view().into_any()
            } else {
                question_view().into_any()
            }
        }}
    }
}

/// Appends the finished session to the history log under the registered
/// user name. Unregistered sessions are not recorded.
fn save_result(keyword: &str, score: u32) {
    let Some(user_name) = get_session().user_name() else {
        return;
    };
    let now = chrono::Local::now();
    let entry = QuizHistoryEntry {
        id: format!("{}-{keyword}", now.timestamp_millis()),
        user_name,
        keyword: keyword.to_string(),
        score,
        date: i18n::format_timestamp(now, get_language().get_untracked()),
    };
    if let Err(err) = Storage::append_history(entry) {
        tracing::warn!("Failed to save quiz result: {err}");
    }
}

/// Tabular history view, most recent attempt first.
#[component]
pub fn HistoryTable(entries: Vec<QuizHistoryEntry>) -> impl IntoView {
    let ui = move || i18n::ui(get_language().get());

    if entries.is_empty() {
        return view! { <div class="has-text-grey is-italic">{move || ui().no_history}</div> }
            .into_any();
    }

    let rows = entries
        .into_iter()
        .rev()
        .map(|entry| {
            let score_class = match entry.score {
                8.. => "has-text-success has-text-weight-bold",
                5.. => "has-text-warning has-text-weight-bold",
                _ => "has-text-danger has-text-weight-bold",
            };
            view! {
                <tr>
                    <td>{entry.user_name}</td>
                    <td>{entry.keyword}</td>
                    <td><span class=score_class>{format!("{}/10", entry.score)}</span></td>
                    <td>{entry.date}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <table class="table is-fullwidth is-striped">
            <thead>
                <tr>
                    <th>{move || ui().history_name}</th>
                    <th>{move || ui().history_keyword}</th>
                    <th>{move || ui().history_score}</th>
                    <th>{move || ui().history_date}</th>
                </tr>
            </thead>
            <tbody>
                {rows}
            </tbody>
        </table>
    }
    .into_any()
}
