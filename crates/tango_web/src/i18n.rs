//! Static UI string tables for the two display languages.
//!
//! Toggling the language swaps these strings and the language of future
//! generation requests; content that has already been generated keeps
//! whichever language it was generated in.

use tango_core::Language;

pub struct UiStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub name_input_label: &'static str,
    pub name_placeholder: &'static str,
    pub start_btn: &'static str,
    pub input_placeholder: &'static str,
    pub generate_btn: &'static str,
    pub loading_text: &'static str,
    pub flashcard_title: &'static str,
    pub quiz_title: &'static str,
    pub flip_prompt: &'static str,
    pub next_btn: &'static str,
    pub finish_btn: &'static str,
    pub correct_text: &'static str,
    pub incorrect_text: &'static str,
    pub score_text: &'static str,
    pub restart_btn: &'static str,
    pub back_btn: &'static str,
    pub home_link: &'static str,
    pub history_link: &'static str,
    pub history_title: &'static str,
    pub history_name: &'static str,
    pub history_keyword: &'static str,
    pub history_score: &'static str,
    pub history_date: &'static str,
    pub error_text: &'static str,
    pub no_history: &'static str,
}

pub const EN: UiStrings = UiStrings {
    title: "Learning Hub",
    subtitle: "Master Japanese vocabulary with AI-powered cards and quizzes",
    name_input_label: "Your name",
    name_placeholder: "Enter your name...",
    start_btn: "Start Learning",
    input_placeholder: "Enter a Japanese word (e.g., 絆, 木漏れ日)...",
    generate_btn: "Generate Study Set",
    loading_text: "Creating your personalized study material...",
    flashcard_title: "Flashcard",
    quiz_title: "Knowledge Quiz (10 Questions)",
    flip_prompt: "Click to flip",
    next_btn: "Next",
    finish_btn: "Show Results",
    correct_text: "Correct!",
    incorrect_text: "Keep learning!",
    score_text: "Your Final Score",
    restart_btn: "Start New Study Session",
    back_btn: "Back",
    home_link: "Home",
    history_link: "History",
    history_title: "Quiz History",
    history_name: "Name",
    history_keyword: "Keyword",
    history_score: "Score",
    history_date: "Date",
    error_text: "Something went wrong. Please try another word.",
    no_history: "No quiz results yet.",
};

pub const JA: UiStrings = UiStrings {
    title: "学習ハブ",
    subtitle: "AIが生成するフラッシュカードとクイズで単語をマスター",
    name_input_label: "お名前",
    name_placeholder: "名前を入力してください...",
    start_btn: "学習を始める",
    input_placeholder: "日本語の単語を入力してください (例: 絆、木漏れ日)...",
    generate_btn: "学習セットを作成",
    loading_text: "パーソナライズされた教材を作成中...",
    flashcard_title: "フラッシュカード",
    quiz_title: "確認クイズ（10問）",
    flip_prompt: "クリックして裏返す",
    next_btn: "次へ",
    finish_btn: "結果を表示",
    correct_text: "正解！",
    incorrect_text: "もう一度確認しましょう",
    score_text: "最終スコア",
    restart_btn: "新しいセッションを開始",
    back_btn: "戻る",
    home_link: "ホーム",
    history_link: "履歴",
    history_title: "クイズ履歴",
    history_name: "名前",
    history_keyword: "単語",
    history_score: "スコア",
    history_date: "日付",
    error_text: "エラーが発生しました。別の単語を試してください。",
    no_history: "クイズの記録はまだありません。",
};

pub fn ui(language: Language) -> &'static UiStrings {
    match language {
        Language::En => &EN,
        Language::Ja => &JA,
    }
}

/// Formats a timestamp for a history entry in the active language.
pub fn format_timestamp(now: chrono::DateTime<chrono::Local>, language: Language) -> String {
    match language {
        Language::Ja => now.format("%Y年%m月%d日 %H:%M").to_string(),
        Language::En => now.format("%b %d, %Y %H:%M").to_string(),
    }
}
