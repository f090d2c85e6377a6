//! Delete Keyword Button
//!
//! Trash icon in a keyword row. The first click asks for confirmation in
//! place of the icon; only the second click sends the DELETE.

use leptos::prelude::*;

/// Where the row's delete control is in its two-click flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeleteStep {
    #[default]
    Idle,
    Confirming,
}

impl DeleteStep {
    pub fn ask(self) -> Self {
        DeleteStep::Confirming
    }

    /// Back to idle; the flag is set only when a confirmation was pending
    pub fn confirm(self) -> (Self, bool) {
        (DeleteStep::Idle, self == DeleteStep::Confirming)
    }

    pub fn cancel(self) -> Self {
        DeleteStep::Idle
    }
}

/// Question shown while confirming
pub fn delete_prompt(keyword: &str) -> String {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        "Delete?".to_string()
    } else {
        format!("Delete \"{}\"?", keyword)
    }
}

#[component]
pub fn DeleteKeywordButton(
    /// Keyword text, echoed in the confirmation
    #[prop(into)]
    keyword: String,
    #[prop(into)] on_delete: Callback<()>,
) -> impl IntoView {
    let step = RwSignal::new(DeleteStep::Idle);
    let prompt = delete_prompt(&keyword);

    move || match step.get() {
        DeleteStep::Idle => view! {
            <button
                class="icon-btn danger"
                title="Delete"
                on:click=move |ev| {
                    ev.stop_propagation();
                    step.update(|s| *s = s.ask());
                }
            >
                "🗑"
            </button>
        }
        .into_any(),
        DeleteStep::Confirming => view! {
            <span class="delete-confirm">
                <span class="delete-confirm-text">{prompt.clone()}</span>
                <button
                    class="confirm-btn"
                    title="Yes, stop tracking this keyword"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        let (next, delete) = step.get_untracked().confirm();
                        step.set(next);
                        if delete {
                            on_delete.run(());
                        }
                    }
                >
                    "✓"
                </button>
                <button
                    class="cancel-btn"
                    title="Keep"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        step.update(|s| *s = s.cancel());
                    }
                >
                    "✗"
                </button>
            </span>
        }
        .into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_needs_two_clicks() {
        let (step, delete) = DeleteStep::Idle.confirm();
        assert_eq!(step, DeleteStep::Idle);
        assert!(!delete);

        let (step, delete) = DeleteStep::Idle.ask().confirm();
        assert_eq!(step, DeleteStep::Idle);
        assert!(delete);
    }

    #[test]
    fn test_cancel_returns_to_icon() {
        assert_eq!(DeleteStep::Idle.ask().cancel(), DeleteStep::Idle);
        assert_eq!(DeleteStep::Idle.ask().ask(), DeleteStep::Confirming);
    }

    #[test]
    fn test_prompt_names_the_keyword() {
        assert_eq!(delete_prompt(" running shoes "), "Delete \"running shoes\"?");
        assert_eq!(delete_prompt("  "), "Delete?");
    }
}
