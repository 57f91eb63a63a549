use yew::prelude::*;

/// Outcome of the most recent admin action, shown as a banner until the
/// next action replaces or clears it.
#[derive(Clone, Debug, PartialEq)]
pub enum Feedback {
    Saved(String),
    Error(String),
}

#[derive(Clone)]
pub struct FeedbackState {
    pub current: Option<Feedback>,
    pub saved: Callback<String>,
    pub error: Callback<String>,
    pub clear: Callback<()>,
}

#[hook]
pub fn use_feedback() -> FeedbackState {
    let current = use_state(|| None::<Feedback>);

    let saved = {
        let current = current.clone();
        Callback::from(move |msg: String| current.set(Some(Feedback::Saved(msg))))
    };

    let error = {
        let current = current.clone();
        Callback::from(move |msg: String| current.set(Some(Feedback::Error(msg))))
    };

    let clear = {
        let current = current.clone();
        Callback::from(move |_| current.set(None))
    };

    FeedbackState {
        current: (*current).clone(),
        saved,
        error,
        clear,
    }
}
