use leptos::prelude::*;
use thaw::{MessageBar, MessageBarIntent, Spinner, SpinnerSize};

#[component]
pub fn LoadingNotice(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="loading-container">
            <Spinner size=SpinnerSize::Medium />
            <p class="loading-message">{message}</p>
        </div>
    }
}

/// Inline replacement for the blocking alerts the booking flow used to raise.
#[component]
pub fn ErrorNotice(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <MessageBar intent=MessageBarIntent::Error>
            {message}
        </MessageBar>
    }
}

#[component]
pub fn InfoNotice(
    #[prop(into)] message: String,
    #[prop(optional)] success: bool,
) -> impl IntoView {
    let intent = if success {
        MessageBarIntent::Success
    } else {
        MessageBarIntent::Info
    };

    view! {
        <MessageBar intent=intent>
            {message}
        </MessageBar>
    }
}
