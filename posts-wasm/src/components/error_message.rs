use leptos::prelude::*;

#[component]
pub(crate) fn ErrorMessage(text: String) -> impl IntoView {
    view! {
        <div class="error-message">
            <h2>"An error occurred!"</h2>
            <p>{text}</p>
        </div>
    }
}
