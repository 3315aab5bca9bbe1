use leptos::*;

use crate::navigation::{NavButton, NavTarget};

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="card no-data">
            <h3>"Page not found"</h3>
            <NavButton id="homeRedirect" label="Back to login" target=NavTarget::Home />
        </div>
    }
}
