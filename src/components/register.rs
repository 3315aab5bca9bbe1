use leptos::*;

use super::form::{handle_submit_click, read_credentials};
use crate::api::ApiClient;
use crate::auth::submit_registration;
use crate::browser::WebBrowser;
use crate::navigation::{NavButton, NavTarget};

/// Account creation page
#[component]
pub fn RegisterPage() -> impl IntoView {
    let username = create_node_ref::<html::Input>();
    let password = create_node_ref::<html::Input>();

    let register = create_action(|input: &(String, String)| {
        let (username, password) = input.clone();
        async move {
            let client = ApiClient::new();
            submit_registration(&client, &username, &password)
                .await
                .apply(&WebBrowser);
        }
    });
    let pending = register.pending();

    let on_register = move |_| {
        handle_submit_click(
            pending.get_untracked(),
            || read_credentials((username, "username"), (password, "password")),
            |fields| register.dispatch(fields),
        );
    };

    view! {
        <div class="auth-page">
            <div class="card auth-card">
                <h2>"Create account"</h2>
                <label class="field">
                    "Username"
                    <input name="username" type="text" autocomplete="username" node_ref=username />
                </label>
                <label class="field">
                    "Password"
                    <input name="password" type="password" autocomplete="new-password" node_ref=password />
                </label>
                <button
                    id="registerBtn"
                    class="primary-button"
                    type="button"
                    disabled=move || pending.get()
                    on:click=on_register
                >
                    {move || if pending.get() { "Creating..." } else { "Register" }}
                </button>
                <div class="auth-switch">
                    <span>"Already registered?"</span>
                    <NavButton
                        id="loginRedirect"
                        label="Back to login"
                        target=NavTarget::Home
                        class="link-button"
                    />
                </div>
            </div>
        </div>
    }
}
