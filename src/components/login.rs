use leptos::*;

use super::form::{handle_submit_click, read_credentials};
use crate::api::ApiClient;
use crate::auth::{submit_login, LocalSessionStore};
use crate::browser::WebBrowser;
use crate::navigation::{NavButton, NavTarget};

/// Login page; the entry point of the portal
#[component]
pub fn LoginPage() -> impl IntoView {
    let uname = create_node_ref::<html::Input>();
    let pwd = create_node_ref::<html::Input>();

    let login = create_action(|input: &(String, String)| {
        let (username, password) = input.clone();
        async move {
            let client = ApiClient::new();
            submit_login(&client, &LocalSessionStore, &username, &password)
                .await
                .apply(&WebBrowser);
        }
    });
    let pending = login.pending();

    let on_login = move |_| {
        handle_submit_click(
            pending.get_untracked(),
            || read_credentials((uname, "uname"), (pwd, "pwd")),
            |fields| login.dispatch(fields),
        );
    };

    view! {
        <div class="auth-page">
            <div class="card auth-card">
                <h2>"Sign in"</h2>
                <label class="field">
                    "Username"
                    <input id="uname" type="text" autocomplete="username" node_ref=uname />
                </label>
                <label class="field">
                    "Password"
                    <input id="pwd" type="password" autocomplete="current-password" node_ref=pwd />
                </label>
                <button
                    id="loginBtn"
                    class="primary-button"
                    type="button"
                    disabled=move || pending.get()
                    on:click=on_login
                >
                    {move || if pending.get() { "Signing in..." } else { "Login" }}
                </button>
                <div class="auth-switch">
                    <span>"No account yet?"</span>
                    <NavButton
                        id="registerBtn"
                        label="Create account"
                        target=NavTarget::Register
                        class="link-button"
                    />
                </div>
            </div>
        </div>
    }
}
