use leptos::*;
use leptos_router::*;

use crate::auth::{LocalSessionStore, SessionStore};
use crate::navigation::{NavButton, NavTarget};

/// Layout component with navbar and content outlet
#[component]
pub fn Layout() -> impl IntoView {
    view! {
        <div class="layout">
            <Navbar />
            <main class="main-content">
                <Outlet />
            </main>
        </div>
    }
}

/// Navbar with title, clock and the dashboard shortcut for logged-in users
#[component]
fn Navbar() -> impl IntoView {
    let logged_in = LocalSessionStore.is_active();

    view! {
        <nav class="navbar">
            <div class="navbar-content">
                <h1 class="navbar-title">"Servalliance"</h1>
                <div class="navbar-actions">
                    <Show when=move || logged_in>
                        <NavButton id="dashboardBtn" label="Dashboard" target=NavTarget::Dashboard class="tab" />
                    </Show>
                    <CurrentTime />
                </div>
            </div>
        </nav>
    }
}

/// Current time display that updates every second
#[component]
fn CurrentTime() -> impl IntoView {
    let (time, set_time) = create_signal(current_time());

    // Update time every second
    #[cfg(target_arch = "wasm32")]
    {
        use gloo_timers::callback::Interval;

        let interval = Interval::new(1000, move || {
            set_time.set(current_time());
        });

        on_cleanup(move || drop(interval));
    }

    view! {
        <span class="last-update">
            {move || time.get()}
        </span>
    }
}

/// Local wall-clock time as HH:MM:SS
pub fn current_time() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}
