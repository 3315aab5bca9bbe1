use leptos::*;
use leptos_router::*;

use crate::components::layout::Layout;
use crate::components::{Dashboard, LiveCamera, LoginPage, NotFound, RegisterPage};

/// Main application component with routing
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Routes>
                <Route path="/" view=Layout>
                    <Route path="" view=LoginPage />
                    <Route path="register" view=RegisterPage />
                    <Route path="dashboard" view=Dashboard />
                    <Route path="live_camera" view=LiveCamera />
                    <Route path="*any" view=NotFound />
                </Route>
            </Routes>
        </Router>
    }
}
