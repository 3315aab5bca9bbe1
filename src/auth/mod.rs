//! Login, registration and the browser session they create

mod flow;
mod session;

pub use flow::*;
pub use session::*;
