pub mod dashboard;
pub mod form;
pub mod layout;
pub mod live_camera;
pub mod login;
pub mod not_found;
pub mod register;

pub use dashboard::Dashboard;
pub use live_camera::LiveCamera;
pub use login::LoginPage;
pub use not_found::NotFound;
pub use register::RegisterPage;
