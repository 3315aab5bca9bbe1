mod alert_feed_card;
mod camera_card;
mod dashboard;

pub use camera_card::CameraCard;
pub use dashboard::Dashboard;
