use leptos::*;

/// Live MJPEG stream from the detector
#[component]
pub fn CameraCard(camera_id: String, src: String) -> impl IntoView {
    let title = format!("Camera {}", camera_id);

    view! {
        <div class="card camera-card">
            <h3>{title.clone()}</h3>
            <img class="camera-feed" src=src alt=title />
        </div>
    }
}
