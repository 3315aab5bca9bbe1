use leptos::*;

use crate::models::{AlertEntry, AlertFeed};

/// Alert feed card, newest alert on top
#[component]
pub fn AlertFeedCard(feed: ReadSignal<AlertFeed>) -> impl IntoView {
    view! {
        <div class="card alert-card">
            <h3>"Threat Alerts"</h3>
            {move || {
                let feed = feed.get();
                if feed.is_empty() {
                    view! { <p class="placeholder-text">"No threats detected"</p> }.into_view()
                } else {
                    view! {
                        <ul class="alert-list">
                            {feed
                                .entries()
                                .into_iter()
                                .map(|entry| view! { <AlertRow entry=entry /> })
                                .collect_view()}
                        </ul>
                    }
                        .into_view()
                }
            }}
        </div>
    }
}

#[component]
fn AlertRow(entry: AlertEntry) -> impl IntoView {
    let AlertEntry { alert, received_at } = entry;
    let confidence = alert.confidence_label();

    view! {
        <li class="alert-row">
            <span class="alert-time">{received_at}</span>
            <span class="alert-camera">"Camera " {alert.camera}</span>
            <strong class="alert-type">{alert.threat_type}</strong>
            <span class="alert-confidence">{confidence}</span>
            {alert.clip.map(|clip| view! { <span class="alert-clip">{clip}</span> })}
        </li>
    }
}
