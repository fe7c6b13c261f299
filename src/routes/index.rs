use axum::response::Html;

use crate::token::claims::CHANNELS;

pub async fn index() -> Html<String> {
    Html(format!(
        "<h2>JWT Token Generator</h2>\
         <p>Usage: /token/username?days=7 or /token/username?seconds=3600</p>\
         <p>Includes server-side subscriptions for channels: {}</p>",
        CHANNELS.join(", ")
    ))
}
