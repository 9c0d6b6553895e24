use axum::http::Uri;

use crate::info;

pub async fn unexpected(uri: Uri) {
    info!("Unexpected request to: {}", uri);
}
