//! Image captcha, shared by both sides of the platform

use serde::Serialize;

use crate::error::ClientResult;
use crate::http::{Ack, HttpClient};

#[derive(Serialize)]
struct VerifyQuery<'a> {
    code: &'a str,
}

/// Captcha image URL with a millisecond timestamp so the browser or any
/// intermediate cache never serves a stale image
pub fn image_url<C: HttpClient>(http: &C) -> String {
    format!(
        "{}/captcha/image?t={}",
        http.base_url(),
        chrono::Utc::now().timestamp_millis()
    )
}

/// Check a captcha answer; the server session remembers the issued code
pub async fn verify<C: HttpClient>(http: &C, code: &str) -> ClientResult<()> {
    http.post_query::<Ack, _>("/captcha/verify", &VerifyQuery { code })
        .await?;
    Ok(())
}
