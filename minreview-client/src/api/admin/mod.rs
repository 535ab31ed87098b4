//! Admin back-office API
//!
//! One file per managed resource. All calls go through the admin-flavored
//! client, so a 401 anywhere drops the admin token.

mod accounts;
mod campus;
mod canteen;
mod category;
mod comment;
mod dish;
mod floor;
mod user;

use crate::error::ClientResult;
use crate::http::{HttpClient, NetworkHttpClient};

/// API of the admin back-office
#[derive(Debug, Clone)]
pub struct AdminApi<C = NetworkHttpClient> {
    http: C,
}

impl<C: HttpClient> AdminApi<C> {
    pub fn new(http: C) -> Self {
        Self { http }
    }

    pub fn http(&self) -> &C {
        &self.http
    }

    /// Captcha image URL (cache-busted)
    pub fn captcha_image_url(&self) -> String {
        super::captcha::image_url(&self.http)
    }

    pub async fn verify_captcha(&self, code: &str) -> ClientResult<()> {
        super::captcha::verify(&self.http, code).await
    }
}
