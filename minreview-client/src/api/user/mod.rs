//! User-facing site API
//!
//! Split by concern: account/profile, catalog browsing, reactions, comments.

mod account;
mod catalog;
mod comment;
mod reaction;

use crate::error::ClientResult;
use crate::filter::ContentFilter;
use crate::http::{HttpClient, NetworkHttpClient};

pub use account::ProfileUpdate;

/// API of the user-facing site
#[derive(Debug, Clone)]
pub struct UserApi<C = NetworkHttpClient> {
    http: C,
    filter: ContentFilter,
}

impl<C: HttpClient> UserApi<C> {
    pub fn new(http: C) -> Self {
        Self {
            http,
            filter: ContentFilter::default(),
        }
    }

    /// Replace the filter comments are checked against before submission
    pub fn with_filter(mut self, filter: ContentFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn http(&self) -> &C {
        &self.http
    }

    pub fn filter(&self) -> &ContentFilter {
        &self.filter
    }

    /// Captcha image URL (cache-busted)
    pub fn captcha_image_url(&self) -> String {
        super::captcha::image_url(&self.http)
    }

    pub async fn verify_captcha(&self, code: &str) -> ClientResult<()> {
        super::captcha::verify(&self.http, code).await
    }
}
