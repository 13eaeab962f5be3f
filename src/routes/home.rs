//! Root banner confirming the application is up.

use crate::config::HOME_BANNER;

pub async fn index() -> &'static str {
    HOME_BANNER
}
