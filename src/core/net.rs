// src/core/net.rs
//
// One blocking GET, whole body as text. Redirects, TLS and timeouts are left
// to reqwest's defaults.

use reqwest::blocking::Client;

use crate::config::consts::USER_AGENT;
use crate::error::{Error, Result};

pub fn http_get(url: &str) -> Result<String> {
    let url = url.trim();
    if url.is_empty() {
        return Err(Error::EmptyUrl);
    }

    let client = Client::builder().user_agent(USER_AGENT).build()?;

    logd!("Net: GET {}", url);
    let resp = client.get(url).send()?.error_for_status()?;
    let status = resp.status();
    let body = resp.text()?;
    logd!("Net: {} {} ({} bytes)", status, url, body.len());

    Ok(body)
}
