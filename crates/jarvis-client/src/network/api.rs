use reqwest::{Client, Url};
use serde::Serialize;

use super::reply::Reply;
use crate::error::Result;

async fn finish(request: reqwest::RequestBuilder) -> Result<Reply> {
    let response = request.send().await?;

    let status = response.status();
    let cookies = response
        .cookies()
        .map(|c| (c.name().to_string(), c.value().to_string()))
        .collect();
    let body = response.bytes().await?.to_vec();

    tracing::debug!("Received {} ({} bytes)", status, body.len());

    Ok(Reply {
        status,
        cookies,
        body,
    })
}

pub async fn post_form<B: Serialize>(client: &Client, url: &Url, body: &B) -> Result<Reply> {
    finish(client.post(url.clone()).form(body)).await
}

pub async fn post_json<B: Serialize>(client: &Client, url: &Url, body: &B) -> Result<Reply> {
    finish(client.post(url.clone()).json(body)).await
}
