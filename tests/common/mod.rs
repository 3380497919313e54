//! Common test utilities for integration tests
//!
//! A mockito-backed vault answering the Key Vault secrets API, and a
//! credential that hands out a fixed token and records the scopes asked for.

#![allow(dead_code)]

use async_trait::async_trait;
use azure_core::auth::{AccessToken, TokenCredential};
use mockito::{Matcher, Mock, ServerGuard};
use serde_json::json;
use std::sync::{Arc, Mutex};
use time::OffsetDateTime;

pub const TEST_TOKEN: &str = "test-token";

/// Credential returning a fixed token
#[derive(Debug, Default)]
pub struct StaticCredential {
    scopes: Mutex<Vec<String>>,
}

impl StaticCredential {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Every scope requested so far, in order
    pub fn scopes(&self) -> Vec<String> {
        self.scopes.lock().unwrap().clone()
    }
}

#[async_trait]
impl TokenCredential for StaticCredential {
    async fn get_token(&self, scopes: &[&str]) -> azure_core::Result<AccessToken> {
        self.scopes
            .lock()
            .unwrap()
            .extend(scopes.iter().map(|scope| (*scope).to_string()));
        Ok(AccessToken::new(
            TEST_TOKEN.to_string(),
            OffsetDateTime::now_utc() + time::Duration::hours(1),
        ))
    }

    async fn clear_cache(&self) -> azure_core::Result<()> {
        Ok(())
    }
}

pub fn bearer() -> String {
    format!("Bearer {TEST_TOKEN}")
}

fn attributes(enabled: bool) -> serde_json::Value {
    json!({
        "enabled": enabled,
        "created": 1_700_000_000,
        "updated": 1_700_000_000,
        "recoveryLevel": "Recoverable+Purgeable"
    })
}

/// Path matcher for one secret, with or without a version segment
pub fn secret_path(name: &str) -> Matcher {
    Matcher::Regex(format!("^/secrets/{name}(/[^/]*)?$"))
}

/// The secret listing, served as a single page
pub async fn mock_listing(server: &mut ServerGuard, secrets: &[(&str, bool)]) -> Mock {
    let base = server.url();
    let value: Vec<_> = secrets
        .iter()
        .map(|(name, enabled)| {
            json!({
                "id": format!("{base}/secrets/{name}"),
                "attributes": attributes(*enabled)
            })
        })
        .collect();

    server
        .mock("GET", "/secrets")
        .match_query(Matcher::Any)
        .match_header("authorization", bearer().as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "value": value, "nextLink": null }).to_string())
        .create_async()
        .await
}

/// A single secret value
pub async fn mock_secret(server: &mut ServerGuard, name: &str, value: &str) -> Mock {
    let id = format!("{}/secrets/{name}/0123456789abcdef", server.url());
    server
        .mock("GET", secret_path(name))
        .match_query(Matcher::Any)
        .match_header("authorization", bearer().as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "value": value,
                "id": id,
                "attributes": attributes(true)
            })
            .to_string(),
        )
        .create_async()
        .await
}

/// Serve a vault holding `secrets` (name, value, enabled)
pub async fn mock_vault(server: &mut ServerGuard, secrets: &[(&str, &str, bool)]) -> Vec<Mock> {
    let listing: Vec<(&str, bool)> = secrets.iter().map(|(n, _, e)| (*n, *e)).collect();

    let mut mocks = vec![mock_listing(server, &listing).await];
    for (name, value, _) in secrets {
        mocks.push(mock_secret(server, name, value).await);
    }
    mocks
}
