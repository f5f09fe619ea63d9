// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Google OAuth 2.0 implicit flow and the offline sign-in fallback.
//!
//! The CLI cannot host a redirect target, so the user opens the
//! authorization URL, approves, and hands back either the access token or
//! the whole redirect URL it landed on.

use crate::models::User;
use anyhow::{Context, Result, anyhow};
use reqwest::Url;
use serde::Deserialize;

pub const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
pub const GOOGLE_USERINFO_URL: &str = "https://www.googleapis.com/oauth2/v1/userinfo";
const AVATAR_URL: &str = "https://ui-avatars.com/api/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OAuthConfig {
    pub client_id: String,
    pub redirect_uri: String,
}

impl OAuthConfig {
    pub fn from_env() -> Result<Self> {
        let client_id = std::env::var("GOFINANCES_CLIENT_ID")
            .context("GOFINANCES_CLIENT_ID is not set")?;
        let redirect_uri = std::env::var("GOFINANCES_REDIRECT_URI")
            .context("GOFINANCES_REDIRECT_URI is not set")?;
        Ok(OAuthConfig {
            client_id,
            redirect_uri,
        })
    }

    pub fn authorization_url(&self) -> Result<Url> {
        let url = Url::parse_with_params(
            GOOGLE_AUTH_URL,
            &[
                ("client_id", self.client_id.as_str()),
                ("redirect_uri", self.redirect_uri.as_str()),
                ("response_type", "token"),
                ("scope", "profile email"),
                ("prompt", "select_account"),
            ],
        )?;
        Ok(url)
    }
}

/// Accepts a bare token or a redirect URL carrying `access_token` in its
/// fragment or query.
pub fn extract_access_token(input: &str) -> Result<String> {
    let input = input.trim();
    if input.is_empty() {
        return Err(anyhow!("Empty access token"));
    }
    let Ok(url) = Url::parse(input) else {
        return Ok(input.to_string());
    };
    // implicit flow puts the token in the fragment; read it as a query
    let mut from_fragment = url.clone();
    from_fragment.set_query(url.fragment());
    [from_fragment, url]
        .iter()
        .find_map(|u| {
            u.query_pairs()
                .find(|(k, _)| k == "access_token")
                .map(|(_, v)| v.into_owned())
        })
        .ok_or_else(|| anyhow!("No access_token found in '{}'", input))
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoogleUserInfo {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub given_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
}

impl From<GoogleUserInfo> for User {
    fn from(info: GoogleUserInfo) -> Self {
        let name = info
            .given_name
            .or(info.name)
            .unwrap_or_else(|| info.email.clone());
        User {
            id: info.id,
            name,
            email: info.email,
            photo: info.picture,
        }
    }
}

pub fn fetch_google_user(client: &reqwest::blocking::Client, access_token: &str) -> Result<User> {
    let url = Url::parse_with_params(
        GOOGLE_USERINFO_URL,
        &[("alt", "json"), ("access_token", access_token)],
    )?;
    let info: GoogleUserInfo = client
        .get(url)
        .send()
        .context("Contact Google user info endpoint")?
        .error_for_status()
        .context("Google rejected the access token")?
        .json()
        .context("Unexpected user info payload")?;
    Ok(info.into())
}

/// Offline profile with a generated id and an initial-letter avatar.
pub fn local_user(name: &str, email: &str) -> Result<User> {
    let name = name.trim();
    if name.is_empty() {
        return Err(anyhow!("Name is required"));
    }
    let photo = Url::parse_with_params(AVATAR_URL, &[("name", name), ("length", "1")])?;
    Ok(User {
        id: uuid::Uuid::new_v4().to_string(),
        name: name.to_string(),
        email: email.trim().to_string(),
        photo: Some(photo.to_string()),
    })
}
