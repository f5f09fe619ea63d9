// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::auth::{OAuthConfig, extract_access_token, fetch_google_user, local_user};
use crate::session::{Session, SessionStore};
use crate::utils::{http_client, pretty_table};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, session: &Session, m: &clap::ArgMatches) -> Result<()> {
    let sessions = SessionStore::new(conn);
    match m.subcommand() {
        Some(("url", _)) => {
            let url = OAuthConfig::from_env()?.authorization_url()?;
            println!("{}", url);
        }
        Some(("login", sub)) => {
            let user = if let Some(name) = sub.get_one::<String>("name") {
                let email = sub
                    .get_one::<String>("email")
                    .map(|s| s.as_str())
                    .unwrap_or_default();
                local_user(name, email)?
            } else {
                let raw = sub.get_one::<String>("access-token").unwrap();
                let token = extract_access_token(raw)?;
                fetch_google_user(&http_client()?, &token)?
            };
            let session = sessions.sign_in(user)?;
            if let Some(u) = session.user() {
                println!("Signed in as {} <{}>", u.name, u.email);
            }
        }
        Some(("whoami", _)) => match session.user() {
            Some(u) => {
                let rows = vec![vec![
                    u.id.clone(),
                    u.name.clone(),
                    u.email.clone(),
                    u.photo.clone().unwrap_or_default(),
                ]];
                println!("{}", pretty_table(&["Id", "Name", "Email", "Photo"], rows));
            }
            None => println!("Not signed in"),
        },
        Some(("logout", _)) => {
            sessions.sign_out()?;
            println!("Signed out");
        }
        _ => {}
    }
    Ok(())
}
