// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use gofinances::commands::exporter;
use gofinances::models::{RawAmount, TransactionRecord, TransactionType, User};
use gofinances::session::Session;
use gofinances::store::TransactionRepository;
use gofinances::{cli, db};
use rusqlite::Connection;
use tempfile::tempdir;

fn setup() -> (Connection, Session) {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    TransactionRepository::new(&conn)
        .append(
            "u1",
            TransactionRecord {
                id: "t1".into(),
                name: "Padaria, centro".into(),
                amount: RawAmount::from("12.34"),
                kind: TransactionType::Negative,
                category: "food".into(),
                date: "2025-01-02T10:00:00.000Z".into(),
            },
        )
        .unwrap();
    let session = Session::signed_in(User {
        id: "u1".into(),
        name: "Ana".into(),
        email: "ana@example.com".into(),
        photo: None,
    });
    (conn, session)
}

fn export(conn: &Connection, session: &Session, format: &str, out: &str) -> anyhow::Result<()> {
    let matches = cli::build_cli().get_matches_from([
        "gofinances",
        "export",
        "transactions",
        "--format",
        format,
        "--out",
        out,
    ]);
    let Some(("export", export_m)) = matches.subcommand() else {
        panic!("no export subcommand");
    };
    exporter::handle(conn, session, export_m)
}

#[test]
fn export_json_matches_stored_records() {
    let (conn, session) = setup();
    let dir = tempdir().unwrap();
    let out = dir.path().join("tx.json");
    export(&conn, &session, "json", &out.to_string_lossy()).unwrap();

    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(
        written,
        serde_json::json!([{
            "id": "t1",
            "name": "Padaria, centro",
            "amount": "12.34",
            "type": "negative",
            "category": "food",
            "date": "2025-01-02T10:00:00.000Z"
        }])
    );
}

#[test]
fn export_csv_quotes_fields() {
    let (conn, session) = setup();
    let dir = tempdir().unwrap();
    let out = dir.path().join("tx.csv");
    export(&conn, &session, "CSV", &out.to_string_lossy()).unwrap();

    let text = std::fs::read_to_string(&out).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("id,name,amount,type,category,date"));
    assert_eq!(
        lines.next(),
        Some("t1,\"Padaria, centro\",12.34,negative,food,2025-01-02T10:00:00.000Z")
    );
}

#[test]
fn export_unknown_format_fails() {
    let (conn, session) = setup();
    let dir = tempdir().unwrap();
    let out = dir.path().join("tx.xml");
    assert!(export(&conn, &session, "xml", &out.to_string_lossy()).is_err());
}
