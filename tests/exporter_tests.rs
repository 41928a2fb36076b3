// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use reconact::config::Config;
use reconact::snapshot::Snapshot;
use reconact::{cli, commands::exporter};
use serde_json::{Value, json};
use tempfile::tempdir;

fn snapshot() -> Snapshot {
    Snapshot {
        clients: serde_json::from_value(json!([{"_id": "c1", "name": "Ali"}])).unwrap(),
        sales: serde_json::from_value(json!([
            {"clientId": "c1", "currency": "USD", "quantity": 2, "sellingPrice": 50,
             "unit": "quantity"},
            {"clientId": "c1", "currency": "KGS", "quantity": 3, "sellingPrice": 10,
             "unit": "box_quantity"}
        ]))
        .unwrap(),
        reports: serde_json::from_value(json!([
            {"type": "payment", "clientId": "c1", "amount": 40, "currency": "USD"},
            {"type": "debt", "clientId": "c1", "amount": 15, "currency": "USD"}
        ]))
        .unwrap(),
        ..Default::default()
    }
}

fn config(dir: &std::path::Path) -> Config {
    Config {
        data_dir: dir.join("snapshot"),
        output_dir: dir.join("acts"),
        print_command: None,
        utc_offset: "+00:00".into(),
    }
}

fn export_args(format: &str, out: &str) -> clap::ArgMatches {
    cli::build_cli().get_matches_from([
        "reconact", "export", "--client", "c1", "--format", format, "--out", out,
    ])
}

#[test]
fn export_summary_as_json() {
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("summary.json");
    let out_str = out_path.to_string_lossy().to_string();

    let matches = export_args("json", &out_str);
    let sub = matches.subcommand_matches("export").unwrap();
    exporter::handle(&snapshot(), &config(dir.path()), sub).unwrap();

    let body: Value = serde_json::from_str(&std::fs::read_to_string(&out_path).unwrap()).unwrap();
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["currency"], "USD");
    assert_eq!(rows[0]["sales"], 100.0);
    assert_eq!(rows[0]["debt"], 15.0);
    assert_eq!(rows[0]["gross_credits"], 40.0);
    assert_eq!(rows[0]["net_balance"], 25.0);
    assert_eq!(rows[0]["unit"], "quantity");
    assert_eq!(rows[0]["units_sold"], 2.0);
    assert_eq!(rows[2]["currency"], "KGS");
    assert_eq!(rows[2]["sales"], 30.0);
    assert_eq!(rows[2]["unit"], "box_quantity");
    assert_eq!(rows[2]["units_sold"], 3.0);
}

#[test]
fn export_summary_as_csv() {
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("summary.csv");
    let out_str = out_path.to_string_lossy().to_string();

    let matches = export_args("CSV", &out_str);
    let sub = matches.subcommand_matches("export").unwrap();
    exporter::handle(&snapshot(), &config(dir.path()), sub).unwrap();

    let mut rdr = csv::Reader::from_path(&out_path).unwrap();
    let headers = rdr.headers().unwrap().clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec![
            "currency",
            "sales",
            "debt",
            "gross_credits",
            "net_balance",
            "products",
            "unit",
            "units_sold"
        ]
    );
    let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 3);
    assert_eq!(&rows[1][0], "SUM");
    assert_eq!(&rows[1][6], "package_quantity");
    assert_eq!(rows[0][4].parse::<f64>().unwrap(), 25.0);
}

#[test]
fn unknown_format_writes_nothing() {
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("summary.xml");
    let out_str = out_path.to_string_lossy().to_string();

    let matches = export_args("xml", &out_str);
    let sub = matches.subcommand_matches("export").unwrap();
    let err = exporter::handle(&snapshot(), &config(dir.path()), sub).unwrap_err();
    assert!(err.to_string().contains("Unknown format: xml"));
    assert!(!out_path.exists());
}

#[test]
fn unknown_client_is_rejected() {
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("summary.json");
    let out_str = out_path.to_string_lossy().to_string();

    let matches = cli::build_cli().get_matches_from([
        "reconact", "export", "--client", "nobody", "--format", "json", "--out", &out_str,
    ]);
    let sub = matches.subcommand_matches("export").unwrap();
    assert!(exporter::handle(&snapshot(), &config(dir.path()), sub).is_err());
    assert!(!out_path.exists());
}
