//! `barforge list`: the symbology table.

use anyhow::Result;
use barforge::Symbology;
use clap::Args;
use serde::Serialize;

/// Arguments for `barforge list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only show symbologies this build can encode.
    #[arg(long)]
    pub encodable: bool,
    /// Print JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct Row {
    id: i32,
    key: &'static str,
    name: &'static str,
    encodable: bool,
    gs1: bool,
}

pub fn handle(args: ListArgs) -> Result<()> {
    let rows: Vec<Row> = Symbology::ALL
        .iter()
        .copied()
        .filter(|sym| sym.is_valid())
        .filter(|sym| !args.encodable || sym.is_encodable())
        .map(|sym| Row {
            id: sym.id(),
            key: sym.key(),
            name: sym.name(),
            encodable: sym.is_encodable(),
            gs1: sym.supports_gs1(),
        })
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }
    for row in rows {
        let flags = match (row.encodable, row.gs1) {
            (true, true) => "encode gs1",
            (true, false) => "encode",
            (false, true) => "gs1",
            (false, false) => "",
        };
        println!(
            "{:>4}  {:<16} {:<46} {}",
            row.id, row.key, row.name, flags
        );
    }
    Ok(())
}
