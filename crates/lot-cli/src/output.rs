//! Shared output helpers for human and JSON modes.
//!
//! Human mode prints a text line to stdout and notices and errors to stderr.
//! JSON mode wraps responses in `{ data, warnings? }` and failures in
//! `{ error: { code, message } }` on stdout, and respects `--pretty`.

use anyhow::Result;
use serde_json::{Value, json};

use crate::opts::LotOpts;

pub fn print_success(
    opts: &LotOpts,
    data: Value,
    human: String,
    mut warnings: Vec<String>,
) -> Result<()> {
    if opts.quiet {
        warnings.clear();
    }
    if opts.pretty || opts.json {
        let mut root = json!({ "data": data });
        if !warnings.is_empty() {
            root["warnings"] = warnings.into_iter().map(Value::String).collect();
        }
        println!("{}", render(opts, &root)?);
    } else {
        for w in warnings {
            eprintln!("notice: {w}");
        }
        println!("{human}");
    }
    Ok(())
}

pub fn print_error(opts: &LotOpts, code: u32, message: &str) {
    if opts.pretty || opts.json {
        let root = json!({ "error": { "code": code, "message": message } });
        match render(opts, &root) {
            Ok(text) => println!("{text}"),
            Err(_) => eprintln!("error [{code}]: {message}"),
        }
    } else {
        eprintln!("error [{code}]: {message}");
    }
}

fn render(opts: &LotOpts, root: &Value) -> Result<String> {
    Ok(if opts.pretty {
        serde_json::to_string_pretty(root)?
    } else {
        serde_json::to_string(root)?
    })
}
