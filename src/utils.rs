// Copyright (c) 2025 Kuzu Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use rust_decimal::Decimal;

/// Display currency. The tracker is single-currency on screen; income
/// records carry their own currency tag for reference only.
pub const CURRENCY: &str = "Nu.";

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn parse_month(s: &str) -> Result<String> {
    NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d")
        .with_context(|| format!("Invalid month '{}', expected YYYY-MM", s))?;
    Ok(s.to_string())
}

pub fn parse_amount(s: &str) -> Result<Decimal> {
    s.parse::<Decimal>()
        .with_context(|| format!("Invalid amount '{}'", s))
}

/// Parse an amount that must be strictly positive (entered magnitudes).
pub fn parse_positive_amount(s: &str) -> Result<Decimal> {
    let d = parse_amount(s)?;
    if d <= Decimal::ZERO {
        bail!("Amount must be greater than zero, got '{}'", s);
    }
    Ok(d)
}

pub fn fmt_money(d: &Decimal) -> String {
    format!("{}{:.2}", CURRENCY, d)
}

/// Short label for chart-style series, e.g. "Aug 24".
pub fn short_label(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// Day label for the 7-day series, e.g. "Sun, Aug 24".
pub fn day_label(date: NaiveDate) -> String {
    date.format("%a, %b %-d").to_string()
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
