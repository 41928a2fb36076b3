// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Display rules shared by the live view and the printable statement.

use chrono::FixedOffset;

use crate::engine::window::parse_timestamp;
use crate::models::{ProductRef, Unit};

pub const NOT_SPECIFIED: &str = "Не указан";
pub const DASH: &str = "-";
pub const ZERO: &str = "0.00";

pub fn text_or<'a>(value: Option<&'a str>, placeholder: &'a str) -> &'a str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => placeholder,
    }
}

/// Product name/code/size, with `"Не указан"` when the product or the field
/// is missing.
pub fn product_name(product: Option<&ProductRef>) -> &str {
    text_or(product.and_then(|p| p.name.as_deref()), NOT_SPECIFIED)
}

pub fn product_code(product: Option<&ProductRef>) -> &str {
    text_or(product.and_then(|p| p.code.as_deref()), NOT_SPECIFIED)
}

pub fn product_size(product: Option<&ProductRef>) -> &str {
    text_or(product.and_then(|p| p.size.as_deref()), NOT_SPECIFIED)
}

fn finite(v: f64) -> Option<f64> {
    // -0.0 prints as "-0.00"
    v.is_finite().then_some(if v == 0.0 { 0.0 } else { v })
}

/// Fixed two decimals, no grouping. Non-finite values print as `"0.00"`.
pub fn fmt_fixed(v: f64) -> String {
    match finite(v) {
        Some(v) => format!("{:.2}", v),
        None => ZERO.to_string(),
    }
}

pub fn fmt_fixed_opt(v: Option<f64>) -> String {
    v.map(fmt_fixed).unwrap_or_else(|| ZERO.to_string())
}

/// Two decimals with `,` thousands grouping, e.g. `-1,234,567.80`.
pub fn fmt_grouped(v: f64) -> String {
    let fixed = fmt_fixed(v);
    let (sign, digits) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int, frac) = digits.split_once('.').unwrap_or((digits, "00"));
    let mut grouped = String::with_capacity(int.len() + int.len() / 3);
    for (i, ch) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}{}.{}", sign, grouped, frac)
}

/// Quantities print as plain numbers (`10`, `2.5`); missing is `"0"`.
pub fn fmt_quantity(v: Option<f64>) -> String {
    match v.and_then(finite) {
        Some(q) => format!("{}", q),
        None => "0".to_string(),
    }
}

/// Value with a currency suffix: `12.00 USD`.
pub fn fmt_money(v: f64, currency: &str) -> String {
    format!("{} {}", fmt_fixed(v), currency)
}

pub fn unit_label(unit: Unit) -> &'static str {
    match unit {
        Unit::Quantity => "Dona",
        Unit::PackageQuantity => "Pachka",
        Unit::BoxQuantity => "Karobka",
    }
}

/// Known units by label, unknown ones verbatim, missing as `"Не указан"`.
pub fn unit_text(raw: Option<&str>) -> &str {
    match Unit::parse(raw) {
        Some(u) => unit_label(u),
        None => text_or(raw, NOT_SPECIFIED),
    }
}

/// Currency code as recorded, `"-"` when missing.
pub fn currency_text(raw: Option<&str>) -> &str {
    text_or(raw, DASH)
}

/// `DD.MM.YYYY` in `offset`, or `"Не указан"`.
pub fn fmt_day(raw: Option<&str>, offset: FixedOffset) -> String {
    raw.and_then(|r| parse_timestamp(r, offset))
        .map(|dt| dt.with_timezone(&offset).format("%d.%m.%Y").to_string())
        .unwrap_or_else(|| NOT_SPECIFIED.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouping() {
        assert_eq!(fmt_grouped(0.0), "0.00");
        assert_eq!(fmt_grouped(999.5), "999.50");
        assert_eq!(fmt_grouped(1000.0), "1,000.00");
        assert_eq!(fmt_grouped(-1234567.8), "-1,234,567.80");
    }

    #[test]
    fn fixed_handles_edge_values() {
        assert_eq!(fmt_fixed(-0.0), "0.00");
        assert_eq!(fmt_fixed(f64::NAN), "0.00");
        assert_eq!(fmt_fixed(35.0), "35.00");
        assert_eq!(fmt_fixed_opt(None), "0.00");
    }

    #[test]
    fn placeholders() {
        assert_eq!(product_name(None), NOT_SPECIFIED);
        assert_eq!(product_code(Some(&ProductRef::default())), NOT_SPECIFIED);
        assert_eq!(unit_text(None), NOT_SPECIFIED);
        assert_eq!(unit_text(Some("kg")), "kg");
        assert_eq!(unit_text(Some("box_quantity")), "Karobka");
        assert_eq!(currency_text(Some("")), DASH);
        assert_eq!(fmt_quantity(None), "0");
        assert_eq!(fmt_quantity(Some(2.5)), "2.5");
        assert_eq!(fmt_quantity(Some(10.0)), "10");
    }

    #[test]
    fn day_format() {
        let utc = FixedOffset::east_opt(0).unwrap();
        assert_eq!(fmt_day(Some("2025-04-09T10:00:00Z"), utc), "09.04.2025");
        assert_eq!(fmt_day(Some("??"), utc), NOT_SPECIFIED);
        assert_eq!(fmt_day(None, utc), NOT_SPECIFIED);
    }
}
