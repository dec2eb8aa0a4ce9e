//! Coercion of raw caller strings into typed values.
//!
//! | type     | accepted form                         |
//! |----------|---------------------------------------|
//! | account  | `users:001` or `@users:001`           |
//! | asset    | `USD`, `USD/2`                        |
//! | number   | `-12`, `340282366920938463463374607`  |
//! | monetary | `USD/2 100` (non-negative amount)     |
//! | portion  | `1/3`, `12.5%` (between 0 and 1)      |
//! | string   | anything                              |
//! | bool     | `true`, `false`                       |

use num_bigint::BigInt;
use numscript_ir::Type;

use crate::value::{Monetary, Portion, Value};

/// Coerce `raw` to `ty`, or `None` if it is malformed.
pub fn coerce(raw: &str, ty: Type) -> Option<Value> {
    match ty {
        Type::Account => {
            let name = raw.strip_prefix('@').unwrap_or(raw);
            is_valid_account(name).then(|| Value::Account(name.to_string()))
        }
        Type::Asset => is_valid_asset(raw).then(|| Value::Asset(raw.to_string())),
        Type::Number => parse_signed(raw).map(Value::Number),
        Type::Monetary => parse_monetary(raw).map(Value::Monetary),
        Type::Portion => parse_portion(raw).map(Value::Portion),
        Type::String => Some(Value::String(raw.to_string())),
        Type::Bool => match raw {
            "true" => Some(Value::Bool(true)),
            "false" => Some(Value::Bool(false)),
            _ => None,
        },
    }
}

/// `:`-separated segments of `[A-Za-z0-9_-]+`.
pub fn is_valid_account(name: &str) -> bool {
    !name.is_empty()
        && name.split(':').all(|segment| {
            !segment.is_empty()
                && segment
                    .bytes()
                    .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
        })
}

/// `[A-Z][A-Z0-9_]*` with an optional `/precision`.
pub fn is_valid_asset(asset: &str) -> bool {
    let (code, precision) = match asset.split_once('/') {
        Some((code, precision)) => (code, Some(precision)),
        None => (asset, None),
    };
    let mut bytes = code.bytes();
    let head_ok = bytes.next().is_some_and(|b| b.is_ascii_uppercase());
    let tail_ok = bytes.all(|b| b.is_ascii_uppercase() || b.is_ascii_digit() || b == b'_');
    let precision_ok = match precision {
        Some(p) => !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit()),
        None => true,
    };
    head_ok && tail_ok && precision_ok
}

fn parse_unsigned(raw: &str) -> Option<BigInt> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    BigInt::parse_bytes(raw.as_bytes(), 10)
}

fn parse_signed(raw: &str) -> Option<BigInt> {
    match raw.strip_prefix('-') {
        Some(digits) => parse_unsigned(digits).map(|n| -n),
        None => parse_unsigned(raw),
    }
}

fn parse_monetary(raw: &str) -> Option<Monetary> {
    let mut parts = raw.split_whitespace();
    let (asset, amount) = (parts.next()?, parts.next()?);
    if parts.next().is_some() || !is_valid_asset(asset) {
        return None;
    }
    Some(Monetary::new(asset, parse_unsigned(amount)?))
}

fn parse_portion(raw: &str) -> Option<Portion> {
    if let Some(percent) = raw.strip_suffix('%') {
        let (whole, fraction) = percent.split_once('.').unwrap_or((percent, ""));
        if !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let numerator = parse_unsigned(&format!("{whole}{fraction}"))?;
        let denominator = parse_unsigned(&format!("100{}", "0".repeat(fraction.len())))?;
        return Portion::new(numerator, denominator);
    }

    let (numerator, denominator) = raw.split_once('/')?;
    Portion::new(
        parse_unsigned(numerator.trim())?,
        parse_unsigned(denominator.trim())?,
    )
}
