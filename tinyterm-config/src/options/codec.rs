//! Per-type parse, format, compare and copy routines.
//!
//! Parsing is deliberately forgiving: booleans and integers use `atoi`-style
//! best-effort conversion and never fail, so an rc file written by another
//! version always loads. Colours are the one validated case; a malformed
//! triplet leaves the field untouched.

use crate::config::Config;
use crate::types::{Colour, TriState};

use super::def::Field;

/// Lenient integer conversion with C `atoi` semantics.
///
/// Skips leading whitespace, accepts an optional sign and then as many
/// decimal digits as follow. Anything else yields `0`. Values outside the
/// `i32` range saturate.
pub fn parse_int(text: &str) -> i32 {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let mut value: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        value = (value * 10 + i64::from(b - b'0')).min(i64::from(i32::MAX) + 1);
    }
    if negative {
        value = -value;
    }
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Lenient boolean conversion: any non-zero number is `true`.
pub fn parse_bool(text: &str) -> bool {
    parse_int(text) != 0
}

/// Parse `text` into the field of `config` that `field` points at.
///
/// Returns `false` only when a colour value is malformed, in which case the
/// field keeps its previous value.
pub fn parse_into(field: &Field, config: &mut Config, text: &str) -> bool {
    match field {
        Field::String(_, get_mut) => *get_mut(config) = text.to_string(),
        Field::Bool(_, get_mut) => *get_mut(config) = parse_bool(text),
        Field::TriState(_, get_mut, _) => *get_mut(config) = TriState::from_int(parse_int(text)),
        Field::Int(_, get_mut) => *get_mut(config) = parse_int(text),
        Field::Colour(_, get_mut) => match Colour::parse(text) {
            Some(colour) => *get_mut(config) = colour,
            None => return false,
        },
    }
    true
}

/// Format the field's value the way it is written to the rc file.
pub fn format(field: &Field, config: &Config) -> String {
    match field {
        // A line break would start a new rc line; keep what a reload would see.
        Field::String(get, _) => get(config)
            .split(['\r', '\n'])
            .next()
            .unwrap_or_default()
            .to_string(),
        Field::Bool(get, _) => u8::from(*get(config)).to_string(),
        Field::TriState(get, ..) => get(config).as_int().to_string(),
        Field::Int(get, _) => get(config).to_string(),
        Field::Colour(get, _) => get(config).to_string(),
    }
}

/// Whether two snapshots hold the same value for this field.
pub fn equals(field: &Field, a: &Config, b: &Config) -> bool {
    match field {
        Field::String(get, _) => get(a) == get(b),
        Field::Bool(get, _) => get(a) == get(b),
        Field::TriState(get, ..) => get(a) == get(b),
        Field::Int(get, _) => get(a) == get(b),
        Field::Colour(get, _) => get(a) == get(b),
    }
}

/// Copy one field from `src` to `dst`. Strings are duplicated.
pub fn copy(field: &Field, dst: &mut Config, src: &Config) {
    match field {
        Field::String(get, get_mut) => get_mut(dst).clone_from(get(src)),
        Field::Bool(get, get_mut) => *get_mut(dst) = *get(src),
        Field::TriState(get, get_mut, _) => *get_mut(dst) = *get(src),
        Field::Int(get, get_mut) => *get_mut(dst) = *get(src),
        Field::Colour(get, get_mut) => *get_mut(dst) = *get(src),
    }
}
