//! Typed values and the text codec for each option kind.
//!
//! [`parse`] turns the raw text of a settings line into a [`Value`] of the
//! option's [`Kind`]; [`format`] renders a value back into the text that
//! [`parse`] accepts. Neither touches a configuration record; the registry
//! moves values in and out of fields.

use crate::choice::{BOOL_TABLE, ChoiceTable};
use crate::colour::Colour;

/// The type tag of an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    String,
    Int,
    Bool,
    Colour,
    Choice(&'static ChoiceTable),
}

/// A typed option value, as stored in or extracted from a record field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Str(String),
    Int(i32),
    Bool(bool),
    Colour(Colour),
    Choice(i8),
}

impl Value {
    /// Whether this value is the representation used by `kind`.
    pub fn is_kind(&self, kind: Kind) -> bool {
        matches!(
            (self, kind),
            (Value::Str(_), Kind::String)
                | (Value::Int(_), Kind::Int)
                | (Value::Bool(_), Kind::Bool)
                | (Value::Colour(_), Kind::Colour)
                | (Value::Choice(_), Kind::Choice(_))
        )
    }
}

/// Conversion between a record field's Rust type and [`Value`].
pub trait FieldValue: Sized {
    fn into_value(self) -> Value;
    fn from_value(value: Value) -> Option<Self>;
}

impl FieldValue for String {
    fn into_value(self) -> Value {
        Value::Str(self)
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl FieldValue for i32 {
    fn into_value(self) -> Value {
        Value::Int(self)
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Int(i) => Some(i),
            _ => None,
        }
    }
}

impl FieldValue for bool {
    fn into_value(self) -> Value {
        Value::Bool(self)
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(b),
            _ => None,
        }
    }
}

impl FieldValue for Colour {
    fn into_value(self) -> Value {
        Value::Colour(self)
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Colour(c) => Some(c),
            _ => None,
        }
    }
}

macro_rules! choice_field_value {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl FieldValue for $ty {
                fn into_value(self) -> Value {
                    Value::Choice(self.0)
                }

                fn from_value(value: Value) -> Option<Self> {
                    match value {
                        Value::Choice(v) => Some(Self(v)),
                        _ => None,
                    }
                }
            }
        )+
    };
}

choice_field_value!(
    crate::choice::Modifier,
    crate::choice::Transparency,
    crate::choice::CursorType,
    crate::choice::FontSmoothing,
    crate::choice::RightClickAction,
    crate::choice::ScrollbarPosition,
    crate::choice::WindowState,
    crate::choice::HoldPolicy,
);

/// Parse `text` as a value of `kind`. `None` means the text is not valid for
/// the kind; the caller decides how to report it.
pub fn parse(kind: Kind, text: &str) -> Option<Value> {
    match kind {
        Kind::String => Some(Value::Str(text.to_string())),
        Kind::Int => parse_int(text).map(Value::Int),
        Kind::Bool => parse_choice(&BOOL_TABLE, text).map(|v| Value::Bool(v != 0)),
        Kind::Colour => Colour::parse(text).map(Value::Colour),
        Kind::Choice(table) => parse_choice(table, text).map(Value::Choice),
    }
}

/// Render `value` as settings-file text.
///
/// Values whose representation does not match `kind` fall back to their own
/// natural rendering; the registry never produces such a pair.
pub fn format(kind: Kind, value: &Value) -> String {
    match (kind, value) {
        (_, Value::Str(s)) => s.clone(),
        (_, Value::Int(i)) => i.to_string(),
        (_, Value::Colour(c)) => c.to_string(),
        (_, Value::Bool(b)) => format_choice(&BOOL_TABLE, i8::from(*b)),
        (Kind::Choice(table), Value::Choice(v)) => format_choice(table, *v),
        (_, Value::Choice(v)) => v.to_string(),
    }
}

/// A symbolic name from `table` (possibly abbreviated), or a raw integer
/// that fits a signed byte.
pub fn parse_choice(table: &ChoiceTable, text: &str) -> Option<i8> {
    if text.is_empty() {
        return None;
    }
    table
        .lookup(text)
        .or_else(|| parse_int(text).and_then(|v| i8::try_from(v).ok()))
}

fn format_choice(table: &ChoiceTable, value: i8) -> String {
    match table.name_of(value) {
        Some(name) => name.to_string(),
        None => value.to_string(),
    }
}

/// Tolerant integer parse in the manner of C's `strtol` with base 0.
///
/// Leading whitespace and a sign are accepted; `0x` selects hex and a leading
/// `0` selects octal. The longest valid digit prefix is used and anything
/// after it is ignored. Fails when no digit is consumed or the result does
/// not fit an `i32`.
pub fn parse_int(text: &str) -> Option<i32> {
    let s = text.trim_start();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, digits) = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) if hex.starts_with(|c: char| c.is_ascii_hexdigit()) => (16, hex),
        _ if s.starts_with('0') => (8, s),
        _ => (10, s),
    };

    let len = digits
        .bytes()
        .take_while(|b| char::from(*b).is_digit(radix))
        .count();
    if len == 0 {
        return None;
    }

    let magnitude = i64::from_str_radix(&digits[..len], radix).ok()?;
    let value = if negative { -magnitude } else { magnitude };
    i32::try_from(value).ok()
}
