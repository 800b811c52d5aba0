//! Closed enumerations: option kinds restricted to a named table of small
//! integers.
//!
//! Each enumeration is a newtype over `i8` with associated constants for its
//! symbolic values. The newtype does not restrict the value to the table: a
//! raw integer given in a settings file is kept as-is and written back as a
//! number, the same way it was read.

use std::fmt;

use serde::de::{self, Deserializer, Visitor};

/// Symbolic names of one enumeration, in lookup order.
#[derive(Debug, PartialEq, Eq)]
pub struct ChoiceTable {
    pub name: &'static str,
    pub entries: &'static [(&'static str, i8)],
}

impl ChoiceTable {
    /// Value of the first entry whose name starts with `text`, ignoring case.
    ///
    /// The input may abbreviate a name (`"un"` finds `"underscore"`), but a
    /// longer input never matches a shorter name.
    pub fn lookup(&self, text: &str) -> Option<i8> {
        if text.is_empty() {
            return None;
        }
        self.entries.iter().find_map(|&(name, value)| {
            name.get(..text.len())
                .filter(|prefix| prefix.eq_ignore_ascii_case(text))
                .map(|_| value)
        })
    }

    /// Name of the first entry with exactly `value`.
    pub fn name_of(&self, value: i8) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|&&(_, v)| v == value)
            .map(|&(name, _)| name)
    }
}

pub const BOOL_TABLE: ChoiceTable = ChoiceTable {
    name: "Boolean",
    entries: &[("no", 0), ("yes", 1), ("false", 0), ("true", 1)],
};

/// Shared body of the `Deserialize` impls: a symbolic name (parsed like a
/// settings value) or a raw integer.
fn deserialize_choice<'de, D: Deserializer<'de>>(
    deserializer: D,
    table: &'static ChoiceTable,
) -> Result<i8, D::Error> {
    struct ChoiceVisitor(&'static ChoiceTable);

    impl Visitor<'_> for ChoiceVisitor {
        type Value = i8;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let names: Vec<&str> = self.0.entries.iter().map(|(name, _)| *name).collect();
            write!(f, "one of {} or a small integer", names.join(", "))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<i8, E> {
            crate::codec::parse_choice(self.0, v)
                .ok_or_else(|| E::invalid_value(de::Unexpected::Str(v), &self))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<i8, E> {
            i8::try_from(v).map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<i8, E> {
            i8::try_from(v).map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
        }
    }

    deserializer.deserialize_any(ChoiceVisitor(table))
}

macro_rules! choice {
    (
        $(#[$meta:meta])*
        $name:ident, $table:ident {
            $($konst:ident = $value:literal => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(pub i8);

        impl $name {
            $(pub const $konst: Self = Self($value);)+
        }

        pub const $table: ChoiceTable = ChoiceTable {
            name: stringify!($name),
            entries: &[$(($text, $value)),+],
        };

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match $table.name_of(self.0) {
                    Some(name) => f.write_str(name),
                    None => write!(f, "{}", self.0),
                }
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                deserialize_choice(deserializer, &$table).map(Self)
            }
        }
    };
}

choice! {
    /// Modifier key for mouse and scroll actions.
    Modifier, MODIFIER_TABLE {
        OFF = 0 => "off",
        SHIFT = 1 => "shift",
        ALT = 2 => "alt",
        CTRL = 4 => "ctrl",
    }
}

choice! {
    /// Window transparency level. `GLASS` asks the host for a blur effect.
    Transparency, TRANSPARENCY_TABLE {
        OFF = 0 => "off",
        LOW = 16 => "low",
        MEDIUM = 32 => "medium",
        HIGH = 48 => "high",
        GLASS = -1 => "glass",
    }
}

choice! {
    CursorType, CURSOR_TYPE_TABLE {
        LINE = 0 => "line",
        BLOCK = 1 => "block",
        UNDERSCORE = 2 => "underscore",
    }
}

choice! {
    FontSmoothing, FONT_SMOOTHING_TABLE {
        DEFAULT = 0 => "default",
        NONE = 1 => "none",
        PARTIAL = 2 => "partial",
        FULL = 3 => "full",
    }
}

choice! {
    RightClickAction, RIGHT_CLICK_TABLE {
        PASTE = 0 => "paste",
        EXTEND = 1 => "extend",
        MENU = 2 => "menu",
    }
}

choice! {
    ScrollbarPosition, SCROLLBAR_TABLE {
        LEFT = -1 => "left",
        RIGHT = 1 => "right",
        NONE = 0 => "none",
    }
}

choice! {
    /// Initial window state.
    WindowState, WINDOW_TABLE {
        HIDE = 0 => "hide",
        NORMAL = 1 => "normal",
        MIN = 2 => "min",
        MAX = 3 => "max",
        FULL = -1 => "full",
    }
}

choice! {
    /// When to keep the window open after the child process exits.
    HoldPolicy, HOLD_TABLE {
        NEVER = 0 => "never",
        START = 1 => "start",
        ERROR = 2 => "error",
        ALWAYS = 3 => "always",
    }
}

/// Every table, for tests that sweep all enumerations.
#[cfg(test)]
pub(crate) const ALL_TABLES: &[&ChoiceTable] = &[
    &BOOL_TABLE,
    &MODIFIER_TABLE,
    &TRANSPARENCY_TABLE,
    &CURSOR_TYPE_TABLE,
    &FONT_SMOOTHING_TABLE,
    &RIGHT_CLICK_TABLE,
    &SCROLLBAR_TABLE,
    &WINDOW_TABLE,
    &HOLD_TABLE,
];
