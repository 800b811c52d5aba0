//! The option registry: every settings name, its kind, and where it lives in
//! the [`ConfigRecord`].
//!
//! Storage locations are the [`Field`] enum rather than offsets; each variant
//! knows how to read, write and copy its record field through [`Value`].
//! Legacy descriptors are deprecated names that alias the storage of a
//! current option (or a field that only exists to be migrated). They are
//! applied like any other option but never copied on commit and never saved.

use crate::choice::{
    CURSOR_TYPE_TABLE, FONT_SMOOTHING_TABLE, HOLD_TABLE, MODIFIER_TABLE, RIGHT_CLICK_TABLE,
    SCROLLBAR_TABLE, TRANSPARENCY_TABLE, WINDOW_TABLE,
};
use crate::codec::{FieldValue, Kind, Value};
use crate::record::ConfigRecord;

macro_rules! fields {
    ($($variant:ident => $($path:ident).+),+ $(,)?) => {
        /// A storage location in [`ConfigRecord`].
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Field {
            $($variant),+
        }

        impl Field {
            pub fn get(self, record: &ConfigRecord) -> Value {
                match self {
                    $(Field::$variant => record.$($path).+.clone().into_value(),)+
                }
            }

            /// Store `value` if it has this field's representation. Returns
            /// whether the record was written.
            pub fn set(self, record: &mut ConfigRecord, value: Value) -> bool {
                match self {
                    $(Field::$variant => match FieldValue::from_value(value) {
                        Some(v) => {
                            record.$($path).+ = v;
                            true
                        }
                        None => false,
                    },)+
                }
            }

            pub fn copy(self, from: &ConfigRecord, to: &mut ConfigRecord) {
                match self {
                    $(Field::$variant => to.$($path).+ = from.$($path).+.clone(),)+
                }
            }
        }
    };
}

fields! {
    FgColour => fg_colour,
    BgColour => bg_colour,
    CursorColour => cursor_colour,
    ThemeFile => theme_file,
    Transparency => transparency,
    OpaqueWhenFocused => opaque_when_focused,
    CursorType => cursor_type,
    CursorBlinks => cursor_blinks,
    FontName => font.name,
    FontIsBold => font.is_bold,
    FontSize => font.size,
    FontSmoothing => font_smoothing,
    BoldAsFont => bold_as_font,
    BoldAsColour => bold_as_colour,
    AllowBlinking => allow_blinking,
    Locale => locale,
    Charset => charset,
    BackspaceSendsBs => backspace_sends_bs,
    CtrlAltIsAltGr => ctrl_alt_is_altgr,
    ClipShortcuts => clip_shortcuts,
    WindowShortcuts => window_shortcuts,
    SwitchShortcuts => switch_shortcuts,
    ZoomShortcuts => zoom_shortcuts,
    AltFnShortcuts => alt_fn_shortcuts,
    CtrlShiftShortcuts => ctrl_shift_shortcuts,
    CopyOnSelect => copy_on_select,
    CopyAsRtf => copy_as_rtf,
    ClicksPlaceCursor => clicks_place_cursor,
    RightClickAction => right_click_action,
    ClicksTargetApp => clicks_target_app,
    ClickTargetMod => click_target_mod,
    Columns => cols,
    Rows => rows,
    ScrollbackLines => scrollback_lines,
    Scrollbar => scrollbar,
    ScrollMod => scroll_mod,
    PgUpDnScroll => pgupdn_scroll,
    Term => term,
    Answerback => answerback,
    BellSound => bell_sound,
    BellFlash => bell_flash,
    BellTaskbar => bell_taskbar,
    Printer => printer,
    ConfirmExit => confirm_exit,
    Class => class,
    Hold => hold,
    Icon => icon,
    Log => log,
    Title => title,
    Utmp => utmp,
    Window => window,
    X => x,
    Y => y,
    AppId => app_id,
    ColSpacing => col_spacing,
    RowSpacing => row_spacing,
    WordChars => word_chars,
    ImeCursorColour => ime_cursor_colour,
    Black => ansi.black,
    Red => ansi.red,
    Green => ansi.green,
    Yellow => ansi.yellow,
    Blue => ansi.blue,
    Magenta => ansi.magenta,
    Cyan => ansi.cyan,
    White => ansi.white,
    BoldBlack => ansi.bold_black,
    BoldRed => ansi.bold_red,
    BoldGreen => ansi.bold_green,
    BoldYellow => ansi.bold_yellow,
    BoldBlue => ansi.bold_blue,
    BoldMagenta => ansi.bold_magenta,
    BoldCyan => ansi.bold_cyan,
    BoldWhite => ansi.bold_white,
    UseSystemColours => use_system_colours,
}

impl Field {
    /// Whether a change to this field requires the host to reload fonts.
    pub fn affects_font(self) -> bool {
        matches!(
            self,
            Field::FontName
                | Field::FontSize
                | Field::FontIsBold
                | Field::BoldAsFont
                | Field::BoldAsColour
                | Field::FontSmoothing
                | Field::ThemeFile
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionDescriptor {
    pub name: &'static str,
    pub kind: Kind,
    pub field: Field,
    pub legacy: bool,
}

const fn opt(name: &'static str, kind: Kind, field: Field) -> OptionDescriptor {
    OptionDescriptor {
        name,
        kind,
        field,
        legacy: false,
    }
}

const fn legacy(name: &'static str, kind: Kind, field: Field) -> OptionDescriptor {
    OptionDescriptor {
        name,
        kind,
        field,
        legacy: true,
    }
}

const TRANSPARENCY: Kind = Kind::Choice(&TRANSPARENCY_TABLE);
const CURSOR: Kind = Kind::Choice(&CURSOR_TYPE_TABLE);
const SMOOTHING: Kind = Kind::Choice(&FONT_SMOOTHING_TABLE);
const RIGHT_CLICK: Kind = Kind::Choice(&RIGHT_CLICK_TABLE);
const MODIFIER: Kind = Kind::Choice(&MODIFIER_TABLE);
const SCROLLBAR: Kind = Kind::Choice(&SCROLLBAR_TABLE);
const HOLD: Kind = Kind::Choice(&HOLD_TABLE);
const WINDOW: Kind = Kind::Choice(&WINDOW_TABLE);

/// Number of colour options at the head of [`OPTIONS`] that the legacy
/// `UseSystemColours` migration rewrites.
pub const LEADING_COLOURS: usize = 3;

/// Every option, in the order used for listing.
pub const OPTIONS: &[OptionDescriptor] = &[
    // Looks
    opt("ForegroundColour", Kind::Colour, Field::FgColour),
    opt("BackgroundColour", Kind::Colour, Field::BgColour),
    opt("CursorColour", Kind::Colour, Field::CursorColour),
    opt("ThemeFile", Kind::String, Field::ThemeFile),
    opt("Transparency", TRANSPARENCY, Field::Transparency),
    opt("OpaqueWhenFocused", Kind::Bool, Field::OpaqueWhenFocused),
    opt("CursorType", CURSOR, Field::CursorType),
    opt("CursorBlinks", Kind::Bool, Field::CursorBlinks),
    // Text
    opt("Font", Kind::String, Field::FontName),
    opt("FontIsBold", Kind::Bool, Field::FontIsBold),
    opt("FontHeight", Kind::Int, Field::FontSize),
    opt("FontSmoothing", SMOOTHING, Field::FontSmoothing),
    opt("BoldAsFont", Kind::Bool, Field::BoldAsFont),
    opt("BoldAsColour", Kind::Bool, Field::BoldAsColour),
    opt("AllowBlinking", Kind::Bool, Field::AllowBlinking),
    opt("Locale", Kind::String, Field::Locale),
    opt("Charset", Kind::String, Field::Charset),
    // Keys
    opt("BackspaceSendsBS", Kind::Bool, Field::BackspaceSendsBs),
    opt("CtrlAltIsAltGr", Kind::Bool, Field::CtrlAltIsAltGr),
    opt("ClipShortcuts", Kind::Bool, Field::ClipShortcuts),
    opt("WindowShortcuts", Kind::Bool, Field::WindowShortcuts),
    opt("SwitchShortcuts", Kind::Bool, Field::SwitchShortcuts),
    opt("ZoomShortcuts", Kind::Bool, Field::ZoomShortcuts),
    opt("AltFnShortcuts", Kind::Bool, Field::AltFnShortcuts),
    opt("CtrlShiftShortcuts", Kind::Bool, Field::CtrlShiftShortcuts),
    // Mouse
    opt("CopyOnSelect", Kind::Bool, Field::CopyOnSelect),
    opt("CopyAsRTF", Kind::Bool, Field::CopyAsRtf),
    opt("ClicksPlaceCursor", Kind::Bool, Field::ClicksPlaceCursor),
    opt("RightClickAction", RIGHT_CLICK, Field::RightClickAction),
    opt("ClicksTargetApp", Kind::Bool, Field::ClicksTargetApp),
    opt("ClickTargetMod", MODIFIER, Field::ClickTargetMod),
    // Window
    opt("Columns", Kind::Int, Field::Columns),
    opt("Rows", Kind::Int, Field::Rows),
    opt("ScrollbackLines", Kind::Int, Field::ScrollbackLines),
    opt("Scrollbar", SCROLLBAR, Field::Scrollbar),
    opt("ScrollMod", MODIFIER, Field::ScrollMod),
    opt("PgUpDnScroll", Kind::Bool, Field::PgUpDnScroll),
    // Terminal
    opt("Term", Kind::String, Field::Term),
    opt("Answerback", Kind::String, Field::Answerback),
    opt("BellSound", Kind::Bool, Field::BellSound),
    opt("BellFlash", Kind::Bool, Field::BellFlash),
    opt("BellTaskbar", Kind::Bool, Field::BellTaskbar),
    opt("Printer", Kind::String, Field::Printer),
    opt("ConfirmExit", Kind::Bool, Field::ConfirmExit),
    // Command line
    opt("Class", Kind::String, Field::Class),
    opt("Hold", HOLD, Field::Hold),
    opt("Icon", Kind::String, Field::Icon),
    opt("Log", Kind::String, Field::Log),
    opt("Title", Kind::String, Field::Title),
    opt("Utmp", Kind::Bool, Field::Utmp),
    opt("Window", WINDOW, Field::Window),
    opt("X", Kind::Int, Field::X),
    opt("Y", Kind::Int, Field::Y),
    // Hidden
    opt("AppID", Kind::String, Field::AppId),
    opt("ColSpacing", Kind::Int, Field::ColSpacing),
    opt("RowSpacing", Kind::Int, Field::RowSpacing),
    opt("WordChars", Kind::String, Field::WordChars),
    opt("IMECursorColour", Kind::Colour, Field::ImeCursorColour),
    // ANSI palette
    opt("Black", Kind::Colour, Field::Black),
    opt("Red", Kind::Colour, Field::Red),
    opt("Green", Kind::Colour, Field::Green),
    opt("Yellow", Kind::Colour, Field::Yellow),
    opt("Blue", Kind::Colour, Field::Blue),
    opt("Magenta", Kind::Colour, Field::Magenta),
    opt("Cyan", Kind::Colour, Field::Cyan),
    opt("White", Kind::Colour, Field::White),
    opt("BoldBlack", Kind::Colour, Field::BoldBlack),
    opt("BoldRed", Kind::Colour, Field::BoldRed),
    opt("BoldGreen", Kind::Colour, Field::BoldGreen),
    opt("BoldYellow", Kind::Colour, Field::BoldYellow),
    opt("BoldBlue", Kind::Colour, Field::BoldBlue),
    opt("BoldMagenta", Kind::Colour, Field::BoldMagenta),
    opt("BoldCyan", Kind::Colour, Field::BoldCyan),
    opt("BoldWhite", Kind::Colour, Field::BoldWhite),
    // Legacy
    legacy("UseSystemColours", Kind::Bool, Field::UseSystemColours),
    legacy("BoldAsBright", Kind::Bool, Field::BoldAsColour),
    legacy("FontQuality", SMOOTHING, Field::FontSmoothing),
];

const _: () = {
    let expected = [Field::FgColour, Field::BgColour, Field::CursorColour];
    let mut i = 0;
    while i < LEADING_COLOURS {
        let d = &OPTIONS[i];
        assert!(!d.legacy && matches!(d.kind, Kind::Colour));
        assert!(d.field as u8 == expected[i] as u8);
        i += 1;
    }
};

/// Index of the option called `name`, ignoring ASCII case.
pub fn find(name: &str) -> Option<usize> {
    OPTIONS
        .iter()
        .position(|d| d.name.eq_ignore_ascii_case(name))
}

/// Copy every non-legacy field from `from` into `to`.
pub fn copy_record(from: &ConfigRecord, to: &mut ConfigRecord) {
    for d in OPTIONS.iter().filter(|d| !d.legacy) {
        d.field.copy(from, to);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::Colour;
    use std::collections::HashSet;

    fn defaults() -> ConfigRecord {
        ConfigRecord::defaults().unwrap()
    }

    #[test]
    fn names_unique_ignoring_case() {
        let mut seen = HashSet::new();
        for d in OPTIONS {
            assert!(seen.insert(d.name.to_ascii_lowercase()), "duplicate {}", d.name);
        }
    }

    #[test]
    fn field_values_match_descriptor_kind() {
        let record = defaults();
        for d in OPTIONS {
            let value = d.field.get(&record);
            assert!(value.is_kind(d.kind), "{} holds {value:?}", d.name);
        }
    }

    #[test]
    fn leading_colours() {
        let names: Vec<&str> = OPTIONS[..LEADING_COLOURS].iter().map(|d| d.name).collect();
        assert_eq!(names, ["ForegroundColour", "BackgroundColour", "CursorColour"]);
    }

    #[test]
    fn find_ignores_case() {
        assert_eq!(find("columns"), find("Columns"));
        assert_eq!(OPTIONS[find("FONTHEIGHT").unwrap()].field, Field::FontSize);
        assert_eq!(find("Colums"), None);
    }

    #[test]
    fn legacy_aliases_share_storage() {
        let bright = &OPTIONS[find("BoldAsBright").unwrap()];
        assert!(bright.legacy);
        assert_eq!(bright.field, OPTIONS[find("BoldAsColour").unwrap()].field);

        let quality = &OPTIONS[find("FontQuality").unwrap()];
        assert_eq!(quality.kind, OPTIONS[find("FontSmoothing").unwrap()].kind);
    }

    #[test]
    fn set_rejects_wrong_representation() {
        let mut record = defaults();
        assert!(!Field::Columns.set(&mut record, Value::Str("wide".into())));
        assert_eq!(record.cols, 80);
        assert!(Field::Columns.set(&mut record, Value::Int(132)));
        assert_eq!(record.cols, 132);
    }

    #[test]
    fn nested_fields_reach_their_section() {
        let mut record = defaults();
        Field::FontName.set(&mut record, Value::Str("Consolas".into()));
        Field::BoldBlue.set(&mut record, Value::Colour(Colour::from_rgb(1, 2, 3)));
        assert_eq!(record.font.name, "Consolas");
        assert_eq!(record.ansi.bold_blue, Colour::from_rgb(1, 2, 3));
    }

    #[test]
    fn copy_record_skips_legacy_only_fields() {
        let mut from = defaults();
        from.use_system_colours = true;
        from.term = "xterm-256color".into();
        let mut to = defaults();
        copy_record(&from, &mut to);
        assert_eq!(to.term, "xterm-256color");
        assert!(!to.use_system_colours);
    }
}
