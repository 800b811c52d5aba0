//! The configuration record: one typed field per option.
//!
//! Defaults are declared with confique attributes and read through
//! [`ConfigRecord::defaults`]. Colour defaults use the decimal `R,G,B`
//! notation and enumeration defaults use their symbolic names, both of which
//! go through the same parsers as settings-file values.

use confique::Config;

use crate::choice::{
    CursorType, FontSmoothing, HoldPolicy, Modifier, RightClickAction, ScrollbarPosition,
    Transparency, WindowState,
};
use crate::colour::Colour;

#[derive(Config, Debug, Clone, PartialEq)]
pub struct ConfigRecord {
    // Looks
    #[config(default = "191,191,191")]
    pub fg_colour: Colour,
    #[config(default = "0,0,0")]
    pub bg_colour: Colour,
    #[config(default = "191,191,191")]
    pub cursor_colour: Colour,
    /// Name of a parent settings file in the theme directory.
    #[config(default = "")]
    pub theme_file: String,
    #[config(default = "off")]
    pub transparency: Transparency,
    #[config(default = false)]
    pub opaque_when_focused: bool,
    #[config(default = "line")]
    pub cursor_type: CursorType,
    #[config(default = true)]
    pub cursor_blinks: bool,

    // Text
    #[config(nested)]
    pub font: FontSpec,
    #[config(default = "default")]
    pub font_smoothing: FontSmoothing,
    #[config(default = false)]
    pub bold_as_font: bool,
    #[config(default = true)]
    pub bold_as_colour: bool,
    #[config(default = false)]
    pub allow_blinking: bool,
    #[config(default = "")]
    pub locale: String,
    /// Only honoured when `locale` is set; see [`Settings::finish`](crate::Settings::finish).
    #[config(default = "")]
    pub charset: String,

    // Keys
    #[config(default = false)]
    pub backspace_sends_bs: bool,
    #[config(default = false)]
    pub ctrl_alt_is_altgr: bool,
    #[config(default = true)]
    pub clip_shortcuts: bool,
    #[config(default = true)]
    pub window_shortcuts: bool,
    #[config(default = true)]
    pub switch_shortcuts: bool,
    #[config(default = true)]
    pub zoom_shortcuts: bool,
    #[config(default = true)]
    pub alt_fn_shortcuts: bool,
    #[config(default = false)]
    pub ctrl_shift_shortcuts: bool,

    // Mouse
    #[config(default = true)]
    pub copy_on_select: bool,
    #[config(default = true)]
    pub copy_as_rtf: bool,
    #[config(default = false)]
    pub clicks_place_cursor: bool,
    #[config(default = "menu")]
    pub right_click_action: RightClickAction,
    #[config(default = true)]
    pub clicks_target_app: bool,
    #[config(default = "shift")]
    pub click_target_mod: Modifier,

    // Window
    #[config(default = 80)]
    pub cols: i32,
    #[config(default = 24)]
    pub rows: i32,
    #[config(default = 10000)]
    pub scrollback_lines: i32,
    #[config(default = "right")]
    pub scrollbar: ScrollbarPosition,
    #[config(default = "shift")]
    pub scroll_mod: Modifier,
    #[config(default = false)]
    pub pgupdn_scroll: bool,

    // Terminal
    #[config(default = "xterm")]
    pub term: String,
    #[config(default = "")]
    pub answerback: String,
    #[config(default = false)]
    pub bell_sound: bool,
    #[config(default = false)]
    pub bell_flash: bool,
    #[config(default = true)]
    pub bell_taskbar: bool,
    #[config(default = "")]
    pub printer: String,
    #[config(default = true)]
    pub confirm_exit: bool,

    // Command line
    #[config(default = "")]
    pub class: String,
    #[config(default = "start")]
    pub hold: HoldPolicy,
    #[config(default = "")]
    pub icon: String,
    #[config(default = "")]
    pub log: String,
    #[config(default = "")]
    pub title: String,
    #[config(default = false)]
    pub utmp: bool,
    #[config(default = "normal")]
    pub window: WindowState,
    #[config(default = 0)]
    pub x: i32,
    #[config(default = 0)]
    pub y: i32,

    // Hidden
    #[config(default = "")]
    pub app_id: String,
    #[config(default = 0)]
    pub col_spacing: i32,
    #[config(default = 0)]
    pub row_spacing: i32,
    #[config(default = "")]
    pub word_chars: String,
    /// Empty means no IME cursor colour is configured.
    #[config(default = "")]
    pub ime_cursor_colour: Colour,
    #[config(nested)]
    pub ansi: AnsiColours,

    /// Deprecated. Consumed by the legacy migration after every load.
    #[config(default = false)]
    pub use_system_colours: bool,
}

#[derive(Config, Debug, Clone, PartialEq)]
pub struct FontSpec {
    #[config(default = "Lucida Console")]
    pub name: String,
    #[config(default = false)]
    pub is_bold: bool,
    /// Point size.
    #[config(default = 9)]
    pub size: i32,
}

/// The sixteen ANSI palette entries, normal then bold.
#[derive(Config, Debug, Clone, PartialEq)]
pub struct AnsiColours {
    #[config(default = "0,0,0")]
    pub black: Colour,
    #[config(default = "191,0,0")]
    pub red: Colour,
    #[config(default = "0,191,0")]
    pub green: Colour,
    #[config(default = "191,191,0")]
    pub yellow: Colour,
    #[config(default = "0,0,191")]
    pub blue: Colour,
    #[config(default = "191,0,191")]
    pub magenta: Colour,
    #[config(default = "0,191,191")]
    pub cyan: Colour,
    #[config(default = "191,191,191")]
    pub white: Colour,
    #[config(default = "64,64,64")]
    pub bold_black: Colour,
    #[config(default = "255,64,64")]
    pub bold_red: Colour,
    #[config(default = "64,255,64")]
    pub bold_green: Colour,
    #[config(default = "255,255,64")]
    pub bold_yellow: Colour,
    #[config(default = "96,96,255")]
    pub bold_blue: Colour,
    #[config(default = "255,64,255")]
    pub bold_magenta: Colour,
    #[config(default = "64,255,255")]
    pub bold_cyan: Colour,
    #[config(default = "255,255,255")]
    pub bold_white: Colour,
}

impl AnsiColours {
    /// Palette in terminal index order (0..8 normal, 8..16 bold).
    pub fn palette(&self) -> [Colour; 16] {
        [
            self.black,
            self.red,
            self.green,
            self.yellow,
            self.blue,
            self.magenta,
            self.cyan,
            self.white,
            self.bold_black,
            self.bold_red,
            self.bold_green,
            self.bold_yellow,
            self.bold_blue,
            self.bold_magenta,
            self.bold_cyan,
            self.bold_white,
        ]
    }
}

impl ConfigRecord {
    /// A record holding every compiled default.
    pub fn defaults() -> Result<Self, confique::Error> {
        Self::builder().load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> ConfigRecord {
        ConfigRecord::defaults().unwrap()
    }

    #[test]
    fn colour_defaults() {
        let r = defaults();
        assert_eq!(r.fg_colour, Colour::from_rgb(191, 191, 191));
        assert_eq!(r.bg_colour, Colour::from_rgb(0, 0, 0));
        assert_eq!(r.cursor_colour, r.fg_colour);
        assert!(r.ime_cursor_colour.is_none());
    }

    #[test]
    fn choice_defaults_from_names() {
        let r = defaults();
        assert_eq!(r.transparency, Transparency::OFF);
        assert_eq!(r.cursor_type, CursorType::LINE);
        assert_eq!(r.right_click_action, RightClickAction::MENU);
        assert_eq!(r.click_target_mod, Modifier::SHIFT);
        assert_eq!(r.scrollbar, ScrollbarPosition::RIGHT);
        assert_eq!(r.hold, HoldPolicy::START);
        assert_eq!(r.window, WindowState::NORMAL);
        assert_eq!(r.font_smoothing, FontSmoothing::DEFAULT);
    }

    #[test]
    fn window_and_font_defaults() {
        let r = defaults();
        assert_eq!((r.cols, r.rows), (80, 24));
        assert_eq!(r.scrollback_lines, 10000);
        assert_eq!(r.font.name, "Lucida Console");
        assert_eq!(r.font.size, 9);
        assert!(!r.font.is_bold);
        assert_eq!(r.term, "xterm");
        assert!(r.theme_file.is_empty());
    }

    #[test]
    fn palette_in_index_order() {
        let palette = defaults().ansi.palette();
        assert_eq!(palette[0], Colour::from_rgb(0, 0, 0));
        assert_eq!(palette[1], Colour::from_rgb(191, 0, 0));
        assert_eq!(palette[12], Colour::from_rgb(96, 96, 255));
        assert_eq!(palette[15], Colour::from_rgb(255, 255, 255));
    }

    #[test]
    fn legacy_flag_off_by_default() {
        assert!(!defaults().use_system_colours);
    }
}
