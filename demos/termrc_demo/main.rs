//! # termrc demo application
//!
//! A small terminal-settings tool that exercises termrc end to end. It is
//! not a terminal; it only loads, shows and edits settings.
//!
//! ## Running
//!
//! ```sh
//! cargo run --example termrc_demo -- list
//! cargo run --example termrc_demo -- -o Columns=132 get Columns
//! cargo run --example termrc_demo -- set CursorType block
//! RUST_LOG=termrc=debug cargo run --example termrc_demo -- list
//! ```
//!
//! ## Features demonstrated
//!
//! | Feature | How to exercise it |
//! |---------|--------------------|
//! | Master and user files | `/usr/share/termrc-demo/termrc-demorc`, then `~/.termrc-demorc` |
//! | Theme chains | put `ThemeFile=name` in a settings file |
//! | Extra settings file | `-c path/to/rc` (also becomes the save target) |
//! | Command-line override | `-o Columns=132`, never saved by `set` |
//! | `list` / `get` / `set` | see Running above |
//! | Load warnings | put a typo in a settings file and run `list` |

use clap::Parser;
use tracing_subscriber::EnvFilter;

use termrc::{ConfigArgs, Settings};

/// termrc demo: load, show and edit terminal settings.
#[derive(Parser, Debug)]
#[command(name = "termrc-demo")]
struct Cli {
    #[command(flatten)]
    settings: ConfigArgs,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let (mut settings, _report) = Settings::builder()
        .app_name("termrc-demo")
        .load()
        .unwrap_or_else(|e| {
            eprintln!("Failed to set up settings:\n{e}");
            std::process::exit(1);
        });

    if let Err(e) = cli.settings.apply_to(&mut settings) {
        eprintln!("Invalid command-line option:\n{e}");
        std::process::exit(2);
    }
    settings.finish();

    let action = cli.settings.into_action();
    settings.handle_and_print(&action).unwrap_or_else(|e| {
        eprintln!("Settings error:\n{e}");
        std::process::exit(1);
    });
}
