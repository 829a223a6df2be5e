use std::io::stdout;
use std::path::PathBuf;

use anyhow::{Context, Result as AnyhowResult};
use clap::Parser;
use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use ratatui::DefaultTerminal;

use shiu::config::Config;
use shiu::input::{translate_event, InputAction};
use shiu::view::EditorView;
use shiu::{logs, Editor, Snapshot};

/// A small terminal text editor built on a gap buffer
#[derive(Parser, Debug)]
#[command(name = "shiu")]
#[command(version, about)]
#[command(after_help = concat!(
    "Keys:\n",
    "  Arrows, Home, End     Move the cursor\n",
    "  Enter, Tab            Insert newline / tab\n",
    "  Backspace             Delete the character before the cursor\n",
    "  Ctrl+G                Toggle the gap buffer debug view\n",
    "  Ctrl+Q                Quit\n",
))]
struct Cli {
    /// Path to configuration file (JSON)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Path to log file for editor diagnostics
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Initial gap buffer capacity in bytes (overrides the config file)
    #[arg(long, value_name = "BYTES")]
    capacity: Option<usize>,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    dump_config: bool,

    /// Print the configuration JSON Schema and exit
    #[arg(long)]
    dump_schema: bool,
}

/// Mutable front-end state that lives outside the editor core.
struct Session {
    editor: Editor,
    snapshot: Snapshot,
    show_gap_debug: bool,
    status: Option<String>,
    tab_width: usize,
}

fn main() -> AnyhowResult<()> {
    let cli = Cli::parse();

    if cli.dump_schema {
        println!("{}", serde_json::to_string_pretty(&Config::json_schema())?);
        return Ok(());
    }

    let mut config =
        Config::load_or_default(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(capacity) = cli.capacity {
        config.initial_capacity = capacity;
    }
    config.validate().context("Invalid configuration")?;

    if cli.dump_config {
        println!("{}", config.to_json_pretty()?);
        return Ok(());
    }

    let log_file = cli.log_file.unwrap_or_else(logs::default_log_path);
    logs::init_tracing(&log_file, &config.log_level)?;
    match cli.config.as_deref() {
        Some(path) => tracing::info!("Loaded config from {:?}", path),
        None => tracing::info!("Using default config"),
    }

    let editor = Editor::new(&config).context("Failed to create text buffer")?;
    let snapshot = editor.snapshot();
    let mut session = Session {
        editor,
        snapshot,
        show_gap_debug: config.show_gap_debug,
        status: None,
        tab_width: config.tab_width,
    };

    let terminal = ratatui::init();
    let result = execute!(stdout(), EnableBracketedPaste)
        .context("Failed to enable bracketed paste")
        .and_then(|()| run(terminal, &mut session));
    if let Err(e) = execute!(stdout(), DisableBracketedPaste) {
        tracing::warn!("Failed to disable bracketed paste: {}", e);
    }
    ratatui::restore();

    session.editor.close();
    result
}

fn run(mut terminal: DefaultTerminal, session: &mut Session) -> AnyhowResult<()> {
    loop {
        terminal
            .draw(|frame| {
                let mut view = EditorView::new(&session.snapshot, session.tab_width)
                    .with_status(session.status.as_deref());
                if session.show_gap_debug {
                    view = view.with_gap_layout(session.editor.debug_layout());
                }
                view.render(frame);
            })
            .context("Failed to draw frame")?;

        let event = event::read().context("Failed to read terminal event")?;
        let command = match translate_event(&event, session.editor.buffer()) {
            Some(InputAction::Quit) => return Ok(()),
            Some(InputAction::ToggleGapDebug) => {
                session.show_gap_debug = !session.show_gap_debug;
                continue;
            }
            Some(InputAction::Edit(command)) => command,
            None => continue,
        };

        match session.editor.apply(command) {
            Ok(snapshot) => {
                session.snapshot = snapshot;
                session.status = None;
            }
            // The keystroke is dropped; the buffer is unchanged.
            Err(e) => session.status = Some(e.to_string()),
        }
    }
}
