//! The main REPL implementation.

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::serialize::{load_from_file, save_to_file};
use crate::session::Session;
use chalkroom_foundation::{Error, ErrorContext, Result};
use std::fmt::Write as _;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

const HELP: &str = "\
Movement:  nw ne e se sw w
Commands:  p press   t write   a append   r read   d erase
           i stop if written   j stop if blank   l input log
           k press log   v verbose   q quit
Meta:      :help :status :save PATH :load PATH :reset :quit
";

/// Lines of a script that are submitted: blank lines and `#` comments
/// are skipped.
pub fn script_lines(source: &str) -> impl Iterator<Item = &str> {
    source.lines().filter(|line| {
        let trimmed = line.trim();
        !trimmed.is_empty() && !trimmed.starts_with('#')
    })
}

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// The game being played.
    session: Session,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,

    /// Set by `:quit`.
    quit_requested: bool,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new() -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(editor: E) -> Self {
        Self {
            editor,
            session: Session::new(),
            show_banner: true,
            prompt: "> ".to_string(),
            quit_requested: false,
        }
    }

    /// Sets the session for this REPL.
    #[must_use]
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns a mutable reference to the session.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Runs the REPL loop.
    ///
    /// With the banner enabled the session's opening narration is shown
    /// first.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
            print!("{}", self.session.current_output());
        }

        while !self.quit_requested {
            match self.read_eval_print() {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => self.print_error(&e),
            }
        }

        println!("\nGoodbye!");
        Ok(())
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        let input = match self.editor.read_line(&self.prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => {
                println!();
                return Ok(true);
            }
            ReadResult::Eof => return Ok(false),
        };

        if input.trim().is_empty() {
            return Ok(true);
        }

        self.editor.add_history(&input);

        let was_running = self.session.is_running();
        let output = self.eval(&input)?;
        print!("{output}");

        if was_running {
            if let Some(reason) = self.session.termination() {
                println!("\x1b[2m[game over: {reason}; :reset to play again]\x1b[0m");
            }
        }
        let _ = io::stdout().flush();

        Ok(true)
    }

    /// Evaluates one line and returns the text to show.
    ///
    /// Lines starting with `:` are meta commands; anything else goes to
    /// the session.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown or malformed meta commands and for
    /// failed `:save` / `:load`.
    pub fn eval(&mut self, input: &str) -> Result<String> {
        let trimmed = input.trim();
        if let Some(meta) = trimmed.strip_prefix(':') {
            return self.eval_meta(meta);
        }

        self.session.submit(input);
        Ok(self.session.current_output().to_string())
    }

    fn eval_meta(&mut self, meta: &str) -> Result<String> {
        let (name, arg) = match meta.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (meta, ""),
        };

        match name {
            "help" => Ok(HELP.to_string()),
            "status" => Ok(self.status()),
            "save" => {
                if arg.is_empty() {
                    return Err(Error::usage(":save PATH"));
                }
                save_to_file(&self.session.snapshot(), arg)?;
                Ok(format!("Saved to {arg}.\n"))
            }
            "load" => {
                if arg.is_empty() {
                    return Err(Error::usage(":load PATH"));
                }
                let snapshot = load_from_file(arg)?;
                self.session.restore(snapshot);
                Ok(self.session.current_output().to_string())
            }
            "reset" => {
                self.session.reset();
                Ok(self.session.current_output().to_string())
            }
            "quit" => {
                self.quit_requested = true;
                Ok(String::new())
            }
            other => Err(Error::unknown_command(format!(":{other}"))),
        }
    }

    fn status(&self) -> String {
        let state = self.session.state();
        let mut out = String::new();
        let _ = writeln!(out, "Room:       {}", state.location);
        let _ = writeln!(out, "Commands:   {}", state.commands_executed);
        let _ = writeln!(out, "Boards:     {}", state.blackboards.written_count());
        let _ = writeln!(out, "Input log:  {} letters", state.input_log.chars().count());
        let _ = writeln!(out, "Presses:    {}", state.press_log.chars().count());
        let _ = writeln!(out, "Verbose:    {}", if state.verbose { "on" } else { "off" });
        match state.termination() {
            Some(reason) => {
                let _ = writeln!(out, "State:      ended ({reason})");
            }
            None => {
                let _ = writeln!(out, "State:      running");
            }
        }
        out
    }

    /// Plays a script file, printing the output of every submission.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn play_file(&mut self, path: &Path) -> Result<()> {
        let source = fs::read_to_string(path).map_err(|e| {
            Error::io(e.to_string())
                .with_context(ErrorContext::new().with_source(path.display().to_string()))
        })?;

        log::debug!("playing script {}", path.display());
        for line in script_lines(&source) {
            self.session.submit(line);
            print!("{}", self.session.current_output());
        }
        let _ = io::stdout().flush();

        Ok(())
    }

    #[allow(clippy::unused_self)]
    fn print_error(&self, error: &Error) {
        eprintln!("\x1b[31mError: {error}\x1b[0m");
    }

    #[allow(clippy::unused_self)]
    fn print_banner(&self) {
        println!("\x1b[1;36m");
        println!("   ___ _         _ _");
        println!("  / __| |_  __ _| | |__ _ _ ___  ___ _ __");
        println!(" | (__| ' \\/ _` | | / /| '_/ _ \\/ _ \\ '  \\");
        println!("  \\___|_||_\\__,_|_|_\\_\\|_| \\___/\\___/_|_|_|");
        println!("\x1b[0m");
        println!("Welcome to Chalkroom v{}", env!("CARGO_PKG_VERSION"));
        println!("Type :help for commands. Use Ctrl+D to exit.\n");

        let _ = io::stdout().flush();
    }
}
