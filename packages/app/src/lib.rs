//! NoteCrud terminal front end
//!
//! A thin, line-oriented UI over `NoteStore`. It reads one command per line,
//! forwards the intent to the store, and prints the store's failures and
//! snapshots. All note state lives in the store; this layer keeps none.

pub mod commands;
pub mod config;
pub mod render;

use std::io::{BufRead, Write};

use notecrud_core::events::EventReceiver;
use notecrud_core::{NoteId, NoteStore, NoteStoreError, StoreEvent};

pub use commands::{Command, CommandError};
pub use config::AppConfig;

/// Interactive session bound to one input and one output
pub struct Session<R, W> {
    store: NoteStore,
    events: EventReceiver,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(config: AppConfig, input: R, output: W) -> anyhow::Result<Self> {
        let store = NoteStore::with_config(config.store)?;
        let events = store.subscribe();

        Ok(Self {
            store,
            events,
            input,
            output,
        })
    }

    pub fn store(&self) -> &NoteStore {
        &self.store
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Read and execute commands until `quit` or end of input
    pub fn run(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "NoteCrud - type 'help' for commands")?;
        self.show()?;

        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                break;
            };

            match Command::parse(&line) {
                Ok(None) => {}
                Ok(Some(Command::Quit)) => break,
                Ok(Some(command)) => self.execute(command)?,
                Err(e) => writeln!(self.output, "error: {}", e)?,
            }

            self.drain_events();
        }

        tracing::info!("Session ended with {} notes", self.store.len());
        Ok(())
    }

    fn read_line(&mut self) -> anyhow::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn show(&mut self) -> anyhow::Result<()> {
        render::render_snapshot(&mut self.output, &self.store.snapshot())?;
        Ok(())
    }

    fn execute(&mut self, command: Command) -> anyhow::Result<()> {
        match command {
            Command::Help => writeln!(self.output, "{}", commands::HELP)?,
            Command::List => self.show()?,
            Command::Categories => render::render_categories(&mut self.output)?,
            Command::Title(title) => self.store.set_draft_title(title),
            Command::Content(content) => self.store.set_draft_content(content),
            Command::Category(category) => self.store.set_draft_category(category),
            Command::Save => match self.store.submit() {
                Ok(note) => {
                    writeln!(self.output, "Saved note #{}", note.id)?;
                    self.show()?;
                }
                Err(e) => writeln!(self.output, "error: {}", e)?,
            },
            Command::Edit(id) => match self.store.start_edit(id) {
                Ok(()) => self.show()?,
                Err(e) => writeln!(self.output, "error: {}", e)?,
            },
            Command::Cancel => {
                self.store.cancel_edit();
                self.show()?;
            }
            Command::Delete(id) => self.delete(id)?,
            Command::Search(term) => {
                self.store.set_search_term(term);
                self.show()?;
            }
            Command::Quit => {}
        }
        Ok(())
    }

    /// Ask before deleting; anything but an explicit yes keeps the note
    fn delete(&mut self, id: NoteId) -> anyhow::Result<()> {
        let Some(note) = self.store.get(id) else {
            writeln!(self.output, "error: {}", NoteStoreError::note_not_found(id))?;
            return Ok(());
        };

        write!(
            self.output,
            "Are you sure you want to delete note #{} \"{}\"? [y/N] ",
            id, note.title
        )?;
        self.output.flush()?;

        let answer = self.read_line()?.unwrap_or_default();
        if !matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
            writeln!(self.output, "Kept note #{}", id)?;
            return Ok(());
        }

        match self.store.delete(id) {
            Ok(_) => {
                writeln!(self.output, "Deleted note #{}", id)?;
                self.show()?;
            }
            Err(e) => writeln!(self.output, "error: {}", e)?,
        }
        Ok(())
    }

    fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            log_event(&event);
        }
    }
}

fn log_event(event: &StoreEvent) {
    match event.note_id() {
        Some(id) => tracing::debug!("Store event {} for note {}", event.event_type(), id),
        None => tracing::debug!("Store event {}", event.event_type()),
    }
}

/// Run an interactive session over the given input and output
pub fn run<R: BufRead, W: Write>(config: AppConfig, input: R, output: W) -> anyhow::Result<()> {
    Session::new(config, input, output)?.run()
}
