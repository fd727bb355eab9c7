//! Line-oriented front end wiring user input to the [`AppController`].

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::{debug, warn};

use crate::controller::AppController;
use crate::error::Error;
use crate::events::{HELP, ViewerAction};
use crate::meta;
use crate::scan::ScanOptions;

/// Shown whenever the controller has no picture to offer.
pub const PLACEHOLDER: &str = "no pictures";

pub struct Shell<R, W> {
    input: R,
    output: W,
    controller: AppController,
    scan: ScanOptions,
    read_exif: bool,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, controller: AppController, scan: ScanOptions) -> Self {
        Self {
            input,
            output,
            controller,
            scan,
            read_exif: true,
        }
    }

    #[must_use]
    pub fn with_exif(mut self, read_exif: bool) -> Self {
        self.read_exif = read_exif;
        self
    }

    /// Process input until `quit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        self.show_current()?;
        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!("input closed");
                break;
            }
            let Some(action) = ViewerAction::parse(&line) else {
                if !line.trim().is_empty() {
                    writeln!(self.output, "unknown command: {} (h for help)", line.trim())?;
                }
                continue;
            };
            if !self.dispatch(action)? {
                break;
            }
        }
        self.output.flush()?;
        Ok(())
    }

    /// Apply one action. Returns `false` when the shell should stop.
    pub fn dispatch(&mut self, action: ViewerAction) -> Result<bool> {
        debug!(?action, "dispatch");
        match action {
            ViewerAction::Next => {
                let item = self.controller.on_next().map(Path::to_path_buf);
                self.show(item.as_deref())?;
            }
            ViewerAction::Prev => {
                let item = self.controller.on_prev().map(Path::to_path_buf);
                self.show(item.as_deref())?;
            }
            ViewerAction::Current => self.show_current()?,
            ViewerAction::OpenFolder(raw) => {
                let opened = self
                    .controller
                    .open_folder(Path::new(&raw), &self.scan)
                    .map(|item| item.map(Path::to_path_buf));
                match opened {
                    Ok(item) => self.show(item.as_deref())?,
                    Err(err) => self.report("open folder", &err)?,
                }
            }
            ViewerAction::Reindex => {
                let reindexed = self
                    .controller
                    .reindex(&self.scan)
                    .map(|item| item.map(Path::to_path_buf));
                match reindexed {
                    Ok(item) => self.show(item.as_deref())?,
                    Err(err) => self.report("reindex", &err)?,
                }
            }
            ViewerAction::NextFolder => {
                let switched = self.controller.next_folder(&self.scan);
                self.show_switch(switched)?;
            }
            ViewerAction::PrevFolder => {
                let switched = self.controller.prev_folder(&self.scan);
                self.show_switch(switched)?;
            }
            ViewerAction::Folders => self.list_folders()?,
            ViewerAction::TogglePlay => {
                let state = if self.controller.on_toggle_play() {
                    "paused"
                } else {
                    "playing"
                };
                writeln!(self.output, "{state}")?;
            }
            ViewerAction::Help => writeln!(self.output, "{HELP}")?,
            ViewerAction::Quit => return Ok(false),
        }
        Ok(true)
    }

    pub fn controller(&self) -> &AppController {
        &self.controller
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn show_current(&mut self) -> Result<()> {
        let item = self.controller.current().map(Path::to_path_buf);
        self.show(item.as_deref())
    }

    /// Print `item` with its position, or the placeholder when absent.
    fn show(&mut self, item: Option<&Path>) -> Result<()> {
        let playlist = self.controller.playlist();
        let (Some(path), Some(pos)) = (item, playlist.position()) else {
            writeln!(self.output, "{PLACEHOLDER}")?;
            return Ok(());
        };
        let line = format!("[{}/{}] {}", pos + 1, playlist.len(), path.display());
        match describe(path, self.read_exif) {
            Some(detail) => writeln!(self.output, "{line}  {detail}")?,
            None => writeln!(self.output, "{line}")?,
        }
        Ok(())
    }

    fn show_switch(&mut self, switched: Result<Option<PathBuf>, Error>) -> Result<()> {
        match switched {
            Ok(Some(folder)) => {
                writeln!(self.output, "folder {}", folder.display())?;
                self.show_current()
            }
            Ok(None) => {
                writeln!(self.output, "no folders opened yet")?;
                Ok(())
            }
            Err(err) => self.report("switch folder", &err),
        }
    }

    fn list_folders(&mut self) -> Result<()> {
        let history = self.controller.history();
        if history.is_empty() {
            writeln!(self.output, "no folders opened yet")?;
            return Ok(());
        }
        let current = self.controller.folder();
        for folder in history {
            let mark = if Some(folder.as_path()) == current { '*' } else { ' ' };
            writeln!(self.output, "{mark} {}", folder.display())?;
        }
        Ok(())
    }

    fn report(&mut self, what: &str, err: &Error) -> Result<()> {
        warn!(error = %err, "{what} failed");
        writeln!(self.output, "error: {err}")?;
        Ok(())
    }
}

fn describe(path: &Path, read_exif: bool) -> Option<String> {
    match meta::read_meta(path, read_exif) {
        Ok(m) => Some(m.to_string()),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "unreadable picture header");
            None
        }
    }
}
