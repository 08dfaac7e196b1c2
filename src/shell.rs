//! Line-oriented interactive view over a primary and a clipboard workspace.
//!
//! Folders are addressed by their 1-based position in the current listing,
//! breadcrumbs by their index. Prefixing a command with `clip` runs it
//! against the clipboard instead of the primary tree.

use std::io::{BufRead, Write};

use color_eyre::eyre::Result;

use fldr_core::{NodeId, WorkspaceConfig};
use fldr_ops::{ParseReport, Workspace};

use crate::render;

const HELP: &str = "\
Commands (prefix with `clip` to act on the clipboard):
  ls                 list the current folder
  tree               show the whole tree
  add [LINE]         add folders; without LINE, read indented lines until `.`
  mk [NAME]          add a single folder
  open N             open folder N of the listing
  cd N               jump to breadcrumb N (0 = root)
  up                 go to the parent folder
  rm N               delete folder N
  mv N NAME          rename folder N
  root NAME          rename the root folder
  sel N / unsel N    select or deselect folder N as a paste target
  paste              merge the clipboard into every selected folder
  help               show this help
  quit               leave the shell";

/// Which workspace a command applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Primary,
    Clipboard,
}

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Tree,
    /// Bulk add; `None` means read a block of lines.
    Add(Option<String>),
    Make(Option<String>),
    Open(usize),
    Cd(usize),
    Up,
    Remove(usize),
    Rename(usize, String),
    RenameRoot(String),
    Select(usize),
    Deselect(usize),
    Paste,
    Help,
    Quit,
}

/// Parse one input line into a target and command.
///
/// Returns `Ok(None)` for blank lines.
pub fn parse_command(line: &str) -> Result<Option<(Target, Command)>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (target, line) = match line.strip_prefix("clip") {
        Some(rest) if rest.is_empty() || rest.starts_with(char::is_whitespace) => {
            (Target::Clipboard, rest.trim_start())
        }
        _ => (Target::Primary, line),
    };

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    let arg = (!rest.is_empty()).then(|| rest.to_string());

    let command = match word {
        "ls" | "" => Command::List,
        "tree" => Command::Tree,
        "add" => Command::Add(arg),
        "mk" => Command::Make(arg),
        "open" => Command::Open(position(rest)?),
        "cd" => Command::Cd(index(rest)?),
        "up" => Command::Up,
        "rm" => Command::Remove(position(rest)?),
        "mv" => {
            let (n, name) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            Command::Rename(position(n)?, name.trim().to_string())
        }
        "root" => Command::RenameRoot(rest.to_string()),
        "sel" => Command::Select(position(rest)?),
        "unsel" => Command::Deselect(position(rest)?),
        "paste" => Command::Paste,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(format!("unknown command '{other}', try `help`")),
    };

    if target == Target::Clipboard
        && matches!(command, Command::Select(_) | Command::Deselect(_) | Command::Paste)
    {
        return Err("the clipboard has no selection; run this on the primary tree".to_string());
    }

    Ok(Some((target, command)))
}

fn index(arg: &str) -> Result<usize, String> {
    arg.parse()
        .map_err(|_| format!("expected a number, got '{arg}'"))
}

fn position(arg: &str) -> Result<usize, String> {
    match index(arg)? {
        0 => Err("listing positions start at 1".to_string()),
        n => Ok(n),
    }
}

/// The interactive shell.
pub struct Shell<R, W> {
    primary: Workspace,
    clipboard: Workspace,
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a shell with empty primary and clipboard workspaces.
    pub fn new(config: WorkspaceConfig, input: R, out: W) -> Self {
        Self {
            clipboard: Workspace::clipboard(&config),
            primary: Workspace::new(config),
            input,
            out,
        }
    }

    /// Read and run commands until `quit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.out, "fldr shell, `help` for commands")?;
        self.show_listing(Target::Primary)?;

        loop {
            write!(self.out, "> ")?;
            self.out.flush()?;

            let Some(line) = self.read_line()? else {
                break;
            };

            match parse_command(&line) {
                Ok(None) => {}
                Ok(Some((_, Command::Quit))) => break,
                Ok(Some((target, command))) => self.execute(target, command)?,
                Err(message) => writeln!(self.out, "error: {message}")?,
            }
        }
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Read indented lines up to a line containing only `.`.
    fn read_block(&mut self) -> Result<String> {
        let mut block = String::new();
        while let Some(line) = self.read_line()? {
            if line.trim_end_matches(['\r', '\n']) == "." {
                break;
            }
            block.push_str(&line);
        }
        Ok(block)
    }

    fn workspace(&mut self, target: Target) -> &mut Workspace {
        match target {
            Target::Primary => &mut self.primary,
            Target::Clipboard => &mut self.clipboard,
        }
    }

    /// Resolve a 1-based listing position in the target's current folder.
    fn entry_id(&mut self, target: Target, position: usize) -> Option<NodeId> {
        let index = position.checked_sub(1)?;
        self.workspace(target)
            .current_children()
            .get(index)
            .map(|node| node.id)
    }

    /// Run a single command.
    pub fn execute(&mut self, target: Target, command: Command) -> Result<()> {
        tracing::trace!(?target, ?command, "shell command");

        match command {
            Command::List => {}
            Command::Tree => {
                let lines = render::tree_lines(&self.workspace(target).tree().root);
                for line in lines {
                    writeln!(self.out, "{line}")?;
                }
                return Ok(());
            }
            Command::Help => {
                writeln!(self.out, "{HELP}")?;
                return Ok(());
            }
            Command::Quit => return Ok(()),
            Command::Add(line) => {
                let text = match line {
                    Some(line) => line,
                    None => self.read_block()?,
                };
                let report = self.workspace(target).create_from_text(&text);
                self.report_parse(&report)?;
            }
            Command::Make(name) => {
                self.workspace(target).create_folder(name.as_deref());
            }
            Command::Open(n) => match self.entry_id(target, n) {
                Some(id) => self.workspace(target).open_folder(id)?,
                None => return self.no_such_entry(n),
            },
            Command::Cd(index) => {
                self.workspace(target).navigate_to(index);
            }
            Command::Up => {
                let ws = self.workspace(target);
                let depth = ws.navigator().depth();
                if depth > 0 {
                    ws.navigate_to(depth - 1);
                }
            }
            Command::Remove(n) => match self.entry_id(target, n) {
                Some(id) => {
                    self.workspace(target).delete_folder(id);
                }
                None => return self.no_such_entry(n),
            },
            Command::Rename(n, name) => match self.entry_id(target, n) {
                Some(id) => self.workspace(target).rename_folder(id, &name)?,
                None => return self.no_such_entry(n),
            },
            Command::RenameRoot(name) => self.workspace(target).rename_root(&name),
            Command::Select(n) => return self.set_selected(n, true),
            Command::Deselect(n) => return self.set_selected(n, false),
            Command::Paste => {
                let report = self.primary.paste_clipboard_into_selection(&self.clipboard);
                writeln!(
                    self.out,
                    "pasted into {} folder(s): {} created, {} merged",
                    report.targets, report.created, report.matched
                )?;
            }
        }

        self.show_listing(target)
    }

    fn set_selected(&mut self, n: usize, selected: bool) -> Result<()> {
        match self.entry_id(Target::Primary, n) {
            Some(id) => {
                self.primary.set_selected(id, selected)?;
                self.show_listing(Target::Primary)
            }
            None => self.no_such_entry(n),
        }
    }

    fn report_parse(&mut self, report: &ParseReport) -> Result<()> {
        writeln!(self.out, "created {} folder(s)", report.created)?;
        for warning in &report.warnings {
            writeln!(self.out, "warning: {}", warning.message())?;
        }
        Ok(())
    }

    fn no_such_entry(&mut self, n: usize) -> Result<()> {
        writeln!(self.out, "error: no folder at position {n}")?;
        Ok(())
    }

    fn show_listing(&mut self, target: Target) -> Result<()> {
        let ws = match target {
            Target::Primary => &self.primary,
            Target::Clipboard => &self.clipboard,
        };
        let crumbs = render::breadcrumb_line(&ws.breadcrumbs());
        let lines = render::listing_lines(&ws.entries());
        let label = if target == Target::Clipboard { "clipboard: " } else { "" };

        writeln!(self.out, "{label}{crumbs}")?;
        for line in lines {
            writeln!(self.out, "{line}")?;
        }
        Ok(())
    }
}
