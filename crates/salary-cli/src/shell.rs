//! Line-driven event shell for the `interactive` command.
//!
//! Each input line is one command. Selection and visualization commands
//! become session [`Event`]s and the current view is rendered after each
//! of them.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::debug;

use salary_core::{Choice, Event, Session, Visualization, parse_choices};
use salary_model::Dimension;
use salary_report::{TableOptions, render_options_table, render_records_table, render_view_table};

use crate::error::CommandError;

/// Rows printed by `rows` without an explicit count.
pub const DEFAULT_ROW_LIMIT: usize = 20;

const PROMPT: &str = "salary-eda> ";

pub const HELP: &str = "\
Commands:
  select <dimension> <v1,v2,...>  replace a dimension's selection ('all' selects everything)
  clear <dimension>               deselect every value of a dimension
  reset [dimension]               back to 'Select All' (all dimensions when omitted)
  view <visualization>            distribution | countries | continents | jobs
  rows [n]                        show the first n filtered records
  options [dimension]             list filter options
  help                            show this text
  quit                            leave the shell
Dimensions: region, experience, job_type, job_title, employment_type";

/// One parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Select {
        dimension: Dimension,
        choices: Vec<Choice>,
    },
    Clear(Dimension),
    Reset(Option<Dimension>),
    View(Visualization),
    Rows(usize),
    Options(Option<Dimension>),
    Help,
    Quit,
}

impl ShellCommand {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        match word.to_ascii_lowercase().as_str() {
            "" => Err(CommandError::Empty),
            "select" => {
                let (name, values) = match rest.split_once(char::is_whitespace) {
                    Some((name, values)) => (name, values.trim()),
                    None => (rest, ""),
                };
                if name.is_empty() {
                    return Err(CommandError::MissingArgument {
                        command: "select",
                        argument: "a dimension",
                    });
                }
                let dimension: Dimension = name.parse()?;
                let choices = parse_choices(values);
                if choices.is_empty() {
                    return Err(CommandError::MissingArgument {
                        command: "select",
                        argument: "at least one value",
                    });
                }
                Ok(ShellCommand::Select { dimension, choices })
            }
            "clear" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument {
                        command: "clear",
                        argument: "a dimension",
                    });
                }
                Ok(ShellCommand::Clear(rest.parse()?))
            }
            "reset" => Ok(ShellCommand::Reset(optional_dimension(rest)?)),
            "view" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument {
                        command: "view",
                        argument: "a visualization",
                    });
                }
                let visualization = rest.parse().map_err(CommandError::Visualization)?;
                Ok(ShellCommand::View(visualization))
            }
            "rows" => {
                if rest.is_empty() {
                    return Ok(ShellCommand::Rows(DEFAULT_ROW_LIMIT));
                }
                let limit = rest
                    .parse()
                    .map_err(|_| CommandError::InvalidNumber(rest.to_string()))?;
                Ok(ShellCommand::Rows(limit))
            }
            "options" => Ok(ShellCommand::Options(optional_dimension(rest)?)),
            "help" | "?" => no_arguments(rest, ShellCommand::Help),
            "quit" | "exit" => no_arguments(rest, ShellCommand::Quit),
            _ => Err(CommandError::UnknownCommand(word.to_string())),
        }
    }

    /// The session event for state-changing commands.
    pub fn event(&self) -> Option<Event> {
        match self {
            ShellCommand::Select { dimension, choices } => Some(Event::Select {
                dimension: *dimension,
                choices: choices.clone(),
            }),
            ShellCommand::Clear(dimension) => Some(Event::Select {
                dimension: *dimension,
                choices: Vec::new(),
            }),
            ShellCommand::Reset(dimension) => Some(Event::Reset(*dimension)),
            ShellCommand::View(visualization) => Some(Event::Visualize(*visualization)),
            ShellCommand::Rows(_)
            | ShellCommand::Options(_)
            | ShellCommand::Help
            | ShellCommand::Quit => None,
        }
    }
}

fn optional_dimension(rest: &str) -> Result<Option<Dimension>, CommandError> {
    if rest.is_empty() {
        Ok(None)
    } else {
        Ok(Some(rest.parse()?))
    }
}

fn no_arguments(rest: &str, command: ShellCommand) -> Result<ShellCommand, CommandError> {
    if rest.is_empty() {
        Ok(command)
    } else {
        Err(CommandError::UnexpectedArgument(rest.to_string()))
    }
}

/// Whether the shell keeps reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A session bound to an output stream.
pub struct Shell {
    session: Session,
    table: TableOptions,
}

impl Shell {
    pub fn new(session: Session, table: TableOptions) -> Self {
        Self { session, table }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Reads commands until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        self.print_view(&mut output)?;
        write!(output, "{PROMPT}")?;
        output.flush()?;
        for line in input.lines() {
            let line = line.context("read command")?;
            let flow = match ShellCommand::parse(&line) {
                Ok(command) => self.execute(&command, &mut output)?,
                Err(CommandError::Empty) => Flow::Continue,
                Err(error) => {
                    writeln!(output, "error: {error}")?;
                    Flow::Continue
                }
            };
            if flow == Flow::Quit {
                return Ok(());
            }
            write!(output, "{PROMPT}")?;
            output.flush()?;
        }
        writeln!(output)?;
        Ok(())
    }

    /// Runs one command. Rejected selections are reported and leave the state unchanged.
    pub fn execute<W: Write>(&mut self, command: &ShellCommand, output: &mut W) -> Result<Flow> {
        debug!(?command, "shell command");
        if let Some(event) = command.event() {
            match self.session.apply(event) {
                Ok(()) => self.print_view(output)?,
                Err(error) => writeln!(output, "error: {error}")?,
            }
            return Ok(Flow::Continue);
        }
        match command {
            ShellCommand::Rows(limit) => {
                let view = self.session.view();
                let rendered = render_records_table(&view.records, *limit, self.table)
                    .context("render records")?;
                writeln!(output, "{rendered}")?;
            }
            ShellCommand::Options(None) => {
                writeln!(
                    output,
                    "{}",
                    render_options_table(self.session.dataset(), self.table)
                )?;
            }
            ShellCommand::Options(Some(dimension)) => {
                writeln!(output, "{dimension}:")?;
                for value in self.session.dataset().options(*dimension) {
                    writeln!(output, "  {value}")?;
                }
            }
            ShellCommand::Help => writeln!(output, "{HELP}")?,
            ShellCommand::Quit => return Ok(Flow::Quit),
            ShellCommand::Select { .. }
            | ShellCommand::Clear(_)
            | ShellCommand::Reset(_)
            | ShellCommand::View(_) => {}
        }
        Ok(Flow::Continue)
    }

    fn print_view<W: Write>(&self, output: &mut W) -> Result<()> {
        let view = self.session.view();
        writeln!(output, "{}", render_view_table(&view, self.table))?;
        Ok(())
    }
}
