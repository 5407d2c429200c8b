//! Line-driven rendering surface for the contact form.
//!
//! ```text
//! set <field> <value...>
//! touch <field>
//! submit
//! reset
//! show
//! ```
//!
//! Blank lines and lines starting with `#` are skipped.

use std::io::{BufRead, Write};

use enquiry_contact::{
    Field, FieldValue, FormController, LogSubmission, Notifier, SubmitHandler, SubmitOutcome,
    TracingNotifier,
};
use strum::VariantArray;

use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set { field: Field, value: String },
    Touch(Field),
    Submit,
    Reset,
    Show,
}

impl Command {
    /// `Ok(None)` for lines that carry no command.
    pub fn parse(line: &str) -> Result<Option<Self>, AppError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        let command = match verb {
            "set" => {
                let (name, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                Command::Set {
                    field: Field::parse(name)?,
                    value: value.trim().to_owned(),
                }
            }
            "touch" => Command::Touch(Field::parse(rest)?),
            "submit" => Command::Submit,
            "reset" => Command::Reset,
            "show" => Command::Show,
            other => {
                return Err(AppError::script(0, format!("unknown command `{other}`")));
            }
        };

        Ok(Some(command))
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub commands: usize,
    pub accepted: usize,
    pub rejected: usize,
}

pub struct Session<W, H = LogSubmission, N = TracingNotifier> {
    controller: FormController<H, N>,
    out: W,
    summary: SessionSummary,
}

impl<W: Write, H: SubmitHandler, N: Notifier> Session<W, H, N> {
    pub fn new(controller: FormController<H, N>, out: W) -> Self {
        Self {
            controller,
            out,
            summary: SessionSummary::default(),
        }
    }

    pub fn controller(&self) -> &FormController<H, N> {
        &self.controller
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Replays every line of `input`. The first caller-contract violation stops the session.
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<SessionSummary, AppError> {
        for (index, line) in input.lines().enumerate() {
            let line_no = index + 1;
            let line = line?;

            let command = Command::parse(&line).map_err(|err| at_line(line_no, err))?;
            let Some(command) = command else {
                continue;
            };

            self.execute(command).map_err(|err| at_line(line_no, err))?;
        }

        Ok(self.summary)
    }

    pub fn execute(&mut self, command: Command) -> Result<(), AppError> {
        self.summary.commands += 1;
        tracing::debug!(?command, "Executing session command");

        match command {
            Command::Set { field, value } => {
                self.controller.set(field, parse_value(field, &value))?;
                if let Some(message) = self.controller.error(field) {
                    writeln!(self.out, "{field}: {message}")?;
                }
            }
            Command::Touch(field) => {
                self.controller.touch(field);
                match self.controller.error(field) {
                    Some(message) => writeln!(self.out, "{field}: {message}")?,
                    None => writeln!(self.out, "{field}: ok")?,
                }
            }
            Command::Submit => match self.controller.submit() {
                SubmitOutcome::Accepted(values) => {
                    self.summary.accepted += 1;
                    writeln!(self.out, "accepted: {}", serde_json::to_string(&values)?)?;
                    let notification = self.controller.notification();
                    writeln!(
                        self.out,
                        "notification: {} {} ({}s)",
                        notification.title,
                        notification.description,
                        notification.duration.as_secs()
                    )?;
                }
                SubmitOutcome::Rejected(errors) => {
                    self.summary.rejected += 1;
                    writeln!(self.out, "rejected:")?;
                    for (field, message) in errors.iter() {
                        writeln!(self.out, "  {field}: {message}")?;
                    }
                }
            },
            Command::Reset => {
                self.controller.reset();
                writeln!(
                    self.out,
                    "reset (selection epoch {})",
                    self.controller.selection_epoch()
                )?;
            }
            Command::Show => self.show()?,
        }

        Ok(())
    }

    fn show(&mut self) -> Result<(), AppError> {
        for &field in Field::VARIANTS {
            let view = self.controller.field_view(field);
            let value = match &view.value {
                FieldValue::Text(text) => format!("{text:?}"),
                FieldValue::Choice(Some(query_type)) => query_type.label().to_owned(),
                FieldValue::Choice(None) => "-".to_owned(),
                FieldValue::Flag(flag) => flag.to_string(),
            };

            let mut flags = vec![];
            if view.touched {
                flags.push("touched");
            }
            if view.dirty {
                flags.push("dirty");
            }

            write!(self.out, "{field} = {value}")?;
            if !flags.is_empty() {
                write!(self.out, " [{}]", flags.join(", "))?;
            }
            if let Some(error) = view.error {
                write!(self.out, " ! {error}")?;
            }
            writeln!(self.out)?;
        }

        writeln!(
            self.out,
            "state = {} (attempts {}, selection epoch {})",
            self.controller.state(),
            self.controller.submit_count(),
            self.controller.selection_epoch()
        )?;

        Ok(())
    }
}

fn parse_value(field: Field, raw: &str) -> FieldValue {
    if field != Field::Consent {
        return FieldValue::Text(raw.to_owned());
    }

    match raw.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => FieldValue::Flag(true),
        "false" | "no" | "off" | "0" | "" => FieldValue::Flag(false),
        _ => FieldValue::Text(raw.to_owned()),
    }
}

fn at_line(line: usize, err: AppError) -> AppError {
    match err {
        AppError::Script { message, .. } => AppError::script(line, message),
        AppError::FormError(err) => AppError::script(line, err.to_string()),
        other => other,
    }
}
