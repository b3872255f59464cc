//! Interactive, line-driven browsing session.
//!
//! Reads commands from an async line source, feeds them to a
//! [`bhandara_core::Session`] and prints what changed. The one-shot position
//! lookup and the registration confirmation timers are raced against input in
//! a single `select!` loop, so the session itself is never shared.

use std::io::Write;

use bhandara_core::{
    Coordinates, Effect, LocationId, RegisterStatus, RegistrationForm, Session, SessionEvent,
    CONFIRMATION_DISPLAY, SUBMIT_SETTLE_DELAY,
};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::oneshot;
use tokio::time::Instant;

use crate::render;

const HELP: &str = "\
commands:
  search [TEXT]        filter the map (empty clears)
  show <ID>            open a location's details
  close                close the details
  nearby               list suggestions near you
  pins                 list map points for the current search
  register             open the registration form
  set <FIELD> <VALUE>  fill a form field (name, type, location, city, timing,
                       description, contact_name, contact_email, contact_phone)
  submit               send the registration by email
  cancel               close the registration form
  help                 show this text
  quit                 leave";

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Command {
    Search(String),
    Show(u32),
    Close,
    Nearby,
    Pins,
    Register,
    Set(String, String),
    Submit,
    Cancel,
    Help,
    Quit,
}

/// Parse one input line. `Ok(None)` for a blank line.
pub(crate) fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(word, rest)| (word, rest.trim()));

    let command = match word.to_ascii_lowercase().as_str() {
        "search" | "s" => Command::Search(rest.to_string()),
        "show" => {
            let id = rest
                .parse()
                .map_err(|_| format!("show needs a numeric id, got '{rest}'"))?;
            Command::Show(id)
        }
        "close" => Command::Close,
        "nearby" => Command::Nearby,
        "pins" => Command::Pins,
        "register" => Command::Register,
        "set" => {
            let Some((field, value)) = rest.split_once(char::is_whitespace) else {
                return Err("usage: set <FIELD> <VALUE>".to_string());
            };
            Command::Set(field.to_ascii_lowercase(), value.trim().to_string())
        }
        "submit" => Command::Submit,
        "cancel" => Command::Cancel,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(format!("unknown command '{other}'; type `help`")),
    };
    Ok(Some(command))
}

fn set_field(form: &mut RegistrationForm, field: &str, value: String) -> Result<(), String> {
    match field {
        "name" => form.name = value,
        "type" | "category" => form.category = value.into(),
        "location" => form.location = value,
        "city" => form.city = value,
        "timing" => form.timing = value,
        "description" => form.description = value,
        "contact_name" => form.contact_name = value,
        "contact_email" => form.contact_email = value,
        "contact_phone" => form.contact_phone = Some(value).filter(|v| !v.is_empty()),
        other => return Err(format!("unknown form field '{other}'")),
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Timer {
    Settle,
    Confirm,
}

/// What a command does to the pending registration timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Timers {
    Keep,
    Start(Timer),
    Clear,
}

/// Resolves once with the looked-up position, then never again.
async fn next_position(rx: &mut Option<oneshot::Receiver<Coordinates>>) -> Option<Coordinates> {
    let Some(receiver) = rx.as_mut() else {
        return std::future::pending().await;
    };
    let position = receiver.await.ok();
    *rx = None;
    position
}

async fn sleep_until(deadline: Option<(Instant, Timer)>) -> Timer {
    match deadline {
        Some((at, timer)) => {
            tokio::time::sleep_until(at).await;
            timer
        }
        None => std::future::pending().await,
    }
}

/// Drive `session` from `input` until `quit` or end of input.
///
/// At end of input any running registration timers still complete before
/// returning.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub(crate) async fn run_explore<R, W>(
    session: &mut Session,
    input: R,
    out: &mut W,
    mut position: Option<oneshot::Receiver<Coordinates>>,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    let mut input_open = true;
    let mut form = RegistrationForm::default();
    let mut deadline: Option<(Instant, Timer)> = None;

    render::nearby_list(out, &session.snapshot().nearby)?;
    writeln!(out, "type `help` for commands")?;

    while input_open || deadline.is_some() {
        tokio::select! {
            biased;

            Some(coords) = next_position(&mut position) => {
                session.apply(SessionEvent::PositionResolved(coords))?;
                writeln!(out, "location found: {:.4}, {:.4}", coords.lat, coords.lng)?;
                render::nearby_list(out, &session.snapshot().nearby)?;
            }
            timer = sleep_until(deadline) => {
                deadline = None;
                match timer {
                    Timer::Settle => {
                        session.apply(SessionEvent::SubmissionSettled)?;
                        if session.snapshot().register == RegisterStatus::Submitted {
                            writeln!(
                                out,
                                "Thank you! Your Bhandara registration has been sent. We will review it and add it to the map soon."
                            )?;
                            deadline = Some((Instant::now() + CONFIRMATION_DISPLAY, Timer::Confirm));
                        }
                    }
                    Timer::Confirm => {
                        session.apply(SessionEvent::ConfirmationElapsed)?;
                        if session.snapshot().register == RegisterStatus::Closed {
                            form = RegistrationForm::default();
                            writeln!(out, "registration form closed")?;
                        }
                    }
                }
            }
            line = lines.next_line(), if input_open => {
                let Some(line) = line? else {
                    input_open = false;
                    continue;
                };
                match parse_command(&line) {
                    Ok(Some(Command::Quit)) => break,
                    Ok(Some(command)) => match handle_command(session, &mut form, command, out)? {
                        Timers::Keep => {}
                        Timers::Start(timer) => {
                            deadline = Some((Instant::now() + SUBMIT_SETTLE_DELAY, timer));
                        }
                        Timers::Clear => deadline = None,
                    },
                    Ok(None) => {}
                    Err(message) => writeln!(out, "{message}")?,
                }
            }
        }
        out.flush()?;
    }

    Ok(())
}

/// Apply one command and report what happens to the registration timer.
fn handle_command<W: Write>(
    session: &mut Session,
    form: &mut RegistrationForm,
    command: Command,
    out: &mut W,
) -> anyhow::Result<Timers> {
    match command {
        Command::Search(text) => {
            session.apply(SessionEvent::SearchChanged(text))?;
            let snapshot = session.snapshot();
            if snapshot.points.is_empty() {
                writeln!(out, "no locations match '{}'", snapshot.search)?;
            } else {
                render::point_list(out, &snapshot.points)?;
            }
        }
        Command::Show(id) => {
            session.apply(SessionEvent::LocationActivated(LocationId(id)))?;
            match session.snapshot().selected {
                Some(location) if location.id == LocationId(id) => {
                    render::location_detail(out, location)?;
                }
                _ => writeln!(out, "no location with id {id}")?,
            }
        }
        Command::Close => {
            session.apply(SessionEvent::DetailDismissed)?;
        }
        Command::Nearby => render::nearby_list(out, &session.snapshot().nearby)?,
        Command::Pins => render::point_list(out, &session.snapshot().points)?,
        Command::Register => {
            session.apply(SessionEvent::RegisterOpened)?;
            match session.snapshot().register {
                RegisterStatus::Open => {
                    writeln!(out, "registration form open; fill it with `set`, then `submit`")?;
                }
                RegisterStatus::Submitting | RegisterStatus::Submitted => {
                    writeln!(out, "a registration is still being sent; wait or `cancel` it")?;
                }
                RegisterStatus::Closed => {}
            }
        }
        Command::Set(field, value) => {
            if session.snapshot().register != RegisterStatus::Open {
                writeln!(out, "open the form with `register` first")?;
            } else if let Err(message) = set_field(form, &field, value) {
                writeln!(out, "{message}")?;
            }
        }
        Command::Submit => {
            if session.snapshot().register != RegisterStatus::Open {
                writeln!(out, "open the form with `register` first")?;
                return Ok(Timers::Keep);
            }
            match session.apply(SessionEvent::RegistrationSubmitted(form.clone())) {
                Ok(Some(Effect::OpenMailDraft(draft))) => {
                    writeln!(out, "Submitting... open this link in your mail client:")?;
                    writeln!(out, "{}", draft.mailto_url())?;
                    return Ok(Timers::Start(Timer::Settle));
                }
                Ok(None) => {}
                Err(e) => writeln!(out, "{e}")?,
            }
        }
        Command::Cancel => {
            session.apply(SessionEvent::RegisterDismissed)?;
            *form = RegistrationForm::default();
            writeln!(out, "registration form closed")?;
            return Ok(Timers::Clear);
        }
        Command::Help => writeln!(out, "{HELP}")?,
        Command::Quit => {}
    }
    Ok(Timers::Keep)
}

#[cfg(test)]
#[path = "explore_test.rs"]
mod tests;
