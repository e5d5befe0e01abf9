//! Interactive session: stdin edits in, recomputed results out.

use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

use jiff::Zoned;
use tracing::info;

use crate::calculator::GoalError;
use crate::model::{GoalInputs, GoalOutputs};
use crate::session::{Clock, FixedClock, GoalSession, InputChange, SystemClock};

use super::format::{format_inputs, format_report};

pub(super) fn cmd_session(inputs: GoalInputs, now: Option<Zoned>) -> Result<(), String> {
    let stdin = io::stdin().lock();
    let stdout = Rc::new(RefCell::new(io::stdout()));

    let result = match now {
        Some(now) => drive(GoalSession::new(inputs, FixedClock::new(now)), stdin, stdout),
        None => drive(GoalSession::new(inputs, SystemClock), stdin, stdout),
    };
    result.map_err(|e| format!("session I/O failed: {e}"))
}

/// Print the starting state, then apply each line of `reader` until EOF or `quit`.
fn drive<C, R, W>(mut session: GoalSession<C>, reader: R, out: Rc<RefCell<W>>) -> io::Result<()>
where
    C: Clock,
    R: BufRead,
    W: Write + 'static,
{
    writeln!(out.borrow_mut(), "{}", format_inputs(session.inputs()))?;
    writeln!(out.borrow_mut())?;
    write_results(&mut *out.borrow_mut(), session.inputs(), session.outputs())?;

    session.subscribe_inputs(|change| {
        info!(field = %change.field, value = change.value, "input edited");
    });

    // Listeners cannot return errors; the first failed write is parked here
    // and raised after the edit that triggered it.
    let failed: Rc<RefCell<Option<io::Error>>> = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&out);
    let parked = Rc::clone(&failed);
    session.subscribe_outputs(move |event| {
        if parked.borrow().is_some() {
            return;
        }
        if let Err(e) = write_results(&mut *sink.borrow_mut(), event.inputs, event.outputs) {
            *parked.borrow_mut() = Some(e);
        }
    });

    for line in reader.lines() {
        let line = line?;
        match line.trim() {
            "" => {}
            l if l.starts_with('#') => {}
            "quit" | "q" | "exit" => break,
            "refresh" => {
                session.refresh();
                raise_parked(&failed)?;
            }
            "show" => writeln!(out.borrow_mut(), "{}", format_inputs(session.inputs()))?,
            edit => match edit.parse::<InputChange>() {
                Ok(change) => {
                    if session.apply(change) {
                        raise_parked(&failed)?;
                    } else {
                        writeln!(out.borrow_mut(), "(unchanged)")?;
                    }
                }
                Err(e) => writeln!(out.borrow_mut(), "{e}")?,
            },
        }
    }

    Ok(())
}

fn raise_parked(failed: &RefCell<Option<io::Error>>) -> io::Result<()> {
    match failed.borrow_mut().take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn write_results(
    out: &mut impl Write,
    inputs: &GoalInputs,
    outputs: &Result<GoalOutputs, GoalError>,
) -> io::Result<()> {
    writeln!(out, "{}", format_report(inputs, outputs))?;
    if let Err(e) = outputs {
        writeln!(out, "{e}")?;
    }
    writeln!(out)
}
