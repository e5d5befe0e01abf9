//! One-shot calculation.

use jiff::Zoned;
use serde::Serialize;

use crate::calculator::compute_goal;
use crate::model::{GoalInputs, GoalOutputs};

use super::format::format_report;

/// JSON shape printed by `calc --json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Report<'a> {
    now: &'a Zoned,
    inputs: &'a GoalInputs,
    #[serde(flatten)]
    outputs: GoalOutputs,
}

pub(super) fn cmd_calc(inputs: &GoalInputs, now: &Zoned, json: bool) -> Result<(), String> {
    let outputs = compute_goal(inputs, now);

    if json {
        let outputs = outputs.map_err(|e| e.to_string())?;
        let report = Report {
            now,
            inputs,
            outputs,
        };
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| format!("failed to serialize result: {e}"))?;
        println!("{json}");
        return Ok(());
    }

    println!("{}", format_report(inputs, &outputs));
    outputs.map(|_| ()).map_err(|e| e.to_string())
}
