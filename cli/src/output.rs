//! Output formatting: plain listings and JSON.

use eurovision_contest::{Outcome, Standing};
use serde::Serialize;

use crate::scenario::ScriptResult;

#[derive(Serialize)]
struct JsonStanding<'a> {
    place: usize,
    id: u64,
    name: &'a str,
    score: f64,
}

#[derive(Serialize)]
struct JsonRanking<'a> {
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    audience_percent: Option<i64>,
    standings: Vec<JsonStanding<'a>>,
}

#[derive(Serialize)]
struct JsonScriptResult<'a> {
    operation: usize,
    op: &'static str,
    result: &'a [String],
}

/// Render standings as an aligned table.
pub fn standings_table(standings: &[Standing]) -> String {
    let name_width = standings
        .iter()
        .map(|s| s.name.as_str().len())
        .max()
        .unwrap_or(5)
        .max(5);

    let mut out = format!(" # | {:<name_width$} |      Score\n", "State");
    out.push_str(&format!("---|-{}-|-----------\n", "-".repeat(name_width)));
    for s in standings {
        out.push_str(&format!(
            "{:>2} | {:<name_width$} | {:>10}\n",
            s.place,
            s.name.as_str(),
            s.score.to_string(),
        ));
    }
    out
}

/// Render standings as pretty JSON.
pub fn standings_json(
    kind: &'static str,
    audience_percent: Option<i64>,
    standings: &[Standing],
) -> serde_json::Result<String> {
    let output = JsonRanking {
        kind,
        audience_percent,
        standings: standings
            .iter()
            .map(|s| JsonStanding {
                place: s.place,
                id: s.state.get(),
                name: s.name.as_str(),
                score: s.score.to_f64(),
            })
            .collect(),
    };
    serde_json::to_string_pretty(&output)
}

/// One line per string.
pub fn lines(items: &[String]) -> String {
    items.iter().map(|i| format!("{i}\n")).collect()
}

/// Render scripted query results, one block per query.
pub fn script_results(results: &[ScriptResult], json: bool) -> serde_json::Result<String> {
    if json {
        let rows: Vec<JsonScriptResult<'_>> = results
            .iter()
            .map(|r| JsonScriptResult {
                operation: r.index + 1,
                op: r.op,
                result: outcome_items(&r.outcome),
            })
            .collect();
        return serde_json::to_string_pretty(&rows);
    }
    let mut out = String::new();
    for r in results {
        out.push_str(&format!("#{} {}\n", r.index + 1, r.op));
        for item in outcome_items(&r.outcome) {
            out.push_str(&format!("  {item}\n"));
        }
    }
    Ok(out)
}

fn outcome_items(outcome: &Outcome) -> &[String] {
    match outcome {
        Outcome::Ranking(items) | Outcome::Pairs(items) => items,
        Outcome::Applied => &[],
    }
}
