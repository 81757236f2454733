//! Timed keystroke replay.
//!
//! A script is a list of `<t_ms> <query...>` lines. Each line sets the live
//! query at that time on a manual clock; pending settles fire exactly at
//! their deadlines, before the next keystroke is applied.

use crate::error::{CliError, Result};
use sift_search::{FilteredItems, FilteredSearch, ManualClock, Record};
use std::time::Duration;

/// One scripted `set_query` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keystroke {
    pub at: Duration,
    pub query: String,
}

/// A settled query and the view it produced.
#[derive(Debug)]
pub struct Settle<R> {
    pub at: Duration,
    pub query: String,
    pub matches: FilteredItems<R>,
}

/// Parses a replay script.
///
/// Blank lines and `#` comments are skipped. Everything after the first
/// space is the query, verbatim. Timestamps must not decrease.
pub fn parse_script(text: &str) -> Result<Vec<Keystroke>> {
    let mut keystrokes: Vec<Keystroke> = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let content = raw.trim_start();
        if content.trim().is_empty() || content.starts_with('#') {
            continue;
        }

        let (time, query) = content.split_once(' ').unwrap_or((content, ""));
        let ms: u64 = time.parse().map_err(|_| CliError::Script {
            line,
            message: format!("invalid timestamp {time:?}"),
        })?;
        let at = Duration::from_millis(ms);

        if let Some(previous) = keystrokes.last() {
            if at < previous.at {
                return Err(CliError::Script {
                    line,
                    message: format!(
                        "timestamp {ms} is earlier than {}",
                        previous.at.as_millis()
                    ),
                });
            }
        }

        keystrokes.push(Keystroke {
            at,
            query: query.to_string(),
        });
    }

    Ok(keystrokes)
}

/// Replays `script` and collects every settle, in order.
///
/// After the last keystroke the clock runs on until nothing is pending.
pub fn run<R: Record>(
    search: &mut FilteredSearch<R, ManualClock>,
    clock: &ManualClock,
    script: &[Keystroke],
) -> Vec<Settle<R>> {
    let mut settles = Vec::new();

    for keystroke in script {
        fire_due(search, clock, Some(keystroke.at), &mut settles);
        clock.set_elapsed(keystroke.at);

        let before = search.settled_query().to_string();
        search.set_query(&keystroke.query);
        if search.settled_query() != before {
            record(search, clock, &mut settles);
        }
    }
    fire_due(search, clock, None, &mut settles);

    settles
}

/// Fires pending settles due no later than `until`.
fn fire_due<R: Record>(
    search: &mut FilteredSearch<R, ManualClock>,
    clock: &ManualClock,
    until: Option<Duration>,
    settles: &mut Vec<Settle<R>>,
) {
    while let Some(deadline) = search.deadline() {
        let at = clock.elapsed_at(deadline);
        if until.is_some_and(|until| at > until) {
            break;
        }
        clock.set_elapsed(at);
        if search.tick() {
            record(search, clock, settles);
        }
    }
}

fn record<R: Record>(
    search: &mut FilteredSearch<R, ManualClock>,
    clock: &ManualClock,
    settles: &mut Vec<Settle<R>>,
) {
    let matches = search.filtered_items();
    tracing::debug!(
        at_ms = clock.elapsed().as_millis() as u64,
        matched = matches.len(),
        "replay settle"
    );
    settles.push(Settle {
        at: clock.elapsed(),
        query: search.settled_query().to_string(),
        matches,
    });
}
