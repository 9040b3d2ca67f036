//! Plain-text rendering of a plan as a sequence-diagram table.
//!
//! ```text
//! +---------+----------+--------------+
//! | Caller  | Method   | Receiver     |
//! +---------+----------+--------------+
//! | <Actor> | generate | sd_generator |
//! +---------+----------+--------------+
//! ```
//!
//! A `Parameters` column is kept only when some call in the plan has
//! parameters; calls without parameters leave it blank.

use seqplan_search::{CallRecord, Plan};
use tabled::settings::object::Columns;
use tabled::settings::{Remove, Style};
use tabled::{Table, Tabled};

#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
struct PlanRow {
    #[tabled(rename = "Caller")]
    caller: String,
    #[tabled(rename = "Method")]
    method: String,
    #[tabled(rename = "Receiver")]
    receiver: String,
    #[tabled(rename = "Parameters")]
    parameters: String,
}

impl From<&CallRecord> for PlanRow {
    fn from(record: &CallRecord) -> Self {
        Self {
            caller: record.caller.to_string(),
            method: record.action.clone(),
            receiver: record.receiver.clone(),
            parameters: record.parameter_names.join(", "),
        }
    }
}

/// Render `plan` as an ASCII table, one row per record.
#[must_use]
pub fn render_plan(plan: &Plan) -> String {
    let with_parameters = plan.iter().any(|r| !r.parameter_names.is_empty());

    let mut table = Table::new(plan.iter().map(PlanRow::from));
    table.with(Style::ascii());
    if !with_parameters {
        table.with(Remove::column(Columns::last()));
    }

    let mut rendered = table.to_string();
    rendered.push('\n');
    rendered
}
