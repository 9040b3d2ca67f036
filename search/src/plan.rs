//! Plans and caller attribution.
//!
//! A raw step path says *what* was called. [`reconstruct`] replays it from
//! the initial state and decides *who* called it, turning the path into a
//! sequence-diagram trace:
//!
//! 1. The first call comes from the actor.
//! 2. Calls on boundary entities come from the actor.
//! 3. Calls on an entity created earlier in the plan come from its creator.
//! 4. Otherwise the caller is the live referrer of the receiver that was
//!    most recently a receiver itself, or the actor if there is none. A
//!    `<<create>>` record makes the created entity a receiver.
//!
//! Rule 4 inspects the world as it stands immediately before the call.

use std::collections::HashMap;
use std::fmt;

use seqplan_kernel::WorldState;
use serde::{Deserialize, Serialize};

use crate::transition::Step;

/// Reserved action name of synthetic instantiation records.
pub const CREATE_ACTION: &str = "<<create>>";

const ACTOR: &str = "<Actor>";

/// Who issued a call: the external actor or an entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Caller {
    Actor,
    Entity(String),
}

impl Caller {
    #[must_use]
    pub fn is_actor(&self) -> bool {
        matches!(self, Self::Actor)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Actor => ACTOR,
            Self::Entity(name) => name,
        }
    }
}

impl From<String> for Caller {
    fn from(value: String) -> Self {
        if value == ACTOR {
            Self::Actor
        } else {
            Self::Entity(value)
        }
    }
}

impl From<Caller> for String {
    fn from(caller: Caller) -> Self {
        match caller {
            Caller::Actor => ACTOR.to_string(),
            Caller::Entity(name) => name,
        }
    }
}

impl fmt::Display for Caller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of a sequence diagram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallRecord {
    pub caller: Caller,
    pub action: String,
    pub receiver: String,
    pub parameter_names: Vec<String>,
}

impl CallRecord {
    #[must_use]
    pub fn is_create(&self) -> bool {
        self.action == CREATE_ACTION
    }
}

/// An ordered list of call records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Plan {
    records: Vec<CallRecord>,
}

impl Plan {
    #[must_use]
    pub fn records(&self) -> &[CallRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CallRecord> {
        self.records.iter()
    }

    /// Real calls only, without `<<create>>` records.
    pub fn calls(&self) -> impl Iterator<Item = &CallRecord> {
        self.records.iter().filter(|r| !r.is_create())
    }

    /// Number of records, creates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Action names of the real calls joined with `"; "`.
    #[must_use]
    pub fn summary(&self) -> String {
        self.calls()
            .map(|r| r.action.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// # Errors
    ///
    /// Propagates `serde_json` serialization failures.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl From<Vec<CallRecord>> for Plan {
    fn from(records: Vec<CallRecord>) -> Self {
        Self { records }
    }
}

impl<'a> IntoIterator for &'a Plan {
    type Item = &'a CallRecord;
    type IntoIter = std::slice::Iter<'a, CallRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Replay `steps` from `initial` and attribute a caller to every call.
#[must_use]
pub fn reconstruct(initial: &WorldState, steps: &[Step]) -> Plan {
    let mut state = initial.clone();
    let mut records = Vec::with_capacity(steps.len());
    let mut created_by: HashMap<&str, &str> = HashMap::new();
    // receiver -> index of its latest record, creates included
    let mut last_called: HashMap<&str, usize> = HashMap::new();

    for step in steps {
        match step {
            Step::Call { receiver, action } => {
                let caller = if records.is_empty() {
                    Caller::Actor
                } else {
                    infer_caller(&state, receiver, &created_by, &last_called)
                };
                if let Some(entity) = state.entity_mut(receiver) {
                    entity.apply(&**action.effect());
                }
                last_called.insert(receiver.as_str(), records.len());
                records.push(CallRecord {
                    caller,
                    action: action.name().to_string(),
                    receiver: receiver.clone(),
                    parameter_names: action.parameter_names(),
                });
            }
            Step::Create { creator, created } => {
                if let Some(entity) = state.entity_mut(created) {
                    entity.set_dead(false);
                }
                created_by.insert(created.as_str(), creator.as_str());
                last_called.insert(created.as_str(), records.len());
                records.push(CallRecord {
                    caller: Caller::Entity(creator.clone()),
                    action: CREATE_ACTION.to_string(),
                    receiver: created.clone(),
                    parameter_names: Vec::new(),
                });
            }
        }
    }

    Plan { records }
}

fn infer_caller(
    state: &WorldState,
    receiver: &str,
    created_by: &HashMap<&str, &str>,
    last_called: &HashMap<&str, usize>,
) -> Caller {
    if state.entity(receiver).is_some_and(|e| e.is_boundary()) {
        return Caller::Actor;
    }
    if let Some(creator) = created_by.get(receiver) {
        return Caller::Entity((*creator).to_string());
    }
    state
        .referrers_of(receiver)
        .into_iter()
        .filter(|candidate| candidate.name() != receiver)
        .filter_map(|candidate| {
            last_called
                .get(candidate.name())
                .map(|&index| (index, candidate.name()))
        })
        .max_by_key(|&(index, _)| index)
        .map_or(Caller::Actor, |(_, name)| Caller::Entity(name.to_string()))
}
