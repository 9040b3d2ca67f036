//! Sample use cases, looked up by name.

pub mod inconsistency_handling;
pub mod long_sequence;
pub mod object_instantiation;
pub mod simple_watch;
pub mod weather_station;

use crate::use_case::UseCase;

/// Names accepted by [`by_name`].
pub const NAMES: [&str; 5] = [
    "object_instantiation",
    "inconsistency_handling",
    "simple_watch",
    "weather_station",
    "long_sequence",
];

/// Build the named sample use case. `long_sequence` uses its default
/// length and no noise.
#[must_use]
pub fn by_name(name: &str) -> Option<UseCase> {
    match name {
        "object_instantiation" => Some(object_instantiation::use_case()),
        "inconsistency_handling" => Some(inconsistency_handling::use_case()),
        "simple_watch" => Some(simple_watch::use_case()),
        "weather_station" => Some(weather_station::use_case()),
        "long_sequence" => Some(long_sequence::use_case(long_sequence::DEFAULT_LENGTH, 0)),
        _ => None,
    }
}
