//! Weather station: a comms controller reports summarised weather data.
//!
//! `request` and `send` carry a `report` parameter, so the rendered plan
//! gets a `Parameters` column.

use seqplan_kernel::{Action, Entity, Value};

use crate::use_case::UseCase;

#[must_use]
pub fn use_case() -> UseCase {
    let comms_controller = Entity::new(
        "comms_controller",
        "CommsController",
        [
            ("is_request_received", Value::from(false)),
            ("is_report_sent", Value::from(false)),
            ("weather_station", Value::reference("weather_station")),
        ],
    )
    .with_actions([
        Action::new("request")
            .with_parameter("report", Value::symbol("r"))
            .with_effect(|a| {
                a.set("is_request_received", true);
            }),
        Action::new("send")
            .with_parameter("report", Value::symbol("r"))
            .with_precondition(|e, w| {
                let summarised = w
                    .entity("weather_data")
                    .is_some_and(|d| d.flag("is_data_summarised"));
                summarised
                    && w.follow(e, "weather_station")
                        .is_some_and(|s| s.flag("is_report_ready"))
            })
            .with_effect(|a| {
                a.set("is_report_sent", true);
            }),
    ]);

    let weather_station = Entity::new(
        "weather_station",
        "WeatherStation",
        [
            ("identifier", Value::symbol("ws1")),
            ("is_report_ready", Value::from(false)),
            ("comms_controller", Value::reference("comms_controller")),
            ("weather_data", Value::reference("weather_data")),
        ],
    )
    .with_actions([Action::new("report")
        .with_precondition(|e, w| {
            w.follow(e, "comms_controller")
                .is_some_and(|c| c.flag("is_request_received"))
        })
        .with_effect(|a| {
            a.set("is_report_ready", true);
        })]);

    let weather_data = Entity::new("weather_data", "WeatherData", [("is_data_summarised", false)])
        .with_actions([Action::new("summarise")
            .with_precondition(|e, _| !e.flag("is_data_summarised"))
            .with_effect(|a| {
                a.set("is_data_summarised", true);
            })]);

    UseCase::new("weather_station")
        .with_entities([comms_controller, weather_station, weather_data])
        .with_goal("comms_controller", |e, _| e.flag("is_report_sent"))
}
