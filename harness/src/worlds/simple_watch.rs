//! `SimpleWatch`: setting the time on a two-button watch.
//!
//! The watch itself is the boundary entity the user presses; display and
//! time hold a back-reference to it, and it references both.

use seqplan_kernel::{Action, Entity, Value, WorldState};

use crate::use_case::UseCase;

const BOTH: &[&str] = &["button_1", "button_2"];

fn watch<'a>(entity: &Entity, world: &'a WorldState) -> Option<&'a Entity> {
    world.follow(entity, "watch")
}

fn pressed(watch: &Entity, buttons: &[&str]) -> bool {
    watch
        .get("last_buttons_pressed")
        .is_some_and(|v| v.is_symbol_list(buttons))
}

fn in_mode(watch: &Entity, mode: &str) -> bool {
    watch.is("mode", mode)
}

fn display() -> Entity {
    let blink_hours = Action::new("blink_hours")
        .with_precondition(|e, w| {
            watch(e, w).is_some_and(|watch| in_mode(watch, "set_time") && pressed(watch, BOTH))
                && e.is("blinking", "none")
        })
        .with_effect(|a| {
            a.set("blinking", Value::symbol("hours"));
        });

    let blink_minutes = Action::new("blink_minutes")
        .with_precondition(|e, w| {
            watch(e, w)
                .is_some_and(|watch| in_mode(watch, "set_time") && pressed(watch, &["button_1"]))
                && e.is("blinking", "hours")
        })
        .with_effect(|a| {
            a.set("blinking", Value::symbol("minutes"));
        });

    let stop_blinking = Action::new("stop_blinking")
        .with_precondition(|e, w| {
            let committed = w
                .follow_path(e, &["watch", "time"])
                .is_some_and(|time| time.flag("is_new_time_committed"));
            committed
                && watch(e, w).is_some_and(|watch| pressed(watch, BOTH))
                && !e.is("blinking", "none")
        })
        .with_effect(|a| {
            a.set("blinking", Value::symbol("none"));
        });

    let refresh = Action::new("refresh")
        .with_precondition(|e, w| {
            w.follow_path(e, &["watch", "time"])
                .is_some_and(|time| time.flag("is_minutes_incremented"))
        })
        .with_effect(|a| {
            a.set("is_refreshed", true);
        });

    Entity::new(
        "display",
        "TwoBWatchDisplay",
        [
            ("blinking", Value::symbol("none")),
            ("is_refreshed", Value::from(false)),
            ("watch", Value::reference("watch")),
        ],
    )
    .with_actions([blink_hours, blink_minutes, stop_blinking, refresh])
}

fn time() -> Entity {
    let increment_minutes = Action::new("increment_minutes")
        .with_precondition(|e, w| {
            let blinking_minutes = w
                .follow_path(e, &["watch", "display"])
                .is_some_and(|display| display.is("blinking", "minutes"));
            blinking_minutes && watch(e, w).is_some_and(|watch| pressed(watch, &["button_2"]))
        })
        .with_effect(|a| {
            a.set("is_minutes_incremented", true);
        });

    let commit_new_time = Action::new("commit_new_time")
        .with_precondition(|e, w| {
            let refreshed = w
                .follow_path(e, &["watch", "display"])
                .is_some_and(|display| display.flag("is_refreshed"));
            refreshed && watch(e, w).is_some_and(|watch| pressed(watch, BOTH))
        })
        .with_effect(|a| {
            a.set("is_new_time_committed", true);
        });

    Entity::new(
        "time",
        "TwoBWatchTime",
        [
            ("is_minutes_incremented", Value::from(false)),
            ("is_new_time_committed", Value::from(false)),
            ("watch", Value::reference("watch")),
        ],
    )
    .with_actions([increment_minutes, commit_new_time])
}

fn watch_input() -> Entity {
    let press_button_1 = Action::new("press_button_1")
        .with_precondition(|e, _| in_mode(e, "set_time"))
        .with_effect(|a| {
            a.set("last_buttons_pressed", Value::symbols(["button_1"]));
        });

    let press_button_2 = Action::new("press_button_2")
        .with_precondition(|e, _| in_mode(e, "set_time"))
        .with_effect(|a| {
            a.set("last_buttons_pressed", Value::symbols(["button_2"]));
        });

    let press_buttons_1_and_2 = Action::new("press_buttons_1_and_2")
        .with_precondition(|e, w| {
            in_mode(e, "read_time")
                || w.follow(e, "display")
                    .is_some_and(|display| display.flag("is_refreshed"))
        })
        .with_effect(|a| {
            a.update("mode", |mode| match mode.as_symbol() {
                Some("read_time") => Value::symbol("set_time"),
                Some("set_time") => Value::symbol("read_time"),
                _ => mode.clone(),
            });
            a.set("last_buttons_pressed", Value::symbols(BOTH.iter().copied()));
        });

    Entity::new(
        "watch",
        "TwoBWatchInput",
        [
            ("last_buttons_pressed", Value::List(Vec::new())),
            ("mode", Value::symbol("read_time")),
            ("display", Value::reference("display")),
            ("time", Value::reference("time")),
        ],
    )
    .as_boundary()
    .with_actions([press_button_1, press_button_2, press_buttons_1_and_2])
}

#[must_use]
pub fn use_case() -> UseCase {
    UseCase::new("simple_watch")
        .with_entities([display(), time(), watch_input()])
        .with_goal("display", |e, _| e.is("blinking", "none"))
        .with_goal("time", |e, _| e.flag("is_new_time_committed"))
        .with_goal("watch", |e, _| e.is("mode", "read_time"))
}
