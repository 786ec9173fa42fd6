// Copyright 2026 the Gable Authors
// SPDX-License-Identifier: Apache-2.0

//! Configures a default [`tracing`] subscriber for applications using Gable.
//!
//! Logs go to stderr in a compact format: UTC time of day with millisecond
//! precision, level and message, without the target module.
//! The default filter shows [`DEBUG`](tracing::Level::DEBUG) messages in debug
//! builds and [`INFO`](tracing::Level::INFO) messages in release builds; it can
//! be overridden with the `RUST_LOG` environment variable.
//!
//! If a `tracing` subscriber is already set, nothing is changed.

use time::macros::format_description;
use tracing::Subscriber;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::prelude::*;

/// Build the subscriber with the given `default_level`.
///
/// Also returns a message describing why `RUST_LOG` was ignored, if it was.
fn default_tracing_subscriber(default_level: LevelFilter) -> (impl Subscriber, Option<String>) {
    let env_filter_builder = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .with_env_var("RUST_LOG");
    let err = env_filter_builder
        .from_env()
        .err()
        .map(|err| format!("failed to parse RUST_LOG environment variable: {err:#}"));
    let env_filter = env_filter_builder.from_env_lossy();

    let timer = UtcTime::new(format_description!(
        "[hour repr:24]:[minute]:[second].[subsecond digits:3]Z"
    ));
    let console_layer = tracing_subscriber::fmt::layer()
        .with_timer(timer)
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(env_filter);

    (tracing_subscriber::registry().with(console_layer), err)
}

/// Error returned when a tracing subscriber has been set before.
#[derive(Debug, thiserror::Error)]
#[error("a tracing subscriber has been set before")]
pub struct TracingSubscriberHasBeenSetError;

fn verify_subscriber_has_not_been_set() -> Result<(), TracingSubscriberHasBeenSetError> {
    // `has_been_set` is doc(hidden) but stable for the whole tracing_core 0.1 series.
    if tracing_core::dispatcher::has_been_set() {
        return Err(TracingSubscriberHasBeenSetError);
    }
    Ok(())
}

fn init_with_level(default_level: LevelFilter) -> Result<(), TracingSubscriberHasBeenSetError> {
    verify_subscriber_has_not_been_set()?;

    let (subscriber, err) = default_tracing_subscriber(default_level);

    // Another thread may have won the race since the check above; that's fine.
    let _ = tracing::subscriber::set_global_default(subscriber);
    if let Some(err) = err {
        tracing::error!("Initialising logging encountered recoverable error: {err}");
    }
    Ok(())
}

/// Initialise tracing for a unit test.
///
/// Only warnings and errors are shown unless `RUST_LOG` says otherwise.
pub fn try_init_test_tracing() -> Result<(), TracingSubscriberHasBeenSetError> {
    init_with_level(LevelFilter::WARN)
}

/// Initialise tracing for an end-user application.
pub fn try_init_tracing() -> Result<(), TracingSubscriberHasBeenSetError> {
    let default_level = if cfg!(debug_assertions) {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    init_with_level(default_level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiple_init_test_tracing_errors() {
        let _first_result = try_init_test_tracing();
        let second_result = try_init_test_tracing();
        assert!(second_result.is_err());
    }
}
