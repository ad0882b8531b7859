// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::IntoDiagnostic;
use r3bl_color::CommonResult;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, layer::SubscriberExt, registry::LookupSpan,
                         util::SubscriberInitExt};

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Returns a `fmt` layer that writes to stderr (stdout is reserved for the report),
/// filtered at `level_filter`. This does not initialize the tracing system, see
/// [`try_initialize_logging_global`] for that.
#[must_use]
pub fn create_stderr_layer<S>(level_filter: LevelFilter) -> Box<DynLayer<S>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    Box::new(
        tracing_subscriber::fmt::layer()
            .compact()
            .without_time()
            .with_target(false)
            .with_writer(std::io::stderr)
            .with_filter(level_filter),
    )
}

/// Install the stderr layer as the global default subscriber. Does nothing when
/// `level_filter` is [`LevelFilter::OFF`].
///
/// # Errors
///
/// Returns an error if a global subscriber has already been set.
pub fn try_initialize_logging_global(level_filter: LevelFilter) -> CommonResult<()> {
    if level_filter == LevelFilter::OFF {
        return Ok(());
    }

    tracing_subscriber::registry()
        .with(create_stderr_layer(level_filter))
        .try_init()
        .into_diagnostic()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_off_does_not_install_a_subscriber() {
        assert!(try_initialize_logging_global(LevelFilter::OFF).is_ok());
        // Still free for someone else to claim.
        assert!(try_initialize_logging_global(LevelFilter::OFF).is_ok());
    }
}
