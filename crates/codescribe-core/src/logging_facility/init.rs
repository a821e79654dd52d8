//! Logging initialization module
//!
//! Provides a single initialization point for the logging facility.

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output for development
    Development,
    /// JSON structured output for production
    Production,
    /// Bare registry; tests install their own capture layer
    Test,
}

static INIT_ONCE: Once = Once::new();

/// Initialize the logging facility
///
/// Call once at application startup. Later calls are ignored, whatever
/// profile they ask for.
///
/// # Profiles
///
/// - **Development**: Human-readable logs to stderr, `codescribe=debug`
/// - **Production**: JSON logs to stderr, `codescribe=info`
/// - **Test**: Registry only, no output
///
/// `RUST_LOG` overrides the default filter in every profile that prints.
pub fn init(profile: Profile) {
    let default_filter = match profile {
        Profile::Development => "codescribe=debug",
        Profile::Production | Profile::Test => "codescribe=info",
    };
    init_with_filter(profile, default_filter);
}

/// Initialize with a caller-chosen filter for when `RUST_LOG` is unset
pub fn init_with_filter(profile: Profile, default_filter: &str) {
    INIT_ONCE.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_filter));

        match profile {
            Profile::Development => {
                tracing_subscriber::fmt()
                    .with_writer(std::io::stderr)
                    .with_env_filter(filter)
                    .finish()
                    .try_init()
                    .ok();
            }
            Profile::Production => {
                tracing_subscriber::fmt()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_env_filter(filter)
                    .finish()
                    .try_init()
                    .ok();
            }
            Profile::Test => {
                tracing_subscriber::registry().try_init().ok();
            }
        }
    });
}
