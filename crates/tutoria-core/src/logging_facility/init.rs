use std::str::FromStr;
use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Logging profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output, `tutoria=debug`
    Development,
    /// JSON lines, `tutoria=info`
    Production,
    /// Bare registry; tests attach a capture layer instead
    Test,
}

impl Profile {
    /// Filter used when `RUST_LOG` is not set
    pub fn default_filter(&self) -> &'static str {
        match self {
            Profile::Development => "tutoria=debug",
            Profile::Production => "tutoria=info",
            Profile::Test => "off",
        }
    }
}

/// Parses the operator-facing format names
impl FromStr for Profile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "development" => Ok(Profile::Development),
            "json" | "production" => Ok(Profile::Production),
            "test" => Ok(Profile::Test),
            other => Err(format!("unknown log format '{}'", other)),
        }
    }
}

static INIT_ONCE: Once = Once::new();

/// Initialize the logging facility
///
/// Only the first call in a process takes effect. `RUST_LOG` overrides the
/// profile's default filter.
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| {
        let filter = || {
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(profile.default_filter()))
        };

        match profile {
            Profile::Development => {
                tracing_subscriber::fmt()
                    .with_writer(std::io::stderr)
                    .with_env_filter(filter())
                    .init();
            }
            Profile::Production => {
                tracing_subscriber::fmt()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_env_filter(filter())
                    .init();
            }
            Profile::Test => {
                // capture is installed by init_test_capture()
                tracing_subscriber::registry().init();
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_idempotent() {
        init(Profile::Test);
        init(Profile::Test);
    }

    #[test]
    fn test_profile_from_format_name() {
        assert_eq!("pretty".parse::<Profile>().unwrap(), Profile::Development);
        assert_eq!("JSON".parse::<Profile>().unwrap(), Profile::Production);
        assert!("xml".parse::<Profile>().is_err());
    }

    #[test]
    fn test_default_filters_target_crate_prefix() {
        assert!(Profile::Development.default_filter().starts_with("tutoria"));
        assert!(Profile::Production.default_filter().ends_with("info"));
    }
}
