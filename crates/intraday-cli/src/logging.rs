use tracing_subscriber::EnvFilter;

use crate::error::CliError;

const DEFAULT_FILTER: &str = "intraday=info,intraday_cli=info";

/// Install the stderr `fmt` subscriber.
///
/// An explicit directive wins over `RUST_LOG`, which wins over the default.
pub fn init(directive: Option<&str>) -> Result<(), CliError> {
    let filter = match directive {
        Some(directive) => {
            EnvFilter::try_new(directive).map_err(|error| CliError::Logging(error.to_string()))?
        }
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|error| CliError::Logging(error.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_covers_binary_and_library_targets() {
        let directives = DEFAULT_FILTER.split(',').collect::<Vec<_>>();
        assert!(directives.contains(&"intraday=info"));
        assert!(directives.contains(&"intraday_cli=info"));
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    }
}
