//! Logging setup derived from verbosity

/// Map the `-v` count to a tracing filter directive
pub fn get_log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "info",
        1 => "debug",
        2 => "trace",
        _ => "trace,regex=debug", // -vvv shows everything including dependencies
    }
}

/// Install the global fmt subscriber
///
/// Logs go to stderr so that `--stdout` output stays clean.
pub fn init_tracing(verbose: u8) {
    tracing_subscriber::fmt()
        .with_env_filter(get_log_level(verbose))
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .with_thread_ids(verbose >= 3)
        .with_line_number(verbose >= 3)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_log_level() {
        assert_eq!(get_log_level(0), "info");
        assert_eq!(get_log_level(1), "debug");
        assert_eq!(get_log_level(2), "trace");
        assert!(get_log_level(3).starts_with("trace"));
        assert_eq!(get_log_level(9), get_log_level(3));
    }
}
