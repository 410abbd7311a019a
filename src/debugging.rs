pub struct DebuggingSession;

impl DebuggingSession {
    pub fn new(args: &crate::cli::Cli) -> Self {
        use tracing_subscriber::prelude::*;

        tracing_subscriber::registry()
            .with(Self::log_filter(args))
            .with(tracing_subscriber::fmt::layer())
            .init();

        Self
    }

    /// Filter for log output. The `LFM_GROUP_STATUS_LOG` environmental
    /// variable takes priority over CLI arguments.
    fn log_filter(args: &crate::cli::Cli) -> tracing_subscriber::EnvFilter {
        use tracing_subscriber::EnvFilter;

        const ENV: &str = "LFM_GROUP_STATUS_LOG";
        if std::env::var_os(ENV).is_some() {
            if args.verbose.is_present() {
                eprintln!("WARNING: verbosity arguments were ignored as environmental variable {ENV} is set");
            }
            return EnvFilter::try_from_env(ENV).expect("bad log filter");
        }

        match args.verbose.tracing_level() {
            Some(level) => EnvFilter::new(level.as_str()),
            None => EnvFilter::new("none"),
        }
    }
}
