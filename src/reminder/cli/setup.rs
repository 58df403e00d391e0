use clap::Parser;

/// Returns the version string, including the git hash for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(
    name = "reminder",
    bin_name = "reminder",
    version = get_version(),
    disable_help_flag = true
)]
#[command(about = "Manage reminders on a remote backend", long_about = None)]
pub struct Cli {
    /// Backend API URL
    #[arg(long, value_name = "URL")]
    pub backend: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Display the help message
    #[arg(short, long)]
    pub help: bool,

    /// Command name followed by its flags
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub command: Vec<String>,
}
