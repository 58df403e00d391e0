use super::render::{print_help, print_result, print_usage_hint};
use super::setup::Cli;
use clap::Parser;
use reminder::config::{ClientConfig, BACKEND_ENV};
use reminder::error::Result;
use reminder::gateway::Backend;
use reminder::model::CommandRequest;
use reminder::router::Router;
use std::path::Path;

const DEFAULT_PROGRAM: &str = "reminder";

struct AppContext {
    router: Router<Backend>,
    program: String,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli);

    let request = match CommandRequest::from_args(cli.command) {
        Some(request) if !cli.help => request,
        _ => {
            print_help(&ctx.router.help(&ctx.program));
            return Ok(());
        }
    };

    match ctx.router.dispatch(&request) {
        Ok(result) => {
            print_result(&result);
            Ok(())
        }
        Err(e) => {
            log::warn!("{} failed: {}", request.command(), e);
            if let Some(hint) = e.usage_hint(&ctx.program) {
                print_usage_hint(&hint);
            }
            Err(e)
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "error" };
    let env = env_logger::Env::default().default_filter_or(default_filter);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

fn init_context(cli: &Cli) -> AppContext {
    let config = match ClientConfig::config_dir().and_then(ClientConfig::load) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("using default configuration: {}", e);
            ClientConfig::default()
        }
    };

    let env_backend = std::env::var(BACKEND_ENV).ok();
    let backend = config.resolve_backend(cli.backend.as_deref(), env_backend.as_deref());
    log::debug!("backend: {}", backend);

    AppContext {
        router: Router::new(Backend::for_address(&backend)),
        program: program_name(),
    }
}

fn program_name() -> String {
    std::env::args_os()
        .next()
        .and_then(|arg0| {
            Path::new(&arg0)
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| DEFAULT_PROGRAM.to_string())
}
