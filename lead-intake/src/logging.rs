use crate::config::Environment;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is not set
fn default_directives(env: &Environment) -> &'static str {
    match env {
        Environment::Dev => "lead_intake=debug,info",
        Environment::Staging => "lead_intake=debug,warn",
        Environment::Prod => "lead_intake=info,warn",
    }
}

/// Install the global subscriber.
///
/// Everything goes to stderr; stdout carries the binary's JSON result. Prod
/// emits JSON lines, other environments a readable format with source
/// locations in dev.
pub fn init_logging(env: &Environment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(env)));

    let json_lines = matches!(env, Environment::Prod);

    let readable = (!json_lines).then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_file(env.is_dev())
            .with_line_number(env.is_dev())
    });
    let structured = json_lines.then(|| fmt::layer().json().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(filter)
        .with(readable)
        .with(structured)
        .init();
}
