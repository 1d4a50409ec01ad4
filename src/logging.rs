use crate::config::Environment;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset.
///
/// Search runs log per request at DEBUG from the catalog, so only dev shows
/// them. Payment and booking events stay at INFO everywhere.
fn default_directives(env: &Environment) -> &'static str {
    match env {
        Environment::Dev => "aura_backend=debug,tower_http=debug,info",
        Environment::Staging => {
            "aura_backend=info,aura_backend::services::payments=debug,tower_http=info,warn"
        }
        Environment::Prod => {
            "aura_backend::routes=info,aura_backend::services=info,aura_backend=warn,warn"
        }
    }
}

pub fn init_logging(env: &Environment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(env)));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_file(env.is_dev())
        .with_line_number(env.is_dev());

    // JSON in production, pretty everywhere else
    if env.is_prod() {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.pretty())
            .init();
    }

    tracing::info!("Logging initialized for {:?} environment", env);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_directives_parse() {
        for env in [Environment::Dev, Environment::Staging, Environment::Prod] {
            let directives = default_directives(&env);
            assert!(
                EnvFilter::try_new(directives).is_ok(),
                "{:?} filter does not parse: {}",
                env,
                directives
            );
        }
    }

    #[test]
    fn prod_keeps_route_and_service_events() {
        let directives = default_directives(&Environment::Prod);
        assert!(directives.contains("aura_backend::routes=info"));
        assert!(directives.contains("aura_backend::services=info"));
    }
}
