use linkcfg::server::{self, ServerConfig};
use linkcfg_core::introspect;
use linkcfg_runtime::{Bootstrap, exit_with, logging};
use tracing::info;

fn main() {
    let registry = server::registry().unwrap_or_else(|err| exit_with(&err));

    let cfg = Bootstrap::<ServerConfig>::new(&registry)
        .validator(server::validator())
        .run_or_exit();

    logging::init_from_settings(&cfg.log_level, &cfg.log_path);
    info!(
        server_addr = %cfg.server_addr,
        admin_addr = %cfg.admin_addr,
        link_mode = %cfg.link_mode,
        max_client = cfg.max_client,
        "Server configuration ready"
    );

    let records = introspect(&*cfg, &registry);
    match serde_json::to_string_pretty(&records) {
        Ok(json) => println!("{json}"),
        Err(err) => exit_with(&err),
    }
}
