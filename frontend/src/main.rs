use debounced_login_frontend::{config, init_logging, App};
use leptos::*;

fn main() {
    console_error_panic_hook::set_once();

    let (runtime_config, config_error) = config::init();
    init_logging(&runtime_config);
    if let Some(err) = config_error {
        log::warn!("ignoring runtime config override: {err}");
    }
    log::info!(
        "starting login frontend (debounce {}ms)",
        runtime_config.debounce_ms
    );

    mount_to_body(|| view! { <App/> });
}
