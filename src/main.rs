//! Browser entry point: logging, panic hook, and mounting the root component.

fn main() {
    #[cfg(feature = "csr")]
    {
        use leptos::prelude::*;
        use portal::app::App;
        use portal::config::PortalConfig;

        console_error_panic_hook::set_once();

        let (config, config_error) = match PortalConfig::from_build_env() {
            Ok(config) => (config, None),
            Err(e) => (PortalConfig::default(), Some(e)),
        };
        console_log::init_with_level(config.log_level).unwrap_or_default();
        if let Some(e) = config_error {
            log::warn!("build-time config rejected, using defaults: {e}");
        }
        log::info!("{} starting", config.app_name);

        leptos::mount::mount_to_body(move || view! { <App config=config/> });
    }
}
