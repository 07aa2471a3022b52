#[cfg(target_arch = "wasm32")]
pub fn main() {
    use leptos::prelude::mount_to_body;
    use userdir::{
        app::App,
        app_lib::{AppConfig, telemetry},
    };

    let config = AppConfig::load();
    if let Err(err) = telemetry::init(&config.log_level) {
        web_sys::console::warn_1(&format!("logging disabled: {err:#}").into());
    }

    mount_to_body(App);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
