#[cfg(feature = "csr")]
fn main() {
    use leptos::*;
    use shapes_client::{app::App, config::ClientConfig};

    shapes_client::init_logging();
    let config = ClientConfig::from_env();
    log::info!("Starting Shapes client against {}", config.api_url);
    mount_to_body(move |cx| view! { cx, <App config=config/> });
}

#[cfg(not(feature = "csr"))]
pub fn main() {
    // no native entry point, build with the `csr` feature for the browser
}
