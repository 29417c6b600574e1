use yew::prelude::*;
use log::{info, Level};

mod config;
mod tracking;
mod components {
    pub mod features;
    pub mod footer;
    pub mod header;
    pub mod picture_box;
}
mod pages {
    pub mod landing;
}

use pages::landing::LandingPage;

#[function_component]
fn App() -> Html {
    html! {
        <LandingPage />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    // Section observe/intersection events only go anywhere when tracing is on
    if config::section_tracing_enabled() {
        tracing_wasm::set_as_global_default();
        info!("Section tracing enabled");
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
