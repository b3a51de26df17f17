// services/tile-dash/src/main.rs
//
// Tile Dashboard - Ceramic tile sample storage monitoring
//

use leptos::*;
use tile_dash::app::App;

fn main() {
    // Better panic messages in browser console
    console_error_panic_hook::set_once();

    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Tile Dashboard starting...");

    mount_to_body(|| {
        view! { <App /> }
    });
}
