mod app;
mod error;
mod input_box;
mod map;
mod waypoint;

use std::io::{self, Write};

use app::WaypointApp;

const WINDOW_WIDTH: f32 = 1200.0;
const WINDOW_HEIGHT: f32 = 1000.0;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    print!("Enter the path to the PNG map: ");
    io::stdout().flush().ok();
    let mut path = String::new();
    io::stdin().read_line(&mut path).ok();
    let path = path.trim();

    let map = match map::load_map(path) {
        Ok(map) => map,
        Err(err) => {
            println!("Failed to open the file.");
            tracing::error!(%err, "could not load map image");
            std::process::exit(1);
        }
    };
    let [width, height] = map.size();
    tracing::info!(width, height, "loaded map image");

    let native_options = eframe::NativeOptions {
        initial_window_size: Some(egui::vec2(WINDOW_WIDTH, WINDOW_HEIGHT)),
        resizable: false,
        ..Default::default()
    };

    eframe::run_native(
        "Map Waypoint Maker",
        native_options,
        Box::new(move |cc| Box::new(WaypointApp::new(cc, map))),
    )
}
