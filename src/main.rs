#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use eframe::NativeOptions;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([900.0, 640.0])
            .with_min_inner_size([700.0, 520.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Yane-Mitsumori Roof Pricing",
        options,
        Box::new(|cc| Ok(Box::new(yane_mitsumori::app::MyApp::new(cc)))),
    )
}
