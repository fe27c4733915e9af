use demo_core::TweaksDemoApp;
use eframe::{run_native, NativeOptions};

const APP_NAME: &str = "Graph Tweaks";

fn main() -> eframe::Result {
    env_logger::init();

    run_native(
        APP_NAME,
        NativeOptions::default(),
        Box::new(|cc| Ok::<Box<dyn eframe::App>, _>(Box::new(TweaksDemoApp::new(cc)))),
    )
}
