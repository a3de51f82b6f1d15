//! triview: keyboard-driven viewer for a scene of independently
//! transformable, independently lit triangle meshes.

mod app;
mod input;

use tracing_subscriber::EnvFilter;

use triview_core::config::scene::INPUT_TRIANGLES_URL;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // The scene must be fully loaded and valid before any rendering or
    // input handling starts; a load failure ends the process here.
    let scene = triview_core::fetch_scene(INPUT_TRIANGLES_URL)
        .inspect_err(|error| tracing::error!(%error, "failed to load startup scene"))?;

    let options = eframe::NativeOptions {
        renderer: eframe::Renderer::Wgpu,
        depth_buffer: 32,
        viewport: egui::ViewportBuilder::default()
            .with_title("triview")
            .with_inner_size([900.0, 900.0]),
        ..Default::default()
    };

    eframe::run_native(
        "triview",
        options,
        Box::new(move |cc| Ok(Box::new(app::ViewerApp::new(cc, scene)?))),
    )?;
    Ok(())
}
