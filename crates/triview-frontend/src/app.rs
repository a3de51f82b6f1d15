//! The eframe viewer application.

use triview_core::{Camera, SceneModel, apply_command};
use triview_renderer::{FrameUniform, MeshRenderer, SceneBuffers, assemble};

use crate::input;

/// Must match the `depth_buffer: 32` requested in the native options.
const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// The viewer application.
///
/// Owns the whole mutable state of the process: the scene (meshes, per-mesh
/// transforms, selection cursor) and the camera. Each frame drains the key
/// events through the dispatch table, then reassembles the full buffer set
/// from the current state and hands it to the mesh pass; there is no
/// incremental render path.
pub struct ViewerApp {
    scene: SceneModel,
    camera: Camera,
}

impl ViewerApp {
    /// Sets up the GPU pass and wraps the loaded scene.
    ///
    /// Fails when eframe was built without its wgpu backend; pipeline or
    /// shader validation failures surface through wgpu's error reporting
    /// and are fatal.
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        scene: SceneModel,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let render_state = cc
            .wgpu_render_state
            .as_ref()
            .ok_or("wgpu render state unavailable; the viewer requires the wgpu backend")?;

        let renderer = MeshRenderer::new(
            &render_state.device,
            render_state.target_format,
            DEPTH_FORMAT,
        );
        render_state
            .renderer
            .write()
            .callback_resources
            .insert(renderer);

        Ok(Self {
            scene,
            camera: Camera::new(),
        })
    }

    fn handle_input(&mut self, ctx: &egui::Context) {
        let events = ctx.input(|input| input.events.clone());
        for event in events {
            if let egui::Event::Key {
                key,
                pressed: true,
                modifiers,
                ..
            } = event
                && let Some(command) = input::map_key(key, modifiers.shift)
            {
                apply_command(command, &mut self.scene, &mut self.camera);
            }
        }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(egui::Color32::BLACK))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                let aspect = rect.width() / rect.height().max(1.0);
                let buffers = assemble(&self.scene);
                let frame_uniform = FrameUniform::new(&self.camera, aspect);
                ui.painter().add(egui_wgpu::Callback::new_paint_callback(
                    rect,
                    SceneCallback {
                        buffers,
                        frame: frame_uniform,
                    },
                ));
            });
    }
}

/// Per-frame paint callback carrying the freshly assembled buffers.
struct SceneCallback {
    buffers: SceneBuffers,
    frame: FrameUniform,
}

impl egui_wgpu::CallbackTrait for SceneCallback {
    fn prepare(
        &self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        _screen_descriptor: &egui_wgpu::ScreenDescriptor,
        _egui_encoder: &mut wgpu::CommandEncoder,
        callback_resources: &mut egui_wgpu::CallbackResources,
    ) -> Vec<wgpu::CommandBuffer> {
        if let Some(renderer) = callback_resources.get_mut::<MeshRenderer>() {
            renderer.prepare(device, queue, &self.buffers, self.frame);
        }
        Vec::new()
    }

    fn paint(
        &self,
        _info: egui::PaintCallbackInfo,
        render_pass: &mut wgpu::RenderPass<'static>,
        callback_resources: &egui_wgpu::CallbackResources,
    ) {
        if let Some(renderer) = callback_resources.get::<MeshRenderer>() {
            renderer.render(render_pass);
        }
    }
}
