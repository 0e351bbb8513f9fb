//! The self-rescheduling frame loop: one `requestAnimationFrame` closure that
//! advances the scene and submits a render, then schedules itself again.

use std::cell::RefCell;
use std::rc::Rc;

use instant::Instant;
use viz_core::{FrameClock, SceneState};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::render;

pub struct FrameContext {
    pub scene: Rc<RefCell<SceneState>>,
    pub gpu: render::GpuState<'static>,
    pub canvas: web::HtmlCanvasElement,
    pub clock: FrameClock,
    pub started: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = self.started.elapsed().as_secs_f32();
        let dt = self.clock.tick(now);

        let mut scene = self.scene.borrow_mut();
        scene.advance(dt);

        let camera = scene.camera();
        let models: Vec<(glam::Mat4, [f32; 3])> = scene
            .meshes
            .iter()
            .map(|m| (m.model_matrix(), scene.material_color))
            .collect();

        // Keep the surface sized to the canvas backing store.
        let w = self.canvas.width();
        let h = self.canvas.height();
        self.gpu.resize_if_needed(w, h);
        if let Err(e) = self.gpu.render(&camera, &models, scene.material_color) {
            log::error!("render error: {:?}", e);
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
