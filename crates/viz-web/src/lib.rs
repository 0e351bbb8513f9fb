#![cfg(target_arch = "wasm32")]
pub mod dom;
pub mod events;
pub mod frame;
pub mod render;
pub mod ui;

use std::cell::RefCell;
use std::rc::Rc;

use instant::Instant;
use viz_core::SceneState;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("viz-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, "webgl")?;
    dom::sync_canvas_backing_size(&canvas);

    let (vw, vh) = dom::viewport_size();
    let mut scene = SceneState::new(viz_core::ViewportSize::new(vw, vh));
    // Pick up any scroll restoration the browser applied before we loaded.
    scene.set_scroll(dom::scroll_offset());
    let scene = Rc::new(RefCell::new(scene));

    let gpu = frame::init_gpu(&canvas)
        .await
        .ok_or_else(|| anyhow::anyhow!("WebGPU unavailable"))?;

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        scene: scene.clone(),
    });
    ui::wire_color_panel(&document, scene.clone());

    let ctx = frame::FrameContext {
        scene,
        gpu,
        canvas,
        clock: viz_core::FrameClock::default(),
        started: Instant::now(),
    };
    frame::start_loop(Rc::new(RefCell::new(ctx)));
    Ok(())
}
