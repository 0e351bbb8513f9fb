use viz_core::MAX_PIXEL_RATIO;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn canvas_by_id(
    document: &web::Document,
    id: &str,
) -> anyhow::Result<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{id}"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("#{id} is not a canvas: {:?}", e)))
}

/// Viewport size in CSS pixels. Falls back to 1x1 when the window is gone.
pub fn viewport_size() -> (u32, u32) {
    let Some(w) = web::window() else {
        return (1, 1);
    };
    let width = w
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    let height = w
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    ((width.max(1.0)) as u32, (height.max(1.0)) as u32)
}

/// Current vertical scroll offset in CSS pixels.
pub fn scroll_offset() -> f32 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0) as f32
}

/// Device pixel ratio, capped to bound fill-rate cost on high-density
/// displays.
pub fn pixel_ratio() -> f64 {
    web::window()
        .map(|w| w.device_pixel_ratio().min(MAX_PIXEL_RATIO))
        .unwrap_or(1.0)
}

/// Keep the canvas backing store at CSS size * (capped) devicePixelRatio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    let dpr = pixel_ratio();
    let rect = canvas.get_bounding_client_rect();
    let w_px = (rect.width() * dpr) as u32;
    let h_px = (rect.height() * dpr) as u32;
    canvas.set_width(w_px.max(1));
    canvas.set_height(h_px.max(1));
}
