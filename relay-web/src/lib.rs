use relay_ui::host::APPLY_FUNCTION;
use relay_ui::{ApplierConfig, CommandApplier};
use std::fmt::Display;
use tracing::info;
use wasm_bindgen::prelude::*;

pub mod logging;
pub mod surface;

pub use surface::DomSurface;

const DEFAULT_LOG_FILTER: &str = "relay_ui=debug,relay_web=info";

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    logging::init(DEFAULT_LOG_FILTER);
}

/// Command applier bound to a DOM container
#[wasm_bindgen]
pub struct Bridge {
    applier: CommandApplier<DomSurface>,
}

#[wasm_bindgen]
impl Bridge {
    /// Mount on `document.body`
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<Bridge, JsValue> {
        let surface = DomSurface::body().map_err(to_js_error)?;
        Ok(Self {
            applier: CommandApplier::new(surface),
        })
    }

    /// Mount on the element with the given id
    pub fn mount(container_id: &str) -> Result<Bridge, JsValue> {
        let surface = DomSurface::mount(container_id).map_err(to_js_error)?;
        Ok(Self {
            applier: CommandApplier::new(surface),
        })
    }

    /// Mount with an `ApplierConfig` given as JSON; no container id means `<body>`
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(container_id: Option<String>, config: &str) -> Result<Bridge, JsValue> {
        let config = ApplierConfig::from_json(config).map_err(to_js_error)?;
        let surface = match container_id {
            Some(id) => DomSurface::mount(&id),
            None => DomSurface::body(),
        }
        .map_err(to_js_error)?;

        Ok(Self {
            applier: CommandApplier::with_config(surface, config),
        })
    }

    /// Apply a JSON frame; returns how many commands were applied
    #[wasm_bindgen(js_name = applyCommands)]
    pub fn apply_commands(&mut self, frame: &str) -> Result<u32, JsValue> {
        let report = self.applier.apply_frame(frame).map_err(to_js_error)?;
        Ok(report.applied as u32)
    }

    #[wasm_bindgen(getter, js_name = nodeCount)]
    pub fn node_count(&self) -> u32 {
        self.applier.len() as u32
    }
}

impl Bridge {
    pub fn applier(&self) -> &CommandApplier<DomSurface> {
        &self.applier
    }
}

/// Define `window.__applyCommands` backed by a body-mounted bridge
///
/// Lets the host keep evaluating `__applyCommands(<frame>)` scripts.
#[wasm_bindgen(js_name = installGlobal)]
pub fn install_global() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let mut bridge = Bridge::new()?;

    let apply = Closure::wrap(Box::new(move |frame: String| bridge.apply_commands(&frame))
        as Box<dyn FnMut(String) -> Result<u32, JsValue>>);

    js_sys::Reflect::set(
        &window,
        &JsValue::from_str(APPLY_FUNCTION),
        apply.as_ref(),
    )?;
    apply.forget();

    info!("installed window.{APPLY_FUNCTION}");
    Ok(())
}

fn to_js_error(err: impl Display) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}
