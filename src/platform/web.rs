//! Browser bindings
//!
//! The host page owns the three.js/WebGPU scene and the control surface. It
//! feeds commands in and pulls one JSON frame (plus an optional uniform block)
//! out per requestAnimationFrame callback.

use wasm_bindgen::prelude::*;

use super::time::TimestampFrameClock;
use crate::settings::Settings;
use crate::sim::{SimulationInput, inertia_coefficient_for_label};
use crate::simulator::{FrameOutput, Simulator};

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Rolling Incline module loaded");
}

/// Simulator handle exported to JavaScript
#[wasm_bindgen]
pub struct WebSimulator {
    sim: Simulator,
    frames: TimestampFrameClock,
    last_frame: Option<FrameOutput>,
}

#[wasm_bindgen]
impl WebSimulator {
    /// Create a simulator from stored settings and preview the initial scenario
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Result<WebSimulator, JsValue> {
        let settings = Settings::load();
        let mut sim = Simulator::with_initial(settings).map_err(js_err)?;
        sim.on_viewport_resize(width, height);
        Ok(Self {
            sim,
            frames: TimestampFrameClock::new(),
            last_frame: None,
        })
    }

    /// Submit control-surface values as JSON (`SimulationInput` fields)
    #[wasm_bindgen(js_name = submitParameters)]
    pub fn submit_parameters(&mut self, json: &str) -> Result<(), JsValue> {
        let input: SimulationInput = serde_json::from_str(json).map_err(js_err)?;
        self.sim.submit_input(&input).map_err(js_err)
    }

    #[wasm_bindgen(js_name = startRun)]
    pub fn start_run(&mut self) -> bool {
        self.sim.start_run()
    }

    /// Returns the new preset label
    #[wasm_bindgen(js_name = cyclePreset)]
    pub fn cycle_preset(&mut self) -> String {
        self.sim.cycle_preset().as_str().to_string()
    }

    #[wasm_bindgen(js_name = onViewportResize)]
    pub fn on_viewport_resize(&mut self, width: u32, height: u32) {
        self.sim.on_viewport_resize(width, height);
    }

    /// Advance one frame from a requestAnimationFrame timestamp; JSON frame
    /// or `null` while idle
    pub fn frame(&mut self, now_ms: f64) -> Result<String, JsValue> {
        self.frames.stamp(now_ms);
        self.last_frame = self.sim.advance(&mut self.frames);
        serde_json::to_string(&self.last_frame).map_err(js_err)
    }

    /// Uniform block of the last frame (empty before the first frame)
    #[wasm_bindgen(js_name = frameUniforms)]
    pub fn frame_uniforms(&self) -> Vec<u8> {
        self.last_frame
            .map(|f| self.sim.uniforms(&f).as_bytes().to_vec())
            .unwrap_or_default()
    }

    pub fn phase(&self) -> String {
        self.sim.current_phase().as_str().to_string()
    }

    #[wasm_bindgen(js_name = elapsedTime)]
    pub fn elapsed_time(&self) -> f32 {
        self.sim.current_elapsed_time()
    }

    #[wasm_bindgen(js_name = travelTime)]
    pub fn travel_time(&self) -> f32 {
        self.sim.current_travel_time()
    }

    /// Text for the elapsed-time display
    #[wasm_bindgen(js_name = timeLabel)]
    pub fn time_label(&self) -> String {
        self.sim.time_readout().format()
    }

    #[wasm_bindgen(js_name = saveSettings)]
    pub fn save_settings(&self) {
        self.sim.settings().save();
    }
}

/// Inertia coefficient for a raw shape label (unknown labels give 0)
#[wasm_bindgen(js_name = inertiaFor)]
pub fn inertia_for(label: &str, mass: f32, radius: f32, thickness: f32) -> f32 {
    inertia_coefficient_for_label(label, mass, radius, thickness)
}
