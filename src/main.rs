//! Rolling Incline entry point
//!
//! The web build is driven by the host page through `platform::web`. Natively
//! this runs the configured scenario headless at 60 Hz and reports the result.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use rolling_incline::Settings;
    use rolling_incline::Simulator;
    use rolling_incline::platform::FixedFrameClock;
    use rolling_incline::sim::RunPhase;

    env_logger::init();
    log::info!("Rolling Incline (native) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => match Settings::load_from_path(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path);
                settings
            }
            Err(e) => {
                log::error!("{}", e);
                std::process::exit(1);
            }
        },
        None => Settings::load(),
    };

    let initial = settings.initial;
    let mut sim = match Simulator::with_initial(settings) {
        Ok(sim) => sim,
        Err(e) => {
            log::error!("Initial scenario rejected: {}", e);
            std::process::exit(1);
        }
    };
    sim.on_viewport_resize(1280, 720);

    println!(
        "{} | angle {}° | length {} | diameter {} | mass {}",
        initial.shape.as_str(),
        initial.angle_deg,
        initial.length,
        initial.diameter,
        initial.mass
    );
    println!("analytic travel time: {:.4} s", sim.current_travel_time());

    // Ten simulated minutes at 60 Hz
    const MAX_FRAMES: u32 = 60 * 600;

    sim.start_run();
    let mut frames = FixedFrameClock::new(1.0 / 60.0);
    let mut frame_count = 0u32;
    let mut last = None;
    while sim.current_phase() == RunPhase::Running && frame_count < MAX_FRAMES {
        last = sim.advance(&mut frames);
        frame_count += 1;
    }
    if sim.current_phase() == RunPhase::Running {
        log::warn!(
            "Stopped after {} frames with the body still rolling (t = {:.3} s)",
            frame_count,
            sim.current_elapsed_time()
        );
    }

    if let Some(frame) = last {
        println!(
            "stopped after {} frames: t = {} s, body at ({:.3}, {:.3}, {:.3}), spin {:.3} rad",
            frame_count,
            sim.time_readout().format(),
            frame.pose.position.x,
            frame.pose.position.y,
            frame.pose.position.z,
            frame.pose.spin
        );
        println!(
            "camera ({}) at ({:.3}, {:.3}, {:.3})",
            sim.current_preset().as_str(),
            frame.camera.position.x,
            frame.camera.position.y,
            frame.camera.position.z
        );
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::start, this is just to satisfy the compiler
}
