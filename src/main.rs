/// Headless showcase driver
/// Runs the scene engine through a full day/night cycle with a synthetic
/// pointer sweep and logs the parameters a render adapter would paint.

use anyhow::Result;
use glam::Vec2;
use vetrina_engine::scene::modulation;
use vetrina_engine::{Bounds, SceneConfig, SceneEngine, Viewport};

fn main() -> Result<()> {
    env_logger::init();

    let mut engine = SceneEngine::new(SceneConfig::default())?;
    engine.set_viewport(Viewport {
        width: 1280.0,
        height: 720.0,
    });
    engine.set_interactive(true);

    let stage = Bounds {
        left: 0.0,
        top: 0.0,
        width: 1280.0,
        height: 720.0,
    };

    // One full cycle at the default increment
    for step in 0..500u32 {
        let sweep = (step % 100) as f32 / 100.0;
        engine.pointer_moved(Vec2::new(sweep * stage.width, stage.height * 0.5), stage);

        let state = engine.tick();
        if step % 50 == 0 {
            log::info!(
                "phase {:.3} | sky ({:.2},{:.2},{:.2}) a{:.2} | body ({:.1}%,{:.1}%) glow {:.0}px | stars {:.2} | city {:.2}",
                state.phase,
                state.colors.sky_from.x,
                state.colors.sky_from.y,
                state.colors.sky_from.z,
                state.colors.sky_from.w,
                state.celestial.position_percent.x,
                state.celestial.position_percent.y,
                state.celestial.glow_radius,
                state.colors.star_visibility,
                modulation::city_light_level(state.colors.star_visibility),
            );
        }
    }

    let final_state = engine.state();
    log::info!(
        "cycle complete: {} entities, {} layers, seed {}",
        final_state.entities.len(),
        final_state.layers.len(),
        engine.seed()
    );

    Ok(())
}
