use std::thread;
use std::time::Duration;

use glam::{Mat4, Quat, Vec3};
use rayslider::{BoardEvent, FrameClock, Pose, Resolution, SliderBoard, SliderConfig};

const FRAME_INTERVAL: Duration = Duration::from_millis(16); // ~60 fps
const SWEEP_FRAMES: usize = 45;
const MAX_ANIMATION_FRAMES: usize = 240;

fn build_board() -> anyhow::Result<SliderBoard> {
    let mut board = SliderBoard::new();

    // Horizontal fader on a panel one metre in front of the user.
    let panel = Mat4::from_translation(Vec3::new(0.0, 1.2, -1.0));
    board.insert(
        &SliderConfig::new("volume", Vec3::ZERO, Vec3::new(0.4, 0.0, 0.0)),
        Vec3::new(-0.2, 0.0, 0.0),
        panel,
    )?;

    // Five-position selector on a tilted console.
    let console = Mat4::from_rotation_translation(
        Quat::from_rotation_x(-std::f32::consts::FRAC_PI_6),
        Vec3::new(0.5, 1.0, -0.6),
    );
    board.insert(
        &SliderConfig::new("mode", Vec3::ZERO, Vec3::new(0.0, 0.0, 0.3))
            .with_resolution(Resolution::Positions(5))
            .with_transition_ms(300),
        Vec3::ZERO,
        console,
    )?;

    Ok(board)
}

fn log_events(events: &mut Vec<BoardEvent>) {
    for ev in events.drain(..) {
        log::info!("[event] {} {} value={:.3}", ev.slider, ev.event.name(), ev.event.value());
    }
}

/// Sweep a downward-pointing ray across the volume fader, overshooting both ends.
fn replay_drag(board: &mut SliderBoard) -> anyhow::Result<()> {
    let mut events = Vec::new();
    let ray_at = |x: f32| Pose::new(Vec3::new(x, 1.8, -1.0), Vec3::NEG_Y);

    board.begin_drag("volume", &ray_at(-0.1), &mut events)?;
    for i in 0..=SWEEP_FRAMES {
        let t = i as f32 / SWEEP_FRAMES as f32;
        board.continue_drag("volume", &ray_at(-0.1 + t * 0.6), &mut events)?;
        log_events(&mut events);
    }
    // Sighting along the track cannot be resolved and is skipped.
    board.continue_drag("volume", &Pose::new(Vec3::new(-1.0, 1.2, -1.0), Vec3::X), &mut events)?;
    let settled = board.end_drag("volume", &ray_at(0.5), &mut events)?;
    log_events(&mut events);
    log::info!("[drag] volume settled at {:.3}", settled);
    Ok(())
}

fn replay_animation(board: &mut SliderBoard) -> anyhow::Result<()> {
    board.set_attribute_by_name("mode", "VALUE", "0.6")?;

    let mut clock = FrameClock::new();
    for frame in 0..MAX_ANIMATION_FRAMES {
        thread::sleep(FRAME_INTERVAL);
        let moved = board.tick(clock.tick());
        let animating = board.iter().any(|s| s.is_animating());
        if let Some(mode) = board.get("mode") {
            log::debug!("[frame] {} moved={} mode={:.3}", frame, moved, mode.value());
        }
        if !animating {
            break;
        }
    }

    if let Some(mode) = board.get("mode") {
        let p = mode.handle_position();
        log::info!(
            "[animate] mode settled at {:.3} handle=({:.3},{:.3},{:.3})",
            mode.value(),
            p.x,
            p.y,
            p.z
        );
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let mut board = build_board()?;
    replay_drag(&mut board)?;
    replay_animation(&mut board)?;
    Ok(())
}
