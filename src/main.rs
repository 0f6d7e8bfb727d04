use anyhow::Result;
use log::info;
use padmap::engine::input::{
    AxisDirection, CoordinatorConfig, InputCoordinator, LogicalAxis, LogicalButton,
    VirtualBackend, KEYBOARD_PLAYER,
};
use padmap::GameLoop;
use std::time::Duration;

/// Simulated frame length, just over one tick
const FRAME: Duration = Duration::from_millis(17);

/// Number of simulated frames
const FRAMES: u32 = 90;

/// Scripted host activity for one frame
fn script(frame: u32, backend: &mut VirtualBackend) {
    match frame {
        10 => {
            info!("[script] Xbox 360 pad plugged into slot 2");
            backend.plug(2, "Controller (XBOX 360 For Windows)");
        }
        30 => {
            info!("[script] Player 2 pulls the right trigger");
            backend.set_axis("joystick 3 analog 9", 1.0);
        }
        36 => {
            info!("[script] Player 2 releases the right trigger");
            backend.set_axis("joystick 3 analog 9", 0.0);
        }
        40 => {
            info!("[script] Player 1 presses DPAD left and south");
            backend.set_axis("joystick 2 analog 6", -1.0);
            backend.press("joystick 2 button 1");
        }
        44 => {
            backend.set_axis("joystick 2 analog 6", 0.0);
            backend.release("joystick 2 button 1");
        }
        50 => {
            info!("[script] Keyboard player presses space and holds D");
            backend.press("space");
            backend.press("d");
        }
        60 => {
            info!("[script] PS4 pad unplugged from slot 1");
            backend.unplug(1);
        }
        75 => {
            info!("[script] PS4 pad plugged back into slot 1");
            backend.plug(1, "Wireless Controller");
        }
        _ => {}
    }
}

/// Game logic for one logical tick
fn tick(input: &mut InputCoordinator<VirtualBackend>, frame: u32) -> Result<()> {
    if input.button_down(LogicalButton::ActionSouth, KEYBOARD_PLAYER)? {
        info!("Frame {}: keyboard player pressed south", frame);
    }

    for player in 1..input.player_count() {
        if !input.is_connected(player)? {
            continue;
        }
        if input.button_down(LogicalButton::ActionSouth, player)? {
            info!("Frame {}: player {} pressed south", frame, player);
        }
        if input.axis_as_button_down(LogicalAxis::RightTrigger, player)? {
            info!("Frame {}: player {} pulled the right trigger", frame, player);
        }
        if input.axis_as_button_up(LogicalAxis::RightTrigger, player)? {
            info!("Frame {}: player {} released the right trigger", frame, player);
        }
        if input.axis_as_button_down_in(
            LogicalAxis::DpadHorizontal,
            player,
            AxisDirection::Negative,
        )? {
            info!("Frame {}: player {} pressed DPAD left", frame, player);
        }
    }

    let movement = input.combined_axis(
        LogicalAxis::LeftHorizontal,
        LogicalAxis::LeftVertical,
        KEYBOARD_PLAYER,
        0.1,
    )?;
    if movement != glam::Vec2::ZERO && frame % 10 == 0 {
        info!("Frame {}: keyboard movement {}", frame, movement);
    }

    Ok(())
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting padmap demo...");

    let config = CoordinatorConfig::new().with_reconcile_interval(Duration::from_millis(250));
    let backend = VirtualBackend::with_devices(["", "Wireless Controller"]);
    let mut input = InputCoordinator::with_config(backend, config);
    input.subscribe(|event| info!("Observer saw {:?}", event));

    let mut game_loop = GameLoop::new(input.config().reconcile_interval);

    for frame in 0..FRAMES {
        script(frame, input.backend_mut());

        let schedule = game_loop.advance(FRAME);
        if schedule.reconcile {
            input.reconcile_devices();
        }

        for _ in 0..schedule.ticks {
            input.update();
            tick(&mut input, frame)?;
            input.late_update();
        }
        input.backend_mut().end_frame();

        // After rendering
        input.check_disconnects();
        for event in input.drain_events() {
            info!("Frame {}: {:?} ({})", frame, event, input.family(event.player())?);
        }
    }

    info!(
        "Finished after {} frames and {} ticks with {} players ({} connected)",
        game_loop.frame_count(),
        game_loop.update_count(),
        input.player_count(),
        input.connected_players().len()
    );

    Ok(())
}
