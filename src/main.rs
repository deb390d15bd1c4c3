//! Paddle Pong entry point
//!
//! Native builds have no window backend yet, so this plays a scripted session
//! through the headless presenter: intro, click Play, a short rally, Escape
//! back to the menu, Escape again to quit.

#[cfg(not(target_arch = "wasm32"))]
use paddle_pong::platform::{KeyState, RawInput, ScriptedInput};

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use paddle_pong::consts::{WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
    use paddle_pong::renderer::LogPresenter;
    use paddle_pong::{Game, Settings, play_intro, run};

    env_logger::init();
    log::info!("{} (native) starting...", WINDOW_TITLE);
    log::info!(
        "No window backend; running a scripted {}x{} session",
        WINDOW_WIDTH,
        WINDOW_HEIGHT
    );

    let settings = Settings::default();
    if let Err(e) = settings.validate() {
        log::error!("Invalid settings: {}", e);
        std::process::exit(1);
    }

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("Game initialized with seed: {}", seed);

    let mut presenter = LogPresenter::new();
    let mut intro_input = ScriptedInput::default();
    intro_input.hold(idle(MENU_GAP), 64);
    if !play_intro(&mut intro_input, &mut presenter, std::thread::sleep) {
        return;
    }

    let mut game = Game::new(settings, seed);
    let mut input = demo_script();
    let summary = run(&mut game, &mut input, &mut presenter, None);

    log::info!(
        "Session ended after {} frames ({} presented), score {} - {}, quit: {}",
        summary.frames,
        presenter.frames(),
        summary.score.left(),
        summary.score.right(),
        summary.terminated
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser backend; the library is usable on its own
}

/// Cursor over the Play button
#[cfg(not(target_arch = "wasm32"))]
const PLAY_BUTTON: (f64, f64) = (250.0, 212.5);
/// Cursor over empty space between buttons
#[cfg(not(target_arch = "wasm32"))]
const MENU_GAP: (f64, f64) = (250.0, 10.0);

#[cfg(not(target_arch = "wasm32"))]
fn snapshot(cursor: (f64, f64), keys: KeyState, primary_button: bool) -> RawInput {
    use paddle_pong::consts::{WINDOW_HEIGHT, WINDOW_WIDTH};

    RawInput {
        cursor,
        window_size: (WINDOW_WIDTH, WINDOW_HEIGHT),
        framebuffer_size: (WINDOW_WIDTH, WINDOW_HEIGHT),
        keys,
        primary_button,
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn idle(cursor: (f64, f64)) -> RawInput {
    snapshot(cursor, KeyState::default(), false)
}

#[cfg(not(target_arch = "wasm32"))]
fn demo_script() -> ScriptedInput {
    let escape = KeyState {
        escape: true,
        ..Default::default()
    };
    let climb = KeyState {
        w: true,
        up: true,
        ..Default::default()
    };
    let split = KeyState {
        s: true,
        up: true,
        ..Default::default()
    };

    let mut script = ScriptedInput::default();
    script
        .hold(idle(MENU_GAP), 10)
        .hold(idle(PLAY_BUTTON), 5)
        .hold(snapshot(PLAY_BUTTON, KeyState::default(), true), 1)
        .hold(idle(MENU_GAP), 1)
        .hold(snapshot(MENU_GAP, climb, false), 30)
        .hold(snapshot(MENU_GAP, split, false), 30)
        .hold(idle(MENU_GAP), 400)
        .hold(snapshot(MENU_GAP, escape, false), 3)
        .hold(idle(MENU_GAP), 5)
        .hold(snapshot(MENU_GAP, escape, false), 1);
    script
}
