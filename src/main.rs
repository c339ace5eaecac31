// src/main.rs
use log::{error, info, warn};
use nannou::prelude::*;

use hedgehog2d::{
    animation::{MotionSettings, SpeedControl},
    config::Config,
    controllers::{command_for_key, Command, Gating, MoveDispatcher, OscController},
    models::{Layout, StickerView},
    render::{StickerRenderer, TileRenderer, BACKGROUND},
};

struct Model {
    config: Config,
    window_size: Vec2,

    // Puzzle
    dispatcher: MoveDispatcher,
    speed: SpeedControl,

    // Comms
    osc_controller: Option<OscController>,

    // Rendering
    tile_renderer: TileRenderer,
    sticker_renderer: StickerRenderer,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    let config = Config::load().expect("Failed to load config file");

    let layout = Layout::new(&config.window, &config.layout);
    let dispatcher = MoveDispatcher::new(layout).expect("Move table failed validation");

    let osc_controller = if config.osc.enabled {
        match OscController::new(config.osc.rx_port) {
            Ok(controller) => {
                info!("Listening for OSC on port {}", config.osc.rx_port);
                Some(controller)
            }
            Err(err) => {
                warn!("OSC disabled, could not bind port {}: {}", config.osc.rx_port, err);
                None
            }
        }
    } else {
        None
    };

    app.new_window()
        .title("Hedgehog 2D")
        .size(config.window.width, config.window.height)
        .resizable(false)
        .view(view)
        .key_pressed(key_pressed)
        .build()
        .expect("Failed to create window");

    let window_size = vec2(config.window.width as f32, config.window.height as f32);
    let sticker_view = StickerView::new(&config.sticker_view, window_size.x);

    info!("Hedgehog 2D ready");

    Model {
        speed: SpeedControl::new(&config.speed),
        window_size,
        dispatcher,
        osc_controller,
        tile_renderer: TileRenderer::default(),
        sticker_renderer: StickerRenderer::new(sticker_view, Default::default()),
        config,
    }
}

fn key_pressed(app: &App, model: &mut Model, key: Key) {
    if let Some(command) = command_for_key(key, app.keys.mods.shift()) {
        apply_command(app, model, command);
    }
}

fn update(app: &App, model: &mut Model, update: Update) {
    // Process OSC messages
    let commands = match model.osc_controller.as_mut() {
        Some(controller) => {
            controller.process_messages();
            controller.take_commands()
        }
        None => Vec::new(),
    };
    for command in commands {
        apply_command(app, model, command);
    }

    let settings = MotionSettings::new(&model.config.animation, model.speed.multiplier());
    model
        .dispatcher
        .update(update.since_last.as_secs_f32(), &settings);
}

fn apply_command(app: &App, model: &mut Model, command: Command) {
    match command {
        Command::Move(id) => match model.dispatcher.invoke(id) {
            Ok(()) => {}
            Err(err) if err.is_internal_fault() => {
                error!("{}", err);
                app.quit();
            }
            Err(err) => warn!("{}", err),
        },
        Command::Reset => model.dispatcher.reset(),
        Command::Speed(value) => model.speed.set(value),
        Command::SpeedStep(steps) => model.speed.nudge(steps),
    }
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let (r, g, b) = BACKGROUND;
    draw.background().color(rgb8(r, g, b));

    model
        .tile_renderer
        .draw(&draw, model.dispatcher.tiles(), model.window_size);
    model
        .sticker_renderer
        .draw(&draw, model.dispatcher.stickers(), model.window_size);

    draw.text(&status_line(model))
        .color(WHITE)
        .font_size(16)
        .w(model.window_size.x)
        .x_y(0.0, -model.window_size.y / 2.0 + 40.0);

    draw.to_frame(app, &frame).expect("Failed to draw frame");
}

fn status_line(model: &Model) -> String {
    let gating = match model.dispatcher.gating() {
        Gating::Open => "X R L U D F B A Y",
        Gating::GyroPending => "S to finish the gyro",
    };
    format!(
        "Speed {} (x{:.2})   Moves: {}   Backspace resets",
        model.speed.value(),
        model.speed.multiplier(),
        gating
    )
}
