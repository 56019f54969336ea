// src/main.rs
use nannou::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use rainbow::{
    algorithms::{ShellSortHalving, ShellSortShrinking, ShellSortState},
    config::{AlgorithmChoice, Config},
    utilities::generate_unique_values,
    Engine, NannouCanvas, RainbowError, StepAlgorithm,
};

type ShellSort = Box<dyn StepAlgorithm<State = ShellSortState>>;

struct Model {
    config: Config,
    engine: Engine<ShellSort>,

    // Rendering components:
    // strokes accumulate in the texture; it is only cleared on (re)start
    texture: wgpu::Texture,
    draw: nannou::Draw,
    draw_renderer: nannou::draw::Renderer,
    texture_reshaper: wgpu::TextureReshaper,

    needs_clear: bool,
    // set when a tick fails; the last frame stays on screen
    frozen: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    // Load config
    let config = Config::load().expect("Failed to load config file");
    let engine = build_engine(&config).expect("Failed to build animation");

    // Create window
    let window_id = app
        .new_window()
        .title("rainbow")
        .size(config.window.width, config.window.height)
        .view(view)
        .key_pressed(key_pressed)
        .build()
        .unwrap();
    let window = app.window(window_id).unwrap();

    // Set up render texture
    let device = window.device();
    let draw = nannou::Draw::new();
    let texture = wgpu::TextureBuilder::new()
        .size([config.window.width, config.window.height])
        // Our texture will be used as the RENDER_ATTACHMENT for our `Draw` render pass.
        // It will also be SAMPLED by the `TextureReshaper`.
        .usage(wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING)
        .sample_count(4)
        .format(wgpu::TextureFormat::Rgba16Float)
        .build(device);

    // Set up rendering pipeline
    let draw_renderer = nannou::draw::RendererBuilder::new()
        .build_from_texture_descriptor(device, texture.descriptor());
    let sample_count = window.msaa_samples();

    // Create the texture reshaper.
    let texture_view = texture.view().build();
    let texture_sample_count = texture.sample_count();
    let texture_sample_type = texture.sample_type();
    let dst_format = Frame::TEXTURE_FORMAT;
    let texture_reshaper = wgpu::TextureReshaper::new(
        device,
        &texture_view,
        texture_sample_count,
        texture_sample_type,
        sample_count,
        dst_format,
    );

    Model {
        config,
        engine,
        texture,
        draw,
        draw_renderer,
        texture_reshaper,
        needs_clear: true,
        frozen: false,
    }
}

fn build_engine(config: &Config) -> Result<Engine<ShellSort>, RainbowError> {
    let count = config.run.array_size;
    let values = match config.run.seed {
        Some(seed) => generate_unique_values(count, &mut StdRng::seed_from_u64(seed)),
        None => generate_unique_values(count, &mut rand::thread_rng()),
    };

    let algorithm: ShellSort = match config.run.algorithm {
        AlgorithmChoice::ShellHalving => Box::new(ShellSortHalving),
        AlgorithmChoice::ShellShrinking => Box::new(ShellSortShrinking::default()),
    };

    Engine::new(&values, algorithm, config.animation.clone())
}

fn key_pressed(app: &App, model: &mut Model, key: Key) {
    match key {
        // start over with a fresh array
        Key::R => match build_engine(&model.config) {
            Ok(engine) => {
                model.engine = engine;
                model.needs_clear = true;
                model.frozen = false;
            }
            Err(e) => log::error!("Could not restart: {e}"),
        },
        Key::Q => app.quit(),
        _ => (),
    }
}

fn update(app: &App, model: &mut Model, _update: Update) {
    let width = model.config.window.width as f32;
    let height = model.config.window.height as f32;
    let mut canvas = NannouCanvas::new(&model.draw, width, height);

    if model.needs_clear {
        model
            .draw
            .background()
            .color(model.config.window.background.to_nannou());
        model.engine.start(&mut canvas);
        model.needs_clear = false;
    }

    /*********************  One engine tick per frame **********************/
    if !model.frozen {
        if let Err(e) = model.engine.tick(&mut canvas) {
            log::error!("Animation stopped: {e}");
            model.frozen = true;
        }
    }
    /***********************************************************************/

    render_to_texture(app, model);
    // drawn commands now live in the texture
    model.draw.reset();
}

// Draw the state of Model into the given Frame
fn view(_app: &App, model: &Model, frame: Frame) {
    //resize texture to screen
    let mut encoder = frame.command_encoder();

    model
        .texture_reshaper
        .encode_render_pass(frame.texture_view(), &mut encoder);
}

// ******************************* Rendering *****************************

fn render_to_texture(app: &App, model: &mut Model) {
    let window = app.main_window();
    let device = window.device();
    let ce_desc = wgpu::CommandEncoderDescriptor {
        label: Some("Texture renderer"),
    };
    let mut encoder = device.create_command_encoder(&ce_desc);
    let texture_view = model.texture.view().build();

    // Without a background command the previous texture contents are kept,
    // so everything drawn so far stays on screen.
    model.draw_renderer.encode_render_pass(
        device,
        &mut encoder,
        &model.draw,
        1.0,
        model.texture.size(),
        &texture_view,
        None,
    );

    window.queue().submit(Some(encoder.finish()));
}
