//! Notebook Brawl main entry point.
//!
//! A small 2D brawler on a notebook page, written in Rust using:
//! - **raylib** for windowing, graphics, and audio
//! - **bevy_ecs** for entity-component-system architecture
//!
//! A pencil wanders along the top of the page drawing boxes that fall to the
//! floor. The player walks with the arrow keys and erases boxes by attacking
//! with space. F11 toggles the debug overlay.
//!
//! # Main Loop
//!
//! 1. Read `config.ini`, open the window, load textures and start the audio
//!    thread
//! 2. Set up resources, observers and the session entities
//! 3. Each frame: poll the keyboard, tick timers, run the player controller,
//!    integrate movement, advance animations, talk to the audio thread, draw
//! 4. Shut down the audio thread on exit
//!
//! # Running
//!
//! ```sh
//! cargo run --release --features raylib -- --seed 42
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use std::path::{Path, PathBuf};

use bevy_ecs::prelude::*;
use clap::Parser;

use notebookbrawl::game::{
    BACKGROUND_TEXTURE, PENCIL_TEXTURE, load_animations, load_audio, register_observers,
    run_frame, setup_world, spawn_session,
};
use notebookbrawl::resources::animationstore::{ANIM_HIT, ANIM_STAND, ANIM_WALK};
use notebookbrawl::resources::audio::{setup_audio, shutdown_audio};
use notebookbrawl::resources::gameconfig::GameConfig;
use notebookbrawl::resources::rng::GameRng;
use notebookbrawl::resources::texturestore::TextureStore;
use notebookbrawl::systems::animation::animation;
use notebookbrawl::systems::audio::{
    forward_audio_cmds, log_audio_messages, poll_audio_messages, update_bevy_audio_cmds,
    update_bevy_audio_messages,
};
use notebookbrawl::systems::gameloop::BOX_TEXTURE;
use notebookbrawl::systems::input::update_input_state;
use notebookbrawl::systems::render::render_system;
use notebookbrawl::systems::timer::update_timers;

/// Notebook Brawl
#[derive(Parser)]
#[command(version, about = "Erase the boxes the pencil keeps drawing.")]
struct Cli {
    /// Configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Seed for the random number generator (pencil moves and timing).
    #[arg(long)]
    seed: Option<u64>,

    /// Directory holding sprites/, images/, sounds/ and animations.json.
    #[arg(long, value_name = "DIR", default_value = "assets")]
    assets: PathBuf,
}

fn load_textures(
    rl: &mut raylib::RaylibHandle,
    thread: &raylib::RaylibThread,
    assets: &Path,
) -> TextureStore {
    let mut textures = TextureStore::new();
    let files = [
        (ANIM_STAND, assets.join("sprites/stand.png")),
        (ANIM_WALK, assets.join("sprites/walk.png")),
        (ANIM_HIT, assets.join("sprites/hit.png")),
        (BOX_TEXTURE, assets.join("images/box.png")),
        (PENCIL_TEXTURE, assets.join("images/pencil.png")),
        (BACKGROUND_TEXTURE, assets.join("images/notebook.png")),
    ];
    for (key, path) in files.iter() {
        if let Err(e) = textures.load(rl, thread, key, &path.to_string_lossy()) {
            log::error!("{}", e);
        }
    }
    textures
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(cli.config.clone());
    if let Err(e) = config.load_from_file() {
        log::warn!("{}; using defaults", e);
    }
    let rng = match cli.seed {
        Some(seed) => GameRng::with_seed(seed),
        None => GameRng::default(),
    };

    // --------------- Raylib window & assets ---------------
    let (window_width, window_height) = config.window_size();
    let (mut rl, thread) = raylib::init()
        .size(window_width as i32, window_height as i32)
        .title(&config.title)
        .build();
    rl.set_target_fps(config.target_fps);
    let textures = load_textures(&mut rl, &thread, &cli.assets);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(load_animations(cli.assets.join("animations.json")));
    setup_world(&mut world, config, rng);
    setup_audio(&mut world);
    load_audio(&mut world, &cli.assets);

    world.insert_non_send_resource(textures);
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    register_observers(&mut world);
    spawn_session(&mut world);

    let mut update = notebookbrawl::game::build_update_schedule();
    update.add_systems(update_input_state.before(update_timers));
    update.add_systems(
        (
            poll_audio_messages,
            update_bevy_audio_messages,
            log_audio_messages,
            forward_audio_cmds,
        )
            .chain()
            .after(animation)
            .before(update_bevy_audio_cmds),
    );
    update.add_systems(render_system.after(update_bevy_audio_cmds));

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        run_frame(&mut world, &mut update, dt);
        world.clear_trackers();
    }
    shutdown_audio(&mut world);
}
