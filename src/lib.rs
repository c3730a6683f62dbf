// Export modules for testing
pub mod about;
pub mod config;
pub mod display;
pub mod error;
pub mod panel;
pub mod state;
pub mod television;
pub mod ui;

// Re-export main types
pub use crate::config::ConfigData;
pub use crate::display::{DisplaySnapshot, DisplayUpdate, ImageKey, RefreshListener};
pub use crate::error::StartupError;
pub use crate::panel::PanelModel;
pub use crate::state::Screen;
pub use crate::television::{TelevisionState, MAX_CHANNEL, MAX_VOLUME, MIN_CHANNEL, MIN_VOLUME};

use clap::Parser;
use eframe::{egui, glow};
use fast_config::Config;

// Constants
pub const PROGRAM_TITLE: &str = "Television";
pub const INITIAL_WIDTH: f32 = 480.0;
pub const INITIAL_HEIGHT: f32 = 420.0;

#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path of the JSON5 config file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Directory holding ch0.png..ch9.png and nothingness.png
    #[arg(short, long)]
    pub images_dir: Option<String>,

    /// Switch the set on at startup
    #[arg(short, long, default_value_t = false)]
    pub powered_on: bool,
}

// The main application struct
pub struct TvRemote {
    pub screen: Screen,
    pub tv: TelevisionState<PanelModel>, // Core state, panel listens for refreshes
    powered_on_at_start: bool,
}

impl TvRemote {
    pub fn new(images_dir: impl Into<std::path::PathBuf>, powered_on: bool) -> Self {
        Self {
            screen: Screen::Initialising,
            tv: TelevisionState::new(PanelModel::new(images_dir)),
            powered_on_at_start: powered_on,
        }
    }

    // Paints the widgets once from the initial state. Called after the
    // widgets exist and before the event loop runs.
    pub fn init(&mut self) {
        if self.screen != Screen::Initialising {
            return;
        }
        self.tv.refresh();
        if self.powered_on_at_start {
            self.tv.power_toggle();
        }
        self.screen = Screen::Running;
        log::info!("Initialization complete. Screen set to Running.");
    }
}

impl eframe::App for TvRemote {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| match self.screen {
            Screen::Initialising => {
                ui.centered_and_justified(|ui| {
                    ui.label("Initialising...");
                });
                self.init();
            }
            Screen::About => ui::draw_about_screen(self, ui),
            Screen::Running => ui::draw_running_state(self, ui, ctx),
        });
    }

    fn on_exit(&mut self, _gl: Option<&glow::Context>) {
        log::info!(
            "Shutdown. Panel received {} refreshes.",
            self.tv.listener().refresh_count()
        );
    }
}

/// Loads the config file and resolves the images directory.
///
/// `--config` picks the file (default: [`config::default_config_path`]);
/// `--images-dir` wins over the file's `images_dir`.
pub fn load_settings(args: &Args) -> Result<(Config<ConfigData>, String), StartupError> {
    let config_path = args
        .config
        .clone()
        .unwrap_or_else(config::default_config_path);
    let config = Config::new(&config_path, ConfigData::default()).map_err(|e| {
        StartupError::Config {
            path: config_path.clone(),
            message: e.to_string(),
        }
    })?;
    log::info!("Configuration loaded from {}", config_path);

    let images_dir = args
        .images_dir
        .clone()
        .unwrap_or_else(|| config.data.images_dir.clone());
    log::debug!("Images directory: {}", images_dir);

    Ok((config, images_dir))
}

/// Loads the configuration and runs the window until it is closed.
pub fn run(args: Args) -> Result<(), StartupError> {
    let (config, images_dir) = load_settings(&args)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.data.window_width, config.data.window_height])
            .with_title(PROGRAM_TITLE),
        ..Default::default()
    };

    let powered_on = args.powered_on;
    eframe::run_native(
        PROGRAM_TITLE,
        options,
        Box::new(move |cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            let mut app = TvRemote::new(images_dir, powered_on);
            app.init();
            Ok(Box::new(app))
        }),
    )?;
    Ok(())
}
