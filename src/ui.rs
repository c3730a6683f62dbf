use crate::about;
use crate::state::Screen;
use crate::television::{MAX_CHANNEL, MAX_VOLUME, MIN_CHANNEL, MIN_VOLUME};
use crate::{TvRemote, INITIAL_WIDTH, PROGRAM_TITLE};
use eframe::egui::{self, Color32, Context, RichText, Ui};

const POWER_ON_COLOR: Color32 = Color32::from_rgb(0, 200, 0);
const POWER_OFF_COLOR: Color32 = Color32::from_rgb(255, 0, 0);
const MUTED_COLOR: Color32 = Color32::YELLOW;
const SCREEN_COLOR: Color32 = Color32::from_rgb(16, 16, 16);
const SCREEN_HEIGHT: f32 = 240.0;
const DIGIT_SIZE: f32 = 36.0;

// One gesture on the panel, from a button or a key
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Gesture {
    Power,
    Mute,
    ChannelUp,
    ChannelDown,
    VolumeUp,
    VolumeDown,
}

impl TvRemote {
    // Every button and shortcut goes through here, one operation per gesture
    fn handle_gesture(&mut self, gesture: Gesture) {
        log::debug!("Gesture: {:?}", gesture);
        match gesture {
            Gesture::Power => self.tv.power_toggle(),
            Gesture::Mute => self.tv.mute_toggle(),
            Gesture::ChannelUp => self.tv.channel_up(),
            Gesture::ChannelDown => self.tv.channel_down(),
            Gesture::VolumeUp => self.tv.volume_up(),
            Gesture::VolumeDown => self.tv.volume_down(),
        }
    }
}

// --- UI Drawing Functions ---

pub(crate) fn draw_about_screen(app: &mut TvRemote, ui: &mut Ui) {
    ui.set_width(INITIAL_WIDTH);
    ui.vertical_centered(|ui| {
        ui.heading(format!("About {}", PROGRAM_TITLE));
        ui.separator();
        for line in about::about() {
            ui.label(line);
        }
        ui.separator();
        if ui.button("OK").clicked() {
            app.screen = Screen::Running;
        }
    });
}

pub(crate) fn draw_running_state(app: &mut TvRemote, ui: &mut Ui, ctx: &Context) {
    handle_shortcuts(app, ctx);

    draw_screen_view(app, ui);
    ui.add_space(8.0);

    ui.columns(2, |columns| {
        columns[0].vertical(|ui| {
            draw_readouts(app, ui);
            draw_sliders(app, ui);
        });
        columns[1].vertical(|ui| {
            draw_control_buttons(app, ui, ctx);
        });
    });
}

// Shortcuts run before any widget is drawn and consume their key, so a
// focused slider never sees the same press. One press, one gesture.
pub(crate) fn handle_shortcuts(app: &mut TvRemote, ctx: &Context) {
    let bindings = [
        (egui::Key::P, Gesture::Power),
        (egui::Key::M, Gesture::Mute),
        (egui::Key::ArrowUp, Gesture::ChannelUp),
        (egui::Key::ArrowDown, Gesture::ChannelDown),
        (egui::Key::ArrowRight, Gesture::VolumeUp),
        (egui::Key::ArrowLeft, Gesture::VolumeDown),
    ];
    for (key, gesture) in bindings {
        if ctx.input_mut(|i| i.consume_key(egui::Modifiers::NONE, key)) {
            app.handle_gesture(gesture);
        }
    }
}

/// Shows the picture for the current image key, stretched to the view.
/// Falls back to a painted placeholder when the file is missing.
fn draw_screen_view(app: &TvRemote, ui: &mut Ui) {
    let panel = app.tv.listener();
    let size = egui::vec2(ui.available_width(), SCREEN_HEIGHT);
    let path = panel.image_path();

    if path.is_file() {
        let uri = format!("file://{}", path.display());
        ui.add(
            egui::Image::new(uri)
                .maintain_aspect_ratio(false)
                .fit_to_exact_size(size),
        );
    } else {
        log::trace!("Image {} not found, drawing placeholder.", path.display());
        let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
        let painter = ui.painter();
        painter.rect_filled(rect, 4.0, SCREEN_COLOR);
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            panel.image_key.to_string(),
            egui::FontId::proportional(20.0),
            Color32::GRAY,
        );
    }
}

/// Draws the channel and volume digit displays.
fn draw_readouts(app: &TvRemote, ui: &mut Ui) {
    let panel = app.tv.listener();
    ui.horizontal(|ui| {
        ui.label("CH");
        ui.label(digits(panel.channel_digits));
        ui.add_space(20.0);
        ui.label("VOL");
        let volume_text = digits(panel.volume_digits);
        if panel.mute_indicator {
            ui.label(volume_text.color(MUTED_COLOR));
        } else {
            ui.label(volume_text);
        }
    });
}

fn digits(value: u8) -> RichText {
    RichText::new(format!("{}", value)).monospace().size(DIGIT_SIZE)
}

/// Draws the channel and volume sliders. Each change event reports the
/// slider's current value to the television.
fn draw_sliders(app: &mut TvRemote, ui: &mut Ui) {
    let mut channel = app.tv.listener().channel_slider;
    if ui
        .add(egui::Slider::new(&mut channel, MIN_CHANNEL..=MAX_CHANNEL).text("Channel"))
        .changed()
    {
        app.tv.set_channel(channel);
    }

    let mut volume = app.tv.listener().volume_slider;
    if ui
        .add(egui::Slider::new(&mut volume, MIN_VOLUME..=MAX_VOLUME).text("Volume"))
        .changed()
    {
        app.tv.set_volume(volume);
    }
}

/// Draws the control buttons in the right column.
fn draw_control_buttons(app: &mut TvRemote, ui: &mut Ui, ctx: &Context) {
    let (powered, muted) = {
        let panel = app.tv.listener();
        (panel.power_indicator, panel.mute_indicator)
    };
    let power_color = if powered {
        POWER_ON_COLOR
    } else {
        POWER_OFF_COLOR
    };
    if ui
        .button(
            RichText::new("Power")
                .color(Color32::BLACK)
                .background_color(power_color),
        )
        .clicked()
    {
        app.handle_gesture(Gesture::Power);
    }

    let mute_text = if muted {
        RichText::new("Mute")
            .color(Color32::BLACK)
            .background_color(MUTED_COLOR)
    } else {
        RichText::new("Mute")
    };
    if ui.button(mute_text).clicked() {
        app.handle_gesture(Gesture::Mute);
    }

    ui.horizontal(|ui| {
        if ui.button("CH +").clicked() {
            app.handle_gesture(Gesture::ChannelUp);
        }
        if ui.button("CH -").clicked() {
            app.handle_gesture(Gesture::ChannelDown);
        }
    });

    ui.horizontal(|ui| {
        if ui.button("VOL +").clicked() {
            app.handle_gesture(Gesture::VolumeUp);
        }
        if ui.button("VOL -").clicked() {
            app.handle_gesture(Gesture::VolumeDown);
        }
    });

    ui.separator();

    if ui.button("About").clicked() {
        app.screen = Screen::About;
    }

    if ui.button("Exit").clicked() {
        // Ask eframe to close the window. `on_exit` will be called.
        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
    }
}
