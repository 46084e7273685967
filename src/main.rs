//! Parallelogramm-Editor.
//!
//! Drei Punkte per Doppelklick setzen, der vierte wird berechnet; Kanten und
//! eingeschriebene Ellipse lassen sich ein- und ausblenden.

use eframe::egui;
use parallelogram_editor::{render, ui, AppIntent, EditorOptions, EditorSession};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Parallelogramm-Editor v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([960.0, 720.0])
                .with_title("Parallelogramm-Editor"),
            renderer: eframe::Renderer::Glow,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Parallelogramm-Editor",
            options,
            Box::new(|_cc| Ok(Box::new(ParallelogramApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct ParallelogramApp {
    session: EditorSession,
    input: ui::InputState,
}

impl ParallelogramApp {
    fn new() -> Self {
        // Optionen aus TOML laden (beim ersten Start Datei anlegen)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_or_create(&config_path);

        Self {
            // Die echte Flächengröße kommt mit dem ersten Frame
            session: EditorSession::new(editor_options, [0.0, 0.0]),
            input: ui::InputState::new(),
        }
    }
}

impl eframe::App for ParallelogramApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, self.session.state());
        events.extend(ui::render_toolbar(ctx, self.session.state()));
        events.extend(ui::collect_keyboard_intents(ctx));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                events.push(AppIntent::SurfaceResized {
                    size: [rect.width(), rect.height()],
                });
                events.extend(self.input.collect_canvas_events(ui, &response));

                self.process_events(std::mem::take(&mut events));

                let painter = ui.painter_at(rect);
                let background = self.session.state().options.background_color;
                let mut surface = render::EguiSurface::new(&painter, rect, background);
                self.session.frame(&mut surface);
            });

        // Toolbar-/Tastatur-Events ohne Zeichenfläche (z.B. minimiertes Fenster)
        self.process_events(events);

        if self.session.is_running() && self.input.is_pressed() {
            ctx.request_repaint();
        }
    }
}

impl ParallelogramApp {
    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if event == AppIntent::ResetRequested {
                self.input = ui::InputState::new();
            }
            if let Err(e) = self.session.handle_intent(event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }
}
