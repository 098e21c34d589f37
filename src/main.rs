//! Laufzeit-Kurveneditor (Headless-Sitzung).
//!
//! Spielt eine kurze Bearbeitungssitzung über den Controller ab und gibt
//! die resultierende Keyframe-Kurve als JSON aus.

use glam::Vec2;
use runtime_curve_editor::{AppController, AppIntent, AppState, EditorOptions};
use std::cell::Cell;
use std::rc::Rc;

fn main() -> anyhow::Result<()> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> anyhow::Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .parse_default_env()
            .init();

        log::info!(
            "Laufzeit-Kurveneditor v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let options = EditorOptions::load_from_file(&config_path);

        let mut session = EditorSession::new(options);
        session.run_script()?;

        println!("{}", serde_json::to_string_pretty(&session.state.curve)?);
        Ok(())
    }
}

/// Controller + State einer Sitzung mit Änderungszähler.
struct EditorSession {
    state: AppState,
    controller: AppController,
    notifications: Rc<Cell<usize>>,
}

impl EditorSession {
    fn new(options: EditorOptions) -> Self {
        let mut controller = AppController::new();
        let notifications = Rc::new(Cell::new(0));
        let counter = Rc::clone(&notifications);
        controller.subscribe(move |curve| {
            counter.set(counter.get() + 1);
            log::info!("Kurve aktualisiert: {} Keys", curve.len());
        });

        Self {
            state: AppState::with_options(options),
            controller,
            notifications,
        }
    }

    fn run_script(&mut self) -> anyhow::Result<()> {
        self.process(AppIntent::PresetSelected {
            name: Some("Ease In Out".to_string()),
        })?;

        // Ersten Ausgangs-Steuerpunkt nach oben ziehen
        let view = self.state.view.curve_view();
        if let Some(&control) = self.state.display_path.points().get(1) {
            let start = view.curve_to_screen(control);
            self.process(AppIntent::PointerPressed { screen_pos: start })?;
            self.process(AppIntent::PointerDragged {
                screen_pos: start + Vec2::new(10.0, -40.0),
            })?;
            self.process(AppIntent::PointerReleased)?;
        }
        self.process(AppIntent::FrameTick)?;

        // Anker in der Mitte einfügen und wieder löschen
        let middle = Vec2::new(0.5, self.state.curve.evaluate(0.5));
        self.process(AppIntent::InsertAnchorRequested {
            screen_pos: view.curve_to_screen(middle),
        })?;
        self.process(AppIntent::FrameTick)?;
        log::info!("Nach Einfügen: {} Keys", self.state.curve.len());

        if let Some(&anchor) = self.state.display_path.points().get(3) {
            self.process(AppIntent::DeleteAnchorRequested {
                screen_pos: view.curve_to_screen(anchor),
            })?;
            self.process(AppIntent::FrameTick)?;
        }

        let scene = self.controller.build_curve_scene(&self.state);
        log::info!(
            "Sitzung beendet: {} Benachrichtigungen, {} Commands, {} Anker sichtbar",
            self.notifications.get(),
            self.state.command_log.len(),
            scene.anchor_count()
        );
        Ok(())
    }

    fn process(&mut self, intent: AppIntent) -> anyhow::Result<()> {
        self.controller.handle_intent(&mut self.state, intent)
    }
}
