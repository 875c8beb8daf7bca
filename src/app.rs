//! Main application state and UI coordination

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use eframe::egui;

use crate::controller::debounce::Debouncer;
use crate::controller::WorkspaceController;
use crate::core::config::AppConfig;
use crate::core::storage::{FileStorage, KeyValueStore, MemoryStorage};
use crate::core::store::DocumentStore;
use crate::ui::{
    dialogs::Dialogs, editor::EditorPanel, status_bar::StatusBar, tabs::TabBar, toolbar::Toolbar,
};

/// Quiet period before style changes are written to disk
const CONFIG_SAVE_DELAY: Duration = Duration::from_millis(500);

/// Writes the configuration file, coalescing bursts of changes such as a
/// slider drag into one write
pub struct ConfigWriter {
    path: Option<PathBuf>,
    pending: Debouncer,
}

impl ConfigWriter {
    pub fn new(path: Option<PathBuf>, delay: Duration) -> Self {
        Self {
            path,
            pending: Debouncer::new(delay),
        }
    }

    /// Note a change; the write happens once changes stop for the delay
    pub fn mark_changed(&mut self, now: Instant) {
        self.pending.schedule(now);
    }

    /// Write now if a deferred write has come due
    pub fn flush_due(&mut self, config: &AppConfig, now: Instant) -> bool {
        if self.pending.poll(now) {
            self.write(config);
            true
        } else {
            false
        }
    }

    /// Write immediately, absorbing any deferred write
    pub fn flush(&mut self, config: &AppConfig) {
        self.pending.cancel();
        self.write(config);
    }

    pub fn due_in(&self, now: Instant) -> Option<Duration> {
        self.pending.remaining(now)
    }

    fn write(&self, config: &AppConfig) {
        let Some(ref path) = self.path else {
            tracing::warn!("No config directory; settings will not be saved");
            return;
        };
        if let Err(e) = config.save_to(path) {
            tracing::error!("Failed to save config: {:#}", e);
        }
    }
}

/// Main application state
pub struct TyplyApp {
    /// Workspace controller driving every document action
    pub controller: WorkspaceController<Box<dyn KeyValueStore>>,
    /// Application configuration
    pub config: AppConfig,
    /// Whether the style panel is expanded
    pub style_panel_visible: bool,
    /// Persists `config`
    config_writer: ConfigWriter,
}

impl TyplyApp {
    /// Create a new application instance
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        // Load config or use defaults
        let config = AppConfig::load().unwrap_or_else(|e| {
            tracing::warn!("Using default config: {:#}", e);
            AppConfig::default()
        });

        let store = DocumentStore::new(Self::open_storage(), config.storage_key.clone());
        let controller = WorkspaceController::new(store, config.tab_refresh_delay());

        Self {
            controller,
            config,
            style_panel_visible: false,
            config_writer: ConfigWriter::new(AppConfig::config_path(), CONFIG_SAVE_DELAY),
        }
    }

    /// Pick the persistence provider, falling back to memory when the data
    /// directory cannot be created
    fn open_storage() -> Box<dyn KeyValueStore> {
        let storage = FileStorage::default_location();
        match std::fs::create_dir_all(storage.root()) {
            Ok(()) => {
                tracing::info!("Storing documents in {}", storage.root().display());
                Box::new(storage)
            }
            Err(e) => {
                tracing::error!(
                    "Cannot use {} ({}); documents will not survive a restart",
                    storage.root().display(),
                    e
                );
                Box::new(MemoryStorage::new())
            }
        }
    }

    /// Ask for a text file and import it as a new document
    pub fn import_file(&mut self) {
        let mut dialog = rfd::FileDialog::new().add_filter("Text", &["txt"]);
        if let Some(ref dir) = self.config.last_import_dir {
            dialog = dialog.set_directory(dir);
        }
        let Some(path) = dialog.pick_file() else {
            return;
        };

        match std::fs::read(&path) {
            Ok(bytes) => {
                let filename = path
                    .file_name()
                    .map(|s| s.to_string_lossy().to_string())
                    .unwrap_or_default();
                self.controller.on_import(&filename, &bytes);
            }
            Err(e) => {
                self.controller
                    .notify_error(format!("Failed to read {}: {}", path.display(), e));
            }
        }
        self.remember_dir(&path, |config| &mut config.last_import_dir);
    }

    /// Ask where to save the active document and write it there
    pub fn export_file(&mut self) {
        let export = self.controller.on_export();
        let mut dialog = rfd::FileDialog::new()
            .add_filter("Text", &["txt"])
            .set_file_name(&export.filename);
        if let Some(ref dir) = self.config.last_export_dir {
            dialog = dialog.set_directory(dir);
        }
        let Some(path) = dialog.save_file() else {
            return;
        };

        match std::fs::write(&path, &export.bytes) {
            Ok(()) => tracing::info!("Exported document to {}", path.display()),
            Err(e) => self
                .controller
                .notify_error(format!("Failed to save {}: {}", path.display(), e)),
        }
        self.remember_dir(&path, |config| &mut config.last_export_dir);
    }

    /// Persist the configuration right away
    pub fn save_config(&mut self) {
        self.config_writer.flush(&self.config);
    }

    /// Persist the configuration once edits to it pause
    pub fn config_changed(&mut self) {
        self.config_writer.mark_changed(Instant::now());
    }

    fn remember_dir(&mut self, path: &Path, slot: fn(&mut AppConfig) -> &mut Option<PathBuf>) {
        let dir = path.parent().map(Path::to_path_buf);
        let entry = slot(&mut self.config);
        if *entry != dir {
            *entry = dir;
            self.save_config();
        }
    }
}

impl eframe::App for TyplyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.controller.poll_refresh();
        self.config_writer.flush_due(&self.config, Instant::now());

        // Everything behind an open prompt or notice stays inert
        let enabled = !self.controller.awaiting_user();

        // Handle keyboard shortcuts
        let (new_document, export) = ctx.input(|i| {
            (
                enabled && i.modifiers.command && i.key_pressed(egui::Key::N),
                enabled && i.modifiers.command && i.key_pressed(egui::Key::S),
            )
        });
        if new_document {
            self.controller.on_new_document();
        }
        if export {
            self.export_file();
        }

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.add_enabled_ui(enabled, |ui| Toolbar::show(ui, self));
        });

        egui::TopBottomPanel::top("tabs").show(ctx, |ui| {
            ui.add_enabled_ui(enabled, |ui| TabBar::show(ui, self));
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            StatusBar::show(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(enabled, |ui| EditorPanel::show(ui, self));
        });

        Dialogs::show(ctx, self);

        // Wake up for deferred work even if no input arrives
        let now = Instant::now();
        let due = [
            self.controller.refresh_due_in(now),
            self.config_writer.due_in(now),
        ];
        if let Some(due) = due.into_iter().flatten().min() {
            ctx.request_repaint_after(due);
        }
    }
}
