//! Workspace controller: turns user commands into store mutations and keeps
//! the view snapshots (tab list, editor text, statistics) up to date

pub mod debounce;
pub mod stats;

use std::time::{Duration, Instant};

use crate::core::document::{Document, NEW_DOCUMENT_TITLE};
use crate::core::error::StoreError;
use crate::core::storage::KeyValueStore;
use crate::core::store::DocumentStore;
use crate::core::workspace::Workspace;

use debounce::Debouncer;
use stats::TextStats;

/// One entry of the rendered tab list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabEntry {
    pub title: String,
    pub active: bool,
}

/// Severity of a user-visible notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Warning,
    Error,
}

/// A message the presentation layer must show to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    fn from_error(err: &StoreError) -> Self {
        let kind = match err {
            StoreError::LastDocument => NoticeKind::Warning,
            _ => NoticeKind::Error,
        };
        Self {
            kind,
            message: err.to_string(),
        }
    }
}

/// A yes/no question awaiting the user's answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    ConfirmDelete { index: usize, title: String },
}

impl Prompt {
    pub fn message(&self) -> String {
        match self {
            Prompt::ConfirmDelete { title, .. } => format!("Delete \"{title}\"?"),
        }
    }
}

/// An exported document, ready to be written wherever the user chooses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Owns the workspace and mediates every user action against it
pub struct WorkspaceController<S> {
    store: DocumentStore<S>,
    workspace: Workspace,
    editor_text: String,
    stats: TextStats,
    tabs: Vec<TabEntry>,
    tab_refresh: Debouncer,
    notice: Option<Notice>,
    prompt: Option<Prompt>,
}

impl<S: KeyValueStore> WorkspaceController<S> {
    /// Load the workspace from `store` and render the initial view
    pub fn new(store: DocumentStore<S>, tab_refresh_delay: Duration) -> Self {
        let workspace = store.load();
        let mut controller = Self {
            store,
            workspace,
            editor_text: String::new(),
            stats: TextStats::default(),
            tabs: Vec::new(),
            tab_refresh: Debouncer::new(tab_refresh_delay),
            notice: None,
            prompt: None,
        };
        controller.render_tabs();
        controller.load_editor();
        controller
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    /// Text currently bound to the editing surface
    pub fn editor_text(&self) -> &str {
        &self.editor_text
    }

    pub fn stats(&self) -> TextStats {
        self.stats
    }

    /// Tab list as last rendered
    pub fn tabs(&self) -> &[TabEntry] {
        &self.tabs
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn prompt(&self) -> Option<&Prompt> {
        self.prompt.as_ref()
    }

    /// True while a prompt or notice waits for the user
    pub fn awaiting_user(&self) -> bool {
        self.prompt.is_some() || self.notice.is_some()
    }

    /// The user typed in the editor
    pub fn on_edit(&mut self, text: String) {
        self.on_edit_at(text, Instant::now());
    }

    /// [`Self::on_edit`] with an explicit clock reading
    pub fn on_edit_at(&mut self, text: String, now: Instant) {
        let index = self.workspace.active_index();
        if let Err(e) = self.workspace.update_content(index, text) {
            self.report(e);
            return;
        }

        self.editor_text.clone_from(&self.workspace.active().content);
        self.stats = TextStats::of(&self.editor_text);
        self.persist();

        // Content is saved already; only the tab titles wait for a pause
        self.tab_refresh.schedule(now);
        tracing::debug!("Edited document {} ({} chars)", index, self.stats.chars);
    }

    /// Run the pending tab refresh if its quiet period has elapsed
    pub fn poll_refresh(&mut self) -> bool {
        self.poll_refresh_at(Instant::now())
    }

    /// [`Self::poll_refresh`] with an explicit clock reading
    pub fn poll_refresh_at(&mut self, now: Instant) -> bool {
        if self.tab_refresh.poll(now) {
            self.render_tabs();
            tracing::debug!("Refreshed tab list after typing pause");
            true
        } else {
            false
        }
    }

    /// Time until the pending tab refresh is due
    pub fn refresh_due_in(&self, now: Instant) -> Option<Duration> {
        self.tab_refresh.remaining(now)
    }

    /// The user clicked a tab
    pub fn on_select_tab(&mut self, index: usize) {
        if let Err(e) = self.workspace.set_active(index) {
            self.report(e);
            return;
        }
        self.load_editor();
        self.render_tabs();
    }

    /// The user asked for a new empty document
    pub fn on_new_document(&mut self) {
        self.workspace.add_document(NEW_DOCUMENT_TITLE, "");
        tracing::info!("Created document {}", self.workspace.active_index());
        self.after_structure_change();
    }

    /// The user clicked a tab's delete button
    ///
    /// Asks for confirmation unless the document is the last one, in which
    /// case the user is told it cannot be removed. Ignored while another
    /// prompt is still unanswered.
    pub fn on_delete_document(&mut self, index: usize) {
        if self.prompt.is_some() {
            tracing::debug!("Ignoring delete of {} while a prompt is open", index);
            return;
        }
        if self.workspace.len() <= 1 {
            self.report(StoreError::LastDocument);
            return;
        }
        match self.workspace.get(index) {
            Some(doc) => {
                self.prompt = Some(Prompt::ConfirmDelete {
                    index,
                    title: doc.display_title().to_string(),
                });
            }
            None => self.report(StoreError::IndexOutOfRange {
                index,
                len: self.workspace.len(),
            }),
        }
    }

    /// The user answered the pending prompt
    pub fn on_confirm(&mut self, confirmed: bool) {
        let Some(prompt) = self.prompt.take() else {
            return;
        };
        if !confirmed {
            return;
        }

        match prompt {
            Prompt::ConfirmDelete { index, .. } => match self.workspace.delete_document(index) {
                Ok(removed) => {
                    tracing::info!("Deleted document {} ({})", index, removed.display_title());
                    self.after_structure_change();
                }
                Err(e) => self.report(e),
            },
        }
    }

    /// The user imported a text file
    pub fn on_import(&mut self, filename: &str, bytes: &[u8]) {
        let content = String::from_utf8_lossy(bytes).into_owned();
        let doc = Document::imported(filename, content);
        tracing::info!("Imported {} as \"{}\"", filename, doc.title);
        self.workspace.push(doc);
        self.after_structure_change();
    }

    /// The active document as a downloadable text file
    pub fn on_export(&self) -> Export {
        let doc = self.workspace.active();
        Export {
            filename: doc.export_filename(),
            bytes: doc.content.as_bytes().to_vec(),
        }
    }

    /// Record a failure that happened outside the store, such as writing an
    /// export or reading an import
    pub fn notify_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::error!("{}", message);
        self.notice = Some(Notice {
            kind: NoticeKind::Error,
            message,
        });
    }

    fn after_structure_change(&mut self) {
        self.persist();
        self.render_tabs();
        self.load_editor();
    }

    fn persist(&mut self) {
        if let Err(e) = self.store.save(&self.workspace) {
            self.report(e);
        }
    }

    fn render_tabs(&mut self) {
        // A full render supersedes any refresh still waiting on typing
        self.tab_refresh.cancel();
        let active = self.workspace.active_index();
        self.tabs = self
            .workspace
            .documents()
            .iter()
            .enumerate()
            .map(|(index, doc)| TabEntry {
                title: doc.display_title().to_string(),
                active: index == active,
            })
            .collect();
    }

    fn load_editor(&mut self) {
        self.editor_text = self.workspace.active().content.clone();
        self.stats = TextStats::of(&self.editor_text);
    }

    fn report(&mut self, err: StoreError) {
        match err {
            StoreError::LastDocument => tracing::info!("Refused to delete the last document"),
            StoreError::IndexOutOfRange { .. } => tracing::error!("Invalid document index: {}", err),
            _ => tracing::error!("{}", err),
        }
        self.notice = Some(Notice::from_error(&err));
    }
}
