//! Worker thread that loads the catalog.
//!
//! Zellij runs [`SpellbookWorker`] on its own thread. It owns the catalog
//! source, never sees `AppState`, and reports through the bridge channels: a
//! "loading" status first, then either the catalog and a summary, or a failure
//! status.

use crate::catalog::{CatalogSource, JsonCatalog};
use crate::infrastructure::paths;
use crate::worker::bridge;
use crate::worker::{WorkerMessage, WorkerResponse};
use serde::{Deserialize, Serialize};
use zellij_tile::prelude::{PluginMessage, ZellijWorker};
use zellij_tile::shim::post_message_to_plugin;

/// Catalog-loading worker.
#[derive(Serialize, Deserialize, Default)]
pub struct SpellbookWorker {
    /// Opened on the first request and reopened when the path changes.
    #[serde(skip)]
    source: Option<Box<dyn CatalogSource>>,
}

impl SpellbookWorker {
    /// Creates a worker that reads from `source` instead of a JSON file.
    #[must_use]
    pub fn with_source(source: Box<dyn CatalogSource>) -> Self {
        Self {
            source: Some(source),
        }
    }

    fn source_for(&mut self, path: &str) -> &mut Box<dyn CatalogSource> {
        let stale = self.source.as_ref().map_or(true, |s| s.location() != path);
        if stale {
            tracing::debug!(path, "opening catalog source");
        }
        let source = self
            .source
            .take()
            .filter(|_| !stale)
            .unwrap_or_else(|| Box::new(JsonCatalog::new(path)));
        self.source.insert(source)
    }

    fn load_catalog(&mut self, path: &str, post: &mut dyn FnMut(WorkerResponse)) {
        let source = self.source_for(path);
        post(WorkerResponse::status(format!(
            "Loading spells from {}",
            paths::display_path(source.location())
        )));

        let started = chrono::Utc::now();
        match source.load() {
            Ok(spells) => {
                let elapsed = (chrono::Utc::now() - started).num_milliseconds();
                let count = spells.len();
                tracing::info!(count, elapsed_ms = elapsed, "catalog loaded");
                post(WorkerResponse::CatalogLoaded { spells });
                post(WorkerResponse::status(format!(
                    "Loaded {count} spells in {elapsed} ms"
                )));
            }
            Err(e) => {
                tracing::warn!(error = %e, path, "catalog load failed");
                post(WorkerResponse::status(format!("Failed to load spells: {e}")));
            }
        }
    }

    /// Attaches the sender's trace context so worker spans join its trace.
    ///
    /// The returned guard must live for the duration of the operation.
    fn attach_parent_trace_context(message: &WorkerMessage) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{
            SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState,
        };

        let trace_context = message.trace_context()?;
        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let span_context = SpanContext::new(
            trace_id,
            span_id,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );

        Some(
            opentelemetry::Context::current()
                .with_remote_span_context(span_context)
                .attach(),
        )
    }

    /// Handles one request, passing every response to `post` as soon as it exists.
    pub fn handle_message(&mut self, message: WorkerMessage, post: &mut dyn FnMut(WorkerResponse)) {
        let _context_guard = Self::attach_parent_trace_context(&message);
        let _span = tracing::debug_span!("worker_handle_message", message_type = ?message).entered();

        match message {
            WorkerMessage::LoadCatalog { path, .. } => self.load_catalog(&path, post),
        }
    }
}

fn post_to_plugin(response: WorkerResponse) {
    match bridge::encode(&response) {
        Ok((name, payload)) => post_message_to_plugin(PluginMessage {
            name: name.to_string(),
            payload,
            worker_name: None,
        }),
        Err(e) => tracing::warn!(error = %e, "dropping worker response"),
    }
}

static WORKER_TRACING_INITIALIZED: std::sync::atomic::AtomicBool =
    std::sync::atomic::AtomicBool::new(false);

impl ZellijWorker<'_> for SpellbookWorker {
    fn on_message(&mut self, message: String, payload: String) {
        if !WORKER_TRACING_INITIALIZED.swap(true, std::sync::atomic::Ordering::Relaxed) {
            crate::observability::init_tracing(&crate::Config::default());
        }

        if message != bridge::REQUEST_CHANNEL {
            tracing::debug!(message, "ignoring message on unknown channel");
            return;
        }

        let worker_message: WorkerMessage = match serde_json::from_str(&payload) {
            Ok(msg) => msg,
            Err(e) => {
                tracing::warn!(error = %e, "failed to deserialize worker message");
                return;
            }
        };

        self.handle_message(worker_message, &mut post_to_plugin);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{handle_event, AppState, Event};
    use crate::domain::error::{Result, SpellbookError};
    use crate::domain::Spell;
    use crate::ui::theme::Theme;
    use std::path::Path;

    struct FixedSource {
        location: String,
        spells: Option<Vec<Spell>>,
    }

    impl CatalogSource for FixedSource {
        fn location(&self) -> &str {
            &self.location
        }

        fn load(&mut self) -> Result<Vec<Spell>> {
            self.spells
                .clone()
                .ok_or_else(|| SpellbookError::Catalog("bad file".to_string()))
        }
    }

    fn run(worker: &mut SpellbookWorker, path: &str) -> Vec<WorkerResponse> {
        let mut posted = Vec::new();
        worker.handle_message(WorkerMessage::load_catalog(path.to_string()), &mut |r| {
            posted.push(r);
        });
        posted
    }

    #[test]
    fn posts_loading_then_catalog_then_summary() {
        let spells = vec![Spell::new("Aid", 2, false, false)];
        let mut worker = SpellbookWorker::with_source(Box::new(FixedSource {
            location: "mem".into(),
            spells: Some(spells.clone()),
        }));

        let posted = run(&mut worker, "mem");
        assert_eq!(posted.len(), 3);
        assert_eq!(posted[0], WorkerResponse::status("Loading spells from mem"));
        assert_eq!(posted[1], WorkerResponse::CatalogLoaded { spells });
        match &posted[2] {
            WorkerResponse::Status { text } => assert!(text.starts_with("Loaded 1 spells in ")),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn failure_posts_status_only() {
        let mut worker = SpellbookWorker::with_source(Box::new(FixedSource {
            location: "mem".into(),
            spells: None,
        }));

        let posted = run(&mut worker, "mem");
        assert_eq!(posted.len(), 2);
        assert!(posted
            .iter()
            .all(|r| matches!(r, WorkerResponse::Status { .. })));
        assert_eq!(
            posted[1],
            WorkerResponse::status("Failed to load spells: Catalog error: bad file")
        );
    }

    #[test]
    fn new_path_opens_json_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spells.json");
        std::fs::write(&path, r#"[{"name": "Wish", "level": 9}]"#).unwrap();

        let mut worker = SpellbookWorker::with_source(Box::new(FixedSource {
            location: "mem".into(),
            spells: Some(vec![]),
        }));
        let posted = run(&mut worker, &path.display().to_string());
        assert_eq!(
            posted[1],
            WorkerResponse::CatalogLoaded {
                spells: vec![Spell::new("Wish", 9, false, false)]
            }
        );
    }

    const SRD_EXCERPT: &str = r#"{
      "version": 1,
      "spells": [
        {
          "name": "Fireball",
          "level": 3,
          "school": "Evocation",
          "casting_time": "1 action",
          "range": "150 feet",
          "components": ["V", "S", "M"],
          "material": "a tiny ball of bat guano and sulfur",
          "duration": "Instantaneous",
          "desc": "A bright streak flashes from your pointing finger.",
          "classes": ["Sorcerer", "Wizard"]
        },
        { "name": "Detect Magic", "level": 1, "ritual": "yes", "concentration": "yes" },
        { "name": "Fire Bolt", "level": 0 }
      ]
    }"#;

    /// Runs one load request and returns what reaches the plugin queue, in order.
    fn deliveries(worker: &mut SpellbookWorker, path: &Path) -> Vec<Event> {
        let mut wire = Vec::new();
        worker.handle_message(
            WorkerMessage::load_catalog(path.display().to_string()),
            &mut |response: WorkerResponse| wire.push(bridge::encode(&response).unwrap()),
        );

        wire.iter()
            .filter_map(|(name, payload)| bridge::route_delivery(name, payload))
            .collect()
    }

    #[test]
    fn catalog_file_reaches_the_session_through_the_bridge() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spells.json");
        std::fs::write(&path, SRD_EXCERPT).unwrap();

        let mut worker = SpellbookWorker::default();
        let events = deliveries(&mut worker, &path);
        assert_eq!(events.len(), 3);
        assert!(matches!(&events[0], Event::StatusPosted { text } if text.starts_with("Loading spells from ")));
        assert!(matches!(&events[2], Event::StatusPosted { text } if text.starts_with("Loaded 3 spells in ")));

        let mut state = AppState::new(Theme::default(), path.display().to_string());
        handle_event(&mut state, Event::Resize { rows: 30, cols: 120 }).unwrap();
        for event in events {
            handle_event(&mut state, event).unwrap();
        }

        let names: Vec<&str> = state.catalog.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Fire Bolt", "Detect Magic", "Fireball"]);
        assert!(state.catalog[1].ritual && state.catalog[1].concentration);
        assert!(state.catalog[2].components.contains("bat guano"));
        assert!(state.status.starts_with("Loaded 3 spells"));
    }

    #[test]
    fn missing_file_only_reports_status() {
        let dir = tempfile::tempdir().unwrap();
        let mut worker = SpellbookWorker::default();

        let events = deliveries(&mut worker, &dir.path().join("absent.json"));
        assert_eq!(events.len(), 2);
        assert!(matches!(&events[1], Event::StatusPosted { text } if text.starts_with("Failed to load spells: ")));
    }

    #[test]
    fn second_request_rereads_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spells.json");
        std::fs::write(&path, r#"[{"name": "Aid", "level": 2}]"#).unwrap();

        let mut worker = SpellbookWorker::default();
        deliveries(&mut worker, &path);

        std::fs::write(&path, r#"[{"name": "Aid", "level": 2}, {"name": "Bane", "level": 1}]"#)
            .unwrap();
        let events = deliveries(&mut worker, &path);
        assert_eq!(
            events[1],
            Event::CatalogLoaded {
                spells: vec![Spell::new("Bane", 1, false, false), Spell::new("Aid", 2, false, false)]
            }
        );
    }
}
