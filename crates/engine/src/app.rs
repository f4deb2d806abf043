//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::config::{EngineConfig, OutputFormat};
use crate::infrastructure::content_sources::{BuiltinContent, JsonFileContent};
use crate::infrastructure::ports::{ContentError, ContentSource};
use crate::use_cases::PresentationSession;

/// Main application state.
///
/// Holds the live session and the settings the driver needs.
pub struct App {
    pub session: PresentationSession,
    pub output: OutputFormat,
}

impl App {
    /// Build the application from configuration.
    ///
    /// Uses the JSON file named by the configuration when present, the
    /// built-in pack otherwise.
    pub fn from_config(config: &EngineConfig) -> Result<Self, ContentError> {
        let source = content_source(config);
        Self::new(source.as_ref(), config.output)
    }

    pub fn new(source: &dyn ContentSource, output: OutputFormat) -> Result<Self, ContentError> {
        let origin = source.describe();
        let pack = source.load()?;
        tracing::info!(
            source = %origin,
            questions = pack.question_count(),
            witnesses = pack.witnesses().len(),
            "Content loaded"
        );

        Ok(Self {
            session: PresentationSession::new(Arc::new(pack)),
            output,
        })
    }
}

fn content_source(config: &EngineConfig) -> Box<dyn ContentSource> {
    match &config.content_path {
        Some(path) => Box::new(JsonFileContent::new(path.clone())),
        None => Box::new(BuiltinContent::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MockContentSource;
    use tribunal_domain::{DomainError, Stage};

    #[test]
    fn loads_from_the_port_once() {
        let pack = BuiltinContent::new().load().expect("built-in pack");
        let mut source = MockContentSource::new();
        source
            .expect_describe()
            .returning(|| "mock".to_string());
        source
            .expect_load()
            .times(1)
            .return_once(move || Ok(pack));

        let app = App::new(&source, OutputFormat::Json).expect("app");

        assert_eq!(app.output, OutputFormat::Json);
        assert_eq!(app.session.playthrough().stage(), Stage::Intro);
    }

    #[test]
    fn content_errors_propagate() {
        let mut source = MockContentSource::new();
        source
            .expect_describe()
            .returning(|| "mock".to_string());
        source.expect_load().returning(|| {
            Err(ContentError::Invalid(DomainError::validation(
                "question bank is empty",
            )))
        });

        let result = App::new(&source, OutputFormat::Text);

        assert!(matches!(result, Err(ContentError::Invalid(_))));
    }

    #[test]
    fn default_config_uses_builtin_pack() {
        let app = App::from_config(&EngineConfig::default()).expect("app");
        assert_eq!(app.session.playthrough().content().question_count(), 4);
    }

    #[test]
    fn configured_path_is_read_from_disk() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = EngineConfig {
            content_path: Some(dir.path().join("missing.json")),
            output: OutputFormat::Text,
        };

        let result = App::from_config(&config);

        assert!(matches!(result, Err(ContentError::Io { .. })));
    }
}
