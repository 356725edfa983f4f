use anyhow::{Context, Result};

use medboard_auth::{
    AccessFilter, FileSessionStore, MemorySessionStore, SessionBackend, SessionManager,
    SessionStore, User,
};
use medboard_db_memory::ClinicalStore;

use crate::cli::OutputFormat;
use crate::config::AppConfig;

pub type DynSessionStore = Box<dyn SessionStore>;

/// Everything a command needs: the data, the session and the output format.
pub struct App {
    pub store: ClinicalStore,
    pub session: SessionManager<DynSessionStore>,
    pub format: OutputFormat,
}

impl App {
    pub fn open(config: &AppConfig, format: OutputFormat) -> Result<Self> {
        let store = match &config.data.fixtures {
            Some(path) => ClinicalStore::from_path(path)
                .with_context(|| format!("Failed to load fixtures from {}", path.display()))?,
            None => ClinicalStore::demo().context("Bundled demo data is invalid")?,
        };

        let backend = open_session_store(config)?;
        let session = SessionManager::restore(backend, config.session.keys());

        Ok(Self {
            store,
            session,
            format,
        })
    }

    pub fn user(&self) -> Option<&User> {
        self.session.user()
    }

    pub fn filter(&self) -> AccessFilter<'_> {
        AccessFilter::new(self.session.user(), self.store.record_set())
    }
}

fn open_session_store(config: &AppConfig) -> Result<DynSessionStore> {
    let session = &config.session;
    match session.backend {
        SessionBackend::Memory => {
            tracing::debug!("using in-memory session store");
            Ok(Box::new(MemorySessionStore::new()))
        }
        SessionBackend::File => {
            let store = match &session.directory {
                Some(dir) => FileSessionStore::open(dir),
                None => FileSessionStore::open_default(),
            }
            .context("Failed to open session store")?;
            tracing::debug!(dir = %store.dir().display(), "using file session store");
            Ok(Box::new(store))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medboard_auth::{Permission, Role, UserDirectory};

    fn memory_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.session.backend = SessionBackend::Memory;
        config
    }

    fn directory(app: &App) -> UserDirectory {
        app.store.user_directory().unwrap()
    }

    #[test]
    fn test_open_with_demo_data() {
        let app = App::open(&memory_config(), OutputFormat::Table).unwrap();
        assert!(app.user().is_none());
        assert!(app.filter().filter_patients_by_user().is_empty());
    }

    #[test]
    fn test_file_backend_restores_between_runs() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig::default();
        config.session.directory = Some(dir.path().to_path_buf());

        let mut app = App::open(&config, OutputFormat::Table).unwrap();
        let directory = directory(&app);
        app.session
            .login(&directory, "pharm.lind", "pharm123")
            .unwrap();

        let app = App::open(&config, OutputFormat::Json).unwrap();
        let user = app.user().unwrap();
        assert_eq!(user.role, Role::Pharmacist);
        assert!(!app.session.has_permission(Permission::PatientsView));
        assert!(app.filter().filter_patients_by_user().is_empty());
        assert_eq!(
            app.filter()
                .filter_activity_by_user(app.store.activity())
                .len(),
            1
        );
    }

    #[test]
    fn test_missing_fixture_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = memory_config();
        config.data.fixtures = Some(dir.path().join("absent.json"));

        let err = App::open(&config, OutputFormat::Table).err().unwrap();
        assert!(format!("{err:#}").contains("absent.json"));
    }
}
