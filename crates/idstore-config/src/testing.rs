//! Test environment abstraction for isolated testing.
//!
//! Provides `TestEnvironment` to manage:
//! - Temporary store roots
//! - An isolated home directory for global config
//! - A project directory for project-local config
//!
//! # Usage
//!
//! ```ignore
//! use idstore_config::testing::TestEnvironment;
//!
//! #[test]
//! fn test_something() {
//!     let env = TestEnvironment::new().unwrap();
//!     let config = env.load_config().unwrap();
//!     // config.store.root == env.store_root unless a layer overrides it
//! }
//! ```

use std::path::PathBuf;
use std::sync::atomic::{AtomicU32, Ordering};
use tempfile::TempDir;

use crate::{Config, ConfigError, ConfigSources};

/// Atomic counter for unique test IDs
static TEST_COUNTER: AtomicU32 = AtomicU32::new(0);

/// Isolated test environment with unique paths
pub struct TestEnvironment {
    /// Temporary directory (dropped on cleanup)
    _temp_dir: TempDir,
    /// Stand-in for `$HOME`
    pub home: PathBuf,
    /// Working directory holding `.idstore/config.toml`
    pub project_root: PathBuf,
    /// Isolated store root directory
    pub store_root: PathBuf,
    /// Unique test ID
    pub test_id: u32,
}

impl TestEnvironment {
    /// Create a new isolated test environment
    pub fn new() -> anyhow::Result<Self> {
        let test_id = TEST_COUNTER.fetch_add(1, Ordering::Relaxed);
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path();

        let home = root.join("home");
        let project_root = root.join("project");
        let store_root = root.join("store");

        std::fs::create_dir_all(&home)?;
        std::fs::create_dir_all(&project_root)?;
        std::fs::create_dir_all(&store_root)?;

        Ok(Self {
            _temp_dir: temp_dir,
            home,
            project_root,
            store_root,
            test_id,
        })
    }

    /// Global config path inside the fake home
    pub fn global_config_path(&self) -> PathBuf {
        self.home.join(".idstore").join("config.toml")
    }

    /// Project config path inside the project root
    pub fn project_config_path(&self) -> PathBuf {
        self.project_root.join(".idstore").join("config.toml")
    }

    /// Write the global config file
    pub fn write_global_config(&self, contents: &str) -> anyhow::Result<PathBuf> {
        self.write(self.global_config_path(), contents)
    }

    /// Write the project config file
    pub fn write_project_config(&self, contents: &str) -> anyhow::Result<PathBuf> {
        self.write(self.project_config_path(), contents)
    }

    /// Create a test file with content, relative to the project root
    pub fn create_file(&self, relative_path: &str, content: &[u8]) -> anyhow::Result<PathBuf> {
        let path = self.project_root.join(relative_path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, content)?;
        Ok(path)
    }

    /// Config sources rooted in this environment, without env overrides
    pub fn sources(&self) -> ConfigSources {
        ConfigSources {
            global: Some(self.global_config_path()),
            project: Some(self.project_config_path()),
            explicit: None,
            use_env: false,
        }
    }

    /// Load config from this environment's files.
    ///
    /// The store root defaults to `store_root` rather than the user's home.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let mut base = Config::default();
        base.store.root = self.store_root.clone();
        Config::load_over(base, &self.sources())
    }

    /// Environment variables for spawning the CLI against this environment.
    pub fn cli_env(&self) -> Vec<(String, String)> {
        vec![
            ("HOME".to_string(), self.home.display().to_string()),
            (
                crate::ENV_ROOT.to_string(),
                self.store_root.display().to_string(),
            ),
        ]
    }

    fn write(&self, path: PathBuf, contents: &str) -> anyhow::Result<PathBuf> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, contents)?;
        Ok(path)
    }
}
