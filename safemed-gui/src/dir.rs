use std::path::{Path, PathBuf};

/// The SafeMed data directory, holding the GUI configuration file and
/// the log file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafeMedDirectory(PathBuf);

impl SafeMedDirectory {
    pub fn new(path: PathBuf) -> Self {
        Self(path)
    }

    /// The default directory: a `.safemed` directory in the home
    /// directory on Linux-based OSes, the XDG standard configuration
    /// directory for the others.
    pub fn new_default() -> Result<Self, Box<dyn std::error::Error>> {
        #[cfg(target_os = "linux")]
        let dir = dirs::home_dir().map(|mut path| {
            path.push(".safemed");
            path
        });

        #[cfg(not(target_os = "linux"))]
        let dir = dirs::config_dir().map(|mut path| {
            path.push("SafeMed");
            path
        });

        dir.map(Self)
            .ok_or_else(|| "Failed to get default data directory".into())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    pub fn exists(&self) -> bool {
        self.0.exists()
    }

    pub fn init(&self) -> Result<(), std::io::Error> {
        std::fs::create_dir_all(&self.0)
    }

    pub fn gui_config_path(&self) -> PathBuf {
        self.0.join(crate::app::config::DEFAULT_FILE_NAME)
    }
}
