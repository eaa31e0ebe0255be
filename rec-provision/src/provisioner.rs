use std::error::Error;
use std::fs::{self, File, FileTimes};
use std::path::{Path, PathBuf};
use std::{fmt, io};

use log::{debug, info, warn};

pub const DATA_DIRECTORY: &str = "data";
pub const ENV_FILE: &str = ".env";
pub const ENV_EXAMPLE_FILE: &str = ".env.example";

/// Which candidate file ended up in the data directory.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EnvSource {
    Primary,
    Fallback,
}

impl EnvSource {
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Primary => ENV_FILE,
            Self::Fallback => ENV_EXAMPLE_FILE,
        }
    }
}

pub enum ProvisionError {
    MissingSource { project_dir: PathBuf },
    Io { path: PathBuf, error: io::Error },
}

impl fmt::Display for ProvisionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSource { project_dir } => write!(
                f,
                "Neither {ENV_FILE} nor {ENV_EXAMPLE_FILE} found in {}!",
                project_dir.display()
            ),
            Self::Io { path, error } => write!(f, "{}: {error}", path.display()),
        }
    }
}

impl fmt::Debug for ProvisionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl Error for ProvisionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::MissingSource { .. } => None,
            Self::Io { error, .. } => Some(error),
        }
    }
}

fn _io_error(path: &Path) -> impl FnOnce(io::Error) -> ProvisionError {
    move |error| ProvisionError::Io {
        path: path.to_path_buf(),
        error,
    }
}

/// Copy contents, access/modification times and permissions.
/// Times must be set through a writable handle, before permissions may make
/// the copy read-only.
fn _copy_with_metadata(source: &Path, destination: &Path) -> io::Result<()> {
    let metadata = fs::metadata(source)?;

    let mut reader = File::open(source)?;
    let mut writer = File::create(destination)?;
    io::copy(&mut reader, &mut writer)?;

    writer.set_times(
        FileTimes::new()
            .set_accessed(metadata.accessed()?)
            .set_modified(metadata.modified()?),
    )?;
    writer.set_permissions(metadata.permissions())
}

pub struct Provisioner {
    _project_dir: PathBuf,
}

impl Provisioner {
    pub fn new(project_dir: impl Into<PathBuf>) -> Self {
        Self {
            _project_dir: project_dir.into(),
        }
    }

    pub fn project_dir(&self) -> &Path {
        &self._project_dir
    }

    pub fn data_directory(&self) -> PathBuf {
        self._project_dir.join(DATA_DIRECTORY)
    }

    pub fn destination(&self) -> PathBuf {
        self.data_directory().join(ENV_FILE)
    }

    /// Return the first candidate that exists, preferring `.env` over `.env.example`.
    pub fn find_source(&self) -> Option<(EnvSource, PathBuf)> {
        [EnvSource::Primary, EnvSource::Fallback]
            .into_iter()
            .map(|source| (source, self._project_dir.join(source.file_name())))
            .find(|(_, path)| path.is_file())
    }

    pub fn provision(&self) -> Result<EnvSource, ProvisionError> {
        let data_directory = self.data_directory();
        fs::create_dir_all(&data_directory).map_err(_io_error(&data_directory))?;
        debug!("Ensured data directory {}", data_directory.display());

        let (source, path) = self
            .find_source()
            .ok_or_else(|| ProvisionError::MissingSource {
                project_dir: self._project_dir.clone(),
            })?;

        let destination = self.destination();
        _copy_with_metadata(&path, &destination).map_err(_io_error(&destination))?;

        match source {
            EnvSource::Primary => info!("Copied {ENV_FILE} to data directory"),
            EnvSource::Fallback => warn!(
                "Using {ENV_EXAMPLE_FILE}! Create {ENV_FILE} file for production."
            ),
        }

        Ok(source)
    }
}

pub fn provision(project_dir: impl Into<PathBuf>) -> Result<EnvSource, ProvisionError> {
    Provisioner::new(project_dir).provision()
}
