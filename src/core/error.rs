//! Error types for codelog with contextual messages and exit codes
//!
//! Every failure of a release run is a value of [`CodelogError`]. The core never
//! terminates the process itself; `main` prints the error (with its help text)
//! and exits with the code returned by [`CodelogError::exit_code`].

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Exit codes for codelog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// User error (missing config, invalid args, duplicate version)
  User = 1,
  /// System error (I/O)
  System = 2,
  /// Validation failure (unparsable fragment or config)
  Validation = 3,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Main error type for codelog
#[derive(Debug)]
pub enum CodelogError {
  /// A release precondition did not hold
  Precondition(PreconditionError),

  /// An unreleased fragment could not be read
  Fragment(FragmentError),

  /// Configuration errors
  Config(ConfigError),

  /// I/O errors
  Io(io::Error),

  /// Generic error with message and optional context
  Message {
    message: String,
    context: Option<String>,
    help: Option<String>,
  },
}

impl CodelogError {
  /// Create a simple error message
  pub fn message(msg: impl Into<String>) -> Self {
    CodelogError::Message {
      message: msg.into(),
      context: None,
      help: None,
    }
  }

  /// Create an error with help text
  /// Add context to an existing error
  pub fn context(self, ctx: impl Into<String>) -> Self {
    let ctx_str = ctx.into();
    match self {
      CodelogError::Message { message, context, help } => CodelogError::Message {
        message,
        context: Some(context.map(|c| format!("{}\n{}", ctx_str, c)).unwrap_or(ctx_str)),
        help,
      },
      CodelogError::Io(e) => CodelogError::Message {
        message: format!("{}: {}", ctx_str, e),
        context: None,
        help: None,
      },
      _ => self,
    }
  }

  /// Get the appropriate exit code for this error
  pub fn exit_code(&self) -> ExitCode {
    match self {
      CodelogError::Precondition(_) => ExitCode::User,
      CodelogError::Fragment(_) => ExitCode::Validation,
      CodelogError::Config(ConfigError::Parse { .. }) => ExitCode::Validation,
      CodelogError::Config(_) => ExitCode::User,
      CodelogError::Io(_) => ExitCode::System,
      CodelogError::Message { .. } => ExitCode::User,
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      CodelogError::Precondition(e) => e.help_message(),
      CodelogError::Fragment(e) => e.help_message(),
      CodelogError::Config(e) => e.help_message(),
      CodelogError::Message { help, .. } => help.clone(),
      CodelogError::Io(_) => None,
    }
  }
}

impl fmt::Display for CodelogError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      CodelogError::Precondition(e) => write!(f, "{}", e),
      CodelogError::Fragment(e) => write!(f, "{}", e),
      CodelogError::Config(e) => write!(f, "{}", e),
      CodelogError::Io(e) => write!(f, "I/O error: {}", e),
      CodelogError::Message { message, context, .. } => {
        write!(f, "{}", message)?;
        if let Some(ctx) = context {
          write!(f, "\n{}", ctx)?;
        }
        Ok(())
      }
    }
  }
}

impl std::error::Error for CodelogError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      CodelogError::Io(e) => Some(e),
      _ => None,
    }
  }
}

impl From<io::Error> for CodelogError {
  fn from(err: io::Error) -> Self {
    CodelogError::Io(err)
  }
}

impl From<PreconditionError> for CodelogError {
  fn from(err: PreconditionError) -> Self {
    CodelogError::Precondition(err)
  }
}

impl From<FragmentError> for CodelogError {
  fn from(err: FragmentError) -> Self {
    CodelogError::Fragment(err)
  }
}

impl From<ConfigError> for CodelogError {
  fn from(err: ConfigError) -> Self {
    CodelogError::Config(err)
  }
}

impl From<serde_json::Error> for CodelogError {
  fn from(err: serde_json::Error) -> Self {
    CodelogError::message(format!("JSON error: {}", err))
  }
}

impl From<glob::PatternError> for CodelogError {
  fn from(err: glob::PatternError) -> Self {
    CodelogError::message(format!("Invalid glob pattern: {}", err))
  }
}

impl From<glob::GlobError> for CodelogError {
  fn from(err: glob::GlobError) -> Self {
    CodelogError::message(format!("Failed to list {}: {}", err.path().display(), err.error()))
  }
}

/// Release precondition failures, in the order they are checked
#[derive(Debug)]
pub enum PreconditionError {
  /// changelogs/codelog.yml is missing
  MissingConfig { path: PathBuf },

  /// The release date does not match `date_input_format`
  InvalidDateFormat { date: String, format: String },

  /// No version number was given
  MissingVersion,

  /// changelogs/releases/<version>.md already exists
  AlreadyExistingVersion { version: String },

  /// changelogs/unreleased/ holds no fragments
  NoDetectedChanges { version: String },
}

impl PreconditionError {
  fn help_message(&self) -> Option<String> {
    match self {
      PreconditionError::MissingConfig { .. } => Some("Run `codelog setup` to create the changelogs/ layout.".to_string()),
      PreconditionError::InvalidDateFormat { format, .. } => Some(format!(
        "Pass the date as `{}` or change `date_input_format` in changelogs/codelog.yml.",
        format
      )),
      PreconditionError::MissingVersion => Some("Usage: codelog release <VERSION> [DATE]".to_string()),
      PreconditionError::AlreadyExistingVersion { .. } => {
        Some("Pick a new version number or remove the existing release file.".to_string())
      }
      PreconditionError::NoDetectedChanges { .. } => {
        Some("Add a change with `codelog new` before releasing.".to_string())
      }
    }
  }
}

impl fmt::Display for PreconditionError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      PreconditionError::MissingConfig { path } => {
        write!(f, "Missing config file.\nExpected file: {}", path.display())
      }
      PreconditionError::InvalidDateFormat { date, format } => {
        write!(f, "Invalid date format: '{}' does not match '{}'", date, format)
      }
      PreconditionError::MissingVersion => write!(f, "Missing version number"),
      PreconditionError::AlreadyExistingVersion { version } => {
        write!(f, "Already existing version: {} has already been released", version)
      }
      PreconditionError::NoDetectedChanges { version } => {
        write!(f, "No detected changes: nothing to release for version {}", version)
      }
    }
  }
}

/// Fragment loading errors
#[derive(Debug)]
pub enum FragmentError {
  /// YAML syntax error in a fragment
  Parse { path: PathBuf, message: String },
}

impl FragmentError {
  fn help_message(&self) -> Option<String> {
    match self {
      FragmentError::Parse { path, .. } => Some(format!(
        "Fix the YAML syntax in {} and run the release again.",
        path.display()
      )),
    }
  }
}

impl fmt::Display for FragmentError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      FragmentError::Parse { path, message } => {
        write!(f, "Could not parse YAML in {}\n{}", path.display(), message)
      }
    }
  }
}

/// Configuration-related errors
#[derive(Debug)]
pub enum ConfigError {
  /// codelog.yml exists but is not valid
  Parse { path: PathBuf, message: String },

  /// `codelog setup` ran on an already configured project
  AlreadySetUp { path: PathBuf },

  /// Unknown bump level
  InvalidBump { level: String },

  /// The bumped component does not fit in a u64
  VersionOverflow { version: String, level: String },
}

impl ConfigError {
  fn help_message(&self) -> Option<String> {
    match self {
      ConfigError::Parse { .. } => Some("Compare the file with the defaults written by `codelog setup`.".to_string()),
      ConfigError::AlreadySetUp { .. } => None,
      ConfigError::InvalidBump { .. } => Some("Use one of: major, minor, patch.".to_string()),
      ConfigError::VersionOverflow { .. } => Some("Pass the version explicitly with `codelog release`.".to_string()),
    }
  }
}

impl fmt::Display for ConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ConfigError::Parse { path, message } => {
        write!(f, "Invalid configuration in {}\n{}", path.display(), message)
      }
      ConfigError::AlreadySetUp { path } => {
        write!(f, "codelog is already set up ({} exists)", path.display())
      }
      ConfigError::InvalidBump { level } => write!(f, "Invalid bump level '{}'", level),
      ConfigError::VersionOverflow { version, level } => {
        write!(f, "Cannot bump the {} version of {}: it overflows", level, version)
      }
    }
  }
}

/// Result type alias for codelog
pub type CodelogResult<T> = Result<T, CodelogError>;

/// Helper trait to add context to Results
pub trait ResultExt<T> {
  /// Add context to an error result
  fn context(self, ctx: impl Into<String>) -> CodelogResult<T>;

  /// Add context using a closure (lazy evaluation)
  fn with_context<F>(self, f: F) -> CodelogResult<T>
  where
    F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
  E: Into<CodelogError>,
{
  fn context(self, ctx: impl Into<String>) -> CodelogResult<T> {
    self.map_err(|e| e.into().context(ctx))
  }

  fn with_context<F>(self, f: F) -> CodelogResult<T>
  where
    F: FnOnce() -> String,
  {
    self.map_err(|e| e.into().context(f()))
  }
}

/// Pretty-print an error to stderr with help text
pub fn print_error(error: &CodelogError) {
  eprintln!("\n❌ {}\n", error);

  if let Some(help) = error.help_message() {
    eprintln!("💡 Help: {}\n", help);
  }
}
