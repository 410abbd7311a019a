use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};

macro_rules! get_path_env_var { () => { "LFM_GROUP_STATUS_CONFIG" } }
pub static PATH_ENV_VAR: &str = get_path_env_var!();

const CONFIG_DIR_NAME: &str = "lastfm-group-status";
const CONFIG_FILE_NAME: &str = "config.toml";

/// How the user specified (or did not specify) the configuration file path.
#[derive(Clone, Debug)]
pub enum ConfigPathChoice {
    /// Explicitly provided by a flag in the CLI.
    /// This has the highest priority, and overrides the environmental variable and default path.
    Explicit(PathBuf),
    /// Inferred based on an environmental variable.
    /// This has the second-highest priority, overriding the default path but not one passed through a CLI flag.
    Environmental(std::ffi::OsString),
    /// Automatically determined from the user configuration directory.
    /// This is the default, hence the name.
    Automatic(PathBuf),
}
impl ConfigPathChoice {
    pub fn new(explicit: Option<&Path>) -> ConfigPathChoice {
        if let Some(explicit) = explicit {
            Self::Explicit(explicit.to_owned())
        } else {
            std::env::var_os(PATH_ENV_VAR)
                .map(Self::Environmental)
                .unwrap_or_else(Self::automatic)
        }
    }

    pub fn automatic() -> Self {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::Automatic(base.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    pub fn as_path(&self) -> &Path {
        match self {
            Self::Explicit(explicit) => explicit,
            Self::Environmental(environmental) => Path::new(environmental),
            Self::Automatic(automatic) => automatic,
        }
    }

    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        match self {
            Self::Explicit(buf) => buf.to_string_lossy(),
            Self::Environmental(os_string) => os_string.to_string_lossy(),
            Self::Automatic(buf) => buf.to_string_lossy(),
        }
    }

    pub const fn describe_for_choice_reasoning_suffix(&self) -> &'static str {
        match self {
            Self::Explicit(_) => "explicitly provided",
            Self::Environmental(_) => concat!("sourced from the ", get_path_env_var!(), " environmental variable"),
            Self::Automatic(_) => "the application default",
        }
    }
}
impl AsRef<Path> for ConfigPathChoice {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}
impl core::default::Default for ConfigPathChoice {
    fn default() -> Self {
        Self::automatic()
    }
}
