use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    Other,
}

impl Platform {
    pub const fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Other
        }
    }
}

/// Video codec name handed to ffmpeg's `-c:v`. Not validated here; ffmpeg
/// rejects unknown or unavailable encoders itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoder(String);

impl Encoder {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// An empty override counts as no override.
    pub fn resolve(explicit: Option<String>, platform: Platform) -> Self {
        match explicit.filter(|name| !name.is_empty()) {
            Some(name) => Self(name),
            None => default_encoder(platform),
        }
    }
}

impl fmt::Display for Encoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Hardware HEVC encoder where one is commonly present, x265 otherwise.
/// No probing is done.
pub fn default_encoder(platform: Platform) -> Encoder {
    let name = match platform {
        Platform::Windows => "hevc_nvenc",
        Platform::MacOs => "hevc_videotoolbox",
        Platform::Other => "libx265",
    };
    Encoder::new(name)
}
