use scrapwiki_engine::{
    CdnRewriter, EngineError, Identity, ImageUrlRewrite, KnownTags, RenderOptions, TagMatching,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to read known tags file at {tags_path}: {source}")]
    KnownTagsReadError {
        tags_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse known tags file at {tags_path}: {source}")]
    KnownTagsParseError {
        tags_path: PathBuf,
        source: EngineError,
    },

    #[error("Invalid image source pattern {pattern:?}: {source}")]
    InvalidImageRewrite {
        pattern: String,
        source: EngineError,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// JSON file holding the known tags, either a list or a tag index.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub known_tags_path: Option<PathBuf>,
    pub render: RenderOptions,
    pub tags: TagsConfig,
    pub images: ImagesConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagsConfig {
    pub matching: TagMatching,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImagesConfig {
    /// Base URL of the converted images. Without it image URLs are left alone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cdn_base: Option<String>,
    /// Regex for source image URLs; group 1 is the file key.
    pub source_pattern: String,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            cdn_base: None,
            source_pattern: CdnRewriter::DEFAULT_SOURCE_PATTERN.to_string(),
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            log::debug!("no config file at {}", config_path.display());
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the known tags path
        config.known_tags_path = config
            .known_tags_path
            .map(|path| Self::expand_path(&path).unwrap_or(path));

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/scrapwiki");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Builds the image URL rewrite hook: the CDN rewriter when `cdn_base`
    /// is set, identity otherwise.
    pub fn image_rewriter(&self) -> Result<Box<dyn ImageUrlRewrite>, ConfigError> {
        let Some(base) = &self.images.cdn_base else {
            return Ok(Box::new(Identity));
        };
        let pattern = &self.images.source_pattern;
        let rewriter = CdnRewriter::with_pattern(base.as_str(), pattern).map_err(|source| {
            ConfigError::InvalidImageRewrite {
                pattern: pattern.clone(),
                source,
            }
        })?;
        log::debug!("rewriting image URLs onto {}", rewriter.base());
        Ok(Box::new(rewriter))
    }

    /// Reads the known-tags registry, applying the configured matching mode.
    ///
    /// Without `known_tags_path` the registry is empty.
    pub fn load_known_tags(&self) -> Result<KnownTags, ConfigError> {
        let matching = self.tags.matching;
        let Some(tags_path) = &self.known_tags_path else {
            return Ok(KnownTags::new(matching));
        };

        let content = std::fs::read_to_string(tags_path).map_err(|source| {
            ConfigError::KnownTagsReadError {
                tags_path: tags_path.clone(),
                source,
            }
        })?;
        let known = KnownTags::from_json_str(matching, &content).map_err(|source| {
            ConfigError::KnownTagsParseError {
                tags_path: tags_path.clone(),
                source,
            }
        })?;

        log::debug!(
            "loaded {} known tags from {}",
            known.len(),
            tags_path.display()
        );
        Ok(known)
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
