use std::io::Cursor;

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::auth::application::domain::entities::{Avatar, ImageFormat, UserRole};
use crate::config::{ConfigError, ConfigSource};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AvatarError {
    #[error("Image is not valid base64")]
    InvalidEncoding,

    #[error("Image must be at most {0} bytes")]
    TooLarge(usize),

    #[error("Image must be a JPEG or PNG")]
    UnsupportedFormat,

    #[error("Image could not be decoded")]
    Unreadable,

    #[error("Image must be between {min} and {max} pixels per side, got {width}x{height}")]
    BadDimensions {
        min: u32,
        max: u32,
        width: u32,
        height: u32,
    },
}

#[derive(Debug, Clone)]
pub struct AvatarPolicy {
    pub max_file_size_bytes: usize,
    pub min_side_px: u32,
    pub max_side_px: u32,
    pub placeholder_url: String,
}

impl AvatarPolicy {
    pub const DEFAULT_PLACEHOLDER_URL: &'static str = "https://placehold.co/500x500.jpg";

    /// Reads `AVATAR_PLACEHOLDER_URL`, fallback to placehold.co.
    pub fn from_source(source: &ConfigSource) -> Result<Self, ConfigError> {
        let placeholder_url = source
            .get("AVATAR_PLACEHOLDER_URL")
            .unwrap_or_else(|| Self::DEFAULT_PLACEHOLDER_URL.to_string());

        if !placeholder_url.starts_with("http://") && !placeholder_url.starts_with("https://") {
            return Err(ConfigError::Invalid {
                key: "AVATAR_PLACEHOLDER_URL",
                reason: "must be an http(s) URL".to_string(),
            });
        }

        Ok(Self::new(placeholder_url))
    }

    pub fn new(placeholder_url: String) -> Self {
        Self {
            max_file_size_bytes: 1024 * 1024, // 1MB
            min_side_px: 500,
            max_side_px: 1000,
            placeholder_url,
        }
    }

    pub fn placeholder_for(&self, role: UserRole) -> String {
        format!(
            "{}?text={}",
            self.placeholder_url,
            role.as_str().to_uppercase()
        )
    }

    /// Decodes a base64 upload (a `data:` URL prefix is tolerated) and checks
    /// size, format and dimensions.
    pub fn decode(&self, encoded: &str) -> Result<Avatar, AvatarError> {
        let payload = match encoded.split_once(";base64,") {
            Some((prefix, rest)) if prefix.starts_with("data:") => rest,
            _ => encoded,
        };

        let data = STANDARD
            .decode(payload.trim())
            .map_err(|_| AvatarError::InvalidEncoding)?;

        if data.len() > self.max_file_size_bytes {
            return Err(AvatarError::TooLarge(self.max_file_size_bytes));
        }

        let (format, codec) = match image::guess_format(&data) {
            Ok(image::ImageFormat::Jpeg) => (ImageFormat::Jpeg, image::ImageFormat::Jpeg),
            Ok(image::ImageFormat::Png) => (ImageFormat::Png, image::ImageFormat::Png),
            _ => return Err(AvatarError::UnsupportedFormat),
        };

        let (width, height) = image::ImageReader::with_format(Cursor::new(&data), codec)
            .into_dimensions()
            .map_err(|_| AvatarError::Unreadable)?;

        let in_range = |side: u32| side >= self.min_side_px && side <= self.max_side_px;
        if !in_range(width) || !in_range(height) {
            return Err(AvatarError::BadDimensions {
                min: self.min_side_px,
                max: self.max_side_px,
                width,
                height,
            });
        }

        Ok(Avatar { data, format })
    }
}

impl Default for AvatarPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PLACEHOLDER_URL.to_string())
    }
}
