//! QR code payloads
//!
//! Builds the text handed to a QR encoder (plain text or a vCard business
//! card). Matrix encoding is done by a [`QrEncoder`] implementation, by default
//! [`ImageEncoder`]; its failures are logged and never reach the caller.

#[cfg(feature = "render")]
mod render;
mod vcard;

use log::{debug, error};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ToolkitError};

#[cfg(feature = "render")]
pub use render::ImageEncoder;
pub use vcard::BusinessCard;

/// Download name for plain-text QR images
pub const TEXT_DOWNLOAD_NAME: &str = "weborigo_qr.png";

/// Download name for business-card QR images
pub const CARD_DOWNLOAD_NAME: &str = "business_card_qr.png";

/// Default edge length of a business-card QR image
pub const CARD_DEFAULT_PIXELS: u32 = 220;

/// Edge length of the rendered QR image
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum QrSize {
    /// 150 px
    Small,
    /// 200 px
    #[default]
    Medium,
    /// 250 px
    Large,
    Custom(u32),
}

impl QrSize {
    /// Edge length in pixels
    pub fn pixels(self) -> u32 {
        match self {
            QrSize::Small => 150,
            QrSize::Medium => 200,
            QrSize::Large => 250,
            QrSize::Custom(px) => px,
        }
    }
}

/// Content to be encoded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum QrPayload {
    /// URL or free text
    Text(String),
    BusinessCard(BusinessCard),
}

impl QrPayload {
    /// The exact string handed to the encoder
    pub fn content(&self) -> String {
        match self {
            QrPayload::Text(text) => text.clone(),
            QrPayload::BusinessCard(card) => card.to_vcard(),
        }
    }

    /// File name offered when the image is downloaded
    pub fn download_name(&self) -> &'static str {
        match self {
            QrPayload::Text(_) => TEXT_DOWNLOAD_NAME,
            QrPayload::BusinessCard(_) => CARD_DOWNLOAD_NAME,
        }
    }

    /// True when there is nothing to encode. A business card always encodes.
    pub fn is_empty(&self) -> bool {
        match self {
            QrPayload::Text(text) => text.is_empty(),
            QrPayload::BusinessCard(_) => false,
        }
    }
}

/// Encoded QR image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrImage {
    /// PNG bytes
    pub png: Vec<u8>,
    /// Optional SVG rendering
    pub svg: Option<String>,
}

/// External QR matrix encoder
pub trait QrEncoder {
    /// Encode `text` into a square image `pixels` wide
    fn encode(&self, text: &str, pixels: u32) -> Result<QrImage>;
}

/// Drives a [`QrEncoder`] for a payload
pub struct QrGenerator<E: QrEncoder> {
    encoder: E,
}

impl<E: QrEncoder> QrGenerator<E> {
    /// Wrap an encoder
    pub fn new(encoder: E) -> Self {
        Self { encoder }
    }

    /// Encode the payload, or `None` if it is empty or the encoder fails.
    pub fn render(&self, payload: &QrPayload, size: QrSize) -> Option<QrImage> {
        match self.try_render(payload, size) {
            Ok(image) => Some(image),
            Err(ToolkitError::EmptyPayload) => {
                debug!("Skipping QR generation for empty payload");
                None
            }
            Err(err) => {
                error!("QR generation failed: {}", err);
                None
            }
        }
    }

    /// Encode the payload, reporting why it could not be encoded
    pub fn try_render(&self, payload: &QrPayload, size: QrSize) -> Result<QrImage> {
        if payload.is_empty() {
            return Err(ToolkitError::EmptyPayload);
        }

        let content = payload.content();
        debug!("Encoding {} bytes at {} px", content.len(), size.pixels());
        self.encoder.encode(&content, size.pixels())
    }
}
