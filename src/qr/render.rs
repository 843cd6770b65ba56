//! QR image rendering backed by the `qrcode` crate

use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Luma};
use log::debug;
use qrcode::QrCode;
use qrcode::render::svg;

use super::{QrEncoder, QrImage};
use crate::error::{Result, ToolkitError};

/// Encodes payloads into PNG (and optionally SVG) QR images
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageEncoder {
    /// Also produce an SVG rendering
    pub svg: bool,
}

impl ImageEncoder {
    /// Encoder producing PNG only
    pub fn new() -> Self {
        Self::default()
    }

    /// Encoder producing PNG and SVG
    pub fn with_svg() -> Self {
        Self { svg: true }
    }
}

impl QrEncoder for ImageEncoder {
    /// The image is at least `pixels` wide; module size is rounded up to whole pixels.
    fn encode(&self, text: &str, pixels: u32) -> Result<QrImage> {
        let code = QrCode::new(text.as_bytes())
            .map_err(|e| ToolkitError::Encoding(e.to_string()))?;

        let luma = code
            .render::<Luma<u8>>()
            .min_dimensions(pixels, pixels)
            .build();
        debug!("Rendered {}x{} QR image", luma.width(), luma.height());

        let mut png = Vec::new();
        DynamicImage::ImageLuma8(luma)
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .map_err(|e| ToolkitError::Encoding(e.to_string()))?;

        let svg = self.svg.then(|| {
            code.render::<svg::Color>()
                .min_dimensions(pixels, pixels)
                .build()
        });

        Ok(QrImage { png, svg })
    }
}
