//! Reading and writing markup in a caller-chosen character encoding.

use crate::{Error, Result};
use encoding_rs::{Encoding, UTF_8};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextEncoding(&'static Encoding);

impl Default for TextEncoding {
    fn default() -> Self {
        Self::utf8()
    }
}

impl TextEncoding {
    pub fn utf8() -> Self {
        Self(UTF_8)
    }

    /// Resolves a WHATWG encoding label such as `utf-8`, `latin1` or `windows-1252`.
    ///
    /// Encodings that `encoding_rs` can only decode (UTF-16, `replacement`) are rejected, since
    /// markup is always written back after rewriting.
    pub fn from_label(label: &str) -> Result<Self> {
        let Some(encoding) = Encoding::for_label(label.trim().as_bytes()) else {
            return Err(Error::UnknownEncoding {
                label: label.to_string(),
            });
        };
        if encoding.output_encoding() != encoding {
            return Err(Error::UnsupportedEncoding {
                label: label.to_string(),
            });
        }
        Ok(Self(encoding))
    }

    pub fn name(self) -> &'static str {
        self.0.name()
    }

    pub fn decode(self, bytes: &[u8]) -> Result<String> {
        self.0
            .decode_without_bom_handling_and_without_replacement(bytes)
            .map(|text| text.into_owned())
            .ok_or(Error::Decode {
                encoding: self.name(),
            })
    }

    pub fn encode(self, text: &str) -> Result<Vec<u8>> {
        let (bytes, _, had_unmappable) = self.0.encode(text);
        if had_unmappable {
            return Err(Error::Encode {
                encoding: self.name(),
            });
        }
        Ok(bytes.into_owned())
    }

    pub fn read_to_string(self, path: impl AsRef<Path>) -> Result<String> {
        let bytes = std::fs::read(path)?;
        self.decode(&bytes)
    }

    pub fn write(self, path: impl AsRef<Path>, text: &str) -> Result<()> {
        let bytes = self.encode(text)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}
