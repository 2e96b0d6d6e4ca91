//
// Copyright 2022-Present (c) Raja Lehtihet & Wael El Oraiby
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice,
// this list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
// this list of conditions and the following disclaimer in the documentation
// and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its contributors
// may be used to endorse or promote products derived from this software without
// specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE
// ARE DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE
// LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR
// CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF
// SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS
// INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN
// CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE)
// ARISING IN ANY WAY OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE
// POSSIBILITY OF SUCH DAMAGE.
//
use std::io::BufRead;

use thiserror::Error;

#[derive(Debug, Error)]
/// Errors surfaced while reading or querying an option file.
pub enum OptionsError {
    /// No entry carries the requested key.
    #[error("option key not found")]
    NotFound,
    /// A line is not of the form `key = value`.
    #[error("malformed option on line {0}")]
    InvalidFormat(usize),
    /// The raw value cannot be converted to the requested type.
    #[error("option value cannot be converted: {0}")]
    InvalidConversion(String),
    /// The underlying reader failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Parsed `key = value` option file.
///
/// One entry per line; leading whitespace is skipped, lines starting with
/// `#` are comments, the key is a single whitespace-free token, the value
/// runs to the end of the line, and the literal value `NONE` reads as empty.
/// Duplicate keys resolve to the first occurrence.
#[derive(Clone, Debug, Default)]
pub struct Options {
    entries: Vec<(String, String)>,
}

impl Options {
    /// Parses an option file from `reader`. Malformed lines abort the read
    /// with [`OptionsError::InvalidFormat`] carrying the 1-based line number.
    pub fn read<R: BufRead>(reader: R) -> Result<Self, OptionsError> {
        let mut entries = Vec::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let text = line.trim_start();
            if text.is_empty() || text.starts_with('#') {
                continue;
            }

            let (key, value) = text.split_once('=').ok_or(OptionsError::InvalidFormat(idx + 1))?;
            let key = key.trim();
            let value = value.trim();
            if key.is_empty() || key.contains(char::is_whitespace) || value.is_empty() {
                return Err(OptionsError::InvalidFormat(idx + 1));
            }

            let value = if value == "NONE" { "" } else { value };
            entries.push((key.to_string(), value.to_string()));
        }
        Ok(Self { entries })
    }

    /// Returns the raw value stored under `key`.
    pub fn raw(&self, key: &str) -> Result<&str, OptionsError> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .ok_or(OptionsError::NotFound)
    }

    /// Returns the value under `key` parsed as a float.
    pub fn float(&self, key: &str) -> Result<f64, OptionsError> {
        let raw = self.raw(key)?;
        raw.parse().map_err(|_| OptionsError::InvalidConversion(raw.to_string()))
    }

    /// Returns the value under `key` parsed as an integer. A `0x`/`0X`
    /// prefix selects hexadecimal, everything else parses as decimal.
    pub fn int(&self, key: &str) -> Result<i64, OptionsError> {
        let raw = self.raw(key)?;
        let bad = || OptionsError::InvalidConversion(raw.to_string());

        let (sign, digits) = match raw.strip_prefix('-') {
            Some(rest) => (-1, rest),
            None => (1, raw.strip_prefix('+').unwrap_or(raw)),
        };
        let value = match digits.strip_prefix("0x").or_else(|| digits.strip_prefix("0X")) {
            Some(hex) => i64::from_str_radix(hex, 16).map_err(|_| bad())?,
            None => digits.parse().map_err(|_| bad())?,
        };
        Ok(sign * value)
    }

    /// Returns the value under `key` parsed as `true` or `false`.
    pub fn boolean(&self, key: &str) -> Result<bool, OptionsError> {
        let raw = self.raw(key)?;
        match raw {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(OptionsError::InvalidConversion(raw.to_string())),
        }
    }
}
