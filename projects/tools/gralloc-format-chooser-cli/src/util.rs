//! Argument parsing shared by the commands.

use crate::error::CliError;
use gralloc_format_chooser::reference::reference_block_table;
use gralloc_format_chooser::{
    BlockTable, FormatSelector, HalPixelFormat, SelectorConfigBuilder, UsageFlags,
};
use std::path::{Path, PathBuf};

/// Parses an integer, either decimal or `0x` prefixed hex. Values up to `u32::MAX` are accepted
/// and reinterpreted as `i32`, as the C interface does.
pub fn parse_int(value: &str) -> Result<i32, String> {
    let value = value.trim();
    let parsed = match value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
    {
        Some(hex) => i64::from_str_radix(hex, 16),
        None => value.parse::<i64>(),
    }
    .map_err(|e| format!("Invalid number '{value}': {e}"))?;

    if parsed < i64::from(i32::MIN) || parsed > i64::from(u32::MAX) {
        return Err(format!("Number out of range: {value}"));
    }

    Ok(parsed as u32 as i32)
}

/// Parses a pixel format: a [`HalPixelFormat`] name (case insensitive, e.g. `rgba8888`) or a
/// raw value.
pub fn parse_format(value: &str) -> Result<i32, String> {
    HalPixelFormat::all_values()
        .iter()
        .find(|format| format!("{format:?}").eq_ignore_ascii_case(value))
        .map(|format| format.raw())
        .map_or_else(|| parse_int(value), Ok)
}

/// Parses usage flags: `|` separated [`UsageFlags`] names (case insensitive, e.g.
/// `hw_texture|hw_composer`) or raw values.
pub fn parse_usage(value: &str) -> Result<UsageFlags, String> {
    let mut usage = UsageFlags::empty();
    for part in value.split('|').map(str::trim).filter(|part| !part.is_empty()) {
        let flags = match UsageFlags::from_name(&part.to_ascii_uppercase()) {
            Some(flags) => flags,
            None => UsageFlags::from_raw(parse_int(part)?),
        };
        usage |= flags;
    }
    Ok(usage)
}

/// Parses a display size in `WIDTHxHEIGHT` form.
pub fn parse_display(value: &str) -> Result<(u32, u32), String> {
    let (width, height) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("Invalid display size '{value}', expected WIDTHxHEIGHT"))?;

    let parse = |dimension: &str| {
        dimension
            .trim()
            .parse::<u32>()
            .map_err(|e| format!("Invalid display size '{value}': {e}"))
    };
    Ok((parse(width)?, parse(height)?))
}

/// Loads a block table written by `export-table`, or the reference table if `path` is [`None`].
pub fn load_table(path: Option<&Path>) -> Result<BlockTable, CliError> {
    match path {
        Some(path) => {
            log::debug!("Loading block table from {}", path.display());
            Ok(BlockTable::from_bytes(&std::fs::read(path)?)?)
        }
        None => Ok(reference_block_table()),
    }
}

/// Selector switches shared by the commands which need a [`FormatSelector`].
#[derive(Debug, Default)]
pub struct SelectorOptions {
    pub table: Option<PathBuf>,
    pub display: Option<(u32, u32)>,
    pub disabled: bool,
    pub no_external_afbc: bool,
    pub no_framebuffer_hal: bool,
    pub yuv_wide_block: bool,
    pub no_afbc: bool,
}

impl SelectorOptions {
    pub fn build_selector(&self) -> Result<FormatSelector, CliError> {
        let table = load_table(self.table.as_deref())?;

        let mut config = SelectorConfigBuilder::new()
            .selection_disabled(self.disabled)
            .no_external_afbc(self.no_external_afbc)
            .framebuffer_hal(!self.no_framebuffer_hal)
            .yuv_wide_block_afbc(self.yuv_wide_block)
            .afbc_capable(!self.no_afbc);
        if let Some((width, height)) = self.display {
            config = config.display_size(width, height);
        }

        Ok(FormatSelector::new(table, config.build()))
    }
}
