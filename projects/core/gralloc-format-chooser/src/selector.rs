//! The format selector: bypass rules around the weighted arbitration.
//!
//! A request takes the first path that applies:
//!
//! 1. Selection disabled: the format is passed through (legacy P010 hint aside).
//! 2. [`UsageFlags::PRIVATE_FORMAT`] without [`UsageFlags::NO_AFBC`]: the format is decoded
//!    by the [`PrivateFormatDecoder`].
//! 3. Format `0`: nothing to allocate.
//! 4. CPU access, no usage at all, video encoder input or a framebuffer target: the
//!    (normalized) format is passed through.
//! 5. Formats without a [`RequestFormat`]: passed through.
//! 6. Everything else is scored against the [`BlockTable`].
//!
//! [`HalPixelFormat::ImplementationDefined`] is normalized to
//! [`HalPixelFormat::YCbCr420_888`] for every pass-through, but is never scored itself.

use crate::afbc_policy::AfbcPolicy;
use crate::block_table::BlockTable;
use crate::error::FormatError;
use crate::formats::{
    ArmFormat, ExtendedFormat, FormatModifiers, HalPixelFormat, InternalFormat, RequestFormat,
};
use crate::hw_block::HardwareBlock;
use crate::private_format::PrivateFormatDecoder;
use crate::score;
use crate::usage::UsageFlags;

/// Platform switches of a [`FormatSelector`], fixed when it is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectorConfig {
    /// Skip selection entirely and hand back the requested format.
    pub selection_disabled: bool,
    /// Never compress buffers which may be shown on an external display.
    pub no_external_afbc: bool,
    /// A framebuffer HAL is in use, so framebuffer targets must stay uncompressed.
    pub framebuffer_hal: bool,
    /// The platform can produce wide block AFBC for YUV layouts.
    pub yuv_wide_block_afbc: bool,
    /// The GPU supports AFBC. Reported through [`FormatSelector::configuration`]; when `false`,
    /// compressed candidates are also disqualified from scoring.
    pub afbc_capable: bool,
    /// Width of the primary display, `0` if unknown.
    pub display_width: u32,
    /// Height of the primary display, `0` if unknown.
    pub display_height: u32,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        SelectorConfigBuilder::new().build()
    }
}

/// Builder for a [`SelectorConfig`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectorConfigBuilder {
    selection_disabled: Option<bool>,
    no_external_afbc: Option<bool>,
    framebuffer_hal: Option<bool>,
    yuv_wide_block_afbc: Option<bool>,
    afbc_capable: Option<bool>,
    display_size: Option<(u32, u32)>,
}

impl SelectorConfigBuilder {
    /// Create a new config builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Disable selection. Default `false`.
    pub fn selection_disabled(mut self, disabled: bool) -> Self {
        self.selection_disabled = Some(disabled);
        self
    }

    /// Keep buffers for external displays uncompressed. Default `false`.
    pub fn no_external_afbc(mut self, enabled: bool) -> Self {
        self.no_external_afbc = Some(enabled);
        self
    }

    /// Whether a framebuffer HAL is in use. Default `true`.
    pub fn framebuffer_hal(mut self, enabled: bool) -> Self {
        self.framebuffer_hal = Some(enabled);
        self
    }

    /// Whether wide block AFBC is available for YUV. Default `false`.
    pub fn yuv_wide_block_afbc(mut self, enabled: bool) -> Self {
        self.yuv_wide_block_afbc = Some(enabled);
        self
    }

    /// Whether the GPU supports AFBC. Default `true`.
    ///
    /// When `false`, compressed candidates are never selected.
    pub fn afbc_capable(mut self, capable: bool) -> Self {
        self.afbc_capable = Some(capable);
        self
    }

    /// Size of the primary display. Default `0x0` (unknown), which disables the size ratio.
    pub fn display_size(mut self, width: u32, height: u32) -> Self {
        self.display_size = Some((width, height));
        self
    }

    /// Build the config using the configured values or defaults.
    pub fn build(self) -> SelectorConfig {
        let (display_width, display_height) = self.display_size.unwrap_or((0, 0));
        SelectorConfig {
            selection_disabled: self.selection_disabled.unwrap_or(false),
            no_external_afbc: self.no_external_afbc.unwrap_or(false),
            framebuffer_hal: self.framebuffer_hal.unwrap_or(true),
            yuv_wide_block_afbc: self.yuv_wide_block_afbc.unwrap_or(false),
            afbc_capable: self.afbc_capable.unwrap_or(true),
            display_width,
            display_height,
        }
    }
}

/// Why a request ended with the format it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPath {
    /// Selection is disabled; passed through.
    Disabled,
    /// Selection is disabled, but the usage asked for P010.
    LegacyP010,
    /// Decoded as a private format.
    PrivateDecode,
    /// Format `0`.
    ZeroFormat,
    /// The CPU accesses the buffer.
    SoftwareBypass,
    /// No usage bits at all.
    NoUsage,
    /// Video encoder input.
    VideoEncoderBypass,
    /// Framebuffer target.
    FramebufferBypass,
    /// The format takes no part in selection.
    Unclassified,
    /// Won the arbitration.
    Scored(InternalFormat),
    /// Every candidate was rejected; passed through.
    NoCandidate,
}

/// Result of [`FormatSelector::explain`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// The selected layout.
    pub format: ExtendedFormat,
    /// How it was reached.
    pub path: SelectionPath,
}

impl Selection {
    const fn new(format: ExtendedFormat, path: SelectionPath) -> Self {
        Self { format, path }
    }
}

/// Read-only view of the active configuration, see [`FormatSelector::configuration`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigurationInfo<'a> {
    /// The hardware blocks, in configuration order.
    pub blocks: &'a [HardwareBlock],
    /// Whether the GPU supports AFBC.
    pub afbc_capable: bool,
}

/// Picks internal layouts for allocation requests.
#[derive(Debug, Clone)]
pub struct FormatSelector {
    table: BlockTable,
    config: SelectorConfig,
    policy: AfbcPolicy,
    decoder: PrivateFormatDecoder,
}

impl FormatSelector {
    /// Creates a selector over `table`.
    pub fn new(table: BlockTable, config: SelectorConfig) -> Self {
        Self {
            policy: AfbcPolicy::new(
                config.display_width,
                config.display_height,
                config.no_external_afbc,
            ),
            decoder: PrivateFormatDecoder::new(config.yuv_wide_block_afbc),
            table,
            config,
        }
    }

    /// The block table this selector scores against.
    pub fn table(&self) -> &BlockTable {
        &self.table
    }

    /// The switches this selector was created with.
    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// The hardware blocks and AFBC capability, or [`None`] when selection is disabled.
    pub fn configuration(&self) -> Option<ConfigurationInfo<'_>> {
        if self.config.selection_disabled {
            return None;
        }

        Some(ConfigurationInfo {
            blocks: self.table.blocks(),
            afbc_capable: self.config.afbc_capable,
        })
    }

    /// Selects the layout for a request.
    ///
    /// # Parameters
    ///
    /// - `format`: The requested HAL format, or a private format (see
    ///   [`UsageFlags::PRIVATE_FORMAT`]).
    /// - `usage`: Usage of the buffer.
    /// - `buffer_size`: Size of the buffer in bytes.
    ///
    /// Formats which are passed through keep their 32-bit value in the low word of the code;
    /// negative values are not sign extended.
    ///
    /// # Errors
    ///
    /// Only private formats fail, see [`PrivateFormatDecoder::decode`].
    pub fn select_format(
        &self,
        format: i32,
        usage: UsageFlags,
        buffer_size: i32,
    ) -> Result<ExtendedFormat, FormatError> {
        self.explain(format, usage, buffer_size)
            .map(|selection| selection.format)
    }

    /// [`Self::select_format`], also reporting how the layout was reached.
    pub fn explain(
        &self,
        format: i32,
        usage: UsageFlags,
        buffer_size: i32,
    ) -> Result<Selection, FormatError> {
        log::trace!(
            "select_format: format={format:#x} usage={:#x} size={buffer_size}",
            usage.bits()
        );

        let selection = self.explain_inner(format, usage, buffer_size)?;
        log::trace!(
            "select_format: {:?} -> {}",
            selection.path,
            selection.format
        );
        Ok(selection)
    }

    fn explain_inner(
        &self,
        format: i32,
        usage: UsageFlags,
        buffer_size: i32,
    ) -> Result<Selection, FormatError> {
        if self.config.selection_disabled {
            return Ok(legacy_selection(format, usage));
        }

        if !usage.disables_afbc() && usage.requests_private_format() {
            let decoded = self.decoder.decode(format)?;
            return Ok(Selection::new(decoded, SelectionPath::PrivateDecode));
        }

        if format == 0 {
            return Ok(Selection::new(ExtendedFormat::NONE, SelectionPath::ZeroFormat));
        }

        let normalized = if format == HalPixelFormat::ImplementationDefined.raw() {
            ExtendedFormat::plain(HalPixelFormat::YCbCr420_888.base_id())
        } else {
            ExtendedFormat::plain(format as u32)
        };
        let pass = |path: SelectionPath| -> Result<Selection, FormatError> {
            log::debug!("Passing {format:#x} through: {path:?}");
            Ok(Selection::new(normalized, path))
        };

        if usage.is_empty() {
            return pass(SelectionPath::NoUsage);
        }
        if usage.has_software_access() {
            return pass(SelectionPath::SoftwareBypass);
        }
        if usage.contains(UsageFlags::HW_VIDEO_ENCODER) {
            return pass(SelectionPath::VideoEncoderBypass);
        }
        if self.config.framebuffer_hal && usage.contains(UsageFlags::HW_FB) {
            return pass(SelectionPath::FramebufferBypass);
        }

        // Resolved from the raw format, so implementation defined requests are never scored.
        let Some(request) = RequestFormat::resolve(format) else {
            return pass(SelectionPath::Unclassified);
        };

        let afbc_allowed =
            self.config.afbc_capable && self.policy.allowed(usage, i64::from(buffer_size));
        let board = score::score_candidates(request, usage, afbc_allowed, &self.table);

        match board.winner() {
            Some(candidate) => Ok(Selection::new(
                candidate.extended_format(),
                SelectionPath::Scored(candidate),
            )),
            None => pass(SelectionPath::NoCandidate),
        }
    }
}

fn legacy_selection(format: i32, usage: UsageFlags) -> Selection {
    if format == HalPixelFormat::YCrCbNv12_10.raw()
        && usage.rotation() == UsageFlags::TO_USE_ARM_P010
    {
        log::debug!("Selection disabled, using P010 for usage {:#x}", usage.bits());
        return Selection::new(
            ExtendedFormat::new(ArmFormat::P010.base_id(), FormatModifiers::EXTENDED_YUV),
            SelectionPath::LegacyP010,
        );
    }

    Selection::new(ExtendedFormat::plain(format as u32), SelectionPath::Disabled)
}
