use crate::error::CliError;
use crate::util::*;
use argh::FromArgs;
use gralloc_format_chooser::{Selection, UsageFlags};
use std::path::PathBuf;

#[derive(FromArgs, Debug)]
/// Select the internal format of an allocation
#[argh(subcommand, name = "select")]
pub struct SelectCmd {
    /// requested format: a name (e.g. rgba8888) or a raw value
    #[argh(positional, from_str_fn(parse_format))]
    pub format: i32,

    /// usage: '|' separated flag names (e.g. hw_texture|hw_composer) or raw values
    #[argh(option, from_str_fn(parse_usage), default = "UsageFlags::empty()")]
    pub usage: UsageFlags,

    /// buffer size in bytes [default: 0]
    #[argh(option, from_str_fn(parse_int), default = "0")]
    pub size: i32,

    /// also print how the format was reached
    #[argh(switch)]
    pub explain: bool,

    /// block table written by export-table [default: reference table]
    #[argh(option)]
    pub table: Option<PathBuf>,

    /// primary display size, WIDTHxHEIGHT
    #[argh(option, from_str_fn(parse_display))]
    pub display: Option<(u32, u32)>,

    /// disable selection (pass formats through)
    #[argh(switch)]
    pub disabled: bool,

    /// keep buffers for external displays uncompressed
    #[argh(switch)]
    pub no_external_afbc: bool,

    /// score framebuffer targets instead of passing them through
    #[argh(switch)]
    pub no_framebuffer_hal: bool,

    /// allow wide block AFBC for YUV private formats
    #[argh(switch)]
    pub yuv_wide_block: bool,

    /// the GPU has no AFBC support
    #[argh(switch)]
    pub no_afbc: bool,
}

impl SelectCmd {
    fn selector_options(&self) -> SelectorOptions {
        SelectorOptions {
            table: self.table.clone(),
            display: self.display,
            disabled: self.disabled,
            no_external_afbc: self.no_external_afbc,
            no_framebuffer_hal: self.no_framebuffer_hal,
            yuv_wide_block: self.yuv_wide_block,
            no_afbc: self.no_afbc,
        }
    }
}

pub fn handle_select_command(cmd: SelectCmd) -> Result<(), CliError> {
    let selector = cmd.selector_options().build_selector()?;
    let selection = selector.explain(cmd.format, cmd.usage, cmd.size)?;
    println!("{}", format_selection(&selection, cmd.explain));
    Ok(())
}

fn format_selection(selection: &Selection, explain: bool) -> String {
    if explain {
        format!("{} ({:?})", selection.format, selection.path)
    } else {
        selection.format.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gralloc_format_chooser::{ExtendedFormat, InternalFormat, SelectionPath};

    #[test]
    fn selection_output() {
        let selection = Selection {
            format: InternalFormat::Rgba8888Afbc.extended_format(),
            path: SelectionPath::Scored(InternalFormat::Rgba8888Afbc),
        };
        assert_eq!(format_selection(&selection, false), "0x100000001");
        assert_eq!(
            format_selection(&selection, true),
            "0x100000001 (Scored(Rgba8888Afbc))"
        );

        let selection = Selection {
            format: ExtendedFormat::NONE,
            path: SelectionPath::ZeroFormat,
        };
        assert_eq!(format_selection(&selection, false), "0x0");
    }
}
