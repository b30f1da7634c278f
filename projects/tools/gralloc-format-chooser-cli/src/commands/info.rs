use crate::error::CliError;
use crate::util::*;
use argh::FromArgs;
use gralloc_format_chooser::FormatSelector;
use std::path::PathBuf;

#[derive(FromArgs, Debug)]
/// Describe the block table and selector configuration
#[argh(subcommand, name = "info")]
pub struct InfoCmd {
    /// block table written by export-table [default: reference table]
    #[argh(option)]
    pub table: Option<PathBuf>,

    /// describe the configuration with selection disabled
    #[argh(switch)]
    pub disabled: bool,

    /// the GPU has no AFBC support
    #[argh(switch)]
    pub no_afbc: bool,
}

pub fn handle_info_command(cmd: InfoCmd) -> Result<(), CliError> {
    let selector = SelectorOptions {
        table: cmd.table,
        disabled: cmd.disabled,
        no_afbc: cmd.no_afbc,
        ..SelectorOptions::default()
    }
    .build_selector()?;

    print!("{}", describe(&selector));
    Ok(())
}

fn describe(selector: &FormatSelector) -> String {
    let Some(info) = selector.configuration() else {
        return "selection disabled\n".to_string();
    };

    let mut out = format!(
        "blocks: {}\nafbc capable: {}\n",
        info.blocks.len(),
        info.afbc_capable
    );
    for (index, block) in info.blocks.iter().enumerate() {
        let supported = block
            .weights()
            .iter()
            .flatten()
            .filter(|weight| **weight >= 0)
            .count();
        out.push_str(&format!(
            "{index}: {:?} usage={:#x} supported={supported}\n",
            block.kind, block.usage_mask
        ));
    }
    out
}
