use crate::error::CliError;
use crate::util::parse_int;
use argh::FromArgs;
use gralloc_format_chooser::PrivateFormatDecoder;

#[derive(FromArgs, Debug)]
/// Decode a directly encoded (private) format
#[argh(subcommand, name = "decode")]
pub struct DecodeCmd {
    /// private format value, e.g. 0x101
    #[argh(positional, from_str_fn(parse_int))]
    pub value: i32,

    /// allow wide block AFBC for YUV formats
    #[argh(switch)]
    pub yuv_wide_block: bool,
}

pub fn handle_decode_command(cmd: DecodeCmd) -> Result<(), CliError> {
    let format = PrivateFormatDecoder::new(cmd.yuv_wide_block).decode(cmd.value)?;
    println!("{format}");
    Ok(())
}
