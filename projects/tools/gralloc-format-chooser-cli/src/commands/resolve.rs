use crate::util::parse_format;
use argh::FromArgs;
use gralloc_format_chooser::resolve_index;

#[derive(FromArgs, Debug)]
/// Print the weight matrix row of a format (-1 if it is never scored)
#[argh(subcommand, name = "resolve")]
pub struct ResolveCmd {
    /// format: a name (e.g. yv12) or a raw value
    #[argh(positional, from_str_fn(parse_format))]
    pub format: i32,
}

pub fn handle_resolve_command(cmd: ResolveCmd) {
    println!("{}", resolve_index(cmd.format));
}
