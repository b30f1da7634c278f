mod commands;
mod error;
mod util;
use argh::FromArgs;
use core::error::Error;

#[derive(FromArgs, Debug)]
/// Query gralloc internal format selection
struct TopLevel {
    /// log level (error, warn, info, debug, trace) [default: warn, or RUST_LOG]
    #[argh(option)]
    log_level: Option<log::LevelFilter>,

    #[argh(subcommand)]
    command: Commands,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
enum Commands {
    Select(commands::select::SelectCmd),
    Decode(commands::decode::DecodeCmd),
    Resolve(commands::resolve::ResolveCmd),
    Info(commands::info::InfoCmd),
    ExportTable(commands::export_table::ExportTableCmd),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli: TopLevel = argh::from_env();
    init_logging(cli.log_level);

    match cli.command {
        Commands::Select(cmd) => commands::select::handle_select_command(cmd)?,
        Commands::Decode(cmd) => commands::decode::handle_decode_command(cmd)?,
        Commands::Resolve(cmd) => commands::resolve::handle_resolve_command(cmd),
        Commands::Info(cmd) => commands::info::handle_info_command(cmd)?,
        Commands::ExportTable(cmd) => commands::export_table::handle_export_table_command(cmd)?,
    }

    Ok(())
}

fn init_logging(level: Option<log::LevelFilter>) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.format_timestamp(None).init();
}
