use crate::error::CliError;
use crate::util::load_table;
use argh::FromArgs;
use std::path::{Path, PathBuf};

#[derive(FromArgs, Debug)]
/// Write a block table to a file, for use with --table or the C interface
#[argh(subcommand, name = "export-table")]
pub struct ExportTableCmd {
    /// output file path
    #[argh(option)]
    pub output: PathBuf,

    /// re-export an existing table instead of the reference table
    #[argh(option)]
    pub table: Option<PathBuf>,
}

pub fn handle_export_table_command(cmd: ExportTableCmd) -> Result<(), CliError> {
    let written = export_table(cmd.table.as_deref(), &cmd.output)?;
    println!("Wrote {written} bytes to {}", cmd.output.display());
    Ok(())
}

fn export_table(source: Option<&Path>, output: &Path) -> Result<usize, CliError> {
    let bytes = load_table(source)?.to_bytes()?;
    std::fs::write(output, &bytes)?;
    Ok(bytes.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gralloc_format_chooser::reference::reference_block_table;
    use gralloc_format_chooser::BlockTableError;

    #[test]
    fn exported_tables_load_back() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("table.bin");
        let second = dir.path().join("copy.bin");

        let written = export_table(None, &first).unwrap();
        assert_eq!(written, std::fs::metadata(&first).unwrap().len() as usize);
        assert_eq!(load_table(Some(&first)).unwrap(), reference_block_table());

        export_table(Some(&first), &second).unwrap();
        assert_eq!(std::fs::read(&first).unwrap(), std::fs::read(&second).unwrap());
    }

    #[test]
    fn corrupt_tables_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corrupt.bin");
        std::fs::write(&path, [0xFF, 0x00]).unwrap();

        assert!(matches!(
            load_table(Some(&path)),
            Err(CliError::BlockTable(BlockTableError::Decode(_)))
        ));
    }

    #[test]
    fn missing_tables_are_io_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_table(Some(&dir.path().join("missing.bin"))),
            Err(CliError::Io(_))
        ));
    }
}
