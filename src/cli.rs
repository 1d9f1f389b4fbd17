use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "pmd-excel")]
#[command(about = "Convert a PMD XML report into an Excel workbook for review")]
#[command(version)]
pub struct CliArgs {
    /// Build output directory: reads <DIR>/pmd.xml, writes <DIR>/pmd.xlsx.
    /// Without this flag, pmd.xml in the current directory is converted in
    /// place (a no-op when it does not exist).
    #[arg(long, short = 'd', value_name = "DIR")]
    pub build_dir: Option<PathBuf>,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        CliArgs::parse()
    }
}
