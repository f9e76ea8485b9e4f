use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "scratchy", bin_name = "scratchy", version)]
#[command(
    about = "Extract documentation from source comments into ordered, per-topic files",
    long_about = None
)]
pub struct Cli {
    /// Directory to put extracted docs in (created if missing)
    #[arg(short, long, required_unless_present = "config")]
    pub output: Option<PathBuf>,

    /// Quoted file pattern to match, e.g. 'src/**/*.rs' (repeatable)
    #[arg(short, long, num_args = 1.., required_unless_present = "config")]
    pub pattern: Vec<String>,

    /// Characters that denote the beginning of a doc block [default: /**]
    #[arg(short, long, allow_hyphen_values = true)]
    pub begin: Option<String>,

    /// Characters that denote the end of a doc block [default: */]
    #[arg(short, long, allow_hyphen_values = true)]
    pub end: Option<String>,

    /// Lines within doc blocks start with this [default: *]
    #[arg(short, long, allow_hyphen_values = true)]
    pub line: Option<String>,

    /// Strip this string from the beginning of every line [default: " "]
    #[arg(short, long, allow_hyphen_values = true)]
    pub strip: Option<String>,

    /// Extension, with leading dot, for exported docs [default: .txt]
    #[arg(short = 'x', long)]
    pub extension: Option<String>,

    /// Convert \/ to /
    #[arg(short, long)]
    pub unslash: bool,

    /// JSON file with any of the options above; flags take precedence
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
