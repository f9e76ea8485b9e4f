//! The `scratchy` binary. All the work happens in `cli::run()`; this file only
//! turns an error into a message on stderr and a non-zero exit status.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        cli::print_error(&e);
        std::process::exit(1);
    }
}
