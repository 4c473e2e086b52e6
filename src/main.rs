use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

mod diagnostics;
mod input;
mod merge;
mod render;

pub type Result<T> = anyhow::Result<T>;

const UNUSED_EXPORT_WARNING: &str = "the BPF_MAP_TYPE_RINGBUF export is not used in the ebpf program.";

#[derive(Parser)]
#[command(name = "merge-ebpf-json")]
#[command(
    about = "Merge eBPF build config, program metadata and export layout into one JSON document",
    long_about = None
)]
struct Cli {
    /// Base build configuration.
    #[arg(long, default_value = input::paths::DEFAULT_CONFIG)]
    config: PathBuf,

    /// Directory holding ebpf_program.json and event_layout.json.
    #[arg(long, default_value = input::paths::DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Pretty-print the merged document.
    #[arg(long)]
    pretty: bool,
}

/// Merge the inputs at `paths`, writing the document to `out` and any
/// warning to `err`. On error nothing has been written to `out`.
fn run(
    paths: &input::InputPaths,
    pretty: bool,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<()> {
    // 1) Load + merge; any failure here returns before `out` is touched.
    let merged = merge::merge_documents(paths)?;
    let text = render::render_document(&merged.document, pretty)?;

    // 2) At most one warning, however many buffer maps were skipped.
    if merged.skipped > 0 {
        diagnostics::warn(err, UNUSED_EXPORT_WARNING)?;
    }

    // 3) Single write of the final document.
    out.write_all(text.as_bytes())?;
    out.flush()?;

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let paths = input::InputPaths::from_locations(cli.config, &cli.output_dir);

    run(
        &paths,
        cli.pretty,
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
    )
}
