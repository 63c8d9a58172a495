mod header;
mod pretty;
mod summarize;

use bpaf::Bpaf;
use pretty::Format;
use std::io::BufWriter;

/// Reads CSV on stdin and prints summary statistics for each column.
///
/// The header line declares the columns.  A column annotated with
/// "(number)", eg. "price(number)", is numeric; any other column is text.
#[derive(Bpaf)]
#[bpaf(options, version)]
struct Options {
    /// Print one JSON object per column instead of the text report
    json: bool,
}

fn main() {
    env_logger::init();
    let opts = options().run();
    let format = if opts.json { Format::Json } else { Format::Text };
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let result = summarize::summarize(stdin.lock(), BufWriter::new(stdout.lock()), format);
    match result {
        Ok(()) => (),
        Err(e) => {
            // Ignore EPIPE
            if let Some(e) = e.downcast_ref::<std::io::Error>() {
                if e.kind() == std::io::ErrorKind::BrokenPipe {
                    return;
                }
            }
            eprintln!("Error: {:#}", e);
            std::process::exit(1)
        }
    }
}
