use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use huffman_tree_compression::{decode, encode, logging};


/// Compress or decompress a text file with Huffman coding.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {

    /// File to read
    #[arg(short, long, env = "HUFFMAN_FILE", default_value = "compressed.txt")]
    file: PathBuf,

    /// Decompress the file instead of compressing it
    #[arg(short, long)]
    decompress: bool,

    /// Where to write the result [default: compressed.txt or decompressed.txt]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Report how much space compression saved
    #[arg(short, long)]
    verbose: bool,

    /// Default log filter, overridden by RUST_LOG
    #[arg(long, env = "HUFFMAN_LOG", default_value = "warn")]
    log: String,

    /// Multi-line log output
    #[arg(long)]
    pretty: bool,

}


fn main() -> Result<(), Box<dyn Error>> {

    let args = Args::parse();

    logging::setup_logging(&args.log, args.pretty);

    let input = fs::read(&args.file)
        .map_err(|e| format!("Could not read file {}: {e}", args.file.display()))?;

    if args.decompress {

        let output = args.output.unwrap_or_else(|| PathBuf::from("decompressed.txt"));
        let text = decode(&input)?;

        fs::write(&output, text)
            .map_err(|e| format!("Could not write file {}: {e}", output.display()))?;

        info!(output = %output.display(), "decompressed");

    } else {

        let output = args.output.unwrap_or_else(|| PathBuf::from("compressed.txt"));
        let text = String::from_utf8(input)
            .map_err(|e| format!("{} is not valid UTF-8: {e}", args.file.display()))?;
        let compressed = encode(&text)?;

        fs::write(&output, &compressed)
            .map_err(|e| format!("Could not write file {}: {e}", output.display()))?;

        info!(output = %output.display(), "compressed");

        if args.verbose {
            println!("Data compressed from {} bytes to {} bytes", text.len(), compressed.len());

            if let Some(saved) = saved_percent(text.len(), compressed.len()) {
                println!("saved {saved:.2}% of memory");
            }
        }
    }

    Ok(())
}


/// Share of the original size saved by compression, `None` for empty input.
fn saved_percent(original: usize, compressed: usize) -> Option<f64> {
    if original == 0 {
        return None;
    }

    Some((original as f64 - compressed as f64) / original as f64 * 100.0)
}


#[cfg(test)]
mod tests {

    use super::*;


    #[test]
    fn no_percentage_for_empty_input() {
        assert_eq!(saved_percent(0, 12), None);
    }


    #[test]
    fn percentage_saved() {
        assert_eq!(saved_percent(200, 50), Some(75.0));
        assert_eq!(saved_percent(10, 20), Some(-100.0));
    }

}
