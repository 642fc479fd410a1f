use clap::Parser;
use log::{info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use huffman::{encode_str, Encoded};

/// Encode text with a Huffman code and decode it again.
#[derive(Parser, Debug)]
#[clap(version, about)]
struct Args {
    /// Texts to encode; each is coded with its own tree
    #[clap(value_name = "TEXT")]
    texts: Vec<String>,

    /// Print the tree structure
    #[clap(long)]
    tree: bool,

    /// Print the code of every symbol
    #[clap(long)]
    codes: bool,

    /// More log output (-v debug, -vv trace)
    #[clap(short, long, parse(from_occurrences))]
    verbose: u8,

    /// Only log errors
    #[clap(short, long)]
    quiet: bool,
}

impl Args {
    fn level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    TermLogger::init(
        args.level(),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let texts = if args.texts.is_empty() {
        vec!["The bird is the word".to_string(), "A".to_string()]
    } else {
        args.texts.clone()
    };

    for text in &texts {
        let encoded = encode_str(text)?;
        report(text, &encoded, &args)?;
    }
    info!("Done.");
    Ok(())
}

fn report(text: &str, encoded: &Encoded<char>, args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let stats = encoded.stats();
    println!("The size of the data is: {} bytes", text.len());
    println!("The content of the data is: {}", text);
    println!(
        "The size of the encoded data is: {} bytes ({} bits, {:.3} bits/symbol)",
        stats.bytes,
        stats.bits,
        stats.bits_per_symbol()
    );
    println!("The content of the encoded data is: {}", encoded.stream());

    if args.tree {
        print!("{}", encoded.tree());
    }
    if args.codes {
        let codes = encoded.tree().code_table();
        let mut rows: Vec<(String, char)> = codes
            .iter()
            .map(|(&symbol, _)| (codes.code_string(&symbol).unwrap_or_default(), symbol))
            .collect();
        rows.sort_by(|a, b| a.0.len().cmp(&b.0.len()).then_with(|| a.0.cmp(&b.0)));
        for (code, symbol) in rows {
            println!("  {:?} {}", symbol, code);
        }
    }

    let decoded = encoded.decode_string()?;
    println!("The content of the decoded data is: {}\n", decoded);
    if decoded != text {
        return Err(format!("decoded text differs from input {:?}", text).into());
    }
    Ok(())
}
