mod input;
mod ook;

use clap::Parser;
use serde::Serialize;
use std::error::Error;

#[derive(Parser)]
#[clap(version, about, long_about = None)]
struct Args {
    /// Brainfuck file to convert, or literal Brainfuck text
    source: Option<String>,

    /// Print the conversion as a JSON object
    #[clap(long)]
    json: bool,
}

#[derive(Serialize)]
struct Conversion<'a> {
    source: &'a str,
    from_file: bool,
    ook: &'a str,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let (source, from_file) = input::resolve(args.source.as_deref());
    let ook = ook::bf_to_ook(&source);

    if args.json {
        let conversion = Conversion {
            source: &source,
            from_file,
            ook: &ook,
        };
        println!("{}", serde_json::to_string(&conversion)?);
    } else {
        println!("{}", ook);
    }
    Ok(())
}
