//! Oligocalc CLI
//!
//! Batch front-end over the analysis core: sequences in, one TSV (or JSON)
//! row of properties per sequence out.

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use clap::Parser;

use oligocalc::{analyze_batch, parse_input, to_json, to_tsv, CalcParams, ThermoModel};

#[derive(Parser, Debug)]
#[command(name = "oligocalc", about = "DNA oligonucleotide property calculator")]
struct Args {
    /// Sequences, one per line (stdin is read when neither this nor --file is given)
    #[arg(short, long)]
    seq: Option<String>,

    /// File with sequences, one per line
    #[arg(short, long, conflicts_with = "seq")]
    file: Option<String>,

    /// Absorbance readings at 260 nm, one per line, aligned to the sequences by index
    #[arg(short, long, default_value = "")]
    abs: String,

    /// Sodium concentration, mM
    #[arg(long, default_value_t = 50.0)]
    na: f64,

    /// Magnesium concentration, mM
    #[arg(long, default_value_t = 0.0)]
    mg: f64,

    /// dNTP concentration, mM
    #[arg(long, default_value_t = 0.0)]
    dntp: f64,

    /// Primer/duplex concentration, nM
    #[arg(long, default_value_t = 500.0)]
    dna: f64,

    /// Thermodynamic model: breslauer, sugimoto or santalucia
    #[arg(long, default_value = "breslauer")]
    model: ThermoModel,

    /// Use the SantaLucia-style Tm formula with terminal/symmetry
    /// corrections instead of the traditional initiation-entropy formula
    #[arg(long)]
    santalucia_formula: bool,

    /// Emit JSON instead of TSV
    #[arg(long)]
    json: bool,
}

fn read_sequences(args: &Args) -> io::Result<String> {
    if let Some(seq) = &args.seq {
        return Ok(seq.clone());
    }
    if let Some(path) = &args.file {
        return fs::read_to_string(path);
    }
    let mut text = String::new();
    io::stdin().read_to_string(&mut text)?;
    Ok(text)
}

fn main() -> ExitCode {
    let args = Args::parse();

    let sequences = match read_sequences(&args) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("oligocalc: failed to read sequences: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let params = CalcParams {
        na: args.na,
        mg: args.mg,
        dntp: args.dntp,
        primer_nm: args.dna,
        model: args.model,
        traditional: !args.santalucia_formula,
    };

    let rows = parse_input(&sequences, &args.abs);
    let results = analyze_batch(&rows, &params);

    if args.json {
        match to_json(&results) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("oligocalc: failed to serialize results: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        print!("{}", to_tsv(&results, &params));
    }

    ExitCode::SUCCESS
}
