use clap::Parser;
use dualcode::{cli, io, params::EncodeParams, scoring::DEFAULT_STOP_PENALTY};

///
/// Find the nucleotide sequence encoding alpha (frame 0) and beta (frame +1)
/// with the best total substitution score
///
#[derive(Parser, Debug)]
#[clap(author, about, version)]
struct Opts {
    /// FASTA of the alpha protein (first record is used)
    #[clap(long)]
    alpha: std::path::PathBuf,
    /// FASTA of the beta protein (first record is used)
    #[clap(long)]
    beta: std::path::PathBuf,
    /// beta index aligned to alpha position 0
    #[clap(long, default_value_t = 0, allow_hyphen_values = true)]
    offset: isize,
    /// substitution matrix in NCBI text layout (BLOSUM62 if omitted)
    #[clap(long)]
    matrix: Option<std::path::PathBuf>,
    /// score of stop codons and unsatisfiable start/stop constraints
    #[clap(long, default_value_t = DEFAULT_STOP_PENALTY, allow_hyphen_values = true)]
    stop_penalty: i32,
    /// evaluate each position with rayon
    #[clap(long)]
    parallel: bool,
    /// print the report as JSON
    #[clap(long)]
    json: bool,
    /// write the report into this file instead of stdout
    #[clap(short, long)]
    output: Option<std::path::PathBuf>,
}

fn main() {
    env_logger::init();
    let opts: Opts = Opts::parse();
    log::debug!("opts={:?}", opts);

    let report = EncodeParams::new(opts.stop_penalty, opts.parallel)
        .and_then(|params| {
            cli::encode(
                &opts.alpha,
                &opts.beta,
                opts.offset,
                opts.matrix.as_deref(),
                params,
                opts.json,
            )
        })
        .and_then(|report| match &opts.output {
            Some(path) => io::write_string(path, &report)
                .map(|_| String::new())
                .map_err(Into::into),
            None => Ok(report),
        });

    match report {
        Ok(report) => {
            if !report.is_empty() {
                println!("{}", report);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
