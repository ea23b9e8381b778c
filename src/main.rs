use std::io::{self, BufRead};

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use minimizer_oracle::{
    BaseMapping, Canonicalization, Minimizer, Oracle, OracleConfig, Params, Sequence, render_all,
};
use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::info;

/// Sequence length used when neither `--seq-len` nor `--sequence` is given.
const DEFAULT_SEQ_LEN: usize = 10;

#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq)]
enum MappingArg {
    /// A=00, C=01, G=10, T=11
    Acgt,
    /// A=01, C=00, G=11, T=10
    Catg,
}

impl From<MappingArg> for BaseMapping {
    fn from(m: MappingArg) -> Self {
        match m {
            MappingArg::Acgt => BaseMapping::ACGT,
            MappingArg::Catg => BaseMapping::CATG,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq)]
enum StrandArg {
    /// Complement each base, keep order
    Complement,
    /// Complement each base, then reverse
    ReverseComplement,
}

impl From<StrandArg> for Canonicalization {
    fn from(s: StrandArg) -> Self {
        match s {
            StrandArg::Complement => Canonicalization::Complement,
            StrandArg::ReverseComplement => Canonicalization::ReverseComplement,
        }
    }
}

/// Brute-force minimizer fixtures for testing fast minimizer implementations.
#[derive(Parser, Debug)]
#[command(name = "minimizer-oracle")]
#[command(version)]
#[command(about = "Brute-force ground-truth minimizers", long_about = None)]
struct Cli {
    /// Length of each random sequence (defaults to 10, or the literal's length)
    #[arg(short = 'n', long)]
    seq_len: Option<usize>,

    /// K-mer length
    #[arg(short, default_value_t = 1)]
    k: usize,

    /// Window length in bases
    #[arg(short, long, default_value_t = 1)]
    win_len: usize,

    /// Number of random sequences to generate
    #[arg(long, default_value_t = 1)]
    n_seq: usize,

    /// Use this sequence instead of random ones
    #[arg(short, long, conflicts_with = "n_seq")]
    sequence: Option<String>,

    /// Seed for the random generator (picked and logged if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Read `seq_len k win_len` from standard input, overriding the flags
    #[arg(long)]
    stdin: bool,

    /// Base to 2-bit code assignment
    #[arg(long, value_enum, default_value_t = MappingArg::Acgt)]
    mapping: MappingArg,

    /// How the second-strand k-mer is formed
    #[arg(long, value_enum, default_value_t = StrandArg::Complement)]
    strand: StrandArg,

    /// Only report full-length windows
    #[arg(long)]
    no_boundaries: bool,
}

fn read_params_line() -> Result<Params> {
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read parameters from stdin")?;
    line.parse::<Params>().context("invalid parameters on stdin")
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = OracleConfig::default()
        .with_mapping(cli.mapping.into())
        .with_canonicalization(cli.strand.into())
        .with_boundaries(!cli.no_boundaries);
    let oracle = Oracle::new(config);

    let literal = cli
        .sequence
        .as_deref()
        .map(str::parse::<Sequence>)
        .transpose()
        .context("invalid --sequence")?;

    let params = if cli.stdin {
        read_params_line()?
    } else {
        let seq_len = cli
            .seq_len
            .or(literal.as_ref().map(Sequence::len))
            .unwrap_or(DEFAULT_SEQ_LEN);
        Params::new(seq_len, cli.k, cli.win_len).context("invalid parameters")?
    };

    let sequences = match literal {
        Some(seq) => vec![seq],
        None => {
            if cli.n_seq == 0 {
                bail!("--n-seq must be ≥ 1");
            }
            let seed = cli.seed.unwrap_or_else(|| rand::rng().random());
            info!(seed, "generating {} random sequence(s)", cli.n_seq);
            let mut rng = StdRng::seed_from_u64(seed);
            (0..cli.n_seq)
                .map(|_| Sequence::random(&mut rng, params.seq_len()))
                .collect()
        }
    };

    info!(
        seq_len = params.seq_len(),
        k = params.k(),
        win_len = params.win_len(),
        mapping = %config.mapping,
        strand = ?config.canonicalization,
        boundaries = config.boundaries,
        "computing oracle minimizers"
    );

    let results = sequences
        .iter()
        .map(|seq| oracle.run(seq, &params))
        .collect::<Result<Vec<Vec<Minimizer>>, _>>()
        .context("oracle run failed")?;

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    render_all(
        &mut out,
        sequences.iter().zip(results.iter().map(Vec::as_slice)),
    )
    .context("failed to write output")?;

    Ok(())
}
