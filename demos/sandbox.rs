use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use permutor::{Format, Permutation, Shuffles};

/// Shuffle a list of words
///
/// Draws random permutations of the given words, printing each permutation followed by the
/// permuted words.
#[derive(Parser, Debug)]
#[clap(version, about, long_about = None)]
struct Args {
    /// Seed for a reproducible shuffle. Uses the thread-local generator if omitted.
    #[clap(long)]
    seed: Option<u64>,
    /// How to print the permutation: default, cycle or full.
    #[clap(long, default_value = "cycle")]
    format: String,
    /// Number of permutations to draw.
    #[clap(long, default_value_t = 2)]
    rounds: usize,
    /// The words to shuffle.
    #[clap(default_values = &[
        "Ananas", "Apple", "Banana", "Lemon", "Orange", "Peach", "Peer", "Watermelon",
    ])]
    words: Vec<String>,
}

fn shuffle<R: Rng>(
    rng: &mut R,
    words: &[String],
    rounds: usize,
    format: Format,
) -> Result<(), permutor::PermError> {
    let shuffles = Shuffles::new(words.len())?;
    for _ in 0..rounds {
        let perm: Permutation = rng.sample(shuffles);
        println!("{}", perm.display(format));
        for word in perm.apply(words)? {
            println!("{}", word);
        }
        println!();
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    let format = Format::parse(&args.format);

    let result = match args.seed {
        Some(seed) => shuffle(
            &mut StdRng::seed_from_u64(seed),
            &args.words,
            args.rounds,
            format,
        ),
        None => shuffle(&mut rand::thread_rng(), &args.words, args.rounds, format),
    };

    if let Err(err) = result {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}
