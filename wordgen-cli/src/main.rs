use std::env;
use std::fs;

use wordgen_core::model::sampler::WordSampler;
use wordgen_core::model::transition_table::{DEFAULT_LOOK_BACK, TransitionTable};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Positional arguments, all optional:
    //   wordgen-cli [corpus] [count] [look_back]
    let mut args = env::args().skip(1);
    let corpus_path = args.next().unwrap_or_else(|| "hoffman.txt".to_owned());
    let count: usize = match args.next() {
        Some(value) => value.parse()?,
        None => 30,
    };
    let look_back: usize = match args.next() {
        Some(value) => value.parse()?,
        None => DEFAULT_LOOK_BACK,
    };

    // Case folding happens here; the model builder expects folded text
    let text = fs::read_to_string(&corpus_path)?.to_lowercase();

    let table = TransitionTable::from_text(&text, look_back)?;
    log::info!(
        "learned {} prefixes of length {} from {}",
        table.len(),
        look_back,
        corpus_path
    );

    // One generated word per line
    let sampler = WordSampler::new(&table);
    let mut rng = rand::rng();
    for _ in 0..count {
        println!("{}", sampler.sample(&mut rng));
    }

    Ok(())
}
