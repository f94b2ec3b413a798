use rainwords::constants::{DEFAULT_CORPUS, DEFAULT_TOP_N};
use rainwords::word_frequency::top_n_words_in_file;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        println!("Usage: topwords [path] [n]");
        println!();
        println!("Prints the n most frequent words in the text file at path.");
        println!("Defaults: path = {}, n = {}", DEFAULT_CORPUS, DEFAULT_TOP_N);
        std::process::exit(0);
    }

    let path = args.get(1).map(String::as_str).unwrap_or(DEFAULT_CORPUS);
    let n: usize = match args.get(2) {
        Some(raw) => match raw.parse() {
            Ok(n) => n,
            Err(_) => {
                eprintln!("The value of n must be a positive integer, got: {}", raw);
                std::process::exit(1);
            }
        },
        None => DEFAULT_TOP_N,
    };

    let words = match top_n_words_in_file(path, n) {
        Ok(words) => words,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    println!("Top {} most frequent words:", n);
    for (rank, entry) in words.iter().enumerate() {
        println!("{}: {} {}", rank + 1, entry.word, entry.count);
    }
}
