//! Top-N word frequency counter.
//!
//! One streaming pass over the input bytes: ASCII letters are case-folded
//! to lowercase and accumulated into the current word; an apostrophe joins
//! the word only if a letter has already been accumulated (so "know't" and
//! "don't" are single words but a leading apostrophe never starts one); any
//! other byte terminates the word. Counts live in a `HashMap`, then the
//! distinct words are sorted by descending count.
//!
//! Tie-break between equal counts: lexicographically ascending word. This
//! is deterministic, documented, and independent of hash iteration order —
//! the same input always yields the same ordering, sequentially or via
//! [`top_n_words_parallel`].

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use rayon::prelude::*;
use serde::Serialize;

use crate::error::{CountError, CountResult};

/// A distinct normalized word and its occurrence count.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct WordCount {
    pub word: String,
    pub count: u64,
}

/// Byte-level tokenizer state: the word currently being accumulated.
struct Tokenizer {
    word: String,
}

impl Tokenizer {
    fn new() -> Self {
        Self {
            word: String::new(),
        }
    }

    /// Feed one byte; completed words are counted into `counts`.
    #[inline]
    fn feed(&mut self, b: u8, counts: &mut HashMap<String, u64>) {
        if b.is_ascii_alphabetic() {
            self.word.push(b.to_ascii_lowercase() as char);
        } else if b == b'\'' && !self.word.is_empty() {
            self.word.push('\'');
        } else {
            self.flush(counts);
        }
    }

    /// Emit any in-progress word (also called at end of input).
    fn flush(&mut self, counts: &mut HashMap<String, u64>) {
        if !self.word.is_empty() {
            *counts.entry(std::mem::take(&mut self.word)).or_insert(0) += 1;
        }
    }
}

/// Count every normalized word in the stream.
///
/// Reads in 64 KiB chunks; the input never needs to fit in memory.
pub fn count_words<R: Read>(reader: R) -> std::io::Result<HashMap<String, u64>> {
    let mut reader = BufReader::with_capacity(64 * 1024, reader);
    let mut buf = [0u8; 64 * 1024];
    let mut counts = HashMap::new();
    let mut tokenizer = Tokenizer::new();

    loop {
        let read = reader.read(&mut buf)?;
        if read == 0 {
            break;
        }
        for &b in &buf[..read] {
            tokenizer.feed(b, &mut counts);
        }
    }
    tokenizer.flush(&mut counts);

    Ok(counts)
}

/// Count every normalized word in an in-memory slice.
fn count_words_slice(text: &[u8]) -> HashMap<String, u64> {
    let mut counts = HashMap::new();
    let mut tokenizer = Tokenizer::new();
    for &b in text {
        tokenizer.feed(b, &mut counts);
    }
    tokenizer.flush(&mut counts);
    counts
}

/// Order distinct words by descending count, ties lexicographically
/// ascending, and keep the first `n`.
fn select_top_n(counts: HashMap<String, u64>, n: usize) -> Vec<WordCount> {
    let mut entries: Vec<WordCount> = counts
        .into_iter()
        .map(|(word, count)| WordCount { word, count })
        .collect();
    // Words are unique, so the comparator is a total order and an unstable
    // sort is deterministic.
    entries.sort_unstable_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    entries.truncate(n);
    entries
}

fn validate_n(n: usize) -> CountResult<()> {
    if n == 0 {
        return Err(CountError::InvalidArgument(
            "requested word count n must be positive".to_string(),
        ));
    }
    Ok(())
}

/// The `n` most frequent words in the stream (fewer if fewer distinct
/// words exist).
///
/// Fails with `InvalidArgument` when `n` is zero and `InputUnavailable`
/// when the stream cannot be read; no partial result is produced.
pub fn top_n_words<R: Read>(reader: R, n: usize) -> CountResult<Vec<WordCount>> {
    validate_n(n)?;
    let counts = count_words(reader).map_err(|source| CountError::InputUnavailable {
        path: "<stream>".to_string(),
        source,
    })?;
    Ok(select_top_n(counts, n))
}

/// [`top_n_words`] over a file path; open/read failures carry the path.
pub fn top_n_words_in_file<P: AsRef<Path>>(path: P, n: usize) -> CountResult<Vec<WordCount>> {
    validate_n(n)?;
    let path = path.as_ref();
    let label = || path.display().to_string();
    let file = File::open(path).map_err(|source| CountError::InputUnavailable {
        path: label(),
        source,
    })?;
    let counts = count_words(file).map_err(|source| CountError::InputUnavailable {
        path: label(),
        source,
    })?;
    Ok(select_top_n(counts, n))
}

/// Parallel variant of [`top_n_words`] over an in-memory text.
///
/// Partitions the text across the rayon pool, counts each partition
/// independently, and merges the partial maps by summing. Partition
/// boundaries are advanced to the next separator byte so no token
/// straddles two partitions — final counts and ordering are identical to
/// the sequential pass.
pub fn top_n_words_parallel(text: &[u8], n: usize) -> CountResult<Vec<WordCount>> {
    validate_n(n)?;

    let num_chunks = rayon::current_num_threads().max(1);
    let target = (text.len() / num_chunks).max(1);

    // Cut at separator bytes only (a byte that can never extend a word).
    let mut bounds = vec![0usize];
    let mut pos = target;
    while pos < text.len() {
        while pos < text.len() && (text[pos].is_ascii_alphabetic() || text[pos] == b'\'') {
            pos += 1;
        }
        if pos < text.len() {
            bounds.push(pos);
        }
        pos += target;
    }
    bounds.push(text.len());

    let counts = bounds
        .par_windows(2)
        .map(|w| count_words_slice(&text[w[0]..w[1]]))
        .reduce(HashMap::new, |mut acc, partial| {
            for (word, count) in partial {
                *acc.entry(word).or_insert(0) += count;
            }
            acc
        });

    Ok(select_top_n(counts, n))
}
