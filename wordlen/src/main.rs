use engine::MapReduce;
use eyre::{ensure, Result};
use itertools::Itertools;
use std::{fs::read_to_string, path::PathBuf};
use structopt::StructOpt;

const SAMPLE_TEXT: &str = include_str!("sample.txt");
const ARTICLES: &[&str] = &["a", "an", "the"];

#[derive(StructOpt, Debug)]
struct Opt {
    #[structopt(short, long, default_value = "4")]
    num_workers: usize,
    #[structopt(short, long)]
    input_file: Option<PathBuf>,
}

fn init_logger() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init()
}

fn words(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .map(|word| word.trim_matches(|c: char| ".:,;?".contains(c)))
        .filter(|word| !word.is_empty() && !ARTICLES.contains(word))
        .collect_vec()
}

fn main() -> Result<()> {
    init_logger();

    let opt = Opt::from_args();
    let text = match &opt.input_file {
        Some(path) => read_to_string(path)?,
        None => SAMPLE_TEXT.to_owned(),
    };

    let words = words(&text);
    ensure!(!words.is_empty(), "input contains no words");
    let word_count = words.len();

    let map_reduce = MapReduce::new(opt.num_workers)?;

    // Total character count per distinct word, e.g. "word1 word2 word1"
    // yields ("word1", 10) and ("word2", 5).
    let total_len_by_word = map_reduce.map_reduce(words, |word| (word, word.len()), |x, y| x + y);

    let total: usize = total_len_by_word.iter().map(|(_, len)| len).sum();
    println!(
        "The average word length is: {:.1}",
        total as f64 / word_count as f64
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::words;

    #[test]
    fn strips_punctuation_and_articles() {
        assert_eq!(
            words("But the master-builder, an explorer of truth."),
            vec!["But", "master-builder", "explorer", "of", "truth"]
        );
    }
}
