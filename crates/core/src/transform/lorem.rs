//! Lorem Ipsum placeholder text.

use rand::seq::SliceRandom;
use rand::Rng;

const WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "ad", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi",
    "aliquip", "ex", "ea", "commodo", "consequat", "duis", "aute", "irure", "in", "reprehenderit",
    "voluptate", "velit", "esse", "cillum", "fugiat", "nulla", "pariatur", "excepteur", "sint",
    "occaecat", "cupidatat", "non", "proident", "sunt", "culpa", "qui", "officia", "deserunt",
    "mollit", "anim", "id", "est", "laborum",
];

const MIN_SENTENCE_WORDS: usize = 8;
const MAX_SENTENCE_WORDS: usize = 14;

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `count` words drawn uniformly (with replacement), grouped into sentences
/// of 8 to 14 words. Each sentence starts capitalized and ends with a period.
pub fn generate_lorem<R: Rng>(rng: &mut R, count: usize) -> String {
    let mut sentences = Vec::new();
    let mut remaining = count;

    while remaining > 0 {
        let length = rng
            .gen_range(MIN_SENTENCE_WORDS..=MAX_SENTENCE_WORDS)
            .min(remaining);
        remaining -= length;

        let words: Vec<String> = (0..length)
            .filter_map(|i| {
                let word = WORDS.choose(&mut *rng)?;
                Some(if i == 0 {
                    capitalize(word)
                } else {
                    (*word).to_string()
                })
            })
            .collect();

        sentences.push(format!("{}.", words.join(" ")));
    }

    sentences.join(" ")
}

pub fn generate_paragraphs<R: Rng>(rng: &mut R, paragraphs: usize, words_per_paragraph: usize) -> String {
    (0..paragraphs)
        .map(|_| generate_lorem(&mut *rng, words_per_paragraph))
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_word_pool_size() {
        assert!(WORDS.len() >= 60);
    }

    #[test]
    fn test_generate_lorem_word_count() {
        let mut rng = StdRng::seed_from_u64(1);
        let text = generate_lorem(&mut rng, 50);
        assert_eq!(text.split_whitespace().count(), 50);
    }

    #[test]
    fn test_generate_lorem_sentences_are_capitalized_and_terminated() {
        let mut rng = StdRng::seed_from_u64(3);
        let text = generate_lorem(&mut rng, 100);

        for sentence in text.split_terminator(". ") {
            let first = sentence.chars().next().unwrap();
            assert!(first.is_uppercase(), "sentence not capitalized: {sentence}");
            let words = sentence.trim_end_matches('.').split_whitespace().count();
            assert!(words <= MAX_SENTENCE_WORDS);
        }
        assert!(text.ends_with('.'));
    }

    #[test]
    fn test_generate_lorem_uses_pool_words() {
        let mut rng = StdRng::seed_from_u64(9);
        let text = generate_lorem(&mut rng, 30);
        for word in text.split_whitespace() {
            let bare = word.trim_end_matches('.').to_lowercase();
            assert!(WORDS.contains(&bare.as_str()), "unexpected word {bare}");
        }
    }

    #[test]
    fn test_generate_lorem_zero_words() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(generate_lorem(&mut rng, 0), "");
    }

    #[test]
    fn test_generate_paragraphs() {
        let mut rng = StdRng::seed_from_u64(5);
        let text = generate_paragraphs(&mut rng, 3, 20);
        assert_eq!(text.split("\n\n").count(), 3);
    }
}
