use rand::seq::SliceRandom;
use rand::Rng;

/// Number of draws per request. Each draw yields one or two titles.
pub const DRAWS: usize = 100;

pub const PREFIXES: [&str; 3] = [
    "The exciting possibilities of ",
    "The fascinating relationship between ",
    "The cause of ",
];

pub const ENDINGS: [&str; 3] = [
    ": the pivotal relationship",
    ": theory and practice",
    ": the core of the issue",
];

/// Build title suggestions from pairs of concepts.
///
/// Every draw samples two concepts with replacement and a combo in `1..=6`.
/// Combos 1 and 2 emit a prefixed title *and* a title with an ending, 3 to 5
/// emit only the ending form, 6 emits the bare pair. The result therefore
/// holds between `DRAWS` and `2 * DRAWS` titles. No concepts, no titles.
pub fn generate_titles<R: Rng + ?Sized>(concepts: &[String], rng: &mut R) -> Vec<String> {
    if concepts.is_empty() {
        return Vec::new();
    }

    let mut titles = Vec::with_capacity(DRAWS * 2);

    for _ in 0..DRAWS {
        let word1 = pick(concepts, rng);
        let word2 = pick(concepts, rng);
        let combo: u8 = rng.gen_range(1..=6);

        if combo < 3 {
            let prefix = PREFIXES.choose(rng).copied().unwrap_or_default();
            titles.push(format!("{}{} and {}", prefix, word1, word2));
        }
        if combo < 6 {
            let ending = ENDINGS.choose(rng).copied().unwrap_or_default();
            titles.push(format!("{} and {}{}", word1, word2, ending));
        }
        if combo == 6 {
            titles.push(format!("{} and {}", word1, word2));
        }
    }

    titles
}

fn pick<'a, R: Rng + ?Sized>(concepts: &'a [String], rng: &mut R) -> &'a str {
    concepts.choose(rng).map(String::as_str).unwrap_or_default()
}
