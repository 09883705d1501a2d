use super::model::{Dataset, StudentRecord};

pub const SAMPLE_SIZE: usize = 100;
pub const SAMPLE_SEED: u64 = 42;

const GENDERS: [&str; 2] = ["male", "female"];
const PARENTAL_EDUCATION: [&str; 4] = ["high school", "associate degree", "bachelor", "master"];
const LUNCH: [&str; 2] = ["standard", "free/reduced"];
const TEST_PREP: [&str; 2] = ["none", "completed"];

/// Minimal deterministic PRNG (xoshiro256**)
pub struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    pub fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    pub fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    /// Uniform integer in `0..n` (multiply-shift on the high 32 bits).
    pub fn below(&mut self, n: u64) -> u64 {
        ((self.next_u64() >> 32) * n) >> 32
    }

    pub fn choose<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.below(items.len() as u64) as usize]
    }

    /// Uniform score in `0..=100`.
    pub fn score(&mut self) -> i64 {
        self.below(101) as i64
    }
}

/// Generate `n` synthetic students from `seed`.
///
/// Each column is drawn in full before the next one, so the first `k` rows
/// of a larger sample differ from a sample of size `k`.
pub fn generate(n: usize, seed: u64) -> Dataset {
    let mut rng = SimpleRng::new(seed);

    let genders: Vec<&str> = (0..n).map(|_| rng.choose(&GENDERS)).collect();
    let education: Vec<&str> = (0..n).map(|_| rng.choose(&PARENTAL_EDUCATION)).collect();
    let lunch: Vec<&str> = (0..n).map(|_| rng.choose(&LUNCH)).collect();
    let prep: Vec<&str> = (0..n).map(|_| rng.choose(&TEST_PREP)).collect();
    let math: Vec<i64> = (0..n).map(|_| rng.score()).collect();
    let reading: Vec<i64> = (0..n).map(|_| rng.score()).collect();
    let writing: Vec<i64> = (0..n).map(|_| rng.score()).collect();

    let records = (0..n)
        .map(|i| StudentRecord {
            gender: genders[i].to_string(),
            parental_education: education[i].to_string(),
            lunch: lunch[i].to_string(),
            test_prep_course: prep[i].to_string(),
            math_score: Some(math[i]),
            reading_score: Some(reading[i]),
            writing_score: Some(writing[i]),
        })
        .collect();

    Dataset::new(records)
}

/// The fallback dataset used when no data file exists.
pub fn default_sample() -> Dataset {
    generate(SAMPLE_SIZE, SAMPLE_SEED)
}
