/// Predecessor questions over fixed ordered sequences: English and Thai
/// consonant alphabets, and days of the week.
///
/// The distractor is always the element two places back (or, for days, the
/// following day), so both answers look plausible at a glance.

use rand::{Rng, RngCore};

use crate::domain::round::{Answer, Round};

const ENGLISH: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const THAI: &str = "กขฃคฅฆงจฉชซฌญฎฏฐฑฒณดตถทธนบปผฝพฟภมยรลวศษสหฬอฮ";

const DAYS: [&str; 7] = [
    "จันทร์", "อังคาร", "พุธ", "พฤหัสบดี", "ศุกร์", "เสาร์", "อาทิตย์",
];

fn letter_before(rng: &mut dyn RngCore, alphabet: &str) -> Round {
    let letters: Vec<char> = alphabet.chars().collect();
    let i = rng.gen_range(2..letters.len());
    Round::new(
        format!("พยัญชนะก่อน {}", letters[i]),
        vec![
            Answer::new(true, letters[i - 1].to_string()),
            Answer::new(false, letters[i - 2].to_string()),
        ],
    )
}

pub fn letter_before_eng(rng: &mut dyn RngCore) -> Round {
    letter_before(rng, ENGLISH)
}

pub fn letter_before_thai(rng: &mut dyn RngCore) -> Round {
    letter_before(rng, THAI)
}

/// "Which day comes before X?" — distractor is the day after.
pub fn day_of_the_week(rng: &mut dyn RngCore) -> Round {
    let i = rng.gen_range(1..DAYS.len());
    Round::new(
        format!("วันก่อนวัน{}", DAYS[i]),
        vec![
            Answer::new(true, format!("วัน{}", DAYS[i - 1])),
            Answer::new(false, format!("วัน{}", DAYS[(i + 1) % DAYS.len()])),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn predecessor_is_adjacent() {
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..50 {
            let r = letter_before_eng(&mut rng);
            let asked = r.question.chars().last().unwrap();
            let correct = &r.answers.iter().find(|a| a.correct).unwrap().label;
            let pos = ENGLISH.find(asked).unwrap();
            assert_eq!(*correct, ENGLISH[pos - 1..pos].to_string());
        }
    }

    #[test]
    fn thai_alphabet_never_asks_first_two() {
        let mut rng = StdRng::seed_from_u64(5);
        let first_two: Vec<char> = THAI.chars().take(2).collect();
        for _ in 0..100 {
            let r = letter_before_thai(&mut rng);
            let asked = r.question.chars().last().unwrap();
            assert!(!first_two.contains(&asked));
        }
    }

    #[test]
    fn day_answers_differ() {
        let mut rng = StdRng::seed_from_u64(6);
        for _ in 0..50 {
            let r = day_of_the_week(&mut rng);
            assert_ne!(r.answers[0].label, r.answers[1].label);
        }
    }
}
