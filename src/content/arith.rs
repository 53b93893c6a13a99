/// Arithmetic question families: small sums, differences, and parity.

use rand::{Rng, RngCore};

use crate::domain::round::{Answer, Round};

/// a + b, distractor off by one.
pub fn simple_arith(rng: &mut dyn RngCore) -> Round {
    let a = rng.gen_range(1..=5);
    let b = rng.gen_range(1..=5);
    let d: i32 = if rng.gen_bool(0.5) { 1 } else { -1 };
    Round::new(
        format!("{} + {}", a, b),
        vec![
            Answer::new(true, format!("{}", a + b)),
            Answer::new(false, format!("{}", a + b + d)),
        ],
    )
}

/// a - b with a > b, distractor off by one.
pub fn simple_arith_2(rng: &mut dyn RngCore) -> Round {
    let a = rng.gen_range(5..=9);
    let b = rng.gen_range(1..=4);
    let d: i32 = if rng.gen_bool(0.5) { 1 } else { -1 };
    Round::new(
        format!("{} - {}", a, b),
        vec![
            Answer::new(true, format!("{}", a - b)),
            Answer::new(false, format!("{}", a - b + d)),
        ],
    )
}

/// Parity of a three-term sum. Answers are คู่ (even) / คี่ (odd).
pub fn simple_arith_parity(rng: &mut dyn RngCore) -> Round {
    let a = rng.gen_range(1..=5);
    let b = rng.gen_range(1..=5);
    let c = rng.gen_range(1..=5);
    let even = (a + b + c) % 2 == 0;
    parity_round(format!("{} + {} + {}", a, b, c), even)
}

/// Parity of a product.
pub fn simple_arith_parity_2(rng: &mut dyn RngCore) -> Round {
    let a = rng.gen_range(2..=9);
    let b = rng.gen_range(2..=9);
    let even = (a * b) % 2 == 0;
    parity_round(format!("{} × {}", a, b), even)
}

fn parity_round(question: String, even: bool) -> Round {
    Round::new(
        question,
        vec![
            Answer::new(true, if even { "คู่" } else { "คี่" }),
            Answer::new(false, if even { "คี่" } else { "คู่" }),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn sums_are_labeled_correctly() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..50 {
            let r = simple_arith(&mut rng);
            let parts: Vec<i32> = r.question.split(" + ").map(|s| s.parse().unwrap()).collect();
            let sum = parts[0] + parts[1];
            let correct = r.answers.iter().find(|a| a.correct).unwrap();
            assert_eq!(correct.label, sum.to_string());
            let wrong = r.answers.iter().find(|a| !a.correct).unwrap();
            assert_ne!(wrong.label, correct.label);
        }
    }

    #[test]
    fn differences_never_negative() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..50 {
            let r = simple_arith_2(&mut rng);
            let correct = r.answers.iter().find(|a| a.correct).unwrap();
            assert!(correct.label.parse::<i32>().unwrap() >= 0);
        }
    }

    #[test]
    fn parity_answers_disagree() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let r = simple_arith_parity(&mut rng);
            assert_ne!(r.answers[0].label, r.answers[1].label);
        }
    }
}
