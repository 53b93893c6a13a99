/// Content Source: the registry of question generators and the per-mode
/// level sequences.
///
/// Each `GeneratorId` variant is one question family. `generate()` is
/// stateless: repeated calls may return different random content but never
/// fail, and every round it emits carries at least one correct and one
/// incorrect answer (enforced by the validation tests below — content is
/// static, so a malformed round is a build-time defect).

pub mod arith;
pub mod messages;
pub mod ordering;
pub mod pick;
pub mod triple;
pub mod trivia;
pub mod wordplay;

use rand::RngCore;

use crate::domain::evaluate::Mode;
use crate::domain::round::Round;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GeneratorId {
    SimpleArith,
    DayOfTheWeek,
    Province,
    GeographyTrivia,
    LetterBeforeEng,
    CrowColor,
    SimpleArith2,
    Country,
    MisnomerTrivia,
    ProvincePun,
    SimpleArithParity,
    ThaiTrivia,
    Physician,
    LetterBeforeThai,
    SimpleArithParity2,
    FishPun,
    ShirtColor,
    NounUnit,
    BlueWhale,
    WaterPun,
    X3Animal,
    X3Hormone,
    X3Fruit,
    X3Spelling,
    X3Logo,
}

impl GeneratorId {
    /// Every distinct family, for exhaustive content validation.
    pub const ALL: [GeneratorId; 25] = [
        GeneratorId::SimpleArith,
        GeneratorId::DayOfTheWeek,
        GeneratorId::Province,
        GeneratorId::GeographyTrivia,
        GeneratorId::LetterBeforeEng,
        GeneratorId::CrowColor,
        GeneratorId::SimpleArith2,
        GeneratorId::Country,
        GeneratorId::MisnomerTrivia,
        GeneratorId::ProvincePun,
        GeneratorId::SimpleArithParity,
        GeneratorId::ThaiTrivia,
        GeneratorId::Physician,
        GeneratorId::LetterBeforeThai,
        GeneratorId::SimpleArithParity2,
        GeneratorId::FishPun,
        GeneratorId::ShirtColor,
        GeneratorId::NounUnit,
        GeneratorId::BlueWhale,
        GeneratorId::WaterPun,
        GeneratorId::X3Animal,
        GeneratorId::X3Hormone,
        GeneratorId::X3Fruit,
        GeneratorId::X3Spelling,
        GeneratorId::X3Logo,
    ];

    /// Produce one fresh round. Answer order is arbitrary here; the
    /// session controller shuffles before display.
    pub fn generate(self, rng: &mut dyn RngCore) -> Round {
        match self {
            GeneratorId::SimpleArith => arith::simple_arith(rng),
            GeneratorId::SimpleArith2 => arith::simple_arith_2(rng),
            GeneratorId::SimpleArithParity => arith::simple_arith_parity(rng),
            GeneratorId::SimpleArithParity2 => arith::simple_arith_parity_2(rng),
            GeneratorId::DayOfTheWeek => ordering::day_of_the_week(rng),
            GeneratorId::LetterBeforeEng => ordering::letter_before_eng(rng),
            GeneratorId::LetterBeforeThai => ordering::letter_before_thai(rng),
            GeneratorId::Province => wordplay::province(rng),
            GeneratorId::Country => wordplay::country(rng),
            GeneratorId::ProvincePun => wordplay::province_pun(rng),
            GeneratorId::CrowColor => wordplay::crow_color(rng),
            GeneratorId::FishPun => wordplay::fish_pun(rng),
            GeneratorId::WaterPun => wordplay::water_pun(rng),
            GeneratorId::Physician => wordplay::physician(rng),
            GeneratorId::GeographyTrivia => trivia::geography_trivia(rng),
            GeneratorId::MisnomerTrivia => trivia::misnomer_trivia(rng),
            GeneratorId::ThaiTrivia => trivia::thai_trivia(rng),
            GeneratorId::ShirtColor => trivia::shirt_color(rng),
            GeneratorId::NounUnit => trivia::noun_unit(rng),
            GeneratorId::BlueWhale => trivia::blue_whale(rng),
            GeneratorId::X3Animal => triple::x3_animal(rng),
            GeneratorId::X3Hormone => triple::x3_hormone(rng),
            GeneratorId::X3Fruit => triple::x3_fruit(rng),
            GeneratorId::X3Spelling => triple::x3_spelling(rng),
            GeneratorId::X3Logo => triple::x3_logo(rng),
        }
    }
}

/// The full run, in play order. Hard plays all of it; Easy plays the first
/// `NUM_EASY_LEVELS`. The x3_logo triple at the end is deliberate.
pub const LEVELS: [GeneratorId; 27] = [
    GeneratorId::SimpleArith,
    GeneratorId::DayOfTheWeek,
    GeneratorId::Province,
    GeneratorId::GeographyTrivia,
    GeneratorId::LetterBeforeEng,
    GeneratorId::CrowColor,
    GeneratorId::SimpleArith2,
    GeneratorId::Country,
    GeneratorId::MisnomerTrivia,
    GeneratorId::ProvincePun,
    GeneratorId::SimpleArithParity,
    GeneratorId::ThaiTrivia,
    GeneratorId::Physician,
    GeneratorId::LetterBeforeThai,
    GeneratorId::SimpleArithParity2,
    GeneratorId::FishPun,
    GeneratorId::ShirtColor,
    GeneratorId::NounUnit,
    GeneratorId::BlueWhale,
    GeneratorId::WaterPun,
    GeneratorId::X3Animal,
    GeneratorId::X3Hormone,
    GeneratorId::X3Fruit,
    GeneratorId::X3Spelling,
    GeneratorId::X3Logo,
    GeneratorId::X3Logo,
    GeneratorId::X3Logo,
];

pub const NUM_EASY_LEVELS: usize = 20;

/// Ordered generator ids for a run in the given mode.
pub fn sequence(mode: Mode) -> &'static [GeneratorId] {
    match mode {
        Mode::Easy => &LEVELS[..NUM_EASY_LEVELS],
        Mode::Hard => &LEVELS[..],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Content is static, so this is where malformed rounds must be
    /// caught: every family, many samples, full validation.
    #[test]
    fn every_generator_always_yields_a_valid_round() {
        let mut rng = StdRng::seed_from_u64(42);
        for id in GeneratorId::ALL {
            for _ in 0..200 {
                let round = id.generate(&mut rng);
                round
                    .validate()
                    .unwrap_or_else(|e| panic!("{:?}: {}", id, e));
                assert!(
                    !round.question.trim().is_empty(),
                    "{:?}: empty question",
                    id
                );
                assert!(
                    (2..=3).contains(&round.answers.len()),
                    "{:?}: unexpected answer count",
                    id
                );
            }
        }
    }

    #[test]
    fn sequences_have_expected_lengths() {
        assert_eq!(sequence(Mode::Easy).len(), 20);
        assert_eq!(sequence(Mode::Hard).len(), 27);
    }

    #[test]
    fn easy_is_a_prefix_of_hard() {
        let easy = sequence(Mode::Easy);
        let hard = sequence(Mode::Hard);
        assert_eq!(&hard[..easy.len()], easy);
    }

    #[test]
    fn hard_run_ends_with_the_logo_triple() {
        let hard = sequence(Mode::Hard);
        assert_eq!(&hard[24..], &[GeneratorId::X3Logo; 3]);
    }
}
