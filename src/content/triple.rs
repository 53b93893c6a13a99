/// The "x3" segment at the end of the Hard run: three answers per round,
/// two of them correct. In Hard mode only one safe pick exists, which is
/// what makes the closing stretch nasty.

use rand::RngCore;

use crate::content::pick::{choice, two_distinct};
use crate::domain::round::{Answer, Round};

/// Two distinct picks from `correct_pool`, one from `wrong_pool`.
fn triple_round(
    rng: &mut dyn RngCore,
    question: &str,
    correct_pool: &[&str],
    wrong_pool: &[&str],
) -> Round {
    let (a, b) = two_distinct(rng, correct_pool);
    let wrong = choice(rng, wrong_pool);
    Round::new(
        question,
        vec![
            Answer::new(true, *a),
            Answer::new(true, *b),
            Answer::new(false, *wrong),
        ],
    )
}

const FRUITS: [&str; 21] = [
    "มะก่อ", "มะขวิด", "มะงั่ว", "มะดัน",
    "มะดูก", "มะตูม", "มะไฟ", "มะยม",
    "มะปริง", "มะปี๊ด", "มะพลับ", "มะพูด",
    "มะเฟือง", "มะแฟน", "มะเม่า", "มะริด",
    "มะหวด", "มะหลอด", "มะหาด", "มะพร้าว", "มะนาวไม่รู้โห่",
];

const NOT_FRUITS: [&str; 14] = [
    "มะกะโรนี", "มะงุมมะงาหรา", "มะเดหวี", "มะโต",
    "มะมี่", "มะแม", "มะเรื่อง", "มะตะบะ", "มะล่องก่องแก่ง",
    "มะโรง", "มะลิ่ม", "มะเส็ง", "มะเหงก", "มะเมีย",
];

pub fn x3_fruit(rng: &mut dyn RngCore) -> Round {
    triple_round(rng, "ข้อใดเป็นชื่อผลไม้", &FRUITS, &NOT_FRUITS)
}

const ANIMALS: [&str; 8] = [
    "กระรอก", "กระต่าย", "กระทิง", "กระจง",
    "กระแต", "กระทา", "กระซู่", "กระบือ",
];

const NOT_ANIMALS: [&str; 7] = [
    "กระทะ", "กระโปรง", "กระเป๋า", "กระดาษ",
    "กระบวย", "กระด้ง", "กระจก",
];

pub fn x3_animal(rng: &mut dyn RngCore) -> Round {
    triple_round(rng, "ข้อใดเป็นชื่อสัตว์", &ANIMALS, &NOT_ANIMALS)
}

const HORMONES: [&str; 7] = [
    "อินซูลิน", "เมลาโทนิน", "อะดรีนาลีน", "เอสโตรเจน",
    "เทสโทสเตอโรน", "ออกซิโทซิน", "คอร์ติซอล",
];

const NOT_HORMONES: [&str; 6] = [
    "แอสไพริน", "พาราเซตามอล", "เจลาติน",
    "วิตามินซี", "คาเฟอีน", "เพนิซิลลิน",
];

pub fn x3_hormone(rng: &mut dyn RngCore) -> Round {
    triple_round(rng, "ข้อใดเป็นชื่อฮอร์โมน", &HORMONES, &NOT_HORMONES)
}

const SPELLED_RIGHT: [&str; 8] = [
    "อนุญาต", "สังเกต", "โน้ต", "ผัดไทย",
    "อานิสงส์", "บันดาล", "ลายเซ็น", "แก๊ง",
];

const SPELLED_WRONG: [&str; 8] = [
    "อนุญาติ", "สังเกตุ", "โน๊ต", "ผัดไท",
    "อานิสงฆ์", "บันดาน", "ลายเซ็นต์", "แก๊งค์",
];

pub fn x3_spelling(rng: &mut dyn RngCore) -> Round {
    triple_round(rng, "ข้อใดสะกดถูกต้อง", &SPELLED_RIGHT, &SPELLED_WRONG)
}

// Brand names instead of logo pictures; the terminal can't show artwork.
const CAR_BRANDS: [&str; 7] = [
    "โตโยต้า", "ฮอนด้า", "นิสสัน", "มาสด้า",
    "ซูซูกิ", "อีซูซุ", "มิตซูบิชิ",
];

const NOT_CAR_BRANDS: [&str; 6] = [
    "โตโยแต้", "ฮอนแด", "นิดสัน",
    "มาสด้าร์", "อีซูซิ", "มิตซูมาชิ",
];

pub fn x3_logo(rng: &mut dyn RngCore) -> Round {
    triple_round(rng, "ข้อใดเป็นยี่ห้อรถยนต์", &CAR_BRANDS, &NOT_CAR_BRANDS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn triples_have_two_correct_one_wrong() {
        let mut rng = StdRng::seed_from_u64(12);
        for _ in 0..100 {
            for r in [
                x3_fruit(&mut rng),
                x3_animal(&mut rng),
                x3_hormone(&mut rng),
                x3_spelling(&mut rng),
                x3_logo(&mut rng),
            ] {
                assert_eq!(r.answers.len(), 3);
                assert_eq!(r.answers.iter().filter(|a| a.correct).count(), 2);
                assert!(r.validate().is_ok());
            }
        }
    }

    #[test]
    fn correct_labels_never_collide() {
        let mut rng = StdRng::seed_from_u64(13);
        for _ in 0..200 {
            let r = x3_fruit(&mut rng);
            assert_ne!(r.answers[0].label, r.answers[1].label);
        }
    }
}
