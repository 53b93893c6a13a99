/// Pun families: real names versus sound-alike fakes, and riddle puns
/// where the distractor is another entry's punchline.

use rand::RngCore;

use crate::content::pick::{choice, two_distinct};
use crate::domain::round::{Answer, Round};

/// (real, fake) name pair → "which of these is a real X" round.
fn name_pair_round(question: &str, pair: &(&str, &str)) -> Round {
    Round::new(
        question,
        vec![Answer::new(true, pair.0), Answer::new(false, pair.1)],
    )
}

const PROVINCES: [(&str, &str); 11] = [
    ("เชียงใหม่", "เชียงเก่า"),
    ("กระบี่", "กระบอง"),
    ("แม่ฮ่องสอน", "พ่อฮ่องสอน"),
    ("ร้อยเอ็ด", "ร้อยสอง"),
    ("เลย", "เลย์"),
    ("นครปฐม", "นครมัธยม"),
    ("อ่างทอง", "อ่างเงิน"),
    ("ยะลา", "ละยา"),
    ("ระยอง", "ยะรอง"),
    ("สมุทรสาคร", "สมุทรสาคู"),
    ("สระแก้ว", "สระน้ำ"),
];

pub fn province(rng: &mut dyn RngCore) -> Round {
    name_pair_round("ข้อใดเป็นชื่อจังหวัด", choice(rng, &PROVINCES))
}

const COUNTRIES: [(&str, &str); 12] = [
    ("ฝรั่งเศส", "เศษฝรั่ง"),
    ("เยอรมัน", "เยอรเผือก"),
    ("อินเดีย", "เอาท์เดีย"),
    ("เกาหลีใต้", "เกาหลีตะวันออก"),
    ("อิรัก", "อิชัง"),
    ("เปรู", "เรปู"),
    ("เยเมน", "เยเนม"),
    ("มาลี", "มานี"),
    ("จอร์แดน", "จอแบน"),
    ("ลาว", "ราว"),
    ("ปานามา", "ปามานา"),
    ("บรูไน", "บรูนอก"),
];

pub fn country(rng: &mut dyn RngCore) -> Round {
    name_pair_round("ข้อใดเป็นชื่อประเทศ", choice(rng, &COUNTRIES))
}

/// (clue, correct, wrong) province riddles.
const PROVINCE_PUNS: [(&str, &str, &str); 6] = [
    ("อยู่ได้นานที่สุด", "น่าน", "แพร่"),
    ("ชอบบ่นงึมงำ", "ระนอง", "ระยอง"),
    ("เดินผ่านไปเฉย ๆ", "เลย", "ตาก"),
    ("ตากแดดทั้งวัน", "ตาก", "เลย"),
    ("มีอาวุธประจำกาย", "กระบี่", "ขอนแก่น"),
    ("แข็งแรงที่สุด", "ขอนแก่น", "อ่างทอง"),
];

pub fn province_pun(rng: &mut dyn RngCore) -> Round {
    let qa = choice(rng, &PROVINCE_PUNS);
    Round::new(
        format!("จังหวัดอะไร{}", qa.0),
        vec![Answer::new(true, qa.1), Answer::new(false, qa.2)],
    )
}

/// (color word, punchline) — "กาอะไรสีX". The wrong answer is the
/// punchline of a different color.
const CROWS: [(&str, &str); 7] = [
    ("สีแดง", "กาชาด"),
    ("สีส้ม", "การ์ฟีลด์"),
    ("สีเหลือง", "กาสาวพัสตร์"),
    ("สีน้ำตาล", "กาแฟนม"),
    ("สีเขียว", "กาฝาก"),
    ("สีเทา", "กาน้ำเหล็ก"),
    ("สีดำ", "กาปกติ"),
];

pub fn crow_color(rng: &mut dyn RngCore) -> Round {
    let (asked, other) = two_distinct(rng, &CROWS);
    Round::new(
        format!("กาอะไร {}", asked.0),
        vec![Answer::new(true, asked.1), Answer::new(false, other.1)],
    )
}

const FISH: [(&str, &str); 10] = [
    ("สุภาพ", "ปลาคาร์พ"),
    ("ขี้เกียจ", "ปลาวาฬ"),
    ("เหนื่อย", "ปลาร้า"),
    ("ครูชอบ", "ปาเจรา"),
    ("มีสองหน้า", "ปลาทูน่า"),
    ("ผู้ชายกลัว", "ปลาปักเป้า"),
    ("มีสามหน้า", "ปลากระป๋องสามแม่ครัว"),
    ("ครองถิ่น", "ปลาเก๋า"),
    ("อึไม่ออก", "ปลาไส้ตัน"),
    ("เป็นลูกไก่", "ปลาช่อน"),
];

pub fn fish_pun(rng: &mut dyn RngCore) -> Round {
    let (asked, other) = two_distinct(rng, &FISH);
    Round::new(
        format!("ปลาอะไร {}", asked.0),
        vec![Answer::new(true, asked.1), Answer::new(false, other.1)],
    )
}

const WATER: [(&str, &str, &str); 2] = [
    ("น้ำกลัวอะไร", "รุ้ง", "ลม"),
    ("อะไรกลัวน้ำ", "ลม", "รุ้ง"),
];

pub fn water_pun(rng: &mut dyn RngCore) -> Round {
    let qa = choice(rng, &WATER);
    Round::new(qa.0, vec![Answer::new(true, qa.1), Answer::new(false, qa.2)])
}

const PHYSICIANS: [(&str, &str); 6] = [
    ("ชอบดูดวง", "หมอดู"),
    ("ร้องเพลงเก่ง", "หมอลำ"),
    ("รักษาฟัน", "หมอฟัน"),
    ("อยู่ในครัว", "หม้อข้าว"),
    ("ต้มน้ำเดือด", "หม้อต้ม"),
    ("รักษาต้นไม้", "หมอดิน"),
];

pub fn physician(rng: &mut dyn RngCore) -> Round {
    let (asked, other) = two_distinct(rng, &PHYSICIANS);
    Round::new(
        format!("หมออะไร {}", asked.0),
        vec![Answer::new(true, asked.1), Answer::new(false, other.1)],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn pun_answers_are_distinct() {
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..100 {
            for r in [
                crow_color(&mut rng),
                fish_pun(&mut rng),
                physician(&mut rng),
            ] {
                assert_ne!(r.answers[0].label, r.answers[1].label);
            }
        }
    }

    #[test]
    fn crow_question_names_the_asked_color() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..50 {
            let r = crow_color(&mut rng);
            let color = r.question.trim_start_matches("กาอะไร ").to_string();
            let expected = CROWS.iter().find(|c| c.0 == color).unwrap().1;
            assert_eq!(r.answers.iter().find(|a| a.correct).unwrap().label, expected);
        }
    }
}
