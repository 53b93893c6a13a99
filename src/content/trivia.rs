/// Trivia families: geography, misnomers, Thai general knowledge,
/// auspicious shirt colors, classifiers, and the blue whale.

use rand::RngCore;

use crate::content::pick::{choice, two_distinct};
use crate::domain::round::{Answer, Round};

/// (question, correct, wrong) triple → two-answer round.
fn qa_round(qa: &(&str, &str, &str)) -> Round {
    Round::new(qa.0, vec![Answer::new(true, qa.1), Answer::new(false, qa.2)])
}

const GEOGRAPHY: [(&str, &str, &str); 8] = [
    ("ยอดเขาที่สูงที่สุดในโลก", "เอเวอเรสต์", "ดอยสุเทพ"),
    ("มหาสมุทรที่ใหญ่ที่สุดในโลก", "แปซิฟิก", "แอตแลนติก"),
    ("มหาสมุทรที่เล็กที่สุดในโลก", "อาร์กติก", "อินเดีย"),
    ("น้ำตกที่กว้างที่สุดในโลก", "ไนแอการา", "เจ็ดสาวน้อย"),
    ("แม่น้ำที่ยาวที่สุดในโลก", "ไนล์", "แอมะซอน"),
    ("ทวีปที่ใหญ่ที่สุดในโลก", "เอเชีย", "แอฟริกา"),
    ("ทวีปที่เล็กที่สุดในโลก", "ออสเตรเลีย", "แอนตาร์กติกา"),
    ("ร่องสมุทรที่ลึกที่สุดในโลก", "มาเรียนา", "มินดาเนา"),
];

pub fn geography_trivia(rng: &mut dyn RngCore) -> Round {
    qa_round(choice(rng, &GEOGRAPHY))
}

const MISNOMERS: [(&str, &str, &str); 7] = [
    ("สงครามร้อยปี\n(อังกฤษ - ฝรั่งเศส)\nยาวกี่ปี", "116 ปี", "100 ปี"),
    ("Thousand Islands\n(อเมริกา - แคนาดา)\nมีกี่เกาะ", "1864 เกาะ", "1000 เกาะ"),
    ("เลขอารบิกแต่แรกมาจากชาติใด", "อินเดีย", "จีน"),
    ("French Horn มาจากชาติใด", "เยอรมัน", "อินเดีย"),
    ("หมากฮอสจีนมาจากชาติใด", "เยอรมัน", "อินเดีย"),
    ("กระเพาะปลาเป็นอวัยวะอะไร", "ถุงลม", "ไต"),
    ("ปูอัดทำมาจากอะไร", "ปลา", "กุ้ง"),
];

pub fn misnomer_trivia(rng: &mut dyn RngCore) -> Round {
    qa_round(choice(rng, &MISNOMERS))
}

const THAI_TRIVIA: [(&str, &str, &str); 6] = [
    ("สัตว์ประจำชาติไทย", "ช้างไทย", "ควายไทย"),
    ("ดอกไม้ประจำชาติไทย", "ราชพฤกษ์", "กุหลาบ"),
    ("กีฬาประจำชาติไทย", "มวยไทย", "ตะกร้อ"),
    ("อักษรไทยมีพยัญชนะกี่ตัว", "44 ตัว", "40 ตัว"),
    ("แม่น้ำที่ยาวที่สุดในไทย", "แม่น้ำชี", "เจ้าพระยา"),
    ("จังหวัดที่ใหญ่ที่สุดในไทย", "นครราชสีมา", "เชียงใหม่"),
];

pub fn thai_trivia(rng: &mut dyn RngCore) -> Round {
    qa_round(choice(rng, &THAI_TRIVIA))
}

/// (day, unlucky shirt color) — the wrong answer is another day's color.
const SHIRT_COLORS: [(&str, &str); 7] = [
    ("จันทร์", "แดง"),
    ("อังคาร", "ขาว / เหลือง"),
    ("พุธ", "ชมพู / ส้ม"),
    ("พฤหัส", "ดำ / ม่วง"),
    ("ศุกร์", "เทา / ดำ"),
    ("เสาร์", "เขียว"),
    ("อาทิตย์", "น้ำเงิน / ฟ้า"),
];

pub fn shirt_color(rng: &mut dyn RngCore) -> Round {
    let (asked, other) = two_distinct(rng, &SHIRT_COLORS);
    Round::new(
        format!("วัน{}\nไม่ควรใส่เสื้อสีอะไร", asked.0),
        vec![Answer::new(true, asked.1), Answer::new(false, other.1)],
    )
}

/// (noun, classifier, wrong classifier).
const NOUN_UNITS: [(&str, &str, &str); 7] = [
    ("ช้างเลี้ยง", "เชือก", "ตัว"),
    ("ปากกา", "ด้าม", "แท่ง"),
    ("บ้าน", "หลัง", "อัน"),
    ("พระภิกษุ", "รูป", "คน"),
    ("ไข่", "ฟอง", "ลูก"),
    ("เลื่อย", "ปื้น", "อัน"),
    ("เข็ม", "เล่ม", "แท่ง"),
];

pub fn noun_unit(rng: &mut dyn RngCore) -> Round {
    let qa = choice(rng, &NOUN_UNITS);
    Round::new(
        format!("ลักษณนามของ {}", qa.0),
        vec![Answer::new(true, qa.1), Answer::new(false, qa.2)],
    )
}

/// Fixed round with the catalog's only custom failure message.
pub fn blue_whale(_rng: &mut dyn RngCore) -> Round {
    Round::new(
        "สิ่งมีชีวิตอะไรที่ใหญ่ที่สุด",
        vec![
            Answer::new(true, "วาฬสีน้ำเงิน"),
            Answer::new(false, "วาฬสีน้ำเงินชุบแป้งทอด"),
        ],
    )
    .with_message("ถ้าชุบแป้งทอด", "ก็ไม่มีชีวิตแล้วสิ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn blue_whale_carries_custom_message() {
        let mut rng = StdRng::seed_from_u64(10);
        let r = blue_whale(&mut rng);
        assert!(r.fail_message.is_some());
        assert!(r.validate().is_ok());
    }

    #[test]
    fn shirt_color_wrong_answer_from_other_day() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            let r = shirt_color(&mut rng);
            assert_ne!(r.answers[0].label, r.answers[1].label);
        }
    }
}
