/// Failure feedback pools, one per failure reason.
///
/// A round's custom message wins over the pool for Incorrect/Correct
/// failures; timeouts always draw from the timeout pool.

use rand::RngCore;

use crate::content::pick::choice;
use crate::domain::evaluate::FailReason;
use crate::domain::round::{FailMessage, Round};

const INCORRECT: [(&str, &str); 11] = [
    ("คุณตอบผิด", "ลองใหม่นะ"),
    ("จงตอบถูก", "อย่าตอบผิด"),
    ("ผิดนะคร้าบ", "น่าเสียดายจริง ๆ"),
    ("ตอบผิดคะ", "ลองใหม่นะค่ะ"),
    ("ไม่ถูกต้อง", "แง"),
    ("ผิดเป็นครู", "คำตอบนี้เป็นครู"),
    ("ข้อที่ถูก", "คือข้ออื่น"),
    ("ยินดีด้วย", "ซะเมื่อไร"),
    ("ข้อที่ถูกก็มีนะ", "แต่คุณไม่ได้เลือกมัน"),
    ("ผิดนะจ๊ะ", "จริงจา"),
    ("ถูก", "ต้ม"),
];

const CORRECT: [(&str, &str); 12] = [
    ("คุณตอบถูก", "ซึ่งเป็นสิ่งที่ผิด"),
    ("คุณตอบถูก", "ซึ่งไม่ใช่สิ่งที่ถูก"),
    ("จงตอบผิด", "อย่าตอบถูก"),
    ("คำตอบถูก", "แต่เขาให้ตอบผิด"),
    ("ถูกต้องนะคร้าบ", "แต่เขาให้ตอบผิด"),
    ("ถูกต้องคะ", "ลองใหม่นะค่ะ"),
    ("ตอบไม่ผิดนะ", "แต่ผิดคำสั่ง"),
    ("ยินดีด้วย", "ซะเมื่อไร"),
    ("ข้อนี้ถูกต้อง", "จึงไม่ควรถูกเลือก"),
    ("ผิดเป็นครู", "คำตอบนี้ไม่เป็นครู"),
    ("ถูกแล้วหละ", "ถูกหลอกให้ตอบถูก"),
    ("ข้อที่ผิด", "คือข้ออื่น"),
];

const TIMEOUT: [(&str, &str); 10] = [
    ("หมดเวลา", "สนุกแล้วสิ"),
    ("หมดเวลา", "ต้องเร็วกว่านี้หน่อย"),
    ("หมดเวลา", "ช้าไปหน่อยนะ"),
    ("หมดเวลาแล้ว", "ที่ฉันมีเธอ"),
    ("ช้าไปหน่อย", "เร็วขึ้นอีกนิดนะ"),
    ("เวลาหมดแล้ว", "ลองใหม่นะ"),
    ("เวลาหมดแล้ว", ":("),
    ("เวลา", "มันหมดแล้ว"),
    ("ช้าจัง", "เวลาหมดแล้ว"),
    ("ช้าจุงเบย", "เวลาหมดงุงิ"),
];

fn pool(reason: FailReason) -> &'static [(&'static str, &'static str)] {
    match reason {
        FailReason::Incorrect => &INCORRECT,
        FailReason::Correct => &CORRECT,
        FailReason::Timeout => &TIMEOUT,
    }
}

/// Pick the feedback for a failed round.
pub fn failure_message(rng: &mut dyn RngCore, reason: FailReason, round: &Round) -> FailMessage {
    if reason != FailReason::Timeout {
        if let Some(custom) = &round.fail_message {
            return custom.clone();
        }
    }
    let (a, b) = *choice(rng, pool(reason));
    (a.to_string(), b.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::round::{Answer, Round};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn round_with_custom() -> Round {
        Round::new("q", vec![Answer::new(true, "a"), Answer::new(false, "b")])
            .with_message("บรรทัดหนึ่ง", "บรรทัดสอง")
    }

    #[test]
    fn custom_message_used_for_selection_failures() {
        let mut rng = StdRng::seed_from_u64(14);
        let r = round_with_custom();
        for reason in [FailReason::Incorrect, FailReason::Correct] {
            let msg = failure_message(&mut rng, reason, &r);
            assert_eq!(msg, ("บรรทัดหนึ่ง".to_string(), "บรรทัดสอง".to_string()));
        }
    }

    #[test]
    fn timeout_ignores_custom_message() {
        let mut rng = StdRng::seed_from_u64(15);
        let r = round_with_custom();
        let msg = failure_message(&mut rng, FailReason::Timeout, &r);
        assert!(TIMEOUT.iter().any(|(a, b)| msg.0 == *a && msg.1 == *b));
    }

    #[test]
    fn pool_message_matches_reason() {
        let mut rng = StdRng::seed_from_u64(16);
        let r = Round::new("q", vec![Answer::new(true, "a"), Answer::new(false, "b")]);
        for _ in 0..50 {
            let msg = failure_message(&mut rng, FailReason::Correct, &r);
            assert!(CORRECT.iter().any(|(a, b)| msg.0 == *a && msg.1 == *b));
        }
    }
}
