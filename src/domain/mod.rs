pub mod evaluate;
pub mod round;
