pub mod label;
pub mod phoneme;
pub mod printable;

pub use label::Label;
pub use phoneme::{Phoneme, Stress, SyllableGroup};
pub use printable::{format_phonemes, format_syllables, parse_phonemes, parse_syllables};
