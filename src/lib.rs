pub mod dictionary;
pub mod pitch_accent;
pub mod utility;
