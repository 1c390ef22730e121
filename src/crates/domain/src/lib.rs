pub mod listener;
pub mod playback;
pub mod track;
pub mod value;
