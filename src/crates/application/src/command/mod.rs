pub mod playback;
pub mod shared;
