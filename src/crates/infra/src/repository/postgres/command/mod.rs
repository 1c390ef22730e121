pub mod active_playback;
pub mod db_data;
pub mod listener;
pub mod playback;
pub mod recorded_location;
pub mod track;
