use std::time::Duration;
use crate::core::data::cell_buffer::CellBuffer;

#[derive(Debug)]
pub struct FrameData {
    pub frame_number: u64,
    pub cell_buffer: CellBuffer,
    pub render_duration: Duration,
}
