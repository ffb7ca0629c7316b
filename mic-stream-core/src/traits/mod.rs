pub mod capture_device;
pub mod frame_sink;
