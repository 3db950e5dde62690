pub mod u501_run_prototype;
pub mod u502_sign_up;
