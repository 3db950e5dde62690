pub mod u501_run_prototype;
