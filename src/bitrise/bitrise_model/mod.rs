pub mod build;
pub mod build_list;
pub mod build_log;
pub mod build_status;
pub mod original_build_params;
pub mod scalar_value;
