pub mod orchestration_utils;
