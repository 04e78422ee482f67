pub mod domain;
pub mod ports;
pub mod services;
pub mod topic_list_use_cases;
