pub mod auth;
pub mod topic_list;
