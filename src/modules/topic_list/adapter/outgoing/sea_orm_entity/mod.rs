//! Read models over tables owned by the forum core. Only the columns the
//! listing reads are mapped.

pub mod categories;
pub mod topic_reads;
pub mod topic_tags;
pub mod topic_watchers;
pub mod topics;
pub mod user_privileges;
pub mod user_settings;
