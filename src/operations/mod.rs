pub mod clock_sync_op;
pub mod encode_op;
pub mod op_helper;
pub mod preset_op;
pub mod schedule_op;
pub mod share_op;
pub mod support_op;
