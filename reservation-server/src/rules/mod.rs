//! 业务规则 - 预订与桌台的校验流水线
//!
//! 纯函数，不做 I/O；"现在" 由调用方传入。每条流水线按固定顺序检查，
//! 第一个失败的检查直接返回错误。

pub mod hours;
pub mod reservation;
pub mod status;
pub mod table;

pub use hours::BusinessHours;
pub use reservation::{check_initial_status, validate_new_reservation, validate_reservation};
pub use status::check_transition;
pub use table::{
    check_capacity, check_not_seated, check_release, check_seating, reservation_missing,
    seat_reservation_id, validate_table,
};
