pub mod countdown;
pub mod helper_structs;
pub mod timer_traits;
pub mod work_timer;
