pub mod employee;
pub mod paging;

pub use employee::Employee;
pub use paging::Paging;
