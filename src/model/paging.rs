use serde::{Deserialize, Serialize};

/// Page descriptor returned alongside list results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paging {
    pub page: u32,
    pub size: u32,
    pub total: u64,
    pub total_pages: u64,
}

impl Paging {
    pub fn new(page: u32, size: u32, total: u64) -> Self {
        let total_pages = if size == 0 {
            0
        } else {
            total.div_ceil(u64::from(size))
        };

        Self {
            page,
            size,
            total,
            total_pages,
        }
    }
}
