use serde::{Deserialize, Serialize};

use crate::utils::pagination::Paginated;

/// 上游集合中的一条记录，本服务只读
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: u64,
    pub title: String,
    pub body: String,
}

pub type PageResult = Paginated<Item>;
