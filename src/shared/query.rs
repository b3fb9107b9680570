use serde::{Deserialize, Serialize};

/// Direction applied to `date_added` by list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    /// Orders two `(date_added, id)` keys; ids break ties the same way as the timestamp.
    pub fn compare<K: Ord>(self, a: &K, b: &K) -> std::cmp::Ordering {
        match self {
            SortOrder::Ascending => a.cmp(b),
            SortOrder::Descending => b.cmp(a),
        }
    }
}

impl From<SortOrder> for sea_orm::Order {
    fn from(order: SortOrder) -> Self {
        match order {
            SortOrder::Ascending => sea_orm::Order::Asc,
            SortOrder::Descending => sea_orm::Order::Desc,
        }
    }
}
