use std::fmt;

#[derive(Copy, Clone, Hash, PartialOrd, PartialEq, Eq, Ord, Debug)]
pub struct Item {
    id: u32,
}

impl Item {
    // Id 0 never names a real item; the trie uses it for its root.
    pub fn null() -> Item {
        Item { id: 0 }
    }
    pub fn with_id(id: u32) -> Item {
        Item { id }
    }
    pub fn id(&self) -> u32 {
        self.id
    }
    pub fn is_null(&self) -> bool {
        self.id == 0
    }
    pub fn item_vec_to_string(items: &[Item]) -> String {
        items
            .iter()
            .map(|item| item.to_string())
            .collect::<Vec<String>>()
            .join(" ")
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

pub fn to_item_vec(ids: &[u32]) -> Vec<Item> {
    ids.iter().map(|&id| Item::with_id(id)).collect()
}

#[cfg(test)]
mod tests {
    use super::{to_item_vec, Item};

    #[test]
    fn test_item_vec_to_string() {
        assert_eq!(Item::item_vec_to_string(&to_item_vec(&[1, 20, 300])), "1 20 300");
        assert_eq!(Item::item_vec_to_string(&[]), "");
    }

    #[test]
    fn test_null() {
        assert!(Item::null().is_null());
        assert!(!Item::with_id(7).is_null());
        assert!(Item::with_id(2) < Item::with_id(10));
    }
}
