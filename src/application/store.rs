//! In-memory mirror of the last known server state.

use crate::domain::posts::Post;

/// Ordered sequence of posts keyed by unique id. Populated wholesale on
/// load, then mutated only from successful remote operations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostStore {
    posts: Vec<Post>,
}

impl PostStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole store with the server's listing.
    pub fn replace_all(&mut self, posts: Vec<Post>) {
        self.posts = posts;
    }

    /// Append a freshly created record at the end.
    pub fn append(&mut self, post: Post) {
        self.posts.push(post);
    }

    /// Replace the entry whose id is `original_id` in place, keeping its
    /// position. Absent ids leave the store untouched.
    pub fn replace(&mut self, original_id: u64, post: Post) {
        if let Some(slot) = self.posts.iter_mut().find(|p| p.id == original_id) {
            *slot = post;
        }
    }

    pub fn remove(&mut self, id: u64) {
        self.posts.retain(|p| p.id != id);
    }

    pub fn get(&self, id: u64) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Post> {
        self.posts.iter()
    }

    /// Derive the displayed subset: empty filter is the identity, anything
    /// else must equal the textual form of the id exactly ("1" matches only
    /// id 1, never 10..=19). Display order is the reverse of store order,
    /// newest append first.
    pub fn visible(&self, filter: &str) -> Vec<&Post> {
        let mut shown: Vec<&Post> = self
            .posts
            .iter()
            .filter(|p| filter.is_empty() || p.id.to_string() == filter)
            .collect();
        shown.reverse();
        shown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: u64) -> Post {
        Post {
            id,
            title: format!("title {id}"),
            body: format!("body {id}"),
            user_id: 1,
        }
    }

    #[test]
    fn empty_filter_shows_everything_reversed() {
        let mut store = PostStore::new();
        store.replace_all(vec![post(1), post(2), post(3)]);
        let shown: Vec<u64> = store.visible("").iter().map(|p| p.id).collect();
        assert_eq!(shown, vec![3, 2, 1]);
    }

    #[test]
    fn filter_matches_exact_id_text_only() {
        let mut store = PostStore::new();
        store.replace_all(vec![post(1), post(10), post(11)]);
        let shown: Vec<u64> = store.visible("1").iter().map(|p| p.id).collect();
        assert_eq!(shown, vec![1]);
        assert!(store.visible("2").is_empty());
        assert!(store.visible("not-a-number").is_empty());
    }

    #[test]
    fn replace_keeps_position() {
        let mut store = PostStore::new();
        store.replace_all(vec![post(1), post(2), post(3)]);
        let mut updated = post(2);
        updated.title = "rewritten".into();
        store.replace(2, updated.clone());
        let ids: Vec<u64> = store.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(store.get(2), Some(&updated));
    }

    #[test]
    fn replace_can_swap_in_a_different_id() {
        let mut store = PostStore::new();
        store.replace_all(vec![post(150)]);
        let recreated = post(151);
        store.replace(150, recreated.clone());
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(151), Some(&recreated));
    }

    #[test]
    fn remove_drops_only_the_matching_id() {
        let mut store = PostStore::new();
        store.replace_all(vec![post(7), post(8)]);
        store.remove(7);
        assert!(store.get(7).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn replace_of_absent_id_is_a_no_op() {
        let mut store = PostStore::new();
        store.replace_all(vec![post(1)]);
        let before = store.clone();
        store.replace(99, post(99));
        assert_eq!(store, before);
    }
}
