use crate::DisplayRecord;
use crate::Post;
use crate::User;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Pair every user with their most recent post.
///
/// The output has exactly one record per user, in the order of `users`.
/// The most recent post is the one with the greatest id among the user's posts.
/// Users without posts get a record with no post fields.
pub fn join_latest_posts(users: &[User], posts: &[Post]) -> Vec<DisplayRecord> {
    let latest = index_latest_posts(posts);

    users
        .iter()
        .map(|user| {
            let post = latest.get(&user.id);
            DisplayRecord {
                id: user.id,
                name: user.name.clone(),
                last_post_title: post.and_then(|post| post.title.clone()),
                last_post_body: post.and_then(|post| post.body.clone()),
            }
        })
        .collect()
}

/// Map each user id to the post with the greatest id.
///
/// On duplicate post ids, the first one seen wins.
fn index_latest_posts(posts: &[Post]) -> HashMap<i64, &Post> {
    let mut latest: HashMap<i64, &Post> = HashMap::new();
    for post in posts {
        match latest.entry(post.user_id) {
            Entry::Occupied(mut entry) => {
                if post.id > entry.get().id {
                    entry.insert(post);
                }
            }
            Entry::Vacant(entry) => {
                entry.insert(post);
            }
        }
    }
    latest
}
