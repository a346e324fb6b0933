//! Basic usage of the radix tree map.
use radix_map::Radix;

fn main() {
    let mut tree = Radix::new();

    // Insert some values
    tree.insert("hello", 1);
    tree.insert("world", 2);

    // Check values
    assert_eq!(tree.get("hello"), Some(&1));
    assert_eq!(tree.get("world"), Some(&2));
    assert_eq!(tree.get("missing"), None);

    // Keys sharing a prefix split around the common fragment
    tree.insert("help", 3);
    assert_eq!(tree.get("hello"), Some(&1));
    assert_eq!(tree.get("help"), Some(&3));

    // The shared "hel" edge is structural: it holds no value of its own
    assert_eq!(tree.get("hel"), None);

    println!("{} entries stored", tree.len());
    println!("root edges: {:?}", tree.root().edges.keys().collect::<Vec<_>>());
}

#[test]
fn test_shared_prefix_lookup() {
    let tree: Radix<u32> = vec![("hello", 1), ("help", 2), ("world", 3)]
        .into_iter()
        .collect();

    assert_eq!(tree.get("hello"), Some(&1));
    assert_eq!(tree.get("help"), Some(&2));
    assert_eq!(tree.get("world"), Some(&3));
    assert_eq!(tree.get("hel"), None);
}
