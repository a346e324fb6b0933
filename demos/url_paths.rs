//! Mapping URL paths to page titles with a radix tree.
use radix_map::Radix;
use url::Url;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut pages = Radix::new();

    let entries = [
        ("https://example.com/", "Home page"),
        ("https://example.com/about", "About us"),
        ("https://example.com/contact", "Contact info"),
        ("https://example.com/blog", "Blog index"),
        ("https://example.com/blog/first-post", "First blog post"),
    ];

    // Key each page by its URL path; shared segments share edges
    for (url, title) in &entries {
        let url = Url::parse(url)?;
        pages.insert(url.path(), title.to_string());
    }

    println!("Looking up paths:");
    for path in &["/", "/blog", "/blog/first-post"] {
        println!("  {} → {:?}", path, pages.get(path));
    }

    let unknown = Url::parse("https://example.com/unknown")?;
    println!("\nPath existence check:");
    println!("  /about exists: {}", pages.contains_key("/about"));
    println!(
        "  {} exists: {}",
        unknown.path(),
        pages.contains_key(unknown.path())
    );

    Ok(())
}
