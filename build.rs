use std::collections::hash_map::DefaultHasher;
use std::fs;
use std::hash::Hasher;

fn main() {
    println!("cargo:rerun-if-changed=public/index.html");

    let page = fs::read("public/index.html").expect("public/index.html not found");
    let mut hasher = DefaultHasher::new();
    hasher.write(&page);
    let hash = format!("{:x}", hasher.finish());
    let short = &hash[..8.min(hash.len())];

    println!("cargo::rustc-env=CLICKFETCH_PAGE_HASH={short}");
}
