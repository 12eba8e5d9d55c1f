use std::collections::hash_map::DefaultHasher;
use std::fs;
use std::hash::{Hash, Hasher};

// Content-hash the static assets so templates can cache-bust them via the
// STATIC_HASH env var.
fn main() {
    println!("cargo:rerun-if-changed=static/");

    let mut hasher = DefaultHasher::new();

    let mut entries: Vec<_> = fs::read_dir("static")
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file())
        .collect();
    entries.sort();

    for path in entries {
        path.file_name().unwrap().to_str().unwrap().hash(&mut hasher);
        fs::read(&path).unwrap().hash(&mut hasher);
    }

    let hash = format!("{:x}", hasher.finish());
    println!("cargo:rustc-env=STATIC_HASH={}", &hash[..8]);
}
