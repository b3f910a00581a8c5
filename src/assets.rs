use std::path::{Path, PathBuf};

/// Locates the directory containing `assets/catalog.toml`.
/// Precedence: CLI flag -> BLOCKYARD_ASSETS env -> search nearby dirs -> CWD.
pub fn resolve_assets_root(cli: Option<String>) -> PathBuf {
    if let Some(p) = cli {
        let pb = PathBuf::from(p);
        if pb.exists() {
            return pb;
        }
    }
    if let Ok(p) = std::env::var("BLOCKYARD_ASSETS") {
        let pb = PathBuf::from(p);
        if pb.exists() {
            return pb;
        }
    }
    // Search candidates: CWD, executable dir, crate root; climb a few parents.
    let mut candidates: Vec<PathBuf> = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        candidates.push(cwd);
    }
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            candidates.push(dir.to_path_buf());
        }
    }
    candidates.push(PathBuf::from(env!("CARGO_MANIFEST_DIR")));

    for base in candidates {
        let mut cur = base.clone();
        for _ in 0..5 {
            if cur.join("assets/catalog.toml").exists() {
                return cur;
            }
            if let Some(parent) = cur.parent() {
                cur = parent.to_path_buf();
            } else {
                break;
            }
        }
    }
    PathBuf::from(".")
}

pub fn catalog_path(root: &Path) -> PathBuf {
    root.join("assets/catalog.toml")
}

/// Catalog texture paths are relative to the assets directory.
pub fn texture_path(root: &Path, rel: &Path) -> PathBuf {
    root.join("assets").join(rel)
}
