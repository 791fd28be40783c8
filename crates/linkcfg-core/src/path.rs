//! Resolution of relative filesystem paths against the config directory.

use std::io;
use std::path::{Component, Path, PathBuf};

use tracing::{debug, warn};

use crate::field::{Accessor, Configurable, Field};

/// Resolves `raw` against `base`.
///
/// - an empty `raw` stays empty (the path is not configured);
/// - an absolute `raw` is returned unchanged;
/// - anything else is joined onto `base` and lexically cleaned.
pub fn resolve(base: &Path, raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    if Path::new(raw).is_absolute() {
        return raw.to_string();
    }
    clean(&base.join(raw)).to_string_lossy().into_owned()
}

/// Returns the absolute directory containing `config_file`.
///
/// The file itself does not need to exist.
pub fn base_dir(config_file: &Path) -> io::Result<PathBuf> {
    let abs = clean(&std::path::absolute(config_file)?);
    Ok(abs.parent().map(Path::to_path_buf).unwrap_or(abs))
}

/// Lexically normalises `path`: drops `.` segments and folds `..` into the
/// preceding segment. No filesystem access.
pub fn clean(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // `..` above the root is the root
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(Component::ParentDir),
            },
            other => out.push(other),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(Component::CurDir);
    }
    out
}

/// Resolves one string field in place. Non-string fields are left alone and
/// `false` is returned.
pub fn resolve_field<T>(target: &mut T, field: &Field<T>, base: &Path) -> bool {
    let Accessor::Str { get, set } = field.accessor else {
        warn!(field = field.name, kind = %field.kind(), "Path resolution needs a string field");
        return false;
    };
    let resolved = resolve(base, get(target));
    set(target, resolved);
    true
}

/// Resolves every field listed in [`Configurable::path_fields`].
///
/// Returns the number of fields resolved.
pub fn resolve_paths<T: Configurable>(target: &mut T, base: &Path) -> usize {
    let mut resolved = 0;
    for name in T::path_fields() {
        match T::field(name) {
            Some(field) => {
                if resolve_field(target, field, base) {
                    resolved += 1;
                }
            }
            None => warn!(field = name, "Path field is not in the field table"),
        }
    }
    debug!(base = %base.display(), resolved, "Resolved path fields");
    resolved
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::Configurable;

    #[test]
    fn test_resolve_rules() {
        let base = Path::new("/a/b");
        assert_eq!(resolve(base, ""), "");
        assert_eq!(resolve(base, "/c/d"), "/c/d");
        assert_eq!(resolve(base, "c/d"), "/a/b/c/d");
    }

    #[test]
    fn test_resolve_cleans_relative_segments() {
        let base = Path::new("/etc/link/conf");
        assert_eq!(resolve(base, "./vpn_cert.pem"), "/etc/link/conf/vpn_cert.pem");
        assert_eq!(resolve(base, "../files"), "/etc/link/files");
        assert_eq!(resolve(base, "../../../../log"), "/log");
        assert_eq!(resolve(base, "./"), "/etc/link/conf");
    }

    #[test]
    fn test_absolute_path_is_untouched() {
        assert_eq!(resolve(Path::new("/a"), "/var/./lib//db"), "/var/./lib//db");
    }

    #[test]
    fn test_clean() {
        assert_eq!(clean(Path::new("a/./b/../c")), PathBuf::from("a/c"));
        assert_eq!(clean(Path::new("../x")), PathBuf::from("../x"));
        assert_eq!(clean(Path::new("./")), PathBuf::from("."));
        assert_eq!(clean(Path::new("/..")), PathBuf::from("/"));
    }

    #[test]
    fn test_base_dir() {
        let dir = base_dir(Path::new("/srv/link/conf/server.toml")).unwrap();
        assert_eq!(dir, PathBuf::from("/srv/link/conf"));

        let cwd = std::env::current_dir().unwrap();
        let dir = base_dir(Path::new("./conf/server.toml")).unwrap();
        assert_eq!(dir, clean(&cwd.join("conf")));
    }

    #[derive(Debug, Default, Configurable)]
    struct Paths {
        #[option(path)]
        db_file: String,
        #[option(path)]
        cert_file: String,
        #[option(path)]
        log_path: String,
        issuer: String,
    }

    #[test]
    fn test_resolve_paths_only_touches_path_fields() {
        let mut cfg = Paths {
            db_file: "./data.db".to_string(),
            cert_file: "/etc/ssl/cert.pem".to_string(),
            log_path: String::new(),
            issuer: "relative/looking".to_string(),
        };
        let resolved = resolve_paths(&mut cfg, Path::new("/opt/link"));

        assert_eq!(resolved, 3);
        assert_eq!(cfg.db_file, "/opt/link/data.db");
        assert_eq!(cfg.cert_file, "/etc/ssl/cert.pem");
        assert_eq!(cfg.log_path, "");
        assert_eq!(cfg.issuer, "relative/looking");
    }

    #[test]
    fn test_resolve_field_works_on_any_string_field() {
        let mut cfg = Paths {
            issuer: "corp".to_string(),
            ..Default::default()
        };
        let field = Paths::field("issuer").unwrap();
        assert!(resolve_field(&mut cfg, field, Path::new("/x")));
        assert_eq!(cfg.issuer, "/x/corp");
    }
}
