//! Call-site resolution from the live stack.

use super::{CallSite, CallerResolver};

/// Path fragments of files that belong to the toolchain or to registry crates.
const EXTERNAL_PATH_MARKERS: &[&str] = &["/rustc/", "/.cargo/registry/", "/.cargo/git/", "/lib/rustlib/"];

/// Symbol prefixes that never count as the caller.
const INTERNAL_PREFIXES: &[&str] =
    &["gate_trace::", "backtrace::", "std::", "core::", "alloc::", "__rust", "_Unwind"];

/// Resolves the caller by walking the current stack with the `backtrace` crate.
///
/// Frames are visited innermost first. A frame is skipped when its demangled
/// symbol belongs to this crate, the standard library, the `backtrace` crate
/// itself, or one of the extra module prefixes given with
/// [`skip_module`](BacktraceCaller::skip_module). Frames whose source file
/// lives in the toolchain or in a registry checkout are skipped as well. The
/// first remaining frame that carries file and line information is the
/// call-site.
///
/// Symbol resolution needs debug info; in stripped builds this resolver
/// returns `None`.
///
/// ```rust
/// use gate_trace::caller::{BacktraceCaller, CallerResolver};
///
/// // Treat the host framework's own authorization layer as internal too.
/// let resolver = BacktraceCaller::new().skip_module("my_app::policies");
/// let _ = resolver.resolve();
/// ```
#[derive(Debug, Clone, Default)]
pub struct BacktraceCaller {
    extra_prefixes: Vec<String>,
}

impl BacktraceCaller {
    /// Creates a resolver that skips only built-in internal frames.
    pub fn new() -> Self {
        Self::default()
    }

    /// Also skips frames whose symbol starts with `module` (e.g. `"my_app::auth"`).
    #[must_use]
    pub fn skip_module(mut self, module: impl Into<String>) -> Self {
        let mut module = module.into();
        if !module.ends_with("::") {
            module.push_str("::");
        }
        self.extra_prefixes.push(module);
        self
    }

    fn is_internal(&self, symbol: &str) -> bool {
        let symbol = symbol.trim_start_matches(['<', '&']);
        INTERNAL_PREFIXES.iter().any(|prefix| symbol.starts_with(prefix))
            || self.extra_prefixes.iter().any(|prefix| symbol.starts_with(prefix.as_str()))
    }
}

impl CallerResolver for BacktraceCaller {
    fn resolve(&self) -> Option<CallSite> {
        let mut found = None;

        backtrace::trace(|frame| {
            backtrace::resolve_frame(frame, |symbol| {
                if found.is_some() {
                    return;
                }
                let Some(name) = symbol.name() else {
                    return;
                };
                if self.is_internal(&format!("{:#}", name)) {
                    return;
                }
                if let (Some(file), Some(line)) = (symbol.filename(), symbol.lineno()) {
                    let file = file.display().to_string();
                    if !is_external_file(&file) {
                        found = Some(CallSite::new(file, line));
                    }
                }
            });
            found.is_none()
        });

        found
    }
}

fn is_external_file(path: &str) -> bool {
    let path = path.replace('\\', "/");
    EXTERNAL_PATH_MARKERS.iter().any(|marker| path.contains(marker))
}
