//! Lazily-compiled static regex declarations.
//!
//! All fixed patterns in the crate (kebab-case, secret signatures, README
//! section matchers) go through [`static_regex!`] so they are compiled once
//! per process and an invalid pattern fails loudly with the pattern text.

/// Declare a module-private function returning `&'static regex::Regex`,
/// backed by a `std::sync::OnceLock`. Compiled on first access, cached for
/// the life of the process.
///
/// The calling module must have `use regex::Regex;` in scope.
///
/// # Panics
///
/// Panics on first call if `$pattern` is not a valid regex.
macro_rules! static_regex {
    (fn $fname:ident, $pattern:expr) => {
        fn $fname() -> &'static Regex {
            static STORE: std::sync::OnceLock<Regex> = std::sync::OnceLock::new();
            STORE.get_or_init(|| {
                Regex::new($pattern).expect(concat!("BUG: invalid static regex: ", $pattern))
            })
        }
    };
}
pub(crate) use static_regex;
