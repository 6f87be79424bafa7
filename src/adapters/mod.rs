// Adapters layer: concrete formatters behind the `Formatter` port.

pub mod clang_format;
pub mod dry_run;

pub use clang_format::ClangFormat;
pub use dry_run::DryRun;
