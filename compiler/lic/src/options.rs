//! Flags shared by `li run` and `li parse`.

use li_ir::Dialect;

/// Environment variable naming the default dialect.
pub const DIALECT_ENV: &str = "LI_DIALECT";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Options {
    pub dialect: Dialect,
    /// Print the version banner before running.
    pub banner: bool,
    /// Single-line JSON from `li parse`.
    pub compact: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            dialect: Dialect::english(),
            banner: false,
            compact: false,
        }
    }
}

impl Options {
    /// Split `args` into options and file paths.
    ///
    /// `env_dialect` is the value of [`DIALECT_ENV`], if set; `--dialect=`
    /// overrides it.
    pub fn parse(args: &[String], env_dialect: Option<&str>) -> Result<(Options, Vec<String>), String> {
        let mut options = Options::default();
        if let Some(name) = env_dialect {
            options.dialect = dialect_named(name)?;
        }

        let mut files = Vec::new();
        for arg in args {
            if let Some(name) = arg.strip_prefix("--dialect=") {
                options.dialect = dialect_named(name)?;
            } else if arg == "--banner" {
                options.banner = true;
            } else if arg == "--compact" {
                options.compact = true;
            } else if arg.starts_with("--") {
                return Err(format!("unknown option `{arg}`"));
            } else {
                files.push(arg.clone());
            }
        }
        Ok((options, files))
    }
}

fn dialect_named(name: &str) -> Result<Dialect, String> {
    Dialect::by_name(name).ok_or_else(|| {
        format!(
            "unknown dialect `{name}` (available: {})",
            Dialect::available().join(", ")
        )
    })
}

/// One-line version banner.
pub fn banner(dialect: &Dialect) -> String {
    format!("Li {} ({} dialect)", env!("CARGO_PKG_VERSION"), dialect.name())
}
