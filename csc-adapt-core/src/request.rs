//! Invocation request model
//!
//! The raw token list coming from the build system is parsed once into a
//! [`Request`]; every later step matches on the typed request instead of
//! comparing strings.

use crate::error::{AdaptError, AdaptResult};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Subcommand names, mirroring the rule variables of a Makefile generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Subcommand {
    CompileObject,
    TestCsc,
    LinkExecutable,
    SharedLibrary,
    StaticLibrary,
    SharedModule,
}

impl Subcommand {
    pub const ALL: [Subcommand; 6] = [
        Subcommand::CompileObject,
        Subcommand::TestCsc,
        Subcommand::LinkExecutable,
        Subcommand::SharedLibrary,
        Subcommand::StaticLibrary,
        Subcommand::SharedModule,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            Subcommand::CompileObject => "compile_object",
            Subcommand::TestCsc => "test_csc",
            Subcommand::LinkExecutable => "link_executable",
            Subcommand::SharedLibrary => "shared_library",
            Subcommand::StaticLibrary => "static_library",
            Subcommand::SharedModule => "shared_module",
        }
    }
}

impl fmt::Display for Subcommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Subcommand {
    type Err = AdaptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Subcommand::ALL
            .into_iter()
            .find(|sub| sub.name() == s)
            .ok_or_else(|| AdaptError::UnknownSubcommand {
                name: s.to_string(),
            })
    }
}

/// Artifact produced by a link request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkKind {
    Executable,
    SharedLibrary,
}

impl LinkKind {
    pub const fn subcommand(&self) -> Subcommand {
        match self {
            LinkKind::Executable => Subcommand::LinkExecutable,
            LinkKind::SharedLibrary => Subcommand::SharedLibrary,
        }
    }
}

/// How `compile_object` with a single argument is interpreted
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CompileMode {
    /// Two arguments write a placeholder, one argument compiles directly
    #[default]
    Inferred,
    /// Only the single-argument direct compile is accepted
    Test,
}

/// A parsed adapter invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Record `source` in the placeholder `object`
    CompileObject { source: String, object: PathBuf },
    /// Compile `source` directly, bypassing placeholders
    TestCompile { source: String },
    /// Resolve placeholders and run the one real compilation
    Link { kind: LinkKind, args: Vec<String> },
}

impl Request {
    /// Parse `tokens`, where token 0 is the subcommand name.
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> AdaptResult<Self> {
        Self::parse_with_mode(tokens, CompileMode::Inferred)
    }

    pub fn parse_with_mode<S: AsRef<str>>(tokens: &[S], mode: CompileMode) -> AdaptResult<Self> {
        let (name, rest) = tokens.split_first().ok_or(AdaptError::MissingSubcommand)?;
        let subcommand: Subcommand = name.as_ref().parse()?;
        let args: Vec<String> = rest.iter().map(|arg| arg.as_ref().to_string()).collect();

        match subcommand {
            Subcommand::CompileObject => match (mode, args.as_slice()) {
                (CompileMode::Inferred, [source, object]) => Ok(Request::CompileObject {
                    source: source.clone(),
                    object: PathBuf::from(object),
                }),
                (_, [source]) => Ok(Request::TestCompile {
                    source: source.clone(),
                }),
                (CompileMode::Inferred, _) => Err(AdaptError::Arity {
                    subcommand: subcommand.name(),
                    message: "require <SOURCE> and <OBJECT>",
                }),
                (CompileMode::Test, _) => Err(AdaptError::Arity {
                    subcommand: subcommand.name(),
                    message: "test compile requires exactly one <SOURCE>",
                }),
            },
            Subcommand::TestCsc => match args.as_slice() {
                [source] => Ok(Request::TestCompile {
                    source: source.clone(),
                }),
                _ => Err(AdaptError::Arity {
                    subcommand: subcommand.name(),
                    message: "requires test source file to compile",
                }),
            },
            Subcommand::LinkExecutable => Ok(Request::Link {
                kind: LinkKind::Executable,
                args,
            }),
            Subcommand::SharedLibrary => Ok(Request::Link {
                kind: LinkKind::SharedLibrary,
                args,
            }),
            Subcommand::StaticLibrary | Subcommand::SharedModule => {
                Err(AdaptError::UnsupportedSubcommand {
                    name: subcommand.name().to_string(),
                })
            }
        }
    }

    pub fn subcommand(&self) -> Subcommand {
        match self {
            Request::CompileObject { .. } => Subcommand::CompileObject,
            Request::TestCompile { .. } => Subcommand::TestCsc,
            Request::Link { kind, .. } => kind.subcommand(),
        }
    }
}
