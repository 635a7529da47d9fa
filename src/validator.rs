//! Executable validation
//!
//! Confirms that every command a suggestion relies on can be found before
//! the user is offered to run it.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("required command `{name}` was not found in PATH")]
    MissingExecutable { name: String },
}

/// Resolves a command name to something invocable
pub trait CommandResolver {
    fn resolve(&self, name: &str) -> Option<PathBuf>;
}

impl<T: CommandResolver + ?Sized> CommandResolver for Box<T> {
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        (**self).resolve(name)
    }
}

/// Looks commands up on the process search path
#[derive(Debug, Default, Clone, Copy)]
pub struct PathResolver;

impl CommandResolver for PathResolver {
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        which::which(name).ok()
    }
}

/// Fail-fast check over a suggestion's executables
#[derive(Debug, Default)]
pub struct ExecutableValidator<R: CommandResolver = PathResolver> {
    resolver: R,
}

impl<R: CommandResolver> ExecutableValidator<R> {
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    /// Check names in order, stopping at the first one that does not resolve
    ///
    /// Names after the failing one are never looked up. A blank name never
    /// resolves.
    pub fn validate(&self, executables: &[String]) -> Result<(), ValidationError> {
        for name in executables {
            let resolved = if name.trim().is_empty() {
                None
            } else {
                self.resolver.resolve(name)
            };

            match resolved {
                Some(path) => log::debug!("Resolved `{}` to {}", name, path.display()),
                None => {
                    return Err(ValidationError::MissingExecutable { name: name.clone() });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod validator_tests;
