use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_RELATIVE_BASE: &str = ".";

/// Which text a `\0` / `$0` backreference stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GroupZero {
    /// The complete matched source path.
    #[default]
    SourcePath,
    /// Only the final segment of the matched path.
    LeafName,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchOptions {
    pub case_insensitive: bool,
    pub expand_user: bool,
    pub expand_vars: bool,
    /// Where relative patterns start walking.
    pub relative_base: String,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            case_insensitive: false,
            expand_user: true,
            expand_vars: true,
            relative_base: DEFAULT_RELATIVE_BASE.to_string(),
        }
    }
}

impl MatchOptions {
    pub fn builder() -> MatchOptionsBuilder {
        MatchOptionsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.relative_base.trim().is_empty() {
            return Err(OptionsError::EmptyRelativeBase);
        }
        if self.relative_base.contains('\0') {
            return Err(OptionsError::RelativeBaseContainsNul);
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct MatchOptionsBuilder {
    options: MatchOptions,
}

impl MatchOptionsBuilder {
    pub fn case_insensitive(mut self, value: bool) -> Self {
        self.options.case_insensitive = value;
        self
    }

    pub fn expand_user(mut self, value: bool) -> Self {
        self.options.expand_user = value;
        self
    }

    pub fn expand_vars(mut self, value: bool) -> Self {
        self.options.expand_vars = value;
        self
    }

    pub fn relative_base<S: Into<String>>(mut self, base: S) -> Self {
        self.options.relative_base = base.into();
        self
    }

    pub fn build(self) -> Result<MatchOptions, OptionsError> {
        self.options.validate()?;
        Ok(self.options)
    }
}

/// Settings for one rename run. Passed explicitly to whatever needs them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RenameOptions {
    pub matching: MatchOptions,
    pub group_zero: GroupZero,
    pub assume_yes: bool,
    pub verbose: bool,
    pub overwrite: bool,
    pub dry_run: bool,
}

impl RenameOptions {
    pub fn builder() -> RenameOptionsBuilder {
        RenameOptionsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), OptionsError> {
        self.matching.validate()
    }
}

#[derive(Debug, Default, Clone)]
pub struct RenameOptionsBuilder {
    options: RenameOptions,
}

impl RenameOptionsBuilder {
    pub fn matching(mut self, matching: MatchOptions) -> Self {
        self.options.matching = matching;
        self
    }

    pub fn group_zero(mut self, value: GroupZero) -> Self {
        self.options.group_zero = value;
        self
    }

    pub fn assume_yes(mut self, value: bool) -> Self {
        self.options.assume_yes = value;
        self
    }

    pub fn verbose(mut self, value: bool) -> Self {
        self.options.verbose = value;
        self
    }

    pub fn overwrite(mut self, value: bool) -> Self {
        self.options.overwrite = value;
        self
    }

    pub fn dry_run(mut self, value: bool) -> Self {
        self.options.dry_run = value;
        self
    }

    pub fn build(self) -> Result<RenameOptions, OptionsError> {
        self.options.validate()?;
        Ok(self.options)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptionsError {
    #[error("relative base directory must not be empty")]
    EmptyRelativeBase,
    #[error("relative base directory must not contain a NUL byte")]
    RelativeBaseContainsNul,
}
