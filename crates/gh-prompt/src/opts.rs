/// Rejects an answer with an explanation shown to the user
pub type Validator = Box<dyn Fn(&str) -> Result<(), String>>;

/// Run validators in order, stopping at the first rejection.
pub(crate) fn validate(validators: &[Validator], answer: &str) -> Result<(), String> {
    validators.iter().try_for_each(|v| v(answer))
}

/// Free-text and password prompts
#[derive(Default)]
pub struct PromptOpts {
    pub message: String,
    pub default: Option<String>,
    pub help: Option<String>,
    pub validators: Vec<Validator>,
}

impl PromptOpts {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Default::default()
        }
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn with_validator<F>(mut self, validator: F) -> Self
    where
        F: Fn(&str) -> Result<(), String> + 'static,
    {
        self.validators.push(Box::new(validator));
        self
    }
}

/// Pick exactly one of `options`
#[derive(Default)]
pub struct SelectOpts {
    pub message: String,
    pub options: Vec<String>,
    /// Option text preselected when the answer is empty
    pub default: Option<String>,
    pub help: Option<String>,
    pub validators: Vec<Validator>,
}

impl SelectOpts {
    pub fn new<I, S>(message: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            message: message.into(),
            options: options.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn with_validator<F>(mut self, validator: F) -> Self
    where
        F: Fn(&str) -> Result<(), String> + 'static,
    {
        self.validators.push(Box::new(validator));
        self
    }

    /// Index of the default option, if it names one of `options`
    pub(crate) fn default_index(&self) -> Option<usize> {
        let default = self.default.as_deref()?;
        self.options.iter().position(|o| o == default)
    }
}

/// Pick any subset of `options`
#[derive(Default)]
pub struct MultiSelectOpts {
    pub message: String,
    pub options: Vec<String>,
    /// Options preselected when the answer is empty
    pub defaults: Vec<String>,
    pub help: Option<String>,
    /// Applied to every selected option
    pub validators: Vec<Validator>,
}

impl MultiSelectOpts {
    pub fn new<I, S>(message: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            message: message.into(),
            options: options.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    pub fn with_defaults<I, S>(mut self, defaults: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.defaults = defaults.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_validator<F>(mut self, validator: F) -> Self
    where
        F: Fn(&str) -> Result<(), String> + 'static,
    {
        self.validators.push(Box::new(validator));
        self
    }

    pub(crate) fn default_indices(&self) -> Vec<usize> {
        self.options
            .iter()
            .enumerate()
            .filter(|(_, o)| self.defaults.contains(o))
            .map(|(i, _)| i)
            .collect()
    }
}

/// Yes/no question. Validators see the normalized answer, "y" or "n".
#[derive(Default)]
pub struct ConfirmOpts {
    pub message: String,
    pub default: bool,
    pub help: Option<String>,
    pub validators: Vec<Validator>,
}

impl ConfirmOpts {
    pub fn new(message: impl Into<String>, default: bool) -> Self {
        Self {
            message: message.into(),
            default,
            ..Default::default()
        }
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn with_validator<F>(mut self, validator: F) -> Self
    where
        F: Fn(&str) -> Result<(), String> + 'static,
    {
        self.validators.push(Box::new(validator));
        self
    }
}
