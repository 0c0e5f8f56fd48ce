//! Collaborators shared by all views.

use std::fmt;

use folio_core::{
    Catalog, DateLocalizer, LocaleFormatter, RenderConfig, RenderResult, Translator,
};

/// Configuration plus the translation and date services views consume.
pub struct Services {
    pub config: RenderConfig,
    pub translator: Box<dyn Translator>,
    pub dates: Box<dyn DateLocalizer>,
}

impl Services {
    pub fn new(
        config: RenderConfig,
        translator: Box<dyn Translator>,
        dates: Box<dyn DateLocalizer>,
    ) -> Self {
        Self {
            config,
            translator,
            dates,
        }
    }

    /// Default services: an empty catalog and dates per `[locale]`.
    pub fn from_config(config: RenderConfig) -> RenderResult<Self> {
        let dates = LocaleFormatter::new(&config.locale)?;
        Ok(Self::new(config, Box::new(Catalog::new()), Box::new(dates)))
    }

    /// Replace the translator.
    pub fn with_translator(mut self, translator: impl Translator + 'static) -> Self {
        self.translator = Box::new(translator);
        self
    }

    /// Replace the date localizer.
    pub fn with_dates(mut self, dates: impl DateLocalizer + 'static) -> Self {
        self.dates = Box::new(dates);
        self
    }

    pub fn translate(&self, key: &str) -> String {
        self.translator.translate(key)
    }
}

impl Default for Services {
    fn default() -> Self {
        Self::new(
            RenderConfig::default(),
            Box::new(Catalog::new()),
            Box::new(LocaleFormatter::default()),
        )
    }
}

impl fmt::Debug for Services {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Services")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
