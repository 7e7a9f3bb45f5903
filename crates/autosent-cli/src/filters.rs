use autosent_analytics::FilterInput;
use autosent_core::FilterState;
use clap::Args;

/// Filter flags shared by every dashboard view.
#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    /// Comma-separated brands (matched ignoring case)
    #[arg(long)]
    pub brands: Option<String>,

    /// Comma-separated models (matched ignoring case)
    #[arg(long)]
    pub models: Option<String>,

    #[arg(long)]
    pub features: Option<String>,

    /// Comma-separated sentiment labels, e.g. "Very Positive,Neutral"
    #[arg(long)]
    pub sentiments: Option<String>,

    #[arg(long)]
    pub sources: Option<String>,

    #[arg(long)]
    pub categories: Option<String>,

    #[arg(long)]
    pub countries: Option<String>,

    /// Earliest date, YYYY-MM-DD or DD-MM-YYYY (inclusive)
    #[arg(long)]
    pub from: Option<String>,

    /// Latest date, YYYY-MM-DD or DD-MM-YYYY (inclusive)
    #[arg(long)]
    pub to: Option<String>,
}

impl FilterArgs {
    /// Validates the flags into a [`FilterState`].
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown sentiment label or a malformed date.
    pub fn to_state(&self) -> anyhow::Result<FilterState> {
        let input = FilterInput {
            brands: self.brands.clone(),
            models: self.models.clone(),
            features: self.features.clone(),
            sentiments: self.sentiments.clone(),
            sources: self.sources.clone(),
            categories: self.categories.clone(),
            countries: self.countries.clone(),
            from: self.from.clone(),
            to: self.to.clone(),
        };
        Ok(input.build()?)
    }
}
