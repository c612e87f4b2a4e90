use serde::Deserialize;
use utoipa::IntoParams;

/// Optional game name filter shared by the listing endpoints.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NameFilterParam {
    /// Case-insensitive substring of the game name
    pub name: Option<String>,
}

impl NameFilterParam {
    /// Returns the filter, treating a blank value as no filter.
    pub fn into_name(self) -> Option<String> {
        self.name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
    }
}
