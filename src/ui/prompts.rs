use crate::typegen::Modularity;
use anyhow::Result;
use dialoguer::{Input, Select};

/// Ask for the OData service URI, prefilled with the most recent one
///
/// Returns an empty string when the user clears the input.
pub fn prompt_source(default_source: Option<&str>) -> Result<String> {
    let mut input = Input::<String>::new()
        .with_prompt("Please enter uri of your oData service (e.g., http://my.odata.service/service.svc)")
        .allow_empty(true);

    if let Some(source) = default_source {
        input = input.default(source.to_string());
    }

    Ok(input.interact_text()?)
}

/// Ask whether to emit ambient or module declarations
pub fn prompt_modularity() -> Result<Modularity> {
    let items = vec![
        "Ambient (declare namespace, no import needed)",
        "Module (export namespace, import the file)",
    ];

    let selection = Select::new()
        .with_prompt("Select the output style")
        .items(&items)
        .default(0)
        .interact()?;

    Ok(Modularity::ALL[selection])
}
