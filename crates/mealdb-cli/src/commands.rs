//! Commands of the mealdb front end
//!
//! Each command mirrors one screen of the recipe finder: the featured
//! listing shown on start, a name search, and the details of one recipe.
//! Failures come back as the message to print.

use mealdb_core::{ClientConfig, RecipeLookupClient};

use crate::render;

/// Shown when `search` is given no terms
pub const EMPTY_SEARCH_MESSAGE: &str = "Please enter a recipe name to search.";

/// Shown when a search came back empty
pub const NO_RESULTS_MESSAGE: &str = "No recipes found. Try a different search term.";

/// Shown when a lookup found no recipe with the given id
pub const NOT_FOUND_MESSAGE: &str = "Recipe not found.";

/// Help text printed by `help` and after argument errors
pub const USAGE: &str = "\
Usage:
  mealdb [featured]          List featured recipes
  mealdb search <name...>    Search recipes by name
  mealdb show <id>           Show ingredients and instructions for a recipe

Environment:
  MEALDB_BASE_URL            Override the TheMealDB endpoint
  MEALDB_TIMEOUT_SECS        Request timeout in seconds
  RUST_LOG                   Log filter (default: warn)";

/// A parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Featured listing shown when no command is given
    Featured,
    /// Name search with the terms joined by spaces
    Search(String),
    /// Details of the recipe with this id
    Show(String),
    /// Print usage
    Help,
}

/// Parse arguments (without the program name) into a command
///
/// # Errors
/// Returns the usage text when the command is unknown or incomplete
pub fn parse_args<I>(args: I) -> Result<Command, String>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();

    match args.next().as_deref() {
        None | Some("featured") => Ok(Command::Featured),
        Some("search") => Ok(Command::Search(args.collect::<Vec<_>>().join(" "))),
        Some("show") => args
            .next()
            .map(Command::Show)
            .ok_or_else(|| format!("Missing recipe id\n\n{}", USAGE)),
        Some("help" | "-h" | "--help") => Ok(Command::Help),
        Some(other) => Err(format!("Unknown command: {}\n\n{}", other, USAGE)),
    }
}

/// Build the lookup client from a loaded configuration
///
/// # Errors
/// Returns the single message to print when the configuration is invalid;
/// the underlying error is only logged at debug level.
pub fn setup_client(
    config: mealdb_core::Result<ClientConfig>,
) -> Result<RecipeLookupClient, String> {
    config
        .and_then(RecipeLookupClient::with_config)
        .map_err(|e| {
            tracing::debug!("failed to set up recipe client: {:?}", e);
            e.message()
        })
}

/// Run a command and return the text to print
///
/// # Errors
/// Returns the message to show the user when the command fails
pub async fn run(client: &RecipeLookupClient, command: Command) -> Result<String, String> {
    match command {
        Command::Featured => featured(client).await,
        Command::Search(query) => search(client, &query).await,
        Command::Show(id) => show(client, &id).await,
        Command::Help => Ok(USAGE.to_string()),
    }
}

/// List featured recipes
pub async fn featured(client: &RecipeLookupClient) -> Result<String, String> {
    client
        .featured()
        .await
        .map(|meals| render::recipe_list(&meals))
        .map_err(|e| e.message())
}

/// Search recipes by name
///
/// A blank query is rejected here with a prompt rather than sent.
pub async fn search(client: &RecipeLookupClient, query: &str) -> Result<String, String> {
    if query.trim().is_empty() {
        return Err(EMPTY_SEARCH_MESSAGE.to_string());
    }

    let meals = client.search_by_name(query).await.map_err(|e| e.message())?;
    if meals.is_empty() {
        return Ok(NO_RESULTS_MESSAGE.to_string());
    }

    Ok(render::recipe_list(&meals))
}

/// Show one recipe in full
pub async fn show(client: &RecipeLookupClient, id: &str) -> Result<String, String> {
    match client.get_by_id(id).await.map_err(|e| e.message())? {
        Some(meal) => Ok(render::recipe_details(&meal)),
        None => Err(NOT_FOUND_MESSAGE.to_string()),
    }
}
