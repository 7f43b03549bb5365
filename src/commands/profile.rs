use crate::commands::CommandError;
use crate::commands::target::{Target, resolve_target};
use crate::database::Database;
use crate::models::User;
use crate::network::ScoreProvider;

/// Looks up the osu! profile of the addressed user.
pub async fn profile<P: ScoreProvider>(
    provider: &P,
    db: &Database,
    caller: u64,
    target: &Target,
) -> Result<User, CommandError> {
    let username = resolve_target(db, caller, target).await?;
    let user = provider.user(&username).await?;

    log::debug!("API: Profile of '{}' ({})", user.username, user.id);
    Ok(user)
}
