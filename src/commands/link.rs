use crate::commands::CommandError;
use crate::database::Database;
use crate::models::User;
use crate::network::ScoreProvider;

/// Links `caller` to the osu! account `username`.
///
/// The name is checked against the provider first and the canonical
/// spelling it returns is what gets stored.
pub async fn link<P: ScoreProvider>(
    provider: &P,
    db: &Database,
    caller: u64,
    username: &str,
) -> Result<User, CommandError> {
    let user = provider.user(username.trim()).await?;
    db.link(caller, &user.username).await?;

    log::info!("DB: Linked {} to '{}' ({})", caller, user.username, user.id);
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::FakeProvider;
    use crate::network::ApiError;

    #[tokio::test]
    async fn test_link_stores_canonical_name() {
        let db = Database::in_memory().await.unwrap();
        let provider = FakeProvider::with_user(124493, "Cookiezi");

        let user = link(&provider, &db, 5, "cookiezi").await.unwrap();
        assert_eq!(user.id, 124493);
        assert_eq!(db.lookup(5).await.unwrap().as_deref(), Some("Cookiezi"));
    }

    #[tokio::test]
    async fn test_link_unknown_user() {
        let db = Database::in_memory().await.unwrap();
        let provider = FakeProvider::default();

        let result = link(&provider, &db, 5, "nobody").await;
        assert!(matches!(result, Err(CommandError::Api(ApiError::NotFound(_)))));
        assert_eq!(db.lookup(5).await.unwrap(), None);
    }
}
